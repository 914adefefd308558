//! Core types for the label editing surface.
//!
//! This module defines the element type tag carried by palette tiles, the
//! content an item displays, and the placed item itself.

use crate::constants::{
    DARK_BLUE, DARK_RED, DEFAULT_FONT_SIZE, DEFAULT_LINE_STROKE, DEFAULT_SHAPE_STROKE,
    LIGHT_CORAL, LIGHT_PINK, SHAPE_INSET, TEXT_COLOR, TEXT_INSET,
};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Element Type Tag
// ============================================================================

/// The kind of element a palette tile places on the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Barcode,
    Image,
    Ellipse,
    Line,
    Rectangle,
    RichTextbox,
}

impl ElementType {
    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::Barcode,
            ElementType::Image,
            ElementType::Ellipse,
            ElementType::Line,
            ElementType::Rectangle,
            ElementType::RichTextbox,
        ]
    }

    /// Human-readable name shown on the palette tile
    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Barcode => "Barcode",
            ElementType::Image => "Image",
            ElementType::Ellipse => "Ellipse",
            ElementType::Line => "Line",
            ElementType::Rectangle => "Rectangle",
            ElementType::RichTextbox => "Text",
        }
    }

    /// Stable tag string used when the type travels as text
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementType::Barcode => "Barcode",
            ElementType::Image => "Image",
            ElementType::Ellipse => "Ellipse",
            ElementType::Line => "Line",
            ElementType::Rectangle => "Rectangle",
            ElementType::RichTextbox => "RichTextbox",
        }
    }

    /// Whether placing this type needs user input (dialog or file pick)
    pub fn needs_prompt(&self) -> bool {
        matches!(self, ElementType::Barcode | ElementType::Image)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Returned when a tag string names no element type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element type: {0}")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::all()
            .iter()
            .copied()
            .find(|t| t.as_tag() == s)
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}

// ============================================================================
// Item Content
// ============================================================================

/// The content of a placed item.
///
/// Determines how the item is rendered and how its inner dimensions follow
/// the item's size.
#[derive(Clone, Debug)]
pub enum ItemContent {
    /// A generated CODE128 barcode
    Barcode {
        /// The encoded text
        data: String,
        /// Rendered raster at the size it was generated for
        image: Arc<RgbaImage>,
    },
    /// A bitmap loaded from disk
    Image {
        path: PathBuf,
        image: Arc<RgbaImage>,
    },
    Ellipse {
        stroke: String,
        fill: String,
        stroke_width: f32,
    },
    /// Horizontal line from x = 0 to `end_x`, vertically centred
    Line {
        end_x: f32,
        stroke: String,
        stroke_width: f32,
    },
    Rectangle {
        stroke: String,
        fill: String,
        stroke_width: f32,
    },
    /// Multi-line text, read-only unless being edited
    TextBox {
        text: String,
        font_size: f32,
        color: String,
        read_only: bool,
        accepts_return: bool,
    },
}

impl ItemContent {
    pub fn default_ellipse() -> Self {
        ItemContent::Ellipse {
            stroke: DARK_RED.to_string(),
            fill: LIGHT_CORAL.to_string(),
            stroke_width: DEFAULT_SHAPE_STROKE,
        }
    }

    pub fn default_line(width: f32) -> Self {
        ItemContent::Line {
            end_x: width,
            stroke: DARK_RED.to_string(),
            stroke_width: DEFAULT_LINE_STROKE,
        }
    }

    pub fn default_rectangle() -> Self {
        ItemContent::Rectangle {
            stroke: DARK_BLUE.to_string(),
            fill: LIGHT_PINK.to_string(),
            stroke_width: DEFAULT_SHAPE_STROKE,
        }
    }

    pub fn default_text_box() -> Self {
        ItemContent::TextBox {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: TEXT_COLOR.to_string(),
            read_only: true,
            accepts_return: true,
        }
    }

    /// The element type this content was created from
    pub fn element_type(&self) -> ElementType {
        match self {
            ItemContent::Barcode { .. } => ElementType::Barcode,
            ItemContent::Image { .. } => ElementType::Image,
            ItemContent::Ellipse { .. } => ElementType::Ellipse,
            ItemContent::Line { .. } => ElementType::Line,
            ItemContent::Rectangle { .. } => ElementType::Rectangle,
            ItemContent::TextBox { .. } => ElementType::RichTextbox,
        }
    }

    /// Inner content size for an item of the given outer size.
    ///
    /// Images fill the item, shapes sit inside a fixed inset, text boxes a
    /// smaller one. Lines span the full width.
    pub fn content_size_for(&self, item_size: (f32, f32)) -> (f32, f32) {
        let (w, h) = item_size;
        match self {
            ItemContent::Barcode { .. } | ItemContent::Image { .. } => (w, h),
            ItemContent::Ellipse { .. } | ItemContent::Rectangle { .. } => {
                ((w - SHAPE_INSET).max(0.0), (h - SHAPE_INSET).max(0.0))
            }
            ItemContent::TextBox { .. } => ((w - TEXT_INSET).max(0.0), (h - TEXT_INSET).max(0.0)),
            ItemContent::Line { end_x, .. } => (*end_x, h),
        }
    }

    /// Propagate a new item size into size-dependent content fields.
    pub fn sync_to_size(&mut self, item_size: (f32, f32)) {
        if let ItemContent::Line { end_x, .. } = self {
            *end_x = item_size.0;
        }
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self, ItemContent::TextBox { .. })
    }

    pub fn display_name(&self) -> String {
        match self {
            ItemContent::Barcode { data, .. } => format!("Barcode: {}", data),
            ItemContent::Image { path, .. } => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("Unknown")
                .to_string(),
            ItemContent::TextBox { text, .. } if !text.is_empty() => {
                text.lines().next().unwrap_or_default().to_string()
            }
            other => other.element_type().label().to_string(),
        }
    }
}

// ============================================================================
// Placed Item
// ============================================================================

/// An element positioned on the label surface.
#[derive(Clone, Debug)]
pub struct PlacedItem {
    /// Unique identifier for this item
    pub id: u64,
    /// Top-left corner relative to the canvas origin
    pub position: (f32, f32),
    /// Outer size (width, height)
    pub size: (f32, f32),
    /// Inner size of the content, kept in step with `size`
    pub content_size: (f32, f32),
    pub content: ItemContent,
}

impl PlacedItem {
    pub fn new(id: u64, position: (f32, f32), size: (f32, f32), mut content: ItemContent) -> Self {
        content.sync_to_size(size);
        let content_size = content.content_size_for(size);
        Self {
            id,
            position,
            size,
            content_size,
            content,
        }
    }

    /// Set the outer size and propagate it to the content.
    pub fn set_size(&mut self, size: (f32, f32)) {
        self.size = size;
        self.content.sync_to_size(size);
        self.content_size = self.content.content_size_for(size);
    }

    /// Offset of the content from the item's top-left; content is centred.
    pub fn content_offset(&self) -> (f32, f32) {
        (
            (self.size.0 - self.content_size.0) / 2.0,
            (self.size.1 - self.content_size.1) / 2.0,
        )
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.position.0
            && x <= self.position.0 + self.size.0
            && y >= self.position.1
            && y <= self.position.1 + self.size.1
    }
}

/// Parse a `#rrggbb` hex color.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
