//! Tile palette - the slide-out menu of placeable element types.
//!
//! Each tile carries its element type as a drag payload keyed
//! `"TileType"`. The palette itself slides open and closed; while it
//! slides, the round menu button shrinks or grows in the opposite sense.

use crate::constants::{MENU_BUTTON_WIDTH, PALETTE_ANIMATION_DURATION, PALETTE_OPEN_WIDTH, TILE_PAYLOAD_KEY};
use crate::types::ElementType;
use std::time::{Duration, Instant};

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub element_type: ElementType,
}

impl Tile {
    pub fn label(&self) -> &'static str {
        self.element_type.label()
    }

    /// Glyph drawn on the tile
    pub fn glyph(&self) -> &'static str {
        match self.element_type {
            ElementType::Barcode => "▥",
            ElementType::Image => "▣",
            ElementType::Ellipse => "◯",
            ElementType::Line => "─",
            ElementType::Rectangle => "▭",
            ElementType::RichTextbox => "T",
        }
    }

    /// Payload attached when the tile is dragged
    pub fn payload(&self) -> TilePayload {
        TilePayload::new(self.element_type)
    }
}

/// All tiles in palette order
pub fn tiles() -> Vec<Tile> {
    ElementType::all()
        .iter()
        .map(|&element_type| Tile { element_type })
        .collect()
}

/// Drag payload carried from a tile to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePayload {
    pub key: &'static str,
    pub element_type: ElementType,
}

impl TilePayload {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            key: TILE_PAYLOAD_KEY,
            element_type,
        }
    }

    /// Recognise a keyed payload; anything not keyed `"TileType"` or not
    /// naming an element type is ignored.
    pub fn from_keyed(key: &str, value: &str) -> Option<Self> {
        if key != TILE_PAYLOAD_KEY {
            return None;
        }
        match value.parse::<ElementType>() {
            Ok(element_type) => Some(Self::new(element_type)),
            Err(e) => {
                tracing::debug!("ignoring drop payload: {}", e);
                None
            }
        }
    }

    pub fn is_tile(&self) -> bool {
        self.key == TILE_PAYLOAD_KEY
    }
}

/// Open/close slide of the palette and the menu button.
#[derive(Debug, Clone)]
pub struct PaletteAnimation {
    is_open: bool,
    slider_from: f32,
    button_from: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Default for PaletteAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteAnimation {
    /// Closed palette, button fully shown, nothing animating
    pub fn new() -> Self {
        Self {
            is_open: false,
            slider_from: 0.0,
            button_from: MENU_BUTTON_WIDTH,
            started_at: None,
            duration: Duration::from_secs_f64(PALETTE_ANIMATION_DURATION),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip open/closed, animating from the current widths.
    pub fn toggle(&mut self, now: Instant) {
        let (slider, button) = self.widths_at(now);
        self.slider_from = slider;
        self.button_from = button;
        self.is_open = !self.is_open;
        self.started_at = Some(now);
        tracing::debug!(open = self.is_open, "palette toggled");
    }

    fn targets(&self) -> (f32, f32) {
        if self.is_open {
            (PALETTE_OPEN_WIDTH, 0.0)
        } else {
            (0.0, MENU_BUTTON_WIDTH)
        }
    }

    /// Linear progress in [0, 1]
    fn progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// `(slider_width, button_width)` at `now`.
    pub fn widths_at(&self, now: Instant) -> (f32, f32) {
        let (slider_to, button_to) = self.targets();
        let t = self.progress(now);
        (
            self.slider_from + (slider_to - self.slider_from) * t,
            self.button_from + (button_to - self.button_from) * t,
        )
    }

    /// Whether a frame should be requested to continue the slide
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }
}
