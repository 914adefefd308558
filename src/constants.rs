//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Width of the palette slider when fully open
pub const PALETTE_OPEN_WIDTH: f32 = 300.0;

/// Width of the round menu button when the palette is closed
pub const MENU_BUTTON_WIDTH: f32 = 50.0;

/// Palette slide animation duration in seconds
pub const PALETTE_ANIMATION_DURATION: f64 = 0.3;

/// Height of a single palette tile
pub const TILE_HEIGHT: f32 = 56.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Default width of a newly placed item
pub const DEFAULT_ITEM_WIDTH: f32 = 350.0;

/// Default height of a newly placed item
pub const DEFAULT_ITEM_HEIGHT: f32 = 200.0;

/// Minimum width/height an item can be resized to
pub const MIN_ITEM_SIZE: f32 = 20.0;

/// Inset between an item's border and a shape drawn inside it
pub const SHAPE_INSET: f32 = 4.0;

/// Inset between an item's border and a text box inside it
pub const TEXT_INSET: f32 = 2.0;

/// Default font size for text boxes
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Stroke width for ellipses and rectangles
pub const DEFAULT_SHAPE_STROKE: f32 = 2.0;

/// Stroke width for lines
pub const DEFAULT_LINE_STROKE: f32 = 3.0;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Dark red, used for ellipse and line strokes
pub const DARK_RED: &str = "#8b0000";

/// Light coral, used for ellipse fills
pub const LIGHT_CORAL: &str = "#f08080";

/// Dark blue, used for rectangle strokes
pub const DARK_BLUE: &str = "#00008b";

/// Light pink, used for rectangle fills
pub const LIGHT_PINK: &str = "#ffb6c1";

/// Text box foreground
pub const TEXT_COLOR: &str = "#000000";

/// Border color of the selected item
pub const SELECTION_COLOR: &str = "#0000ff";

/// Border width of the selected item
pub const SELECTED_BORDER_WIDTH: f32 = 2.0;

/// Border width of unselected items (drawn transparent)
pub const UNSELECTED_BORDER_WIDTH: f32 = 1.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Side length of a corner resize handle in pixels
pub const RESIZE_HANDLE_SIZE: f32 = 10.0;

/// Extra tolerance around a resize handle for hit testing
pub const RESIZE_HANDLE_TOLERANCE: f32 = 3.0;

// ============================================================================
// Drag & Drop
// ============================================================================

/// Key under which a tile's element type travels in a drag payload
pub const TILE_PAYLOAD_KEY: &str = "TileType";

/// Extensions accepted by the image file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png", "gif"];

/// Filter name shown by the image file picker
pub const IMAGE_FILTER_NAME: &str = "Image Files";

/// Title of the image file picker
pub const IMAGE_DIALOG_TITLE: &str = "Choose an image";

// ============================================================================
// Barcode
// ============================================================================

/// Quiet zone on each side of a CODE128 symbol, in modules
pub const BARCODE_QUIET_ZONE: u32 = 10;

/// Message shown when the barcode dialog is submitted empty
pub const EMPTY_BARCODE_MESSAGE: &str = "Enter a code for the barcode!";

// ============================================================================
// Modal Dimensions
// ============================================================================

/// Width of the barcode input dialog
pub const MODAL_WIDTH_SM: f32 = 420.0;

/// Backdrop opacity for modal overlays
pub const MODAL_BACKDROP_OPACITY: f32 = 0.6;
