//! Mouse and keyboard input handling for the label canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode: idle, dragging an item, or resizing one
//! from a corner handle.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `handles` - Corner resize handles: hit testing and resize math
//! - `coords` - Window/label coordinate conversion
//! - `mouse_down` - Selection, double-click editing, drag/resize start
//! - `drag` - Mouse move handling (drag, resize, drop tracking)
//! - `mouse_up` - Finalize drag/resize
//! - `keyboard` - Delete and text-edit keys

pub mod coords;
pub mod handles;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use handles::ResizeCorner;
pub use keyboard::CanvasKey;
pub use state::InputState;
