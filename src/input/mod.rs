//! Pointer and scroll input handling for the editor.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction. Handlers are `impl Editor` blocks, one per
//! event kind, fed with device-space events by the display collaborator.
//!
//! ## Modules
//!
//! - `coords` - Device/page conversion and crop-to-page mapping
//! - `events` - Pointer and scroll event types
//! - `state` - Input state machine enum and helper methods
//! - `mouse_down` - Selection, raise, drag start
//! - `drag` - Move, resize and crop adjustment on motion
//! - `mouse_up` - Drag end
//! - `transform` - Zoom and coordinate conversion on the editor

pub mod coords;
pub mod drag;
pub mod events;
mod state;
mod mouse_down;
mod mouse_up;
mod transform;

pub use events::{MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, ScrollDirection};
pub use state::{DragKind, DragSnapshot, InputState};
