//! Editor session: the document plus transient interaction state.
//!
//! This module is organized into several submodules:
//! - `state` - The Editor struct definition and sub-structs
//! - `lifecycle` - Construction and document replacement
//! - `page_management` - Image import, deletion and page navigation
//! - `overlay` - Read-only selection overlay, hover handle and page label
//!
//! Pointer handling and zoom live in `crate::input` as further `impl Editor`
//! blocks.

mod state;
mod lifecycle;
mod page_management;
mod overlay;

pub use overlay::{SelectionOverlay, handle_square};
pub use state::{CanvasState, Editor, ViewState};
