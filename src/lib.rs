//! Multi-page image layout engine.
//!
//! Images are placed on fixed-size pages, then moved, resized and cropped
//! through a pointer-driven [`Editor`]. Documents persist as JSON with
//! inline PNG data and export to raster pages.

pub mod app;
pub mod constants;
pub mod document;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod perf;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use app::{Editor, SelectionOverlay};
pub use document::{Document, Item, Page};
pub use error::{CheatsheetError, Result};
pub use settings::Settings;
pub use types::{CropRect, Handle, ImageHandle, ItemId, PaperSize, Point, Rect, Size};
