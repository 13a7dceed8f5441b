//! Page rendering.
//!
//! Renderers receive pages in print order and each page's items back to
//! front, so later items cover earlier ones exactly as on screen.
//!
//! - `raster` - Image-crate backend used for PNG export

mod raster;

pub use raster::{RasterRenderer, export_pages, export_png_pages};

use crate::document::{Document, Item};
use crate::error::Result;
use crate::types::PaperSize;

/// Drawing backend for whole documents.
pub trait PageRenderer {
    /// Start page `index`, cleared to white.
    fn begin_page(&mut self, index: usize, paper: PaperSize) -> Result<()>;

    /// Draw the visible crop of `item` scaled into its bounds.
    fn draw_item(&mut self, item: &Item) -> Result<()>;

    fn end_page(&mut self) -> Result<()>;
}

/// Walk every page and item of `doc` through `renderer`.
pub fn render_document<R: PageRenderer + ?Sized>(doc: &Document, renderer: &mut R) -> Result<()> {
    for (index, page) in doc.pages().iter().enumerate() {
        renderer.begin_page(index, doc.paper())?;
        for item in page.items() {
            renderer.draw_item(item)?;
        }
        renderer.end_page()?;
    }
    Ok(())
}
