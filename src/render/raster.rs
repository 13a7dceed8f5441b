//! Raster backend: each page becomes an RGBA image at a given DPI.

use super::{PageRenderer, render_document};
use crate::constants::POINTS_PER_INCH;
use crate::document::{Document, Item};
use crate::error::{CheatsheetError, Result};
use crate::perf::measure_and_log;
use crate::types::PaperSize;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Exports slower than this are logged as warnings
const EXPORT_WARN_MS: f64 = 2000.0;

pub struct RasterRenderer {
    scale: f64,
    current: Option<RgbaImage>,
    pages: Vec<RgbaImage>,
}

impl RasterRenderer {
    pub fn new(dpi: u32) -> Self {
        Self {
            scale: dpi as f64 / POINTS_PER_INCH,
            current: None,
            pages: Vec::new(),
        }
    }

    /// Finished pages in order.
    pub fn into_pages(self) -> Vec<RgbaImage> {
        self.pages
    }

    fn to_pixels(&self, points: f64) -> f64 {
        points * self.scale
    }
}

impl PageRenderer for RasterRenderer {
    fn begin_page(&mut self, _index: usize, paper: PaperSize) -> Result<()> {
        let size = paper.size();
        let width = self.to_pixels(size.width).round().max(1.0) as u32;
        let height = self.to_pixels(size.height).round().max(1.0) as u32;
        self.current = Some(RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])));
        Ok(())
    }

    fn draw_item(&mut self, item: &Item) -> Result<()> {
        let crop = item.crop();
        let bounds = item.bounds();
        let width = self.to_pixels(bounds.width).round().max(1.0) as u32;
        let height = self.to_pixels(bounds.height).round().max(1.0) as u32;
        let x = self.to_pixels(bounds.x).round() as i64;
        let y = self.to_pixels(bounds.y).round() as i64;

        let page = self
            .current
            .as_mut()
            .ok_or_else(|| CheatsheetError::InvalidDocument("draw_item outside of a page".to_string()))?;

        let visible = item
            .image()
            .pixels()
            .crop_imm(crop.x as u32, crop.y as u32, crop.width as u32, crop.height as u32)
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgba8();
        // overlay clips anything hanging off the page
        imageops::overlay(page, &visible, x, y);
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        if let Some(page) = self.current.take() {
            self.pages.push(page);
        }
        Ok(())
    }
}

/// Rasterize every page of `doc` at `dpi`.
pub fn export_pages(doc: &Document, dpi: u32) -> Result<Vec<RgbaImage>> {
    measure_and_log("export_pages", EXPORT_WARN_MS, || {
        let mut renderer = RasterRenderer::new(dpi);
        render_document(doc, &mut renderer)?;
        Ok(renderer.into_pages())
    })
}

/// Write `page-001.png`, `page-002.png`, ... into `dir`.
pub fn export_png_pages(doc: &Document, dir: &Path, dpi: u32) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let pages = export_pages(doc, dpi)?;

    let mut paths = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        let path = dir.join(format!("page-{:03}.png", index + 1));
        page.save_with_format(&path, ImageFormat::Png)?;
        paths.push(path);
    }

    info!(dir = %dir.display(), pages = paths.len(), dpi, "Exported pages");
    Ok(paths)
}
