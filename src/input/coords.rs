//! Coordinate conversion between device space and page space.
//!
//! The page is drawn centered in the viewport at the current zoom, so the
//! device offset of the page origin is `(viewport - page * zoom) / 2` on each
//! axis. All conversions in the input handlers go through here.

use crate::document::Item;
use crate::types::{CropRect, Point, Rect, Size};

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    pub zoom: f64,
    pub viewport: Size,
    pub page: Size,
}

impl CoordinateContext {
    #[inline]
    pub fn new(zoom: f64, viewport: Size, page: Size) -> Self {
        Self {
            zoom,
            viewport,
            page,
        }
    }

    /// Device position of the page's top-left corner.
    #[inline]
    pub fn offset(&self) -> Point {
        Point::new(
            (self.viewport.width - self.page.width * self.zoom) / 2.0,
            (self.viewport.height - self.page.height * self.zoom) / 2.0,
        )
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a device position to page points
    #[inline]
    pub fn device_to_page(device: Point, ctx: &CoordinateContext) -> Point {
        (device - ctx.offset()).div(ctx.zoom)
    }

    /// Convert page points to a device position
    #[inline]
    pub fn page_to_device(page: Point, ctx: &CoordinateContext) -> Point {
        let offset = ctx.offset();
        Point::new(page.x * ctx.zoom + offset.x, page.y * ctx.zoom + offset.y)
    }

    /// Convert a device delta to page points (for drag operations)
    #[inline]
    pub fn delta_device_to_page(delta: Point, zoom: f64) -> Point {
        delta.div(zoom)
    }
}

pub fn device_to_page(device: Point, zoom: f64, viewport: Size, page: Size) -> Point {
    CoordinateConverter::device_to_page(device, &CoordinateContext::new(zoom, viewport, page))
}

pub fn page_to_device(point: Point, zoom: f64, viewport: Size, page: Size) -> Point {
    CoordinateConverter::page_to_device(point, &CoordinateContext::new(zoom, viewport, page))
}

/// Map a crop rectangle (source pixels) into page space for an item drawn at
/// `bounds`.
///
/// The whole source image is scaled by `bounds / crop` and positioned so
/// that the crop's top-left lands on the item origin.
pub fn crop_rect_to_page(bounds: Rect, crop: CropRect) -> Rect {
    let scale_x = bounds.width / crop.width as f64;
    let scale_y = bounds.height / crop.height as f64;
    let origin_x = bounds.x - crop.x as f64 * scale_x;
    let origin_y = bounds.y - crop.y as f64 * scale_y;

    Rect::new(
        origin_x + crop.x as f64 * scale_x,
        origin_y + crop.y as f64 * scale_y,
        crop.width as f64 * scale_x,
        crop.height as f64 * scale_y,
    )
}

pub fn crop_rect_in_page_space(item: &Item) -> Rect {
    crop_rect_to_page(item.bounds(), item.crop())
}
