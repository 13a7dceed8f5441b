//! Hit testing for items and their handles.
//!
//! Item hits use the page's R-tree to narrow candidates, then walk the page
//! in reverse z-order so the topmost item wins. Handle hits compare a point
//! against the 8 handle centers of a box with a fixed page-space tolerance.

use crate::constants::HANDLE_TOLERANCE;
use crate::document::{Item, Page};
use crate::profile_scope;
use crate::types::{Handle, ItemId, Point, Rect};
use std::collections::HashSet;

/// Topmost item on `page` whose bounding box contains `point`.
pub fn hit_test_item(page: &Page, point: Point) -> Option<ItemId> {
    profile_scope!("hit_test_items");

    let candidates: HashSet<ItemId> = page
        .spatial_index()
        .query_point(point.x, point.y)
        .into_iter()
        .collect();
    if candidates.is_empty() {
        return None;
    }

    page.items()
        .iter()
        .rev()
        .filter(|item| candidates.contains(&item.id()))
        .find(|item| item.bounds().contains(point))
        .map(|item| item.id())
}

/// First handle of `rect` (in index order) within `tolerance` of `point` on
/// both axes.
pub fn hit_test_handle(rect: Rect, point: Point, tolerance: f64) -> Option<Handle> {
    rect.handle_points()
        .iter()
        .position(|h| (point.x - h.x).abs() <= tolerance && (point.y - h.y).abs() <= tolerance)
        .and_then(Handle::from_index)
}

/// Handle hit testing with a configured tolerance.
#[derive(Debug, Clone, Copy)]
pub struct HitTester {
    tolerance: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new()
    }
}

impl HitTester {
    pub fn new() -> Self {
        Self::with_tolerance(HANDLE_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Resize handle of the item box under `point`.
    pub fn item_handle(&self, item: &Item, point: Point) -> Option<Handle> {
        hit_test_handle(item.bounds(), point, self.tolerance)
    }

    /// Crop handle under `point`, with the crop rectangle mapped to page space.
    pub fn crop_handle(&self, item: &Item, point: Point) -> Option<Handle> {
        hit_test_handle(item.crop_rect_in_page_space(), point, self.tolerance)
    }

    /// Pick the crop or resize handle set depending on the mode.
    pub fn handle_for_mode(&self, item: &Item, point: Point, crop_mode: bool) -> Option<Handle> {
        if crop_mode {
            self.crop_handle(item, point)
        } else {
            self.item_handle(item, point)
        }
    }
}
