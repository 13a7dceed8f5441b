//! Drag operations - move, resize and crop adjustment.
//!
//! ## Performance Notes
//!
//! Mouse move fires on every pointer motion while a button is held. Each
//! event recomputes the geometry from the press-time snapshot, so the work
//! is constant per event and no error accumulates across events.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::coords::CoordinateConverter;
use super::events::MouseMoveEvent;
use super::state::{DragKind, DragSnapshot, InputState};
use crate::app::Editor;
use crate::constants::{MIN_CROP_SIZE, MIN_ITEM_SIZE};
use crate::profile_scope;
use crate::types::{CropRect, Handle, Point, Rect};

impl Editor {
    /// Apply the active drag for the pointer at `event.position`.
    ///
    /// Returns false when idle. The live item is updated directly; every
    /// intermediate state already satisfies the item invariants.
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        profile_scope!("handle_mouse_move");

        let InputState::Dragging {
            item_id,
            kind,
            press,
            snapshot,
        } = self.canvas.input_state
        else {
            return false;
        };

        let delta = CoordinateConverter::delta_device_to_page(event.position - press, self.view.zoom);
        let page = self.document.current_page_mut();
        let Some(item) = page.get_item_mut(item_id) else {
            self.canvas.input_state.reset();
            return false;
        };

        match kind {
            DragKind::Move => item.set_bounds(move_bounds(snapshot.bounds, delta)),
            DragKind::Resize(handle) => item.set_bounds(resize_bounds(snapshot.bounds, handle, delta)),
            DragKind::CropAdjust(handle) => {
                let (dx, dy) = crop_pixel_delta(&snapshot, delta);
                let (image_width, image_height) = (item.image().width(), item.image().height());
                let crop = adjust_crop(snapshot.crop, handle, dx, dy, image_width, image_height);
                item.set_bounds(snapshot.bounds);
                item.set_crop(crop);
            }
        }

        page.update_spatial_index(item_id);
        true
    }
}

/// Translate a box by a page-space delta.
pub fn move_bounds(original: Rect, delta: Point) -> Rect {
    Rect::new(
        original.x + delta.x,
        original.y + delta.y,
        original.width,
        original.height,
    )
}

/// Drag the edges next to `handle` by `delta`, keeping the minimum item size.
pub fn resize_bounds(original: Rect, handle: Handle, delta: Point) -> Rect {
    handle.resize_rect(original, delta.x, delta.y, MIN_ITEM_SIZE)
}

/// Convert a page-space delta to whole source pixels at the snapshot scale,
/// rounding half away from zero.
pub fn crop_pixel_delta(snapshot: &DragSnapshot, delta: Point) -> (i32, i32) {
    let scale_x = snapshot.bounds.width / snapshot.crop.width as f64;
    let scale_y = snapshot.bounds.height / snapshot.crop.height as f64;
    (
        (delta.x / scale_x).round() as i32,
        (delta.y / scale_y).round() as i32,
    )
}

/// Pan (`handle == None`) or resize the crop by a pixel delta, keeping it
/// inside the image.
///
/// Panning clamps the origin so the crop keeps its size. Resizing clamps
/// the size so the edge opposite the dragged one stays put.
pub fn adjust_crop(
    original: CropRect,
    handle: Option<Handle>,
    dx: i32,
    dy: i32,
    image_width: u32,
    image_height: u32,
) -> CropRect {
    let (iw, ih) = (image_width as i32, image_height as i32);

    let crop = match handle {
        None => CropRect::new(
            original.x.saturating_add(dx).clamp(0, (iw - original.width).max(0)),
            original.y.saturating_add(dy).clamp(0, (ih - original.height).max(0)),
            original.width,
            original.height,
        ),
        Some(handle) => {
            let mut rect = handle.resize_rect(original.to_rect(), dx as f64, dy as f64, MIN_CROP_SIZE as f64);
            if rect.x < 0.0 {
                rect.width += rect.x;
                rect.x = 0.0;
            }
            if rect.y < 0.0 {
                rect.height += rect.y;
                rect.y = 0.0;
            }
            rect.width = rect.width.min(iw as f64 - rect.x);
            rect.height = rect.height.min(ih as f64 - rect.y);
            CropRect::from_rect(rect)
        }
    };

    crop.clamped_to(image_width, image_height)
}
