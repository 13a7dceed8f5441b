//! Read-only data the display draws on top of the page.

use super::state::Editor;
use crate::constants::HANDLE_DRAW_HALF_SIZE;
use crate::types::{Handle, ItemId, Point, Rect};

/// Selection decoration in page points.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOverlay {
    pub item_id: ItemId,
    pub bounds: Rect,
    pub handles: [Point; 8],
    /// Crop rectangle and its handles, present in crop mode
    pub crop: Option<(Rect, [Point; 8])>,
}

impl SelectionOverlay {
    /// Squares to draw for the item handles.
    pub fn handle_squares(&self) -> [Rect; 8] {
        self.handles.map(handle_square)
    }
}

/// Square of the drawn handle size centered on `center`.
pub fn handle_square(center: Point) -> Rect {
    let half = HANDLE_DRAW_HALF_SIZE;
    Rect::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
}

impl Editor {
    pub fn selection_overlay(&self) -> Option<SelectionOverlay> {
        let item = self.selected_item()?;
        let bounds = item.bounds();
        let crop = self.canvas.crop_mode.then(|| {
            let rect = item.crop_rect_in_page_space();
            (rect, rect.handle_points())
        });

        Some(SelectionOverlay {
            item_id: item.id(),
            bounds,
            handles: bounds.handle_points(),
            crop,
        })
    }

    /// Handle under the pointer while idle with a selection, for cursor
    /// feedback. Crop handles are reported in crop mode.
    pub fn hover_handle(&self, device: Point) -> Option<Handle> {
        if !self.canvas.input_state.is_idle() {
            return None;
        }
        let item = self.selected_item()?;
        let point = self.device_to_page(device);
        self.hit_tester
            .handle_for_mode(item, point, self.canvas.crop_mode)
    }

    /// "Page i / n", 1-based.
    pub fn page_label(&self) -> String {
        format!(
            "Page {} / {}",
            self.document.current_page_index() + 1,
            self.document.page_count()
        )
    }
}
