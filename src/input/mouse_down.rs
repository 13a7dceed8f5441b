//! Mouse down event handling - selection, raise, drag initiation.
//!
//! ## Performance Notes
//!
//! Item hit testing goes through the page's R-tree, so a press costs
//! O(log n) plus the handful of overlapping candidates.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::events::{MouseButton, MouseDownEvent};
use super::state::{DragKind, DragSnapshot};
use crate::app::Editor;
use crate::hit_testing::hit_test_item;
use crate::profile_scope;
use tracing::debug;

impl Editor {
    /// Select and raise the item under the pointer and start a drag on it.
    ///
    /// Returns false when the press is ignored or lands on empty page space
    /// (which clears the selection).
    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent) -> bool {
        profile_scope!("handle_mouse_down");

        if event.button != MouseButton::Primary {
            return false;
        }

        let point = self.device_to_page(event.position);
        let crop_mode = self.canvas.crop_mode;
        let hit_tester = self.hit_tester;
        let page = self.document.current_page_mut();

        let Some(item_id) = hit_test_item(page, point) else {
            self.clear_interaction();
            return false;
        };
        page.bring_to_front(item_id);

        let Some(item) = page.get_item(item_id) else {
            self.clear_interaction();
            return false;
        };

        let kind = if crop_mode {
            DragKind::CropAdjust(hit_tester.crop_handle(item, point))
        } else if let Some(handle) = hit_tester.item_handle(item, point) {
            DragKind::Resize(handle)
        } else {
            DragKind::Move
        };
        let snapshot = DragSnapshot {
            bounds: item.bounds(),
            crop: item.crop(),
        };

        debug!(item_id, ?kind, "start drag");
        self.canvas.selected = Some(item_id);
        self.canvas
            .input_state
            .start_drag(item_id, kind, event.position, snapshot);
        true
    }
}
