//! Mouse up event handling - finish the drag.

use super::events::{MouseButton, MouseUpEvent};
use crate::app::Editor;
use tracing::debug;

impl Editor {
    /// Return to idle. Geometry was already committed by the motion events;
    /// the selection is kept.
    pub fn handle_mouse_up(&mut self, event: &MouseUpEvent) -> bool {
        if event.button != MouseButton::Primary {
            return false;
        }
        let Some(item_id) = self.canvas.input_state.dragged_item_id() else {
            return false;
        };

        self.document.current_page_mut().update_spatial_index(item_id);
        self.canvas.input_state.reset();
        debug!(item_id, "end drag");
        true
    }
}
