//! Image import, deletion and page navigation.
//!
//! Every page-level operation clears the selection and abandons any drag so
//! that the selection can never point at an item on another page.

use super::state::Editor;
use crate::types::{ImageHandle, ItemId};
use tracing::debug;

impl Editor {
    /// Place an image on the current page with default geometry, select it
    /// and raise it to the front.
    pub fn add_image(&mut self, image: ImageHandle) -> ItemId {
        let item = self.document.create_item(image);
        let id = item.id();
        self.canvas.input_state.reset();
        self.document.current_page_mut().add_item(item);
        self.document.current_page_mut().bring_to_front(id);
        self.canvas.selected = Some(id);
        id
    }

    /// Remove the selected item from the current page.
    pub fn delete_selection(&mut self) -> bool {
        let Some(id) = self.canvas.selected else {
            return false;
        };
        let removed = self.document.current_page_mut().remove_item(id);
        self.clear_interaction();
        removed
    }

    pub fn clear_selection(&mut self) {
        self.clear_interaction();
    }

    /// Advance one page, appending a blank page when on the last one.
    pub fn next_page(&mut self) {
        self.clear_interaction();
        let next = self.document.current_page_index() + 1;
        if next < self.document.page_count() {
            self.document.set_current_page(next);
        } else {
            self.document.add_page();
        }
        debug!(page = self.document.current_page_index(), "next page");
    }

    /// Step back one page; no-op on the first page apart from clearing the
    /// selection.
    pub fn prev_page(&mut self) {
        self.clear_interaction();
        let current = self.document.current_page_index();
        if current > 0 {
            self.document.set_current_page(current - 1);
        }
        debug!(page = self.document.current_page_index(), "prev page");
    }

    pub fn add_page(&mut self) -> usize {
        self.clear_interaction();
        self.document.add_page()
    }

    pub fn remove_current_page(&mut self) -> bool {
        self.clear_interaction();
        self.document.remove_current_page()
    }

    pub fn move_page_up(&mut self) -> bool {
        self.clear_interaction();
        self.document.move_page_up()
    }

    pub fn move_page_down(&mut self) -> bool {
        self.clear_interaction();
        self.document.move_page_down()
    }
}
