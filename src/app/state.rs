//! Editor struct definition and its sub-structs.

use crate::document::{Document, Item};
use crate::hit_testing::HitTester;
use crate::input::InputState;
use crate::settings::Settings;
use crate::types::{ItemId, Size};

/// Selection and pointer-interaction state of the current page
#[derive(Debug, Default)]
pub struct CanvasState {
    /// At most one selected item, always on the current page
    pub selected: Option<ItemId>,
    pub input_state: InputState,
    /// Handles address the crop rectangle instead of the item box
    pub crop_mode: bool,
}

/// How the page is shown on the drawing surface
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Device pixels per page point
    pub zoom: f64,
    /// Device size of the drawing surface
    pub viewport: Size,
}

/// One editing session over a [`Document`].
///
/// The display collaborator forwards pointer events to the `handle_*`
/// methods and draws from [`Editor::document`] and
/// [`Editor::selection_overlay`].
#[derive(Debug)]
pub struct Editor {
    pub(crate) document: Document,
    pub(crate) canvas: CanvasState,
    pub(crate) view: ViewState,
    pub(crate) settings: Settings,
    pub(crate) hit_tester: HitTester,
}

impl Editor {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.canvas.selected
    }

    /// The selected item, looked up on the current page.
    pub fn selected_item(&self) -> Option<&Item> {
        self.canvas
            .selected
            .and_then(|id| self.document.current_page().get_item(id))
    }

    pub fn input_state(&self) -> &InputState {
        &self.canvas.input_state
    }

    pub fn crop_mode(&self) -> bool {
        self.canvas.crop_mode
    }

    pub fn toggle_crop_mode(&mut self) {
        self.canvas.crop_mode = !self.canvas.crop_mode;
        tracing::debug!(crop_mode = self.canvas.crop_mode, "toggle crop mode");
    }

    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    pub fn viewport(&self) -> Size {
        self.view.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.view.viewport = Size::new(width, height);
    }

    /// Drop the selection and abandon any drag in progress.
    pub(crate) fn clear_interaction(&mut self) {
        self.canvas.selected = None;
        self.canvas.input_state.reset();
    }
}
