//! Editor lifecycle: construction and document replacement.

use super::state::{CanvasState, Editor, ViewState};
use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::document::Document;
use crate::hit_testing::HitTester;
use crate::settings::Settings;
use crate::types::Size;
use tracing::info;

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Editor over a blank document with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let document = Document::with_paper(settings.paper);
        Self::with_document(document, settings)
    }

    pub fn with_document(document: Document, settings: Settings) -> Self {
        Self {
            document,
            canvas: CanvasState::default(),
            view: ViewState {
                zoom: settings.zoom.default,
                viewport: Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            },
            hit_tester: HitTester::with_tolerance(settings.handle_tolerance),
            settings,
        }
    }

    /// Replace the document, e.g. after loading. Session state is cleared;
    /// zoom and viewport are kept.
    pub fn set_document(&mut self, document: Document) {
        info!(pages = document.page_count(), "set document");
        self.document = document;
        self.canvas = CanvasState::default();
    }

    /// Start over with one blank page on the configured paper.
    pub fn new_document(&mut self) {
        self.set_document(Document::with_paper(self.settings.paper));
    }

    /// Give up the document, leaving a blank one in its place.
    pub fn take_document(&mut self) -> Document {
        let blank = Document::with_paper(self.settings.paper);
        self.canvas = CanvasState::default();
        std::mem::replace(&mut self.document, blank)
    }
}
