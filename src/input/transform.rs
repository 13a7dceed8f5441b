//! View transformations - zoom, scroll, coordinate conversion.

use super::coords::{CoordinateContext, CoordinateConverter};
use super::events::ScrollDirection;
use crate::app::Editor;
use crate::types::Point;
use tracing::debug;

impl Editor {
    pub(crate) fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.view.zoom, self.view.viewport, self.document.page_size())
    }

    /// Convert a device position to page points.
    pub fn device_to_page(&self, device: Point) -> Point {
        CoordinateConverter::device_to_page(device, &self.coordinate_context())
    }

    /// Convert page points to a device position.
    pub fn page_to_device(&self, point: Point) -> Point {
        CoordinateConverter::page_to_device(point, &self.coordinate_context())
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom *= self.settings.zoom.step;
        debug!(zoom = self.view.zoom, "zoom in");
    }

    /// Zoom out, never below the configured floor.
    pub fn zoom_out(&mut self) {
        self.view.zoom = (self.view.zoom / self.settings.zoom.step).max(self.settings.zoom.min);
        debug!(zoom = self.view.zoom, "zoom out");
    }

    pub fn zoom_reset(&mut self) {
        self.view.zoom = self.settings.zoom.default;
    }

    /// Scroll wheel: up zooms in, down zooms out.
    pub fn handle_scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => self.zoom_in(),
            ScrollDirection::Down => self.zoom_out(),
        }
    }
}
