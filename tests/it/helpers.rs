//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDocumentBuilder` - Builder pattern for documents with placed items
//! - Pointer helpers that take page-space points and emit device events
//! - Small image fixtures

use cheatsheet::input::{MouseDownEvent, MouseMoveEvent, MouseUpEvent};
use cheatsheet::{CropRect, Document, Editor, ImageHandle, ItemId, PaperSize, Point, Rect, Settings};
use image::{DynamicImage, Rgba, RgbaImage};

// ============================================================================
// Fixtures
// ============================================================================

/// Solid-color image of the given size.
pub fn test_image(width: u32, height: u32) -> ImageHandle {
    let pixels = RgbaImage::from_pixel(width, height, Rgba([30, 120, 200, 255]));
    ImageHandle::new(DynamicImage::ImageRgba8(pixels)).unwrap()
}

// ============================================================================
// TestDocumentBuilder
// ============================================================================

enum Placement {
    Default,
    At(Rect, Option<CropRect>),
}

/// Builder for documents with items on one or more pages.
///
/// # Example
/// ```ignore
/// let (doc, ids) = TestDocumentBuilder::new()
///     .with_item_at((200, 200), Rect::new(0.0, 0.0, 100.0, 100.0))
///     .with_page()
///     .with_image(800, 600)
///     .build_with_ids();
/// ```
pub struct TestDocumentBuilder {
    pages: Vec<Vec<((u32, u32), Placement)>>,
    current_page: usize,
}

impl Default for TestDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDocumentBuilder {
    pub fn new() -> Self {
        // Letter paper keeps device offsets integral, so page points survive the
        // round trip through device space exactly.
        Self {
            pages: vec![Vec::new()],
            current_page: 0,
        }
    }

    /// Add an image with default placement to the last page.
    pub fn with_image(mut self, width: u32, height: u32) -> Self {
        self.last_page().push(((width, height), Placement::Default));
        self
    }

    /// Add an image with explicit bounds and a full crop to the last page.
    pub fn with_item_at(mut self, image: (u32, u32), bounds: Rect) -> Self {
        self.last_page().push((image, Placement::At(bounds, None)));
        self
    }

    /// Add an image with explicit bounds and crop to the last page.
    pub fn with_cropped_item(mut self, image: (u32, u32), bounds: Rect, crop: CropRect) -> Self {
        self.last_page().push((image, Placement::At(bounds, Some(crop))));
        self
    }

    /// Start a new page; later items land on it.
    pub fn with_page(mut self) -> Self {
        self.pages.push(Vec::new());
        self
    }

    /// Page to make current after building.
    pub fn with_current_page(mut self, index: usize) -> Self {
        self.current_page = index;
        self
    }

    fn last_page(&mut self) -> &mut Vec<((u32, u32), Placement)> {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn build(self) -> Document {
        self.build_with_ids().0
    }

    /// Build and return item ids in insertion order.
    pub fn build_with_ids(self) -> (Document, Vec<ItemId>) {
        let mut doc = Document::with_paper(PaperSize::Letter);
        let mut ids = Vec::new();

        for (index, items) in self.pages.into_iter().enumerate() {
            if index > 0 {
                doc.add_page();
            }
            for ((w, h), placement) in items {
                let image = test_image(w, h);
                let item = match placement {
                    Placement::Default => doc.create_item(image),
                    Placement::At(bounds, crop) => {
                        let crop = crop.unwrap_or(CropRect::full(w, h));
                        doc.create_item_with_geometry(image, bounds, crop)
                    }
                };
                ids.push(item.id());
                doc.current_page_mut().add_item(item);
            }
        }

        doc.set_current_page(self.current_page);
        (doc, ids)
    }
}

// ============================================================================
// Editor helpers
// ============================================================================

pub fn editor_with(doc: Document) -> Editor {
    Editor::with_document(doc, Settings::default())
}

/// Press the primary button at a page-space point.
pub fn press(editor: &mut Editor, page: Point) -> bool {
    let device = editor.page_to_device(page);
    editor.handle_mouse_down(&MouseDownEvent::primary(device.x, device.y))
}

/// Move the pointer to a page-space point.
pub fn move_to(editor: &mut Editor, page: Point) -> bool {
    let device = editor.page_to_device(page);
    editor.handle_mouse_move(&MouseMoveEvent::at(device.x, device.y))
}

/// Release the primary button at a page-space point.
pub fn release(editor: &mut Editor, page: Point) -> bool {
    let device = editor.page_to_device(page);
    editor.handle_mouse_up(&MouseUpEvent::primary(device.x, device.y))
}

/// Press at `from`, move by `delta` page points, release.
pub fn drag(editor: &mut Editor, from: Point, delta: Point) {
    press(editor, from);
    move_to(editor, from + delta);
    release(editor, from + delta);
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Check every item invariant on every page.
pub fn assert_invariants(doc: &Document) {
    for page in doc.pages() {
        for item in page.items() {
            let crop = item.crop();
            assert!(
                crop.is_within(item.image().width(), item.image().height()),
                "crop out of bounds: {crop:?}"
            );
            assert!(item.width() >= 10.0 - 1e-9, "width {}", item.width());
            assert!(item.height() >= 10.0 - 1e-9, "height {}", item.height());
        }
    }
    assert!(doc.page_count() >= 1);
    assert!(doc.current_page_index() < doc.page_count());
}

/// Check `width / height == crop.width / crop.height` for every item.
pub fn assert_aspect_locked(doc: &Document) {
    for page in doc.pages() {
        for item in page.items() {
            let expected = item.crop().aspect();
            let actual = item.width() / item.height();
            assert!(
                (actual - expected).abs() <= 1e-9 * expected.max(1.0),
                "aspect {actual} does not match crop {:?}",
                item.crop()
            );
        }
    }
}
