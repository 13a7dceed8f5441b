//! Document and page operations.

use crate::helpers::{TestDocumentBuilder, assert_close, assert_invariants, test_image};
use cheatsheet::constants::{A4_HEIGHT_PT, A4_WIDTH_PT};
use cheatsheet::{CropRect, Document, PaperSize, Rect};

#[test]
fn test_new_document_has_one_page() {
    let doc = Document::new();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.current_page_index(), 0);
    assert!(doc.current_page().is_empty());
    assert_eq!(doc.paper(), PaperSize::A4);
}

#[test]
fn test_default_item_geometry() {
    let mut doc = Document::new();
    let item = doc.create_item(test_image(800, 600));

    assert_eq!(item.crop(), CropRect::new(0, 0, 800, 600));
    let width = A4_WIDTH_PT / 2.0;
    let height = width * 600.0 / 800.0;
    assert_close(item.width(), width);
    assert_close(item.height(), height);
    assert_close(item.x(), (A4_WIDTH_PT - width) / 2.0);
    assert_close(item.y(), (A4_HEIGHT_PT - height) / 2.0);
}

#[test]
fn test_item_ids_are_unique() {
    let mut doc = Document::new();
    let a = doc.create_item(test_image(10, 10));
    let b = doc.create_item(test_image(10, 10));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_add_page_appends_and_selects() {
    let mut doc = Document::new();
    let before = doc.page_count();
    let index = doc.add_page();
    assert_eq!(doc.page_count(), before + 1);
    assert_eq!(index, doc.page_count() - 1);
    assert_eq!(doc.current_page_index(), index);
}

#[test]
fn test_remove_only_page_is_noop() {
    let mut doc = Document::new();
    assert!(!doc.remove_current_page());
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn test_remove_last_page_moves_cursor_back() {
    let mut doc = TestDocumentBuilder::new().with_page().with_page().with_current_page(2).build();
    assert!(doc.remove_current_page());
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.current_page_index(), 1);
}

#[test]
fn test_move_page_up_and_down() {
    let (mut doc, ids) = TestDocumentBuilder::new()
        .with_image(10, 10)
        .with_page()
        .with_image(20, 20)
        .with_current_page(1)
        .build_with_ids();

    assert!(doc.move_page_up());
    assert_eq!(doc.current_page_index(), 0);
    assert!(doc.current_page().get_item(ids[1]).is_some());
    assert!(!doc.move_page_up());

    assert!(doc.move_page_down());
    assert_eq!(doc.current_page_index(), 1);
    assert!(doc.current_page().get_item(ids[1]).is_some());
    assert!(!doc.move_page_down());
}

#[test]
fn test_set_current_page_out_of_range_is_ignored() {
    let mut doc = Document::new();
    assert!(!doc.set_current_page(3));
    assert_eq!(doc.current_page_index(), 0);
}

#[test]
fn test_remove_item_and_find() {
    let (mut doc, ids) = TestDocumentBuilder::new().with_image(10, 10).with_image(10, 10).build_with_ids();
    assert_eq!(doc.find_item(ids[1]).map(|(page, _)| page), Some(0));

    assert!(doc.current_page_mut().remove_item(ids[0]));
    assert!(!doc.current_page_mut().remove_item(ids[0]));
    assert_eq!(doc.current_page().item_count(), 1);
    assert!(doc.find_item(ids[0]).is_none());
}

#[test]
fn test_explicit_geometry_is_clamped() {
    let doc = TestDocumentBuilder::new()
        .with_cropped_item((100, 100), Rect::new(0.0, 0.0, 2.0, 3.0), CropRect::new(-5, 90, 200, 1))
        .build();
    let item = &doc.current_page().items()[0];
    assert_eq!(item.crop(), CropRect::new(0, 90, 100, 5));
    assert_eq!((item.width(), item.height()), (10.0, 10.0));
    assert_invariants(&doc);
}
