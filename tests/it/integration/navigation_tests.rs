//! Page navigation through the editor.

use crate::helpers::{TestDocumentBuilder, editor_with, move_to, press, test_image};
use cheatsheet::input::ScrollDirection;
use cheatsheet::{Editor, Point, Rect};

#[test]
fn test_next_page_abandons_drag() {
    let doc = TestDocumentBuilder::new()
        .with_item_at((50, 50), Rect::new(0.0, 0.0, 100.0, 100.0))
        .build();
    let mut editor = editor_with(doc);
    press(&mut editor, Point::new(50.0, 50.0));
    assert!(editor.input_state().is_dragging());

    editor.next_page();
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.selected(), None);
    assert!(!move_to(&mut editor, Point::new(90.0, 90.0)));

    editor.prev_page();
    let item = &editor.document().current_page().items()[0];
    assert_eq!(item.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
}

#[test]
fn test_page_ops_clear_selection() {
    let mut editor = Editor::new();
    editor.add_image(test_image(30, 30));
    editor.add_page();
    assert_eq!(editor.selected(), None);

    editor.add_image(test_image(30, 30));
    assert!(editor.move_page_up());
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.document().current_page_index(), 0);

    editor.add_image(test_image(30, 30));
    assert!(editor.remove_current_page());
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.document().page_count(), 1);
    assert!(!editor.remove_current_page());
    assert!(!editor.move_page_down());
}

#[test]
fn test_page_label_follows_navigation() {
    let mut editor = Editor::new();
    editor.next_page();
    assert_eq!(editor.page_label(), "Page 2 / 2");
    editor.prev_page();
    assert_eq!(editor.page_label(), "Page 1 / 2");
}

#[test]
fn test_scroll_zoom_is_floored() {
    let mut editor = Editor::new();
    for _ in 0..50 {
        editor.handle_scroll(ScrollDirection::Down);
    }
    assert_eq!(editor.zoom(), 0.2);
    editor.zoom_reset();
    assert_eq!(editor.zoom(), 1.25);
}
