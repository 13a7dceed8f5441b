//! Snapshot tests using the insta crate.
//!
//! Inline snapshots keep stable debug output next to the test. To update
//! them after an intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestDocumentBuilder, editor_with, press, release};
use cheatsheet::{Handle, Point, Rect};

#[test]
fn snapshot_handle_order() {
    insta::assert_debug_snapshot!(Handle::ALL, @r"
    [
        TopLeft,
        Top,
        TopRight,
        Right,
        BottomRight,
        Bottom,
        BottomLeft,
        Left,
    ]
    ");
}

#[test]
fn snapshot_selection_overlay() {
    let doc = TestDocumentBuilder::new()
        .with_item_at((40, 20), Rect::new(10.0, 20.0, 40.0, 20.0))
        .build();
    let mut editor = editor_with(doc);
    let id = editor.document().current_page().items()[0].id();
    press(&mut editor, Point::new(30.0, 30.0));
    release(&mut editor, Point::new(30.0, 30.0));
    assert_eq!(editor.selected(), Some(id));

    let overlay = editor.selection_overlay().unwrap();
    insta::assert_debug_snapshot!(overlay.handles, @r"
    [
        Point {
            x: 10.0,
            y: 20.0,
        },
        Point {
            x: 30.0,
            y: 20.0,
        },
        Point {
            x: 50.0,
            y: 20.0,
        },
        Point {
            x: 50.0,
            y: 30.0,
        },
        Point {
            x: 50.0,
            y: 40.0,
        },
        Point {
            x: 30.0,
            y: 40.0,
        },
        Point {
            x: 10.0,
            y: 40.0,
        },
        Point {
            x: 10.0,
            y: 30.0,
        },
    ]
    ");
}
