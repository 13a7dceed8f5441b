//! Item and handle hit testing.

use crate::helpers::TestDocumentBuilder;
use cheatsheet::hit_testing::{HitTester, hit_test_handle, hit_test_item};
use cheatsheet::{Handle, Point, Rect};

fn overlapping() -> (cheatsheet::Document, Vec<u64>) {
    TestDocumentBuilder::new()
        .with_item_at((100, 100), Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_item_at((100, 100), Rect::new(50.0, 50.0, 100.0, 100.0))
        .build_with_ids()
}

#[test]
fn test_topmost_item_wins() {
    let (doc, ids) = overlapping();
    assert_eq!(hit_test_item(doc.current_page(), Point::new(75.0, 75.0)), Some(ids[1]));
    assert_eq!(hit_test_item(doc.current_page(), Point::new(25.0, 25.0)), Some(ids[0]));
    assert_eq!(hit_test_item(doc.current_page(), Point::new(300.0, 300.0)), None);
}

#[test]
fn test_bring_to_front_changes_hit() {
    let (mut doc, ids) = overlapping();
    assert!(doc.current_page_mut().bring_to_front(ids[0]));
    assert_eq!(hit_test_item(doc.current_page(), Point::new(75.0, 75.0)), Some(ids[0]));
}

#[test]
fn test_item_edges_are_inclusive() {
    let (doc, ids) = overlapping();
    assert_eq!(hit_test_item(doc.current_page(), Point::new(0.0, 100.0)), Some(ids[0]));
    assert_eq!(hit_test_item(doc.current_page(), Point::new(150.0, 150.0)), Some(ids[1]));
}

#[test]
fn test_handle_indices_clockwise() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let expected = [
        (Point::new(0.0, 0.0), Handle::TopLeft),
        (Point::new(100.0, 0.0), Handle::Top),
        (Point::new(200.0, 0.0), Handle::TopRight),
        (Point::new(200.0, 50.0), Handle::Right),
        (Point::new(200.0, 100.0), Handle::BottomRight),
        (Point::new(100.0, 100.0), Handle::Bottom),
        (Point::new(0.0, 100.0), Handle::BottomLeft),
        (Point::new(0.0, 50.0), Handle::Left),
    ];
    for (point, handle) in expected {
        assert_eq!(hit_test_handle(rect, point, 10.0), Some(handle));
        assert_eq!(Handle::from_index(handle.index()), Some(handle));
    }
}

#[test]
fn test_handle_tolerance_boundary() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    assert_eq!(hit_test_handle(rect, Point::new(210.0, 110.0), 10.0), Some(Handle::BottomRight));
    assert_eq!(hit_test_handle(rect, Point::new(210.5, 100.0), 10.0), None);
}

#[test]
fn test_crop_mode_tests_crop_handles() {
    let doc = TestDocumentBuilder::new()
        .with_cropped_item(
            (200, 200),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            cheatsheet::CropRect::new(50, 50, 100, 100),
        )
        .build();
    let item = &doc.current_page().items()[0];
    let tester = HitTester::new();

    assert_eq!(tester.handle_for_mode(item, Point::new(100.0, 100.0), false), Some(Handle::BottomRight));
    assert_eq!(tester.handle_for_mode(item, Point::new(100.0, 100.0), true), Some(Handle::BottomRight));
    assert_eq!(tester.handle_for_mode(item, Point::new(50.0, 50.0), true), None);
}
