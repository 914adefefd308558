//! Unit tests for the label surface: hit testing, moving and resizing.

use crate::helpers::{TestLabelBuilder, assert_item_count};
use labelboard::input::handles::corner_at;
use labelboard::input::{InputState, ResizeCorner};
use labelboard::types::ItemContent;

#[test]
fn test_ids_increase_in_placement_order() {
    let label = TestLabelBuilder::new()
        .with_rectangle((0.0, 0.0))
        .with_ellipse((10.0, 10.0))
        .with_text("x", (20.0, 20.0))
        .build();
    let ids: Vec<u64> = label.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(label.next_item_id, 3);
}

#[test]
fn test_item_at_prefers_topmost() {
    let label = TestLabelBuilder::new()
        .with_item_size(100.0, 100.0)
        .with_rectangle((0.0, 0.0))
        .with_ellipse((50.0, 50.0))
        .build();

    assert_eq!(label.item_at(75.0, 75.0), Some(1));
    assert_eq!(label.item_at(25.0, 25.0), Some(0));
    assert_eq!(label.item_at(175.0, 175.0), None);
}

#[test]
fn test_drag_follows_pointer_deltas() {
    let mut label = TestLabelBuilder::new()
        .with_item_size(100.0, 50.0)
        .with_rectangle((10.0, 10.0))
        .build();

    let mut state = InputState::default();
    state.start_dragging(0, (20.0, 20.0));
    for pos in [(25.0, 22.0), (40.0, 30.0), (35.0, 50.0)] {
        let (dx, dy) = state.advance(pos).unwrap();
        label.move_item_by(0, dx, dy);
    }
    assert_eq!(state.finish(), Some(0));
    assert!(state.is_idle());

    // Net pointer movement was (15, 30)
    assert_eq!(label.get_item(0).unwrap().position, (25.0, 40.0));
    // The spatial index moved along with the item
    assert_eq!(label.item_at(30.0, 45.0), Some(0));
    assert_eq!(label.item_at(12.0, 12.0), None);
}

#[test]
fn test_resize_never_below_minimum() {
    for corner in ResizeCorner::all() {
        let mut label = TestLabelBuilder::new()
            .with_item_size(100.0, 100.0)
            .with_rectangle((200.0, 200.0))
            .build();
        for (dx, dy) in [(-500.0, -500.0), (500.0, 500.0), (-500.0, 500.0), (500.0, -500.0)] {
            let (_, size) = label.resize_item(0, corner, dx, dy).unwrap();
            assert!(size.0 >= 20.0 && size.1 >= 20.0, "{:?} shrank to {:?}", corner, size);
        }
    }
}

#[test]
fn test_resize_anchors_opposite_corner() {
    let mut label = TestLabelBuilder::new()
        .with_item_size(100.0, 80.0)
        .with_rectangle((50.0, 60.0))
        .build();

    // Dragging the top-left handle keeps the bottom-right corner fixed
    let (pos, size) = label
        .resize_item(0, ResizeCorner::LeftTop, 30.0, -20.0)
        .unwrap();
    assert_eq!(pos, (80.0, 40.0));
    assert_eq!(size, (70.0, 100.0));
    assert_eq!((pos.0 + size.0, pos.1 + size.1), (150.0, 140.0));

    // Clamped shrink from the top-left still leaves bottom-right in place
    let (pos, size) = label
        .resize_item(0, ResizeCorner::LeftTop, 1000.0, 1000.0)
        .unwrap();
    assert_eq!(size, (20.0, 20.0));
    assert_eq!(pos, (130.0, 120.0));
}

#[test]
fn test_resize_keeps_line_spanning_width() {
    let mut label = TestLabelBuilder::new()
        .with_item_size(100.0, 40.0)
        .with_line((0.0, 0.0))
        .build();
    label.resize_item(0, ResizeCorner::RightBottom, 60.0, 0.0);
    assert!(matches!(
        label.get_item(0).unwrap().content,
        ItemContent::Line { end_x, .. } if end_x == 160.0
    ));
}

#[test]
fn test_handles_hit_outside_item_corner() {
    let position = (100.0, 100.0);
    let size = (50.0, 50.0);
    assert_eq!(corner_at((99.0, 99.0), position, size), Some(ResizeCorner::LeftTop));
    assert_eq!(corner_at((151.0, 151.0), position, size), Some(ResizeCorner::RightBottom));
    assert_eq!(corner_at((125.0, 125.0), position, size), None);
}

#[test]
fn test_remove_clears_hit_testing() {
    let mut label = TestLabelBuilder::new()
        .with_rectangle((0.0, 0.0))
        .with_rectangle((0.0, 0.0))
        .build();
    assert_eq!(label.item_at(10.0, 10.0), Some(1));
    label.remove_item(1);
    assert_item_count(&label, 1);
    assert_eq!(label.item_at(10.0, 10.0), Some(0));
}
