//! Label workflow integration tests: drop, select, edit, resize, delete.

use crate::helpers::{ScriptedPrompts, TestLabelBuilder, assert_item_count, empty_label};
use labelboard::barcode_dialog::{BarcodeInput, DialogResult};
use labelboard::drop::place_tile;
use labelboard::input::ResizeCorner;
use labelboard::selection::{Selection, delete_selected};
use labelboard::text_edit::{EditKey, KeyOutcome, TextEditSession};
use labelboard::types::{ElementType, ItemContent};

#[test]
fn test_drop_each_tag_adds_at_most_one_item() {
    let mut label = empty_label();
    let mut expected = 0;
    for &ty in ElementType::all() {
        let before = label.len();
        let placed = place_tile(&mut label, ty, (0.0, 0.0), &mut ScriptedPrompts::cancelling());
        let added = label.len() - before;
        assert_eq!(added, usize::from(placed.is_some()));
        expected += added;
    }
    // Barcode and image were cancelled, the four others placed
    assert_eq!(expected, 4);
    assert_item_count(&label, 4);
}

#[test]
fn test_selecting_replaces_prior_selection() {
    let label = TestLabelBuilder::new()
        .with_item_size(50.0, 50.0)
        .with_rectangle((0.0, 0.0))
        .with_ellipse((100.0, 0.0))
        .with_text("hi", (200.0, 0.0))
        .build();

    let mut selection = Selection::new();
    for x in [10.0, 110.0, 210.0, 110.0] {
        let id = label.item_at(x, 10.0).unwrap();
        selection.select(id);
        assert_eq!(selection.selected(), Some(id));
        let selected_count = label
            .items
            .iter()
            .filter(|i| selection.is_selected(i.id))
            .count();
        assert_eq!(selected_count, 1);
    }
}

#[test]
fn test_delete_selected_removes_and_clears() {
    let mut label = TestLabelBuilder::new()
        .with_rectangle((0.0, 0.0))
        .with_ellipse((400.0, 0.0))
        .build();
    let mut selection = Selection::new();
    selection.select(1);

    let removed = delete_selected(&mut label, &mut selection).expect("selected item removed");
    assert_eq!(removed.id, 1);
    assert!(matches!(removed.content, ItemContent::Ellipse { .. }));

    assert!(selection.is_empty());
    assert_item_count(&label, 1);
    assert!(label.get_item(1).is_none());
    assert_eq!(label.item_at(450.0, 50.0), None);

    // A second delete has nothing selected and leaves the label alone
    assert!(delete_selected(&mut label, &mut selection).is_none());
    assert_item_count(&label, 1);
}

#[test]
fn test_blank_barcode_never_accepted() {
    for text in ["", "   ", "\t\n"] {
        let mut input = BarcodeInput::new();
        input.set_text(text);
        assert!(input.submit().is_err());
        assert!(input.is_open());
        assert_eq!(input.message(), Some("Enter a code for the barcode!"));
        assert!(!matches!(input.result(), DialogResult::Accepted(_)));
    }
}

#[test]
fn test_barcode_dialog_then_drop() {
    let mut input = BarcodeInput::new();
    input.set_text("  ");
    assert!(input.submit().is_err());
    input.set_text("  ORDER-1  ");
    let code = input.submit().unwrap();
    assert_eq!(code, "ORDER-1");

    let mut label = empty_label();
    let id = place_tile(
        &mut label,
        ElementType::Barcode,
        (30.0, 40.0),
        &mut ScriptedPrompts::barcode(&code),
    )
    .unwrap();
    assert!(matches!(
        &label.get_item(id).unwrap().content,
        ItemContent::Barcode { data, .. } if data == "ORDER-1"
    ));
}

#[test]
fn test_cancelled_barcode_dialog_places_nothing() {
    let mut input = BarcodeInput::new();
    input.set_text("ignored");
    input.cancel();
    assert_eq!(input.result(), &DialogResult::Cancelled);

    let mut label = empty_label();
    let mut prompts = ScriptedPrompts {
        barcode: input.into_code(),
        image: None,
    };
    assert_eq!(
        place_tile(&mut label, ElementType::Barcode, (0.0, 0.0), &mut prompts),
        None
    );
    assert_item_count(&label, 0);
}

#[test]
fn test_text_edit_session() {
    let mut label = empty_label();
    let id = place_tile(
        &mut label,
        ElementType::RichTextbox,
        (0.0, 0.0),
        &mut ScriptedPrompts::cancelling(),
    )
    .unwrap();

    let session = TextEditSession::begin(&mut label, id).unwrap();
    assert!(session.accepts_return());
    assert_eq!(session.handle_key(EditKey::Enter { ctrl: false }), KeyOutcome::InsertNewline);
    assert_eq!(session.handle_key(EditKey::Enter { ctrl: true }), KeyOutcome::Finish);
    assert!(session.commit(&mut label, "Best before\n2026-12-01"));

    match &label.get_item(id).unwrap().content {
        ItemContent::TextBox { text, read_only, .. } => {
            assert_eq!(text, "Best before\n2026-12-01");
            assert!(*read_only);
        }
        other => panic!("expected text box, got {:?}", other.element_type()),
    }
}

#[test]
fn test_resize_then_move_keeps_index_current() {
    let mut label = TestLabelBuilder::new()
        .with_item_size(100.0, 100.0)
        .with_rectangle((100.0, 100.0))
        .build();

    label.resize_item(0, ResizeCorner::RightBottom, 100.0, 100.0);
    assert_eq!(label.item_at(290.0, 290.0), Some(0));

    label.move_item_by(0, -100.0, -100.0);
    assert_eq!(label.item_at(290.0, 290.0), None);
    assert_eq!(label.item_at(5.0, 5.0), Some(0));
    assert_eq!(label.extent(), (200.0, 200.0));
}
