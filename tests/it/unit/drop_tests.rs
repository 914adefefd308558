//! Unit tests for canvas drop handling.

use crate::helpers::{ScriptedPrompts, assert_item_count, empty_label};
use labelboard::drop::{build_content, place_tile};
use labelboard::palette::TilePayload;
use labelboard::types::{ElementType, ItemContent};

#[test]
fn test_every_shape_tag_places_one_item() {
    for &ty in &[
        ElementType::Ellipse,
        ElementType::Line,
        ElementType::Rectangle,
        ElementType::RichTextbox,
    ] {
        let mut label = empty_label();
        let id = place_tile(&mut label, ty, (10.0, 20.0), &mut ScriptedPrompts::cancelling());
        assert!(id.is_some(), "{} should place without a prompt", ty);
        assert_item_count(&label, 1);
        let item = &label.items[0];
        assert_eq!(item.position, (10.0, 20.0));
        assert_eq!(item.size, (350.0, 200.0));
        assert_eq!(item.content.element_type(), ty);
    }
}

#[test]
fn test_cancelled_prompts_place_nothing() {
    for ty in [ElementType::Barcode, ElementType::Image] {
        let mut label = empty_label();
        assert_eq!(
            place_tile(&mut label, ty, (0.0, 0.0), &mut ScriptedPrompts::cancelling()),
            None
        );
        assert_item_count(&label, 0);
    }
}

#[test]
fn test_barcode_drop_encodes_text() {
    let mut label = empty_label();
    let id = place_tile(
        &mut label,
        ElementType::Barcode,
        (5.0, 5.0),
        &mut ScriptedPrompts::barcode("SKU-4711"),
    )
    .unwrap();

    match &label.get_item(id).unwrap().content {
        ItemContent::Barcode { data, image } => {
            assert_eq!(data, "SKU-4711");
            assert_eq!(image.dimensions(), (350, 200));
        }
        other => panic!("expected barcode, got {:?}", other.element_type()),
    }
}

#[test]
fn test_long_barcode_drop_fits_default_size() {
    let mut label = empty_label();
    let id = place_tile(
        &mut label,
        ElementType::Barcode,
        (0.0, 0.0),
        &mut ScriptedPrompts::barcode("ABCDEFGHIJKLMNOPQRSTUVWXYZ1234"),
    )
    .expect("a 30 character code should still be placed");

    assert_item_count(&label, 1);
    match &label.get_item(id).unwrap().content {
        ItemContent::Barcode { image, .. } => assert_eq!(image.dimensions(), (350, 200)),
        other => panic!("expected barcode, got {:?}", other.element_type()),
    }
}

#[test]
fn test_unencodable_barcode_places_nothing() {
    let mut label = empty_label();
    assert_eq!(
        place_tile(
            &mut label,
            ElementType::Barcode,
            (0.0, 0.0),
            &mut ScriptedPrompts::barcode("日本"),
        ),
        None
    );
    assert_item_count(&label, 0);
}

#[test]
fn test_image_drop_loads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let mut label = empty_label();
    let id = place_tile(
        &mut label,
        ElementType::Image,
        (0.0, 0.0),
        &mut ScriptedPrompts::image(&path),
    )
    .unwrap();

    match &label.get_item(id).unwrap().content {
        ItemContent::Image { path: p, image } => {
            assert_eq!(p, &path);
            assert_eq!(image.dimensions(), (8, 4));
        }
        other => panic!("expected image, got {:?}", other.element_type()),
    }
}

#[test]
fn test_unreadable_image_places_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").unwrap();

    let mut label = empty_label();
    assert_eq!(
        place_tile(
            &mut label,
            ElementType::Image,
            (0.0, 0.0),
            &mut ScriptedPrompts::image(&path),
        ),
        None
    );
    assert_item_count(&label, 0);
}

#[test]
fn test_build_content_reports_errors() {
    let result = build_content(
        ElementType::Image,
        &mut ScriptedPrompts::image("/definitely/not/here.png"),
        (350, 200),
        350.0,
    );
    assert!(result.is_err());
}

#[test]
fn test_line_spans_item_width() {
    let content = build_content(
        ElementType::Line,
        &mut ScriptedPrompts::cancelling(),
        (350, 200),
        120.0,
    )
    .unwrap();
    assert!(matches!(content, Some(ItemContent::Line { end_x, .. }) if end_x == 120.0));
}

#[test]
fn test_payload_tag_dispatch() {
    let payload = TilePayload::from_keyed("TileType", "Rectangle").unwrap();
    let mut label = empty_label();
    place_tile(
        &mut label,
        payload.element_type,
        (0.0, 0.0),
        &mut ScriptedPrompts::cancelling(),
    );
    assert!(matches!(
        label.items[0].content,
        ItemContent::Rectangle { .. }
    ));

    assert_eq!(TilePayload::from_keyed("TileType", "Hexagon"), None);
    assert_eq!(TilePayload::from_keyed("Other", "Rectangle"), None);
}
