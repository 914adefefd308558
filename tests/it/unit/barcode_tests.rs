//! Unit tests for CODE128 generation.

use labelboard::barcode::code128::CodeSet;
use labelboard::barcode::{BarcodeError, Code128, generate_barcode_image};
use image::Rgba;

#[test]
fn test_generated_image_has_requested_size() {
    for (w, h) in [(350, 200), (500, 80), (123, 45)] {
        let image = generate_barcode_image("LABEL-01", w, h).unwrap();
        assert_eq!(image.dimensions(), (w, h));
    }
}

#[test]
fn test_quiet_zone_is_white() {
    let image = generate_barcode_image("ABC", 350, 100).unwrap();
    let white = Rgba([255, 255, 255, 255]);
    for y in [0, 50, 99] {
        assert_eq!(*image.get_pixel(0, y), white);
        assert_eq!(*image.get_pixel(349, y), white);
    }
}

#[test]
fn test_bars_span_full_height() {
    let image = generate_barcode_image("ABC", 350, 100).unwrap();
    let black = Rgba([0, 0, 0, 255]);
    let bar_column = (0..350)
        .find(|&x| *image.get_pixel(x, 0) == black)
        .expect("symbol has at least one bar");
    assert!((0..100).all(|y| *image.get_pixel(bar_column, y) == black));
}

#[test]
fn test_empty_data_rejected() {
    assert!(matches!(
        generate_barcode_image("", 350, 200),
        Err(BarcodeError::Empty)
    ));
}

#[test]
fn test_non_ascii_rejected() {
    assert!(matches!(
        Code128::encode("café"),
        Err(BarcodeError::UnsupportedCharacter { ch: 'é', position: 3 })
    ));
}

#[test]
fn test_narrow_target_keeps_requested_size() {
    let image = generate_barcode_image("A LONG BARCODE VALUE", 40, 20).unwrap();
    assert_eq!(image.dimensions(), (40, 20));
}

#[test]
fn test_zero_width_rejected() {
    assert!(matches!(
        generate_barcode_image("ABC", 0, 20),
        Err(BarcodeError::ZeroWidth)
    ));
}

#[test]
fn test_zero_height_rejected() {
    assert!(matches!(
        generate_barcode_image("ABC", 350, 0),
        Err(BarcodeError::ZeroHeight)
    ));
}

#[test]
fn test_numeric_data_starts_in_code_c() {
    let code = Code128::encode("00123456").unwrap();
    assert_eq!(code.start_set(), CodeSet::C);
    // Start + four digit pairs
    assert_eq!(code.values().len(), 5);
}

#[test]
fn test_text_starts_in_code_b() {
    let code = Code128::encode("Label").unwrap();
    assert_eq!(code.start_set(), CodeSet::B);
    assert_eq!(code.values().len(), 6);
}

#[test]
fn test_module_count_matches_modules() {
    let code = Code128::encode("Hello 123").unwrap();
    assert_eq!(code.modules().len(), code.module_count());
    // Every symbol starts with a bar and ends with the stop's final bar
    let modules = code.modules();
    assert!(modules[0]);
    assert!(modules[modules.len() - 1]);
}
