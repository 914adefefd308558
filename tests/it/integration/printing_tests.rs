//! Printing integration tests: rasterize a label and submit it.

use crate::helpers::{RecordingPrinter, ScriptedPrompts, TestLabelBuilder, empty_label};
use image::Rgba;
use labelboard::drop::place_tile;
use labelboard::printer::{PrintOptions, Printer, PrinterError, print_label};
use labelboard::types::ElementType;

#[test]
fn test_print_submits_png_of_label_extent() {
    let label = TestLabelBuilder::new()
        .with_item_size(100.0, 60.0)
        .with_rectangle((10.0, 20.0))
        .with_ellipse((150.0, 20.0))
        .build();
    let mut printer = RecordingPrinter::ready();

    print_label(&mut printer, &label, None).unwrap();

    assert_eq!(printer.jobs.len(), 1);
    let (png, options) = &printer.jobs[0];
    assert!(options.is_none());
    let decoded = image::load_from_memory(png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (250, 80));
    // Outside every item the raster stays white
    assert_eq!(*decoded.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
}

#[test]
fn test_printed_label_carries_text() {
    let label = TestLabelBuilder::new()
        .with_item_size(200.0, 50.0)
        .with_text("SALE 4.99", (0.0, 0.0))
        .build();
    let mut printer = RecordingPrinter::ready();

    print_label(&mut printer, &label, None).unwrap();

    let decoded = image::load_from_memory(&printer.jobs[0].0).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (200, 50));
    // Default text colour is black on the white background
    let ink = decoded.pixels().filter(|p| p[0] < 100).count();
    assert!(ink > 20, "expected glyph pixels, found {ink}");
}

#[test]
fn test_print_passes_options_through() {
    let label = TestLabelBuilder::new().with_rectangle((0.0, 0.0)).build();
    let mut printer = RecordingPrinter::ready();
    let options = PrintOptions {
        copies: 2,
        ..PrintOptions::default()
    };

    print_label(&mut printer, &label, Some(&options)).unwrap();
    assert_eq!(printer.jobs[0].1.as_ref(), Some(&options));
    assert_eq!(printer.print_queue(), vec!["0".to_string()]);
}

#[test]
fn test_offline_printer_gets_nothing() {
    let label = TestLabelBuilder::new().with_rectangle((0.0, 0.0)).build();
    let mut printer = RecordingPrinter::offline();

    let err = print_label(&mut printer, &label, None).unwrap_err();
    assert!(matches!(err, PrinterError::NotReady(ref name) if name == "recorder"));
    assert!(printer.jobs.is_empty());

    printer.connect().unwrap();
    print_label(&mut printer, &label, None).unwrap();
    assert_eq!(printer.jobs.len(), 1);
}

#[test]
fn test_invalid_options_rejected_before_submit() {
    let label = empty_label();
    let mut printer = RecordingPrinter::ready();
    let options = PrintOptions {
        copies: 0,
        ..PrintOptions::default()
    };

    let err = print_label(&mut printer, &label, Some(&options)).unwrap_err();
    assert!(matches!(err, PrinterError::InvalidOptions(_)));
    assert!(printer.jobs.is_empty());
}

#[test]
fn test_barcode_label_prints_bars() {
    let mut label = empty_label();
    place_tile(
        &mut label,
        ElementType::Barcode,
        (0.0, 0.0),
        &mut ScriptedPrompts::barcode("SHIP-42"),
    )
    .unwrap();
    let mut printer = RecordingPrinter::ready();

    print_label(&mut printer, &label, None).unwrap();

    let decoded = image::load_from_memory(&printer.jobs[0].0).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (350, 200));
    assert!((0..350).any(|x| decoded.get_pixel(x, 100)[0] < 64));
}

#[test]
fn test_queue_management() {
    let label = TestLabelBuilder::new().with_rectangle((0.0, 0.0)).build();
    let mut printer = RecordingPrinter::ready();
    print_label(&mut printer, &label, None).unwrap();
    print_label(&mut printer, &label, None).unwrap();

    assert!(matches!(
        printer.cancel_print_job("7"),
        Err(PrinterError::JobNotFound(ref id)) if id == "7"
    ));
    printer.cancel_print_job("0").unwrap();
    assert_eq!(printer.jobs.len(), 1);
    printer.clear_queue().unwrap();
    assert!(printer.print_queue().is_empty());
    assert_eq!(printer.status(), "0 job(s) queued");
}
