//! Unit tests for the toasts raised by drop and print failures.

use crate::helpers::{RecordingPrinter, ScriptedPrompts, TestLabelBuilder};
use labelboard::drop::{build_content, image_content};
use labelboard::notifications::{MAX_VISIBLE_TOASTS, Toast, ToastManager, ToastVariant};
use labelboard::printer::print_label;
use labelboard::types::ElementType;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_unreadable_image_drop_raises_error_toast() {
    let err = image_content(Path::new("/nonexistent/logo.png")).unwrap_err();
    let toast = Toast::failure("Failed to create element", &err);

    assert_eq!(toast.variant, ToastVariant::Error);
    assert!(toast.message.starts_with("Failed to create element: Failed to load image"));
    assert!(toast.message.contains("logo.png"));
    assert_eq!(toast.duration, Duration::from_secs(5));
}

#[test]
fn test_unencodable_barcode_message() {
    let err = build_content(
        ElementType::Barcode,
        &mut ScriptedPrompts::barcode("€100"),
        (350, 200),
        350.0,
    )
    .unwrap_err();
    let toast = Toast::failure("Failed to create element", err);
    assert!(toast.message.contains("cannot be encoded in CODE128"));
}

#[test]
fn test_offline_printer_toast_names_printer() {
    let label = TestLabelBuilder::new().with_rectangle((0.0, 0.0)).build();
    let mut printer = RecordingPrinter::offline();
    let err = print_label(&mut printer, &label, None).unwrap_err();

    let toast = Toast::failure("Print failed", err);
    assert_eq!(toast.message, "Print failed: Printer recorder is not ready");
    assert!(printer.jobs.is_empty());
}

#[test]
fn test_burst_of_failures_keeps_newest() {
    let mut manager = ToastManager::new();
    manager.push(Toast::warning("No printer attached"));
    for attempt in 1..=5 {
        manager.push(Toast::failure("Print failed", format!("attempt {attempt}")));
    }

    assert_eq!(manager.count(), MAX_VISIBLE_TOASTS);
    assert!(
        manager
            .toasts()
            .iter()
            .all(|t| t.variant == ToastVariant::Error)
    );
    assert_eq!(manager.toasts()[3].message, "Print failed: attempt 5");
}

#[test]
fn test_toasts_expire_by_variant() {
    let mut manager = ToastManager::new();
    manager.push(Toast::success("Sent to recorder"));
    manager.push(Toast::warning("No printer attached"));
    manager.push(Toast::failure("Print failed", "paper jam"));
    let start = manager.toasts()[2].created_at;

    manager.remove_expired(start + Duration::from_millis(3500));
    assert_eq!(manager.count(), 2);
    manager.remove_expired(start + Duration::from_millis(4500));
    assert_eq!(manager.count(), 1);
    manager.remove_expired(start + Duration::from_millis(5500));
    assert!(manager.is_empty());
}
