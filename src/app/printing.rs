//! Print action - send the current label to the attached printer.

use super::LabelEditor;
use crate::notifications::Toast;
use crate::printer::print_label;
use gpui::*;

impl LabelEditor {
    pub fn print_current_label(&mut self, cx: &mut Context<Self>) {
        if self.is_editing_text() {
            self.finish_textbox_editing(cx);
        }

        let Some(printer) = self.printer.as_mut() else {
            self.ui
                .toast_manager
                .push(Toast::warning("No printer attached"));
            cx.notify();
            return;
        };

        let options = self.settings.print_options.clone();
        match print_label(printer.as_mut(), &self.canvas.label, Some(&options)) {
            Ok(()) => {
                let name = printer.name().to_string();
                self.ui
                    .toast_manager
                    .push(Toast::success(format!("Sent to {}", name)));
            }
            Err(e) => self.report_error("Print failed", e),
        }
        cx.notify();
    }
}
