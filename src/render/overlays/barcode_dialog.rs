//! Barcode input dialog - asks for the text to encode after a barcode tile drop.

use super::modal_base::render_modal_backdrop;
use crate::app::{BarcodeDialog, LabelEditor};
use crate::constants::MODAL_WIDTH_SM;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::Input;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

/// Render the barcode input dialog
pub fn render_barcode_dialog(
    dialog: &BarcodeDialog,
    cx: &mut Context<LabelEditor>,
) -> impl IntoElement {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let danger = cx.theme().danger;

    let message = dialog.input.message().map(str::to_string);

    let content = v_flex()
        .id("barcode-dialog")
        .on_mouse_down(MouseButton::Left, |_, _, cx| {
            cx.stop_propagation();
        })
        .w(px(MODAL_WIDTH_SM))
        .bg(bg)
        .border_1()
        .border_color(border)
        .rounded(px(12.0))
        .overflow_hidden()
        .shadow_lg()
        // Header
        .child(
            h_flex()
                .w_full()
                .px(px(20.0))
                .py(px(16.0))
                .border_b_1()
                .border_color(border)
                .child(
                    div()
                        .text_size(px(16.0))
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(fg)
                        .child("Barcode"),
                ),
        )
        // Content
        .child(
            v_flex()
                .w_full()
                .p(px(20.0))
                .gap(px(8.0))
                .child(
                    div()
                        .text_size(px(13.0))
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(fg)
                        .child("Text to encode"),
                )
                .child(Input::new(&dialog.field))
                .when_some(message, |d, message| {
                    d.child(div().text_size(px(12.0)).text_color(danger).child(message))
                }),
        )
        // Footer with buttons
        .child(
            h_flex()
                .w_full()
                .px(px(20.0))
                .py(px(16.0))
                .border_t_1()
                .border_color(border)
                .justify_end()
                .gap(px(12.0))
                .child(
                    Button::new("cancel-barcode")
                        .label("Cancel")
                        .ghost()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.cancel_barcode_dialog(cx);
                        })),
                )
                .child(
                    Button::new("accept-barcode")
                        .label("OK")
                        .primary()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.submit_barcode_dialog(cx);
                        })),
                ),
        );

    render_modal_backdrop(
        "barcode-dialog-backdrop",
        cx,
        |this, _, _, _| {
            this.ui.backdrop_clicked = true;
        },
        |this, _, _, cx| {
            if this.ui.backdrop_clicked {
                this.ui.backdrop_clicked = false;
                this.cancel_barcode_dialog(cx);
            }
        },
        content,
    )
}
