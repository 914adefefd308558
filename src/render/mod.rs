//! Rendering - the window layout of the label editor.
//!
//! - `canvas` - The label surface, items and handles
//! - `palette` - Menu button and slide-out tile palette
//! - `overlays` - Barcode dialog and toasts

pub mod canvas;
pub mod overlays;
pub mod palette;

use crate::app::LabelEditor;
use crate::constants::HEADER_HEIGHT;
use crate::profile_scope;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{ActiveTheme as _, h_flex};
use std::time::Instant;

fn render_header(editor: &LabelEditor, cx: &mut Context<LabelEditor>) -> Div {
    let bg = cx.theme().title_bar;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    let printer_name = editor
        .printer
        .as_ref()
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| "No printer".to_string());

    h_flex()
        .absolute()
        .top_0()
        .left_0()
        .right_0()
        .h(px(HEADER_HEIGHT))
        .px(px(16.0))
        .justify_between()
        .bg(bg)
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child("Label Designer"),
        )
        .child(
            h_flex()
                .gap(px(12.0))
                .child(div().text_xs().text_color(muted_fg).child(printer_name))
                .child(
                    Button::new("print-label")
                        .label("Print")
                        .primary()
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.print_current_label(cx);
                        })),
                ),
        )
}

impl Render for LabelEditor {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render");

        let now = Instant::now();
        let (slider_w, button_w) = self.ui.palette.widths_at(now);
        self.canvas.origin = point(px(button_w + slider_w), px(HEADER_HEIGHT));

        if self.prune_toasts() {
            cx.notify();
        }
        if self.ui.palette.is_animating(now) || !self.ui.toast_manager.is_empty() {
            window.request_animation_frame();
        }

        let bg = cx.theme().background;

        div()
            .id("label-editor")
            .size_full()
            .relative()
            .bg(bg)
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .child(canvas::render_canvas_area(self, cx))
            .child(
                h_flex()
                    .absolute()
                    .left_0()
                    .top(px(HEADER_HEIGHT))
                    .bottom_0()
                    .items_start()
                    .child(palette::render_menu_button(button_w, cx))
                    .child(palette::render_palette(slider_w, cx)),
            )
            .child(render_header(self, cx))
            .when_some(self.ui.barcode_dialog.as_ref(), |d, dialog| {
                d.child(overlays::render_barcode_dialog(dialog, cx))
            })
            .child(overlays::render_toasts(self, cx))
    }
}
