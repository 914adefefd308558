//! Toast stack in the bottom-right corner.

use crate::app::LabelEditor;
use crate::notifications::{Toast, ToastVariant};
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

fn render_toast(toast: &Toast, cx: &mut Context<LabelEditor>) -> Stateful<Div> {
    let accent = match toast.variant {
        ToastVariant::Success => cx.theme().success,
        ToastVariant::Warning => cx.theme().warning,
        ToastVariant::Error => cx.theme().danger,
    };
    let bg = cx.theme().popover;
    let fg = cx.theme().popover_foreground;
    let border = cx.theme().border;
    let toast_id = toast.id;

    h_flex()
        .id(ElementId::Name(format!("toast-{}", toast_id).into()))
        .w(px(320.0))
        .px(px(14.0))
        .py(px(10.0))
        .gap(px(10.0))
        .bg(bg)
        .border_1()
        .border_color(border)
        .border_l_4()
        .rounded(px(8.0))
        .shadow_md()
        .opacity(toast.opacity())
        .cursor_pointer()
        .on_click(cx.listener(move |this, _, _, cx| {
            this.ui.toast_manager.remove(toast_id);
            cx.notify();
        }))
        .child(div().text_color(accent).child(toast.variant.icon()))
        .child(
            div()
                .flex_1()
                .text_sm()
                .text_color(fg)
                .child(toast.message.clone()),
        )
}

/// Render the visible toasts, newest at the bottom.
pub fn render_toasts(editor: &LabelEditor, cx: &mut Context<LabelEditor>) -> impl IntoElement {
    let toasts: Vec<_> = editor
        .ui
        .toast_manager
        .toasts()
        .iter()
        .map(|toast| render_toast(toast, cx))
        .collect();

    deferred(
        v_flex()
            .absolute()
            .right(px(16.0))
            .bottom(px(16.0))
            .gap(px(8.0))
            .children(toasts),
    )
    .with_priority(2000)
}
