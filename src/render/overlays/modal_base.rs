//! Shared modal utilities - backdrop with click-to-close.

use crate::app::LabelEditor;
use crate::constants::MODAL_BACKDROP_OPACITY;
use gpui::*;

/// Renders a modal backdrop with click-to-close behavior using state-tracking.
///
/// The flag is set on mouse down and checked on mouse up. Only if the mouse
/// went down on the backdrop (not the modal) does the close action trigger;
/// the modal content stops propagation of its own mouse downs.
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    cx: &mut Context<LabelEditor>,
    on_backdrop_mouse_down: impl Fn(&mut LabelEditor, &MouseDownEvent, &mut Window, &mut Context<LabelEditor>) + 'static,
    on_backdrop_mouse_up: impl Fn(&mut LabelEditor, &MouseUpEvent, &mut Window, &mut Context<LabelEditor>) + 'static,
    child: impl IntoElement,
) -> impl IntoElement {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .occlude()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(on_backdrop_mouse_up))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(child),
    )
    .with_priority(1500)
}
