//! Canvas rendering - the label surface, placed items and resize handles
//!
//! Items are laid out as absolutely positioned divs inside the canvas area,
//! which itself starts at the label origin. Label coordinates therefore map
//! straight onto the canvas div without an offset.
//!
//! ## Performance Notes
//!
//! Rendering happens every frame. Barcode rasters are PNG-encoded once when
//! the item is placed and cached on the controller, so the render path only
//! clones an `Arc`.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::LabelEditor;
use crate::constants::{SELECTED_BORDER_WIDTH, SELECTION_COLOR, UNSELECTED_BORDER_WIDTH};
use crate::input::ResizeCorner;
use crate::palette::TilePayload;
use crate::profile_scope;
use crate::types::{ItemContent, PlacedItem, parse_hex_rgb};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::{Input, InputState};
use std::collections::HashMap;
use std::sync::Arc;

/// Convert a `#rrggbb` string to a gpui color.
pub fn hex_color(hex: &str) -> Option<Hsla> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    Some(Hsla::from(rgb(
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32,
    )))
}

/// Render the content of one item, sized to the item's box.
fn render_item_content(
    item: &PlacedItem,
    barcode_images: &HashMap<u64, Arc<Image>>,
    textbox_input: Option<&Entity<InputState>>,
    fallback: Hsla,
) -> Div {
    let (content_w, content_h) = item.content_size;

    match &item.content {
        ItemContent::Barcode { data, .. } => match barcode_images.get(&item.id) {
            Some(image) => div().size_full().child(
                img(image.clone())
                    .size_full()
                    .object_fit(ObjectFit::Fill),
            ),
            // Not cached yet, show the encoded text instead
            None => div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .text_color(fallback)
                .child(data.clone()),
        },

        ItemContent::Image { path, .. } => div().size_full().child(
            img(path.clone())
                .size_full()
                .object_fit(ObjectFit::Fill),
        ),

        ItemContent::Ellipse {
            stroke,
            fill,
            stroke_width,
        }
        | ItemContent::Rectangle {
            stroke,
            fill,
            stroke_width,
        } => {
            let stroke = hex_color(stroke).unwrap_or(fallback);
            let fill = hex_color(fill);
            let radius = if matches!(item.content, ItemContent::Ellipse { .. }) {
                px(9999.0)
            } else {
                px(0.0)
            };

            div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .child(
                    div()
                        .w(px(content_w))
                        .h(px(content_h))
                        .rounded(radius)
                        .border(px(*stroke_width))
                        .border_color(stroke)
                        .when_some(fill, |d, c| d.bg(c)),
                )
        }

        ItemContent::Line {
            end_x,
            stroke,
            stroke_width,
        } => {
            let color = hex_color(stroke).unwrap_or(fallback);
            let end_x = *end_x;
            let thickness = *stroke_width;

            div().size_full().child(
                canvas(
                    move |_, _, _| {},
                    move |bounds, _, window, _| {
                        let mid_y = bounds.origin.y + bounds.size.height / 2.0;
                        let mut path = PathBuilder::stroke(px(thickness));
                        path.move_to(point(bounds.origin.x, mid_y));
                        path.line_to(point(bounds.origin.x + px(end_x), mid_y));
                        if let Ok(built) = path.build() {
                            window.paint_path(built, color);
                        }
                    },
                )
                .size_full(),
            )
        }

        ItemContent::TextBox {
            text,
            font_size,
            color,
            read_only,
            ..
        } => {
            let text_color = hex_color(color).unwrap_or(fallback);
            let (dx, dy) = item.content_offset();
            let inner = div()
                .w(px(content_w))
                .h(px(content_h))
                .ml(px(dx))
                .mt(px(dy))
                .overflow_hidden();

            match textbox_input {
                Some(input) if !*read_only => {
                    inner.child(Input::new(input).appearance(false).size_full())
                }
                _ => inner
                    .flex()
                    .flex_col()
                    .children(text.split('\n').map(|line| {
                        div()
                            .text_size(px(*font_size))
                            .text_color(text_color)
                            .child(if line.is_empty() {
                                " ".to_string() // Preserve empty lines
                            } else {
                                line.to_string()
                            })
                    })),
            }
        }
    }
}

/// Render the four corner handles of the selected item.
fn render_handles(item: &PlacedItem, color: Hsla) -> Vec<Div> {
    ResizeCorner::all()
        .into_iter()
        .map(|corner| {
            let (x, y, w, h) = corner.handle_rect(item.position, item.size);
            let cursor = match corner {
                ResizeCorner::LeftTop | ResizeCorner::RightBottom => {
                    CursorStyle::ResizeUpLeftDownRight
                }
                ResizeCorner::RightTop | ResizeCorner::LeftBottom => {
                    CursorStyle::ResizeUpRightDownLeft
                }
            };
            div()
                .absolute()
                .left(px(x))
                .top(px(y))
                .w(px(w))
                .h(px(h))
                .bg(color)
                .cursor(cursor)
        })
        .collect()
}

/// Render every placed item in z-order, plus handles for the selection.
pub fn render_items(
    items: &[PlacedItem],
    selected: Option<u64>,
    editing_id: Option<u64>,
    barcode_images: &HashMap<u64, Arc<Image>>,
    textbox_input: Option<&Entity<InputState>>,
    cx: &Context<LabelEditor>,
) -> Vec<Div> {
    profile_scope!("render_items");

    let fg = cx.theme().foreground;
    let selection_color = hex_color(SELECTION_COLOR).unwrap_or(cx.theme().primary);

    let mut result = Vec::with_capacity(items.len() + 4);
    let mut selected_item = None;

    for item in items {
        let is_selected = selected == Some(item.id);
        if is_selected {
            selected_item = Some(item);
        }
        let input = if editing_id == Some(item.id) {
            textbox_input
        } else {
            None
        };

        let (border_width, border_color) = if is_selected {
            (SELECTED_BORDER_WIDTH, selection_color)
        } else {
            (UNSELECTED_BORDER_WIDTH, transparent_black())
        };

        result.push(
            div()
                .absolute()
                .left(px(item.position.0))
                .top(px(item.position.1))
                .w(px(item.size.0))
                .h(px(item.size.1))
                .border(px(border_width))
                .border_color(border_color)
                .child(render_item_content(item, barcode_images, input, fg)),
        );
    }

    // Handles sit above every item so they stay grabbable under overlaps
    if let Some(item) = selected_item {
        result.extend(render_handles(item, selection_color));
    }

    result
}

/// Render the canvas area with its pointer and drop listeners.
pub fn render_canvas_area(editor: &LabelEditor, cx: &mut Context<LabelEditor>) -> Stateful<Div> {
    profile_scope!("render_canvas_area");

    let bg = cx.theme().background;
    let primary = cx.theme().primary;
    let editing_id = editor.textbox.session.as_ref().map(|s| s.item_id());

    let items = render_items(
        &editor.canvas.label.items,
        editor.canvas.selection.selected(),
        editing_id,
        &editor.canvas.barcode_images,
        editor.textbox.input.as_ref(),
        cx,
    );

    div()
        .id("label-canvas")
        .absolute()
        .left(editor.canvas.origin.x)
        .top(editor.canvas.origin.y)
        .right_0()
        .bottom_0()
        .bg(bg)
        .overflow_hidden()
        .on_mouse_down(MouseButton::Left, cx.listener(LabelEditor::handle_mouse_down))
        .on_mouse_move(cx.listener(LabelEditor::handle_mouse_move))
        .on_mouse_up(MouseButton::Left, cx.listener(LabelEditor::handle_mouse_up))
        .on_drag_move::<TilePayload>(cx.listener(LabelEditor::handle_tile_drag_move))
        .drag_over::<TilePayload>(move |style, _, _, _| style.bg(primary.opacity(0.05)))
        .on_drop(cx.listener(|this, payload: &TilePayload, window, cx| {
            this.handle_tile_drop(payload, window, cx);
        }))
        .children(items)
}
