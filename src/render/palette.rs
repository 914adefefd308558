//! Tile palette rendering - the round menu button and the slide-out tile list

use crate::app::LabelEditor;
use crate::constants::{PALETTE_OPEN_WIDTH, TILE_HEIGHT};
use crate::palette::{Tile, TilePayload, tiles};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

/// Preview that follows the pointer while a tile is dragged.
pub struct TileGhost {
    tile: Tile,
}

impl Render for TileGhost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px(px(12.0))
            .py(px(6.0))
            .rounded(px(6.0))
            .bg(cx.theme().primary.opacity(0.85))
            .text_color(cx.theme().primary_foreground)
            .text_sm()
            .child(format!("{} {}", self.tile.glyph(), self.tile.label()))
    }
}

/// Render a single draggable tile
fn render_tile(tile: Tile, cx: &App) -> Stateful<Div> {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let hover_bg = cx.theme().muted;
    let border = cx.theme().border;

    div()
        .id(ElementId::Name(format!("tile-{}", tile.element_type.as_tag()).into()))
        .h(px(TILE_HEIGHT))
        .w_full()
        .px(px(12.0))
        .flex()
        .items_center()
        .gap(px(12.0))
        .rounded(px(8.0))
        .border_1()
        .border_color(border)
        .hover(move |s| s.bg(hover_bg))
        .cursor_grab()
        .on_drag(tile.payload(), move |_payload: &TilePayload, _offset, _window, cx| {
            cx.new(|_| TileGhost { tile })
        })
        .child(
            div()
                .w(px(28.0))
                .text_size(px(20.0))
                .text_color(muted_fg)
                .child(tile.glyph()),
        )
        .child(
            div()
                .text_size(px(14.0))
                .font_weight(FontWeight::MEDIUM)
                .text_color(fg)
                .child(tile.label()),
        )
}

/// Render the round menu button that opens the palette.
pub fn render_menu_button(width: f32, cx: &mut Context<LabelEditor>) -> Stateful<Div> {
    let bg = cx.theme().primary;
    let fg = cx.theme().primary_foreground;

    div()
        .id("palette-menu-button")
        .w(px(width))
        .h(px(width))
        .rounded_full()
        .overflow_hidden()
        .bg(bg)
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
        .hover(|s| s.opacity(0.85))
        .on_click(cx.listener(|this, _, _, cx| {
            this.toggle_palette(cx);
        }))
        .when(width > 20.0, |d| {
            d.child(div().text_size(px(18.0)).text_color(fg).child("☰"))
        })
}

/// Render the palette slider at its current animated width.
pub fn render_palette(width: f32, cx: &mut Context<LabelEditor>) -> Div {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let muted_fg = cx.theme().muted_foreground;
    let hover_bg = cx.theme().muted;

    div()
        .w(px(width))
        .h_full()
        .overflow_hidden()
        .bg(bg)
        .border_r_1()
        .border_color(border)
        .child(
            div()
                .w(px(PALETTE_OPEN_WIDTH))
                .flex()
                .flex_col()
                .p(px(12.0))
                .gap(px(8.0))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_xs()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(muted_fg)
                                .child("ELEMENTS"),
                        )
                        .child(
                            div()
                                .id("palette-close")
                                .px(px(6.0))
                                .rounded(px(4.0))
                                .cursor_pointer()
                                .text_color(muted_fg)
                                .hover(move |s| s.bg(hover_bg))
                                .on_click(cx.listener(|this, _, _, cx| {
                                    this.toggle_palette(cx);
                                }))
                                .child("×"),
                        ),
                )
                .children(tiles().into_iter().map(|tile| render_tile(tile, cx))),
        )
}
