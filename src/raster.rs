//! Rasterizing a label for print submission using tiny-skia.
//!
//! The output covers the label's extent from the canvas origin on a white
//! background. Shapes are drawn with their stroke and fill, bitmaps
//! (barcodes and images) are stretched to their item, and text boxes are
//! drawn line by line with the system label font, clipped to their content.

use crate::barcode::encode_png;
use crate::error::{LabelError, LabelResult};
use crate::fonts::label_font;
use crate::label::Label;
use crate::profile_scope;
use crate::types::{ItemContent, PlacedItem, parse_hex_rgb};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use rusttype::{Scale, point as rt_point};
use tiny_skia::{
    FillRule, IntSize, LineCap, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

fn paint_for(hex: &str) -> Paint<'static> {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((0, 0, 0));
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

/// Rect of the content centred inside its item
fn content_rect(item: &PlacedItem) -> Option<Rect> {
    let (cw, ch) = item.content_size;
    let (dx, dy) = item.content_offset();
    Rect::from_xywh(item.position.0 + dx, item.position.1 + dy, cw, ch)
}

fn fill_and_stroke(pixmap: &mut Pixmap, path: &Path, fill: &str, stroke: &str, width: f32) {
    pixmap.fill_path(
        path,
        &paint_for(fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    let style = Stroke {
        width,
        ..Default::default()
    };
    pixmap.stroke_path(path, &paint_for(stroke), &style, Transform::identity(), None);
}

fn draw_line(pixmap: &mut Pixmap, item: &PlacedItem, end_x: f32, stroke: &str, width: f32) {
    let y = item.position.1 + item.size.1 / 2.0;
    let mut pb = PathBuilder::new();
    pb.move_to(item.position.0, y);
    pb.line_to(item.position.0 + end_x, y);
    let Some(path) = pb.finish() else {
        return;
    };

    let style = Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint_for(stroke), &style, Transform::identity(), None);
}

/// Stretch a bitmap over the item's bounds.
fn draw_bitmap(pixmap: &mut Pixmap, item: &PlacedItem, image: &RgbaImage) {
    let w = item.size.0.round().max(1.0) as u32;
    let h = item.size.1.round().max(1.0) as u32;
    let mut scaled = imageops::resize(image, w, h, FilterType::Triangle);

    // tiny-skia works in premultiplied alpha
    for pixel in scaled.pixels_mut() {
        let a = u16::from(pixel[3]);
        for c in 0..3 {
            pixel[c] = ((u16::from(pixel[c]) * a + 127) / 255) as u8;
        }
    }

    let Some(size) = IntSize::from_wh(w, h) else {
        return;
    };
    let Some(src) = Pixmap::from_vec(scaled.into_raw(), size) else {
        return;
    };
    pixmap.draw_pixmap(
        item.position.0.round() as i32,
        item.position.1.round() as i32,
        src.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Draw each `\n`-separated line of `text` from the top-left of the content
/// rect, blending glyph coverage over what is already there.
fn draw_text(pixmap: &mut Pixmap, item: &PlacedItem, text: &str, font_size: f32, color: &str) {
    let Some(font) = label_font() else {
        return;
    };
    let Some(rect) = content_rect(item) else {
        return;
    };
    let (r, g, b) = parse_hex_rgb(color).unwrap_or((0, 0, 0));

    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let clip_x = (rect.left().floor() as i32).max(0)..(rect.right().ceil() as i32).min(width);
    let clip_y = (rect.top().floor() as i32).max(0)..(rect.bottom().ceil() as i32).min(height);

    let scale = Scale::uniform(font_size);
    let v_metrics = font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    let data = pixmap.data_mut();
    for (row, line) in text.split('\n').enumerate() {
        let baseline = rect.top() + v_metrics.ascent + row as f32 * line_height;
        let start = rt_point(rect.left(), baseline);

        for glyph in font.layout(line.trim_end_matches('\r'), scale, start) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if !clip_x.contains(&px) || !clip_y.contains(&py) {
                    return;
                }
                let a = coverage.clamp(0.0, 1.0);
                let idx = ((py * width + px) * 4) as usize;
                // Opaque destination, so straight blending stays premultiplied
                for (c, src) in [r, g, b].into_iter().enumerate() {
                    let dst = f32::from(data[idx + c]);
                    data[idx + c] = (f32::from(src) * a + dst * (1.0 - a)).round() as u8;
                }
            });
        }
    }
}

fn draw_item(pixmap: &mut Pixmap, item: &PlacedItem) {
    match &item.content {
        ItemContent::Rectangle {
            stroke,
            fill,
            stroke_width,
        } => {
            if let Some(rect) = content_rect(item) {
                let path = PathBuilder::from_rect(rect);
                fill_and_stroke(pixmap, &path, fill, stroke, *stroke_width);
            }
        }
        ItemContent::Ellipse {
            stroke,
            fill,
            stroke_width,
        } => {
            if let Some(path) = content_rect(item).and_then(PathBuilder::from_oval) {
                fill_and_stroke(pixmap, &path, fill, stroke, *stroke_width);
            }
        }
        ItemContent::Line {
            end_x,
            stroke,
            stroke_width,
        } => draw_line(pixmap, item, *end_x, stroke, *stroke_width),
        ItemContent::Barcode { image, .. } | ItemContent::Image { image, .. } => {
            draw_bitmap(pixmap, item, image)
        }
        ItemContent::TextBox {
            text,
            font_size,
            color,
            ..
        } => draw_text(pixmap, item, text, *font_size, color),
    }
}

/// Draw every item in z-order onto a white image covering the label.
pub fn render_label(label: &Label) -> LabelResult<RgbaImage> {
    profile_scope!("render_label");

    let (w, h) = label.extent();
    let width = (w.ceil() as u32).max(1);
    let height = (h.ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| LabelError::Other(format!("cannot allocate {width}x{height} raster")))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    for item in &label.items {
        draw_item(&mut pixmap, item);
    }

    // The background is opaque, so premultiplied data equals straight RGBA
    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| LabelError::Other("raster size mismatch".to_string()))
}

/// Render a label and PNG-encode it.
pub fn render_label_png(label: &Label) -> LabelResult<Vec<u8>> {
    let image = render_label(label)?;
    Ok(encode_png(&image)?)
}
