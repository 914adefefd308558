//! System font lookup for the print raster.
//!
//! The label font is resolved once through fontdb and kept for the life of
//! the process. Text boxes print in a regular sans-serif face, falling back
//! to the first installed face.

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rusttype::Font;
use std::fs;
use std::sync::OnceLock;

const PREFERRED_FAMILIES: [Family<'static>; 4] = [
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::Name("Arial"),
    Family::SansSerif,
];

fn load_face(db: &Database, id: fontdb::ID) -> Option<Font<'static>> {
    let face = db.face(id)?;
    let bytes = match &face.source {
        Source::File(path) | Source::SharedFile(path, _) => fs::read(path).ok()?,
        Source::Binary(data) => data.as_ref().as_ref().to_vec(),
    };
    Font::try_from_vec_and_index(bytes, face.index)
}

fn load_label_font() -> Option<Font<'static>> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &PREFERRED_FAMILIES,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let font = db
        .query(&query)
        .and_then(|id| load_face(&db, id))
        .or_else(|| db.faces().find_map(|face| load_face(&db, face.id)));

    match &font {
        Some(_) => tracing::debug!(faces = db.len(), "label font loaded"),
        None => tracing::warn!("no usable system font, text boxes will not print"),
    }
    font
}

/// Font used to rasterize text boxes, if any system font could be loaded.
pub fn label_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(load_label_font).as_ref()
}
