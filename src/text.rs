//! Text rendering.
//!
//! Renders a single line of text to a transparent RGBA bitmap by building
//! a small SVG document and rasterizing it. Font selection goes through a
//! process-wide system font database, loaded once on first use (font
//! registration is idempotent, so concurrent first calls are safe).
//!
//! The canvas width is estimated from the character count with a fixed
//! per-character factor rather than real glyph metrics; callers center the
//! returned bitmap on its full width, which keeps the centering math
//! consistent with the approximation.

use std::sync::Arc;

use image::RgbaImage;
use once_cell::sync::Lazy;
use thiserror::Error;
use usvg::fontdb;

use crate::industry::TextStyle;

/// Approximate glyph advance as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Vertical padding factor: canvas height relative to the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.4;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("svg parse: {0}")]
    SvgParse(String),
    #[error("pixmap allocation failed ({width}x{height})")]
    PixmapAlloc { width: u32, height: u32 },
}

static FONT_DB: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
});

/// SVG parsing options backed by the shared font database.
pub(crate) fn svg_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    opt.fontdb = Arc::clone(&FONT_DB);
    opt
}

/// Convert a premultiplied pixmap into a straight-alpha RGBA image.
pub(crate) fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut out = RgbaImage::new(pixmap.width(), pixmap.height());
    for (px, dst) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        let c = px.demultiply();
        dst.0 = [c.red(), c.green(), c.blue(), c.alpha()];
    }
    out
}

fn font_attrs(style: TextStyle) -> (&'static str, u16) {
    match style {
        TextStyle::Bold => ("sans-serif", 700),
        TextStyle::Elegant => ("serif", 400),
        TextStyle::Casual => ("sans-serif", 400),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one line of text on a fully transparent canvas. Only glyph
/// pixels are opaque. No wrapping: newlines are not interpreted.
pub fn render_text(
    text: &str,
    font_size_px: f32,
    color: image::Rgba<u8>,
    style: TextStyle,
) -> Result<RgbaImage, TextError> {
    let chars = text.chars().count().max(1);
    let width = (chars as f32 * font_size_px * CHAR_WIDTH_FACTOR).ceil() as u32;
    let height = (font_size_px * LINE_HEIGHT_FACTOR).ceil() as u32;
    let (family, weight) = font_attrs(style);

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><text x="50%" y="50%" text-anchor="middle" dominant-baseline="central" font-family="{family}" font-weight="{weight}" font-size="{font_size_px}" fill="rgb({r},{g},{b})">{body}</text></svg>"#,
        r = color.0[0],
        g = color.0[1],
        b = color.0[2],
        body = escape_xml(text),
    );

    let opt = svg_options();
    let tree =
        usvg::Tree::from_str(&svg, &opt).map_err(|e| TextError::SvgParse(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(TextError::PixmapAlloc { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(pixmap_to_image(&pixmap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_tracks_character_count() {
        let a = render_text("Acme", 40.0, crate::util::DEFAULT_COLOR, TextStyle::Bold).unwrap();
        let b = render_text("Acme Corporation", 40.0, crate::util::DEFAULT_COLOR, TextStyle::Bold)
            .unwrap();
        assert_eq!(a.width(), (4.0 * 40.0 * CHAR_WIDTH_FACTOR).ceil() as u32);
        assert_eq!(a.height(), 56);
        assert!(b.width() > a.width());
        assert_eq!(a.height(), b.height());
    }

    #[test]
    fn background_stays_transparent() {
        let img = render_text("Hi", 32.0, crate::util::DEFAULT_COLOR, TextStyle::Casual).unwrap();
        // Corners sit well outside any glyph.
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(img.width() - 1, img.height() - 1).0[3], 0);
    }

    #[test]
    fn markup_characters_are_escaped() {
        // Must not produce broken SVG.
        let img =
            render_text("<Tom & Jerry>", 24.0, crate::util::DEFAULT_COLOR, TextStyle::Elegant)
                .unwrap();
        assert!(img.width() > 0);
    }

    #[test]
    fn empty_text_still_renders_a_canvas() {
        let img = render_text("", 24.0, crate::util::DEFAULT_COLOR, TextStyle::Bold).unwrap();
        assert_eq!(img.width(), (24.0 * CHAR_WIDTH_FACTOR).ceil() as u32);
    }
}
