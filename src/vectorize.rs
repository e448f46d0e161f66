//! Best-effort logo vectorization.
//!
//! Flat-color logos (at most a handful of distinct colors) survive a
//! threshold trace well: binarize on luminance, emit pixel runs as SVG
//! rects and rasterize back at the target size for clean edges. Anything
//! that trips up this path returns an error and the caller falls back to
//! the plain raster resample; this module never decides policy.

use image::RgbaImage;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Binarization threshold on 0-255 luminance.
const LUMA_THRESHOLD: u32 = 128;

#[derive(Debug, Error)]
pub enum VectorizeError {
    #[error("too many colors for vectorization: {count} > {limit}")]
    TooManyColors { count: usize, limit: usize },
    #[error("no traceable foreground")]
    EmptyTrace,
    #[error("svg parse: {0}")]
    SvgParse(String),
    #[error("pixmap allocation failed")]
    PixmapAlloc,
}

/// Count distinct RGB triples among non-transparent pixels.
pub fn count_colors(img: &RgbaImage) -> usize {
    let mut colors: HashSet<[u8; 3]> = HashSet::new();
    for p in img.pixels() {
        if p.0[3] > 0 {
            colors.insert([p.0[0], p.0[1], p.0[2]]);
        }
    }
    colors.len()
}

fn luma(p: &image::Rgba<u8>) -> u32 {
    // Integer Rec.601 approximation.
    (299 * p.0[0] as u32 + 587 * p.0[1] as u32 + 114 * p.0[2] as u32) / 1000
}

/// Trace a low-color image into an SVG document: dark (sub-threshold)
/// opaque pixels become horizontal-run rects filled with the average
/// foreground color.
pub fn trace_to_svg(img: &RgbaImage) -> Result<String, VectorizeError> {
    let (w, h) = img.dimensions();
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for p in img.pixels() {
        if p.0[3] > 0 && luma(p) < LUMA_THRESHOLD {
            sum[0] += p.0[0] as u64;
            sum[1] += p.0[1] as u64;
            sum[2] += p.0[2] as u64;
            count += 1;
        }
    }
    if count == 0 {
        return Err(VectorizeError::EmptyTrace);
    }
    let fill = format!(
        "rgb({},{},{})",
        sum[0] / count,
        sum[1] / count,
        sum[2] / count
    );

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" shape-rendering="crispEdges">"#
    ));
    for y in 0..h {
        let mut run_start: Option<u32> = None;
        for x in 0..=w {
            let fg = x < w && {
                let p = img.get_pixel(x, y);
                p.0[3] > 0 && luma(p) < LUMA_THRESHOLD
            };
            match (fg, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    svg.push_str(&format!(
                        r#"<rect x="{start}" y="{y}" width="{}" height="1" fill="{fill}"/>"#,
                        x - start
                    ));
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    svg.push_str("</svg>");
    Ok(svg)
}

/// Gate on color count, trace, then rasterize at `target` (fit inside, no
/// enlargement beyond the traced size).
pub fn cleanup(img: &RgbaImage, target: u32, max_colors: usize) -> Result<RgbaImage, VectorizeError> {
    let count = count_colors(img);
    if count > max_colors {
        return Err(VectorizeError::TooManyColors {
            count,
            limit: max_colors,
        });
    }
    debug!(colors = count, "vectorizing low-color logo");

    let svg = trace_to_svg(img)?;
    let opt = crate::text::svg_options();
    let tree =
        usvg::Tree::from_str(&svg, &opt).map_err(|e| VectorizeError::SvgParse(e.to_string()))?;

    let (w, h) = img.dimensions();
    let scale = (target as f32 / w as f32)
        .min(target as f32 / h as f32)
        .min(1.0);
    let out_w = ((w as f32 * scale).round() as u32).max(1);
    let out_h = ((h as f32 * scale).round() as u32).max(1);

    let mut pixmap =
        tiny_skia::Pixmap::new(out_w, out_h).ok_or(VectorizeError::PixmapAlloc)?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(crate::text::pixmap_to_image(&pixmap))
}
