//! Logo quality normalization.
//!
//! Turns an uploaded or CRM-fetched logo into an RGBA bitmap that fits the
//! footprint the positioning engine asked for. Vector sources rasterize
//! directly at the target size; raster sources get a Lanczos resample,
//! optionally upgraded through the best-effort vectorization pass when the
//! source uses few enough colors.

use std::path::PathBuf;

use image::RgbaImage;
use thiserror::Error;
use tracing::debug;

use crate::{util, vectorize};

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to read logo {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode logo: {0}")]
    Decode(String),
}

/// Where the logo bytes come from. The CRM collaborator hands the core a
/// decoded byte buffer; uploads arrive as a stored file path.
#[derive(Clone, Debug)]
pub enum LogoSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl LogoSource {
    pub fn path(p: impl Into<PathBuf>) -> Self {
        LogoSource::Path(p.into())
    }

    /// Accepts `data:image/...;base64,` URIs and bare base64 payloads.
    pub fn from_data_uri(input: &str) -> Option<Self> {
        util::b64_decode(input).map(LogoSource::Bytes)
    }

    /// Stable identity for cache fingerprinting: the path for stored
    /// files, a length + hash tag for in-memory buffers.
    pub fn identity(&self) -> String {
        match self {
            LogoSource::Path(p) => p.to_string_lossy().into_owned(),
            LogoSource::Bytes(b) => {
                use std::hash::{Hash, Hasher};
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                b.hash(&mut hasher);
                format!("bytes:{}:{:016x}", b.len(), hasher.finish())
            }
        }
    }

    fn read(&self) -> Result<std::borrow::Cow<'_, [u8]>, LogoError> {
        match self {
            LogoSource::Path(p) => std::fs::read(p)
                .map(std::borrow::Cow::Owned)
                .map_err(|source| LogoError::Read {
                    path: p.clone(),
                    source,
                }),
            LogoSource::Bytes(b) => Ok(std::borrow::Cow::Borrowed(b)),
        }
    }

    /// Vector detection is a format-tag check only: `.svg` extension for
    /// files, the XML/SVG document tag for buffers.
    fn is_vector(&self, data: &[u8]) -> bool {
        if let LogoSource::Path(p) = self {
            if p.extension()
                .map(|e| e.eq_ignore_ascii_case("svg"))
                .unwrap_or(false)
            {
                return true;
            }
        }
        let head: &[u8] = &data[..data.len().min(256)];
        let head = String::from_utf8_lossy(head);
        let head = head.trim_start();
        head.starts_with("<svg") || head.starts_with("<?xml")
    }
}

/// Rasterize SVG bytes into a `target`-bounded box, preserving aspect
/// ratio and never scaling past the intrinsic size.
fn rasterize_svg(data: &[u8], target: u32) -> Result<RgbaImage, LogoError> {
    let opt = crate::text::svg_options();
    let tree = usvg::Tree::from_data(data, &opt).map_err(|e| LogoError::Decode(e.to_string()))?;

    let size = tree.size();
    let scale = (target as f32 / size.width())
        .min(target as f32 / size.height())
        .min(1.0);
    let w = ((size.width() * scale).round() as u32).max(1);
    let h = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| LogoError::Decode(format!("pixmap allocation failed ({w}x{h})")))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(crate::text::pixmap_to_image(&pixmap))
}

/// Fit inside `target x target`, no enlargement.
fn resample(img: &RgbaImage, target: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w <= target && h <= target {
        return img.clone();
    }
    image::DynamicImage::ImageRgba8(img.clone())
        .resize(target, target, image::imageops::FilterType::Lanczos3)
        .to_rgba8()
}

/// Normalize a logo source to fit a `target x target` bounding box.
///
/// `max_vector_colors` gates the cleanup pass: raster sources with at most
/// that many distinct colors go through the threshold trace, and any
/// failure there silently falls back to the plain resample.
pub fn normalize(
    source: &LogoSource,
    target: u32,
    max_vector_colors: usize,
) -> Result<RgbaImage, LogoError> {
    let _span = crate::perf_scope!("logo_normalize");
    let data = source.read()?;

    if source.is_vector(&data) {
        return rasterize_svg(&data, target);
    }

    let decoded = image::load_from_memory(&data)
        .map_err(|e| LogoError::Decode(e.to_string()))?
        .to_rgba8();

    let base = resample(&decoded, target);
    // Cleanup is best-effort by contract: its Result collapses into the
    // resampled fallback and never reaches the caller.
    Ok(vectorize::cleanup(&decoded, target, max_vector_colors).unwrap_or_else(|e| {
        debug!(error = %e, "vectorization skipped, keeping raster resample");
        base
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    // Black square centered on white, a typical flat two-color mark.
    fn flat_png(size: u32) -> Vec<u8> {
        let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
        for y in size / 4..(3 * size / 4) {
            for x in size / 4..(3 * size / 4) {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    // A busy gradient defeats the color gate so the plain resample path runs.
    fn busy_png(w: u32, h: u32) -> Vec<u8> {
        let mut img = RgbaImage::new(w, h);
        for (x, y, p) in img.enumerate_pixels_mut() {
            p.0 = [(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 255];
        }
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn raster_resamples_down_to_fit() {
        let src = LogoSource::Bytes(busy_png(400, 300));
        let out = normalize(&src, 200, 4).unwrap();
        assert_eq!(out.width(), 200);
        assert!(out.height() <= 200);
    }

    #[test]
    fn raster_is_never_enlarged() {
        let src = LogoSource::Bytes(busy_png(64, 48));
        let out = normalize(&src, 200, 4).unwrap();
        assert_eq!(out.dimensions(), (64, 48));
    }

    #[test]
    fn flat_color_logo_takes_cleanup_path() {
        let src = LogoSource::Bytes(flat_png(300));
        let out = normalize(&src, 150, 4).unwrap();
        assert_eq!(out.dimensions(), (150, 150));
        // The traced mark is dark at the center and transparent outside it.
        let c = out.get_pixel(75, 75);
        assert!(c.0[3] > 0 && c.0[0] < 64);
        assert_eq!(out.get_pixel(2, 2).0[3], 0);
    }

    #[test]
    fn undecodable_bytes_fail_loudly() {
        let src = LogoSource::Bytes(b"definitely not an image".to_vec());
        assert!(matches!(normalize(&src, 100, 4), Err(LogoError::Decode(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let src = LogoSource::path("/nonexistent/logo.png");
        match normalize(&src, 100, 4) {
            Err(LogoError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/logo.png"))
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn svg_rasterizes_within_bounds() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="200"><rect width="400" height="200" fill="#3B82F6"/></svg>"##;
        let src = LogoSource::Bytes(svg.to_vec());
        let out = normalize(&src, 100, 4).unwrap();
        assert_eq!(out.dimensions(), (100, 50));
        assert_eq!(out.get_pixel(50, 25).0, [59, 130, 246, 255]);
    }

    #[test]
    fn small_svg_keeps_intrinsic_size() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="40" height="20" fill="#000"/></svg>"##;
        let src = LogoSource::Bytes(svg.to_vec());
        let out = normalize(&src, 200, 4).unwrap();
        assert_eq!(out.dimensions(), (40, 20));
    }

    #[test]
    fn byte_identity_is_stable_and_content_addressed() {
        let a = LogoSource::Bytes(vec![1, 2, 3]);
        let b = LogoSource::Bytes(vec![1, 2, 3]);
        let c = LogoSource::Bytes(vec![4, 5, 6]);
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
        assert_eq!(LogoSource::path("/tmp/x.png").identity(), "/tmp/x.png");
    }

    #[test]
    fn data_uri_intake() {
        let src = LogoSource::from_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        match src {
            LogoSource::Bytes(b) => assert_eq!(b, b"hello"),
            _ => panic!("expected bytes"),
        }
    }
}
