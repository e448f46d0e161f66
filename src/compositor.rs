//! Mockup compositing.
//!
//! Loads the garment template for a mockup type, overlays the normalized
//! logo and text layers at computed positions and persists a lossless PNG.
//! The garment itself is left untouched: no tinting, the template art is
//! the single source of truth for how the fabric looks.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use image::{GenericImageView, ImageEncoder, RgbaImage};
use thiserror::Error;
use tracing::{debug, info};

use crate::industry::{MockupType, Side};
use crate::layout;
use crate::logo::{LogoError, LogoSource};
use crate::text::{self, TextError};
use crate::util;

/// Canonical working canvas; templates are fit inside this box without
/// upscaling.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1000;

/// Longest company name / tagline rendered before ellipsis truncation.
const MAX_TEXT_CHARS: usize = 40;

const COMPANY_NAME_PX: f32 = 40.0;
const TAGLINE_PX: f32 = 24.0;

#[derive(Debug, Error)]
pub enum ComposeError {
    /// Missing template art is a deployment defect, not bad input; it is
    /// still reported per mockup type so sibling types keep generating.
    #[error("template not found for {mockup_type}: {path}")]
    TemplateNotFound { mockup_type: MockupType, path: PathBuf },
    #[error("failed to decode template {path}: {message}")]
    TemplateDecode { path: PathBuf, message: String },
    #[error(transparent)]
    Logo(#[from] LogoError),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("failed to encode mockup: {0}")]
    Encode(String),
    #[error("failed to persist mockup {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Inputs for one compositing run, already resolved by the orchestrator.
pub struct ComposeJob<'a> {
    pub logo: &'a LogoSource,
    pub mockup_type: MockupType,
    pub company_name: &'a str,
    pub tagline: Option<&'a str>,
    pub profile: &'static crate::industry::IndustryProfile,
    pub position: Option<crate::industry::LogoPosition>,
}

pub struct Compositor<'a> {
    templates_dir: &'a Path,
    output_dir: &'a Path,
    max_vector_colors: usize,
}

/// Monotonic suffix so two mockups composed in the same millisecond still
/// get distinct filenames.
static SEQ: AtomicU64 = AtomicU64::new(0);

/// Template candidates for a mockup type, most specific first. Dedicated
/// art for hoodies/sweatshirts/polos/tank-tops has not been sourced yet,
/// so every garment kind falls back to the t-shirt asset for its side.
pub fn template_candidates(mockup_type: MockupType) -> [String; 2] {
    let side = match mockup_type.side() {
        Side::Front => "front",
        Side::Back => "back",
    };
    [
        format!("{}-{side}.png", mockup_type.kind()),
        format!("tshirt-{side}.png"),
    ]
}

impl<'a> Compositor<'a> {
    pub fn new(templates_dir: &'a Path, output_dir: &'a Path, max_vector_colors: usize) -> Self {
        Self {
            templates_dir,
            output_dir,
            max_vector_colors,
        }
    }

    fn resolve_template(&self, mockup_type: MockupType) -> Result<PathBuf, ComposeError> {
        let candidates = template_candidates(mockup_type);
        for name in &candidates {
            let path = self.templates_dir.join(name);
            if path.exists() {
                return Ok(path);
            }
        }
        Err(ComposeError::TemplateNotFound {
            mockup_type,
            path: self.templates_dir.join(&candidates[0]),
        })
    }

    /// Compose one mockup and return the persisted output path.
    pub fn compose(&self, job: &ComposeJob<'_>) -> Result<PathBuf, ComposeError> {
        let _span = crate::perf_scope!("compose");

        let template_path = self.resolve_template(job.mockup_type)?;
        let template =
            image::open(&template_path).map_err(|e| ComposeError::TemplateDecode {
                path: template_path.clone(),
                message: e.to_string(),
            })?;

        // Fit the template into the canonical canvas, preserving aspect,
        // never upscaling.
        let (tw, th) = template.dimensions();
        let template = if tw > CANVAS_WIDTH || th > CANVAS_HEIGHT {
            template.resize(
                CANVAS_WIDTH,
                CANVAS_HEIGHT,
                image::imageops::FilterType::Lanczos3,
            )
        } else {
            template
        };
        let mut out = template.to_rgba8();
        let (width, height) = out.dimensions();

        let base = util::logo_px(job.profile.styling.logo_size);
        let placement = layout::compute_layout(
            job.mockup_type,
            job.profile.styling.layout,
            width,
            height,
            base,
            job.position,
        );

        let logo = crate::logo::normalize(job.logo, placement.logo_size, self.max_vector_colors)?;
        // Center the actual bitmap within its computed square box; a
        // non-square logo fits inside without drifting off-center.
        let lx = placement.logo_left + (placement.logo_size.saturating_sub(logo.width())) / 2;
        let ly = placement.logo_top + (placement.logo_size.saturating_sub(logo.height())) / 2;
        overlay_alpha(&mut out, &logo, lx, ly);

        let text_color = util::hex_to_rgb(
            job.profile.secondary_colors.first().copied().unwrap_or(""),
        );
        let style = job.profile.styling.text_style;

        if !job.company_name.trim().is_empty() {
            let name = util::truncate_with_ellipsis(
                job.company_name.trim().to_string(),
                MAX_TEXT_CHARS,
            );
            let layer = text::render_text(&name, COMPANY_NAME_PX, text_color, style)?;
            let x = layout::center_x(width, layer.width());
            overlay_alpha(&mut out, &layer, x, placement.company_name_top);
        }

        if let Some(tagline) = job.tagline.map(str::trim).filter(|t| !t.is_empty()) {
            let tagline =
                util::truncate_with_ellipsis(tagline.to_string(), MAX_TEXT_CHARS);
            let layer = text::render_text(&tagline, TAGLINE_PX, text_color, style)?;
            let x = layout::center_x(width, layer.width());
            overlay_alpha(&mut out, &layer, x, placement.tagline_top);
        }

        debug!(
            mockup_type = %job.mockup_type,
            logo_size = placement.logo_size,
            canvas = format!("{width}x{height}"),
            "composited mockup"
        );

        self.persist(job.mockup_type, &out)
    }

    fn persist(&self, mockup_type: MockupType, out: &RgbaImage) -> Result<PathBuf, ComposeError> {
        let mut buf = Vec::new();
        let enc = image::codecs::png::PngEncoder::new(&mut buf);
        enc.write_image(
            out,
            out.width(),
            out.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ComposeError::Encode(e.to_string()))?;

        let token = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let path = self
            .output_dir
            .join(format!("mockup-{}-{token}.png", mockup_type.as_str()));

        std::fs::create_dir_all(self.output_dir).map_err(|source| ComposeError::Persist {
            path: self.output_dir.to_path_buf(),
            source,
        })?;
        std::fs::write(&path, &buf).map_err(|source| ComposeError::Persist {
            path: path.clone(),
            source,
        })?;

        info!(mockup_type = %mockup_type, path = %path.display(), "mockup written");
        Ok(path)
    }
}

/// Src-over alpha blend of `over` onto `base` at (x, y); out-of-bounds
/// pixels are clipped.
fn overlay_alpha(base: &mut RgbaImage, over: &RgbaImage, x: u32, y: u32) {
    for oy in 0..over.height() {
        for ox in 0..over.width() {
            let p = over.get_pixel(ox, oy);
            let a = p.0[3] as f32 / 255.0;
            if a <= 0.0 {
                continue;
            }
            let bx = x + ox;
            let by = y + oy;
            if bx >= base.width() || by >= base.height() {
                continue;
            }
            let dst = base.get_pixel_mut(bx, by);
            let inv = 1.0 - a;
            dst.0[0] = (p.0[0] as f32 * a + dst.0[0] as f32 * inv) as u8;
            dst.0[1] = (p.0[1] as f32 * a + dst.0[1] as f32 * inv) as u8;
            dst.0[2] = (p.0[2] as f32 * a + dst.0[2] as f32 * inv) as u8;
            dst.0[3] = 255;
        }
    }
}
