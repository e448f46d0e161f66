//! Positioning engine.
//!
//! Computes the logo bounding box and text row offsets for a mockup,
//! honoring (in priority order) an explicit position override, the
//! front/back garment convention, or the industry layout policy.

use crate::industry::{Layout, LogoPosition, MockupType, Side};

/// Fixed margin from template edges, in pixels.
pub const MARGIN: u32 = 50;

/// Absolute caps: the logo box never exceeds these fractions of the
/// template, regardless of styling tier or back-side scale-up.
pub const MAX_WIDTH_FRAC: f32 = 0.40;
pub const MAX_HEIGHT_FRAC: f32 = 0.30;

/// Back prints read as larger centered designs.
const BACK_SCALE: f32 = 1.3;

/// Computed placement for one mockup. All values are integer pixels on the
/// working canvas. The logo box is square (`logo_size` per side); text rows
/// carry only a vertical offset because each overlay is centered on its own
/// rendered width by the compositor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub logo_top: u32,
    pub logo_left: u32,
    pub logo_size: u32,
    pub company_name_top: u32,
    pub tagline_top: u32,
}

fn cap(size: u32, width: u32, height: u32) -> u32 {
    let max_w = (width as f32 * MAX_WIDTH_FRAC).round() as u32;
    let max_h = (height as f32 * MAX_HEIGHT_FRAC).round() as u32;
    size.min(max_w).min(max_h)
}

/// Chest-logo convention: additionally capped to a quarter of the
/// template width.
fn chest_size(base: u32, width: u32, height: u32) -> u32 {
    cap(base, width, height).min((width as f32 * 0.25).round() as u32)
}

fn frac(v: u32, f: f32) -> u32 {
    (v as f32 * f).round() as u32
}

/// The `_layout` policy only matters through [`policy_box`]: every
/// `MockupType` carries a side, and side-specific conventions win
/// whenever no explicit position is given.
pub fn compute_layout(
    mockup_type: MockupType,
    _layout: Layout,
    width: u32,
    height: u32,
    base_logo_size: u32,
    position: Option<LogoPosition>,
) -> Placement {
    let side = mockup_type.side();

    // Text rows depend on the side only: back text sits lower to clear the
    // larger centered back print.
    let (company_name_top, tagline_top) = match side {
        Side::Front => (frac(height, 0.40), frac(height, 0.45)),
        Side::Back => (frac(height, 0.45), frac(height, 0.50)),
    };

    let (logo_top, logo_left, logo_size) = if let Some(position) = position {
        override_box(position, width, height, base_logo_size)
    } else {
        match side {
            Side::Front => {
                let size = chest_size(base_logo_size, width, height);
                (frac(height, 0.25), MARGIN, size)
            }
            Side::Back => {
                let front = chest_size(base_logo_size, width, height);
                let size = cap((front as f32 * BACK_SCALE).round() as u32, width, height);
                (frac(height, 0.25), (width - size) / 2, size)
            }
        }
    };

    Placement {
        logo_top,
        logo_left,
        logo_size,
        company_name_top,
        tagline_top,
    }
}

/// Explicit override placement: fully replaces the front/back defaults.
fn override_box(
    position: LogoPosition,
    width: u32,
    height: u32,
    base: u32,
) -> (u32, u32, u32) {
    // Corners keep the base size (no chest cap), bounded only by the
    // absolute caps.
    let size = cap(base, width, height);
    match position {
        LogoPosition::Center => (frac(height, 0.30), (width - size) / 2, size),
        LogoPosition::LeftChest => {
            let size = chest_size(base, width, height);
            (frac(height, 0.25), MARGIN, size)
        }
        LogoPosition::RightChest => {
            let size = chest_size(base, width, height);
            (frac(height, 0.25), width.saturating_sub(size + MARGIN), size)
        }
        LogoPosition::TopLeft => (MARGIN, MARGIN, size),
        LogoPosition::TopRight => (MARGIN, width.saturating_sub(size + MARGIN), size),
        LogoPosition::BottomLeft => (height.saturating_sub(size + MARGIN), MARGIN, size),
        LogoPosition::BottomRight => (
            height.saturating_sub(size + MARGIN),
            width.saturating_sub(size + MARGIN),
            size,
        ),
    }
}

/// Industry layout-policy placement, the fallback when neither an explicit
/// position nor a side-specific convention applies. The closed `MockupType`
/// enum always carries a side so the main path never reaches this, but the
/// policy box is part of the engine's contract and is used directly by
/// callers that lay out non-garment previews.
pub fn policy_box(layout: Layout, width: u32, height: u32, base: u32) -> (u32, u32, u32) {
    match layout {
        Layout::Centered => {
            let size = cap(base, width, height);
            (frac(height, 0.30), (width - size) / 2, size)
        }
        Layout::Corner => {
            let size = chest_size(base, width, height);
            (frac(height, 0.25), MARGIN, size)
        }
        Layout::FullWidth => {
            let size = cap(width.saturating_sub(2 * MARGIN), width, height);
            (frac(height, 0.20), MARGIN, size)
        }
    }
}

/// Left offset that centers an overlay of `overlay_width` on the canvas.
pub fn center_x(canvas_width: u32, overlay_width: u32) -> u32 {
    canvas_width.saturating_sub(overlay_width) / 2
}
