use super::constants::{
    MAGNETIC_STRENGTH, RING_EASE, SCROLL_HEADER_GAP_PX, TILT_LIFT_PX, TILT_MAX_DEG,
    TILT_PERSPECTIVE_PX,
};
use glam::Vec2;

/// Move `current` a fixed fraction of the way toward `target`.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2) -> Vec2 {
    current + (target - current) * RING_EASE
}

/// Translation applied to a magnetic element for a pointer at `pointer`.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect_min: Vec2, rect_size: Vec2) -> Vec2 {
    let center = rect_min + rect_size * 0.5;
    (pointer - center) * MAGNETIC_STRENGTH
}

#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

pub const TRANSLATE_RESET: &str = "translate(0,0)";

/// Card rotation in degrees as `(rotate_x, rotate_y)`.
///
/// Pointer at the card centre gives no rotation; the edges give
/// `TILT_MAX_DEG`. Returns `None` for a zero-sized card.
#[inline]
pub fn tilt_angles(pointer: Vec2, rect_min: Vec2, rect_size: Vec2) -> Option<(f32, f32)> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let frac = (pointer - rect_min) / rect_size;
    let rx = (frac.y - 0.5) * -2.0 * TILT_MAX_DEG;
    let ry = (frac.x - 0.5) * 2.0 * TILT_MAX_DEG;
    Some((rx, ry))
}

pub fn tilt_css(rx: f32, ry: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({}px)",
        TILT_PERSPECTIVE_PX, rx, ry, TILT_LIFT_PX
    )
}

pub fn tilt_reset_css() -> String {
    format!(
        "perspective({}px) rotateX(0deg) rotateY(0deg) translateZ(0)",
        TILT_PERSPECTIVE_PX
    )
}

/// Only in-page fragments with an actual target (`"#"` alone is a no-op link).
#[inline]
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#') && href.len() > 1
}

/// Result of looking up an in-page anchor's target element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorTarget {
    /// Element found; its client-rect top.
    Found { top: f64 },
    Missing,
    /// The fragment is not a valid CSS selector.
    InvalidSelector,
}

/// What to do with an in-page anchor click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPlan {
    pub scroll_to: Option<f64>,
    pub push_fragment: bool,
}

/// A missing target still updates the URL; an unparsable fragment leaves it alone.
pub fn plan_anchor_scroll(target: AnchorTarget, scroll_y: f64, header_height: f64) -> AnchorPlan {
    match target {
        AnchorTarget::Found { top } => AnchorPlan {
            scroll_to: Some(anchor_scroll_top(top, scroll_y, header_height)),
            push_fragment: true,
        },
        AnchorTarget::Missing => AnchorPlan {
            scroll_to: None,
            push_fragment: true,
        },
        AnchorTarget::InvalidSelector => AnchorPlan {
            scroll_to: None,
            push_fragment: false,
        },
    }
}

/// Document scroll offset that puts a target just below the fixed header.
#[inline]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height - SCROLL_HEADER_GAP_PX
}
