// Host-side tests for the cursor, magnetic, tilt and scroll helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interact {
        include!("../src/core/interact.rs");
    }
}

use crate::core::constants::*;
use crate::core::interact::*;
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn ring_moves_fifteen_percent_per_frame() {
    let next = ease_toward(Vec2::ZERO, Vec2::new(100.0, -200.0));
    assert!(approx(next.x, 15.0));
    assert!(approx(next.y, -30.0));
}

#[test]
fn ring_converges_on_a_still_pointer() {
    let target = Vec2::new(640.0, 360.0);
    let mut ring = Vec2::ZERO;
    let mut prev_gap = ring.distance(target);
    for _ in 0..40 {
        ring = ease_toward(ring, target);
        let gap = ring.distance(target);
        assert!(gap < prev_gap);
        prev_gap = gap;
    }
    // 0.85^40 of the initial distance
    assert!(prev_gap < 2.0);
}

#[test]
fn ring_at_pointer_stays_put() {
    let p = Vec2::new(12.0, 34.0);
    assert_eq!(ease_toward(p, p), p);
}

#[test]
fn magnetic_offset_is_quarter_of_distance_from_centre() {
    let min = Vec2::new(100.0, 50.0);
    let size = Vec2::new(200.0, 40.0); // centre (200, 70)
    let off = magnetic_offset(Vec2::new(240.0, 50.0), min, size);
    assert!(approx(off.x, 10.0));
    assert!(approx(off.y, -5.0));
    assert_eq!(magnetic_offset(Vec2::new(200.0, 70.0), min, size), Vec2::ZERO);
}

#[test]
fn translate_css_formats_pixels() {
    assert_eq!(translate_css(Vec2::new(2.5, -1.0)), "translate(2.5px, -1px)");
    assert_eq!(TRANSLATE_RESET, "translate(0,0)");
}

#[test]
fn tilt_is_flat_at_centre_and_maximal_at_edges() {
    let min = Vec2::new(0.0, 0.0);
    let size = Vec2::new(300.0, 200.0);
    let (rx, ry) = tilt_angles(Vec2::new(150.0, 100.0), min, size).unwrap();
    assert!(approx(rx, 0.0) && approx(ry, 0.0));

    // top-left corner: tilt back and to the left
    let (rx, ry) = tilt_angles(Vec2::new(0.0, 0.0), min, size).unwrap();
    assert!(approx(rx, TILT_MAX_DEG));
    assert!(approx(ry, -TILT_MAX_DEG));

    // bottom-right corner
    let (rx, ry) = tilt_angles(Vec2::new(300.0, 200.0), min, size).unwrap();
    assert!(approx(rx, -TILT_MAX_DEG));
    assert!(approx(ry, TILT_MAX_DEG));
}

#[test]
fn tilt_respects_card_offset() {
    let min = Vec2::new(400.0, 300.0);
    let size = Vec2::new(100.0, 100.0);
    let (rx, ry) = tilt_angles(Vec2::new(475.0, 350.0), min, size).unwrap();
    assert!(approx(rx, 0.0));
    assert!(approx(ry, 5.0));
}

#[test]
fn zero_sized_card_does_not_tilt() {
    assert!(tilt_angles(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(0.0, 10.0)).is_none());
    assert!(tilt_angles(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(10.0, 0.0)).is_none());
}

#[test]
fn tilt_css_matches_transform_syntax() {
    assert_eq!(
        tilt_css(5.0, -2.5),
        "perspective(900px) rotateX(5deg) rotateY(-2.5deg) translateZ(10px)"
    );
    assert_eq!(
        tilt_reset_css(),
        "perspective(900px) rotateX(0deg) rotateY(0deg) translateZ(0)"
    );
}

#[test]
fn only_real_fragments_are_in_page_anchors() {
    assert!(is_in_page_anchor("#contact"));
    assert!(is_in_page_anchor("#a"));
    assert!(!is_in_page_anchor("#"));
    assert!(!is_in_page_anchor(""));
    assert!(!is_in_page_anchor("/about#team"));
    assert!(!is_in_page_anchor("https://example.com/#x"));
}

#[test]
fn anchor_scroll_clears_header_with_gap() {
    assert_eq!(anchor_scroll_top(500.0, 1000.0, 72.0), 1420.0);
    assert_eq!(anchor_scroll_top(0.0, 0.0, 0.0), -SCROLL_HEADER_GAP_PX);
    // target above the viewport
    assert_eq!(anchor_scroll_top(-300.0, 1200.0, 64.0), 828.0);
}

#[test]
fn found_anchor_scrolls_and_records_fragment() {
    let plan = plan_anchor_scroll(AnchorTarget::Found { top: 500.0 }, 1000.0, 72.0);
    assert_eq!(plan.scroll_to, Some(1420.0));
    assert!(plan.push_fragment);
}

#[test]
fn missing_anchor_target_still_records_fragment() {
    let plan = plan_anchor_scroll(AnchorTarget::Missing, 1000.0, 72.0);
    assert_eq!(plan.scroll_to, None);
    assert!(plan.push_fragment);
}

#[test]
fn unparsable_fragment_leaves_history_alone() {
    // e.g. "#1abc", which querySelector rejects
    let plan = plan_anchor_scroll(AnchorTarget::InvalidSelector, 1000.0, 72.0);
    assert_eq!(plan.scroll_to, None);
    assert!(!plan.push_fragment);
}
