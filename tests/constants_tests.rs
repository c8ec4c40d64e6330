// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_are_within_reasonable_bounds() {
    assert!(MAX_PARTICLES > 0);
    assert!(AREA_PER_PARTICLE > 0.0);
    assert!(INITIAL_SPEED_MAX > 0.0);

    // Damping slows things down rather than speeding them up
    assert!(REDUCED_MOTION_FACTOR > 0.0 && REDUCED_MOTION_FACTOR < 1.0);

    // Alphas are valid canvas alphas
    assert!(NODE_ALPHA > 0.0 && NODE_ALPHA <= 1.0);
    assert!(EDGE_MAX_ALPHA > 0.0 && EDGE_MAX_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn edge_cutoff_is_consistent() {
    assert_eq!(EDGE_MAX_DISTANCE_SQ, 19_600.0);
    assert!(EDGE_MAX_DISTANCE > NODE_RADIUS * 2.0);
    assert!(EDGE_WIDTH > 0.0);
    assert_eq!(NODE_RGB, [43, 108, 255]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_effect_weights_are_fractions() {
    assert!(RING_EASE > 0.0 && RING_EASE < 1.0);
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG < 90.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(SCROLL_HEADER_GAP_PX >= 0.0);
}

#[test]
fn selectors_and_ids_are_well_formed() {
    for sel in [
        CURSOR_DOT_SELECTOR,
        CURSOR_RING_SELECTOR,
        MAGNETIC_SELECTOR,
        TILT_SELECTOR,
        HEADER_SELECTOR,
        REVEAL_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
    for id in [CANVAS_ID, MODE_TOGGLE_ID, CONTACT_FORM_ID, FORM_STATUS_ID] {
        assert!(!id.is_empty() && !id.starts_with('#'));
    }
    assert!(CURSOR_HOVER_SELECTORS.contains(&TILT_SELECTOR));
    assert!(CURSOR_HOVER_SELECTORS.contains(&MAGNETIC_SELECTOR));
}
