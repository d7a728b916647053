// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_LEFT_MIN_PERCENT < PARTICLE_LEFT_MAX_PERCENT);
    assert!(PARTICLE_DELAY_MIN_SEC < PARTICLE_DELAY_MAX_SEC);
    assert!(PARTICLE_SIZE_MIN_PX < PARTICLE_SIZE_MAX_PX);
    assert!(PARTICLE_OPACITY_MIN < PARTICLE_OPACITY_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_bounds_are_fractions() {
    assert!(PARTICLE_OPACITY_MIN >= 0.0 && PARTICLE_OPACITY_MIN <= 1.0);
    assert!(PARTICLE_OPACITY_MAX >= 0.0 && PARTICLE_OPACITY_MAX <= 1.0);
    assert!(FALL_MIDPOINT_OPACITY > 0.0 && FALL_MIDPOINT_OPACITY < 1.0);
}

#[test]
fn palette_has_six_hex_colors() {
    assert_eq!(PARTICLE_PALETTE.len(), 6);
    for color in PARTICLE_PALETTE {
        assert_eq!(color.len(), 7, "bad color {color}");
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn palette_entries_are_distinct() {
    for (i, a) in PARTICLE_PALETTE.iter().enumerate() {
        for b in &PARTICLE_PALETTE[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn batch_and_timing_are_positive() {
    assert_eq!(PARTICLE_COUNT, 100);
    assert!(FALL_DURATION_SEC > PARTICLE_DELAY_MAX_SEC);
    assert!(PARTICLE_TOP_PERCENT < 0.0);
}

#[test]
fn element_ids_and_attrs_are_usable() {
    for id in [MUSIC_TOGGLE_ID, AUDIO_ERROR_ID] {
        assert!(!id.is_empty());
        assert!(!id.contains(' '));
    }
    assert_ne!(MUSIC_TOGGLE_ID, AUDIO_ERROR_ID);
    assert!(AUDIO_SRC_ATTR.starts_with("data-"));
    assert!(PARTICLE_ROOT_ATTR.starts_with("data-"));
    assert!(DEFAULT_AUDIO_SRC.starts_with('/'));
}
