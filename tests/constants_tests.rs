// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_bands_are_well_formed() {
    assert!(STAR_Z_FAR < STAR_Z_NEAR);
    assert!(EMBER_Y_FLOOR < EMBER_Y_CEIL);
    assert!(EMBER_Z_FAR < EMBER_Z_NEAR);
    assert!(EMBER_RISE_MIN > 0.0 && EMBER_RISE_MIN < EMBER_RISE_MAX);
    // A single tick must never jump across a whole band
    assert!(STAR_DRIFT_PER_FRAME < STAR_Z_NEAR - STAR_Z_FAR);
    assert!(EMBER_RISE_MAX < EMBER_Y_CEIL - EMBER_Y_FLOOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_contractions() {
    for k in [CAMERA_SMOOTHING, CURSOR_LIGHT_SMOOTHING] {
        assert!(k > 0.0 && k < 1.0);
    }
    // The cursor light reacts faster than the camera
    assert!(CURSOR_LIGHT_SMOOTHING > CAMERA_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ridge_starts_inside_the_terrain() {
    assert!(RIDGE_START > 0.0 && RIDGE_START < TERRAIN_SIZE / 2.0);
    assert!(TERRAIN_SEGMENTS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_valid() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // Stars must stay within the far plane
    assert!(CAMERA_BASE.z - STAR_Z_FAR < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typewriter_delays_are_ordered() {
    assert!(DELETE_DELAY_MS < TYPE_DELAY_MS);
    assert!(TYPE_DELAY_MS < NEXT_PHRASE_DELAY_MS);
    assert!(NEXT_PHRASE_DELAY_MS < HOLD_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_ratio() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(SPRITE_SIZE.is_power_of_two());
}
