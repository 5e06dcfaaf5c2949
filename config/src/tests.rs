//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// ANGLE TESTS
// =============================================================================

#[test]
fn test_full_turn_is_360() {
    assert_eq!(FULL_TURN_DEGREES, 360);
}

#[test]
fn test_latitude_limit_maps_clip_bounds_to_poles() {
    assert_eq!(CLIP_LOWER_BOUND * LATITUDE_LIMIT_DEGREES, -90.0);
    assert_eq!(CLIP_UPPER_BOUND * LATITUDE_LIMIT_DEGREES, 90.0);
}

// =============================================================================
// DEFAULT PARAMETER TESTS
// =============================================================================

#[test]
fn test_default_clip_covers_whole_sphere() {
    assert_eq!(DEFAULT_CLIP_MIN_Y, CLIP_LOWER_BOUND);
    assert_eq!(DEFAULT_CLIP_MAX_Y, CLIP_UPPER_BOUND);
    assert!(DEFAULT_CLIP_MIN_Y < DEFAULT_CLIP_MAX_Y);
}

#[test]
fn test_default_divisions_respect_minimums() {
    assert!(DEFAULT_CYLINDER_DIVISIONS >= MIN_ANGULAR_DIVISIONS);
    assert!(DEFAULT_SPHERE_DIVISIONS_XZ >= MIN_ANGULAR_DIVISIONS);
    assert!(DEFAULT_SPHERE_DIVISIONS_Y >= MIN_LATITUDE_DIVISIONS);
}

#[test]
fn test_default_divisions_divide_full_turn() {
    // Defaults must not trigger the integer-degree seam
    assert_eq!(FULL_TURN_DEGREES % DEFAULT_CYLINDER_DIVISIONS as i64, 0);
    assert_eq!(FULL_TURN_DEGREES % DEFAULT_SPHERE_DIVISIONS_XZ as i64, 0);
}

#[test]
fn test_default_dimensions_positive() {
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_HEIGHT > 0.0);
}

#[test]
fn test_default_faces_enabled() {
    assert!(DEFAULT_ENABLE_OUTSIDE);
    assert!(DEFAULT_ENABLE_INSIDE);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_quad_layout() {
    assert_eq!(VERTICES_PER_QUAD, 4);
    assert_eq!(INDICES_PER_QUAD, 6);
    assert_eq!(INDICES_PER_QUAD % 3, 0);
}

#[test]
fn test_max_vertices_reasonable() {
    assert!(MAX_VERTICES >= 1_000_000);
    assert_eq!(MAX_VERTICES % VERTICES_PER_QUAD, 0);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
    assert!(!approx_zero(-0.5));
}

#[test]
fn test_approx_zero_rejects_nan() {
    assert!(!approx_zero(f64::NAN));
}
