//! # Configuration Constants
//!
//! Centralized constants for the revolve-mesh builders.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Angles**: Degree constants used by the angular sweeps
//! - **Defaults**: Shape parameters used when a host leaves a field unset
//! - **Limits**: Minimum subdivisions and maximum output sizes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for dimensionless floating-point comparisons.
///
/// Applied to ratios such as the sine of the angle between two quad edges,
/// never to raw lengths, so it holds at any shape scale.
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Degrees in a full longitude turn.
///
/// Kept integral because the default stepping divides it with truncating
/// integer division.
pub const FULL_TURN_DEGREES: i64 = 360;

/// Degrees from the equator to a pole.
///
/// A latitude clip value of `±1.0` maps to `±LATITUDE_LIMIT_DEGREES`.
///
/// # Example
///
/// ```rust
/// use config::constants::LATITUDE_LIMIT_DEGREES;
///
/// let clip_max_y = 0.5;
/// assert_eq!(LATITUDE_LIMIT_DEGREES * clip_max_y, 45.0);
/// ```
pub const LATITUDE_LIMIT_DEGREES: f64 = 90.0;

/// Lower bound of the normalized latitude clip range.
pub const CLIP_LOWER_BOUND: f64 = -1.0;

/// Upper bound of the normalized latitude clip range.
pub const CLIP_UPPER_BOUND: f64 = 1.0;

// =============================================================================
// DEFAULT SHAPE PARAMETERS
// =============================================================================

/// Default radius for both cylinders and spheres.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default cylinder half-height. The wall spans `[-height, +height]`.
pub const DEFAULT_HEIGHT: f64 = 1.0;

/// Default angular subdivision count around a cylinder.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_CYLINDER_DIVISIONS, MIN_ANGULAR_DIVISIONS};
///
/// assert!(DEFAULT_CYLINDER_DIVISIONS >= MIN_ANGULAR_DIVISIONS);
/// ```
pub const DEFAULT_CYLINDER_DIVISIONS: u32 = 30;

/// Default longitude subdivision count of a sphere (XZ plane).
pub const DEFAULT_SPHERE_DIVISIONS_XZ: u32 = 30;

/// Default latitude subdivision count of a sphere (Y direction).
pub const DEFAULT_SPHERE_DIVISIONS_Y: u32 = 15;

/// Default lower latitude clip (south pole).
pub const DEFAULT_CLIP_MIN_Y: f64 = CLIP_LOWER_BOUND;

/// Default upper latitude clip (north pole).
pub const DEFAULT_CLIP_MAX_Y: f64 = CLIP_UPPER_BOUND;

/// Outward faces are generated unless a host turns them off.
pub const DEFAULT_ENABLE_OUTSIDE: bool = true;

/// Inward faces are generated unless a host turns them off.
pub const DEFAULT_ENABLE_INSIDE: bool = true;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum angular subdivisions for a closed ring (triangle cross-section).
pub const MIN_ANGULAR_DIVISIONS: u32 = 3;

/// Minimum latitude subdivisions for a sphere band.
pub const MIN_LATITUDE_DIVISIONS: u32 = 1;

/// Vertices appended per emitted quad.
pub const VERTICES_PER_QUAD: usize = 4;

/// Indices appended per emitted quad (two triangles).
pub const INDICES_PER_QUAD: usize = 6;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit checked before any buffer is allocated.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_VERTICES, VERTICES_PER_QUAD};
///
/// // 360 x 180 grid, both faces
/// let vertex_count = 360 * 180 * 2 * VERTICES_PER_QUAD;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
