//! # Angle Stepping
//!
//! Converts grid indices into sweep angles.
//!
//! [`AngleStepping::IntegerDegrees`] steps in whole degrees using
//! truncating integer division (`360 / n`, `trunc(diff) / n`). When `n`
//! does not divide the range the sweep falls short and leaves a seam, e.g.
//! `n = 7` steps by 51° and the last quad closes from 306° back to 0°.
//! [`AngleStepping::Continuous`] divides the range exactly.

use config::constants::FULL_TURN_DEGREES;
use serde::{Deserialize, Serialize};

/// How grid indices map onto angles.
///
/// # Example
///
/// ```rust
/// use revolve_mesh::AngleStepping;
///
/// // 7 divisions: 360 / 7 truncates to 51 degrees
/// let seam = AngleStepping::IntegerDegrees.longitude_degrees(6, 7);
/// assert_eq!(seam, 306.0);
///
/// let exact = AngleStepping::Continuous.longitude_degrees(6, 7);
/// assert!((exact - 308.571_428).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleStepping {
    /// Whole-degree steps with truncating division.
    #[default]
    IntegerDegrees,
    /// Exact `range / divisions` steps.
    Continuous,
}

impl AngleStepping {
    /// Longitude of ring position `index` (wrapped modulo `divisions`), in degrees.
    ///
    /// `divisions` must be non-zero.
    pub fn longitude_degrees(self, index: u32, divisions: u32) -> f64 {
        let wrapped = index % divisions;
        match self {
            AngleStepping::IntegerDegrees => {
                (i64::from(wrapped) * (FULL_TURN_DEGREES / i64::from(divisions))) as f64
            }
            AngleStepping::Continuous => {
                FULL_TURN_DEGREES as f64 * f64::from(wrapped) / f64::from(divisions)
            }
        }
    }

    /// Longitude of ring position `index`, in radians.
    #[inline]
    pub fn longitude(self, index: u32, divisions: u32) -> f64 {
        self.longitude_degrees(index, divisions).to_radians()
    }

    /// Latitude step across a clip range spanning `diff_degrees`.
    ///
    /// `divisions` must be non-zero.
    pub fn latitude_step_degrees(self, diff_degrees: f64, divisions: u32) -> f64 {
        match self {
            AngleStepping::IntegerDegrees => {
                (diff_degrees.trunc() as i64 / i64::from(divisions)) as f64
            }
            AngleStepping::Continuous => diff_degrees / f64::from(divisions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integer_longitude_even_division() {
        let stepping = AngleStepping::IntegerDegrees;
        assert_eq!(stepping.longitude_degrees(0, 4), 0.0);
        assert_eq!(stepping.longitude_degrees(1, 4), 90.0);
        assert_eq!(stepping.longitude_degrees(3, 4), 270.0);
    }

    #[test]
    fn test_longitude_wraps_last_index() {
        assert_eq!(AngleStepping::IntegerDegrees.longitude_degrees(4, 4), 0.0);
        assert_eq!(AngleStepping::Continuous.longitude_degrees(4, 4), 0.0);
    }

    #[test]
    fn test_integer_longitude_truncates() {
        // 360 / 7 = 51 remainder 3
        assert_eq!(AngleStepping::IntegerDegrees.longitude_degrees(1, 7), 51.0);
        assert_eq!(AngleStepping::IntegerDegrees.longitude_degrees(6, 7), 306.0);
    }

    #[test]
    fn test_integer_longitude_collapses_above_360() {
        // More divisions than degrees yields a zero step
        assert_eq!(AngleStepping::IntegerDegrees.longitude_degrees(5, 361), 0.0);
    }

    #[test]
    fn test_continuous_longitude() {
        assert_relative_eq!(
            AngleStepping::Continuous.longitude(1, 7),
            std::f64::consts::TAU / 7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_integer_latitude_step_truncates() {
        let stepping = AngleStepping::IntegerDegrees;
        assert_eq!(stepping.latitude_step_degrees(180.0, 2), 90.0);
        assert_eq!(stepping.latitude_step_degrees(180.0, 7), 25.0);
        // clip 0.2..0.5 spans 27 degrees
        assert_eq!(stepping.latitude_step_degrees(27.000_000_4, 4), 6.0);
    }

    #[test]
    fn test_continuous_latitude_step() {
        assert_relative_eq!(
            AngleStepping::Continuous.latitude_step_degrees(180.0, 7),
            180.0 / 7.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_default_is_integer_degrees() {
        assert_eq!(AngleStepping::default(), AngleStepping::IntegerDegrees);
    }
}
