//! # Config Crate
//!
//! Centralized configuration constants for the revolve-mesh workspace.
//! Default shape parameters, angular constants, numeric tolerances and
//! safety limits are defined here so the mesh builders never carry
//! literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_CYLINDER_DIVISIONS, FULL_TURN_DEGREES};
//!
//! // Integer-degree step used by the default angle stepping
//! let step = FULL_TURN_DEGREES / DEFAULT_CYLINDER_DIVISIONS as i64;
//! assert_eq!(step, 12);
//!
//! assert!(approx_zero(1e-11));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Inspector Compatible**: Defaults match the values a scene author sees
//!   on a freshly added cylinder or sphere generator

pub mod constants;

#[cfg(test)]
mod tests;
