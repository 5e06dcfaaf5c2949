//! # Mesh Errors
//!
//! Error types for mesh generation.
//!
//! Parameter combinations that the builders treat as "nothing to draw"
//! (no faces enabled, an inverted latitude clip) are not errors; they
//! produce an empty [`MeshBuffers`](crate::MeshBuffers).

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter cannot describe any mesh (negative radius, too few divisions)
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// A quad collapsed so its normal has no direction
    #[error("Degenerate normal: {message}")]
    DegenerateNormal { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Shape parameters could not be decoded
    #[error("Invalid shape description: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate normal error.
    pub fn degenerate_normal(message: impl Into<String>) -> Self {
        Self::DegenerateNormal {
            message: message.into(),
        }
    }
}
