//! # Shape Parameters
//!
//! Plain parameter records for the builders. Every field has a default
//! taken from `config::constants`, so hosts may describe a shape with
//! partial JSON. Unknown keys are rejected, so a misspelled field is an
//! error instead of a silent default:
//!
//! ```rust
//! use revolve_mesh::ShapeParams;
//!
//! let shape = ShapeParams::from_json(r#"{ "shape": "sphere", "clip_min_y": 0.0 }"#).unwrap();
//! let mesh = shape.build().unwrap();
//! assert!(!mesh.is_empty());
//!
//! assert!(ShapeParams::from_json(r#"{ "shape": "sphere", "insdie": false }"#).is_err());
//! ```

use crate::angle::AngleStepping;
use crate::error::MeshError;
use crate::mesh::MeshBuffers;
use crate::primitives::{build_cylinder_mesh, build_sphere_mesh};
use crate::quad::Faces;
use config::constants::{
    CLIP_LOWER_BOUND, CLIP_UPPER_BOUND, DEFAULT_CLIP_MAX_Y, DEFAULT_CLIP_MIN_Y,
    DEFAULT_CYLINDER_DIVISIONS, DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_SPHERE_DIVISIONS_XZ,
    DEFAULT_SPHERE_DIVISIONS_Y, MIN_ANGULAR_DIVISIONS, MIN_LATITUDE_DIVISIONS,
};
use serde::{Deserialize, Serialize};

/// Parameters of an open cylinder wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CylinderRecord", into = "CylinderRecord")]
pub struct CylinderParams {
    /// Distance from the Y axis to the wall.
    pub radius: f64,
    /// Half-height; the wall spans `[-height, +height]` on Y.
    pub height: f64,
    /// Number of quads around the axis.
    pub divisions: u32,
    pub faces: Faces,
    pub stepping: AngleStepping,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            divisions: DEFAULT_CYLINDER_DIVISIONS,
            faces: Faces::default(),
            stepping: AngleStepping::default(),
        }
    }
}

impl CylinderParams {
    /// Creates outward-facing cylinder parameters.
    pub fn new(radius: f64, height: f64, divisions: u32) -> Self {
        Self {
            radius,
            height,
            divisions,
            faces: Faces::OUTSIDE,
            stepping: AngleStepping::default(),
        }
    }

    pub fn with_faces(mut self, outside: bool, inside: bool) -> Self {
        self.faces = Faces::new(outside, inside);
        self
    }

    pub fn with_stepping(mut self, stepping: AngleStepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Number of quads the builder will emit.
    pub fn quad_count(&self) -> Option<usize> {
        (self.divisions as usize).checked_mul(self.faces.count())
    }

    /// Rejects parameters that cannot describe a wall.
    ///
    /// A zero radius or zero height passes: it produces collapsed quads,
    /// which the builder reports as degenerate normals.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_length("radius", self.radius)?;
        check_length("height", self.height)?;
        check_divisions("divisions", self.divisions, MIN_ANGULAR_DIVISIONS)
    }
}

/// Parameters of a latitude-clipped sphere shell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SphereRecord", into = "SphereRecord")]
pub struct SphereParams {
    pub radius: f64,
    /// Number of quads around the Y axis.
    pub divisions_xz: u32,
    /// Number of latitude bands between the clip bounds.
    pub divisions_y: u32,
    /// Lower latitude bound in `[-1, 1]`, mapped onto `[-90°, 90°]`.
    pub clip_min_y: f64,
    /// Upper latitude bound in `[-1, 1]`, mapped onto `[-90°, 90°]`.
    pub clip_max_y: f64,
    pub faces: Faces,
    pub stepping: AngleStepping,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            divisions_xz: DEFAULT_SPHERE_DIVISIONS_XZ,
            divisions_y: DEFAULT_SPHERE_DIVISIONS_Y,
            clip_min_y: DEFAULT_CLIP_MIN_Y,
            clip_max_y: DEFAULT_CLIP_MAX_Y,
            faces: Faces::default(),
            stepping: AngleStepping::default(),
        }
    }
}

impl SphereParams {
    /// Creates outward-facing parameters for a full sphere.
    pub fn new(radius: f64, divisions_xz: u32, divisions_y: u32) -> Self {
        Self {
            radius,
            divisions_xz,
            divisions_y,
            clip_min_y: DEFAULT_CLIP_MIN_Y,
            clip_max_y: DEFAULT_CLIP_MAX_Y,
            faces: Faces::OUTSIDE,
            stepping: AngleStepping::default(),
        }
    }

    pub fn with_faces(mut self, outside: bool, inside: bool) -> Self {
        self.faces = Faces::new(outside, inside);
        self
    }

    pub fn with_clip(mut self, clip_min_y: f64, clip_max_y: f64) -> Self {
        self.clip_min_y = clip_min_y;
        self.clip_max_y = clip_max_y;
        self
    }

    pub fn with_stepping(mut self, stepping: AngleStepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// True when the clip range selects a non-empty band of the sphere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use revolve_mesh::SphereParams;
    ///
    /// assert!(SphereParams::default().clip_is_valid());
    /// assert!(!SphereParams::default().with_clip(0.5, 0.2).clip_is_valid());
    /// assert!(!SphereParams::default().with_clip(-1.5, 0.0).clip_is_valid());
    /// ```
    pub fn clip_is_valid(&self) -> bool {
        // Written positively so NaN bounds fail
        self.clip_min_y < self.clip_max_y
            && self.clip_min_y >= CLIP_LOWER_BOUND
            && self.clip_max_y <= CLIP_UPPER_BOUND
    }

    /// Number of quads the builder will emit.
    pub fn quad_count(&self) -> Option<usize> {
        (self.divisions_xz as usize)
            .checked_mul(self.divisions_y as usize)?
            .checked_mul(self.faces.count())
    }

    /// Rejects parameters that cannot describe a shell.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_length("radius", self.radius)?;
        check_divisions("divisions_xz", self.divisions_xz, MIN_ANGULAR_DIVISIONS)?;
        check_divisions("divisions_y", self.divisions_y, MIN_LATITUDE_DIVISIONS)
    }
}

/// A build request for either shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    Cylinder(CylinderParams),
    Sphere(SphereParams),
}

impl ShapeParams {
    /// Decodes a shape description such as `{"shape": "cylinder", "radius": 2.0}`.
    pub fn from_json(source: &str) -> Result<Self, MeshError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builds the mesh for this shape.
    pub fn build(&self) -> Result<MeshBuffers, MeshError> {
        match self {
            ShapeParams::Cylinder(params) => build_cylinder_mesh(params),
            ShapeParams::Sphere(params) => build_sphere_mesh(params),
        }
    }
}

impl From<CylinderParams> for ShapeParams {
    fn from(params: CylinderParams) -> Self {
        ShapeParams::Cylinder(params)
    }
}

impl From<SphereParams> for ShapeParams {
    fn from(params: SphereParams) -> Self {
        ShapeParams::Sphere(params)
    }
}

/// Flat JSON layout of [`CylinderParams`].
#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CylinderRecord {
    radius: f64,
    height: f64,
    divisions: u32,
    outside: bool,
    inside: bool,
    stepping: AngleStepping,
}

impl Default for CylinderRecord {
    fn default() -> Self {
        CylinderParams::default().into()
    }
}

impl From<CylinderParams> for CylinderRecord {
    fn from(params: CylinderParams) -> Self {
        Self {
            radius: params.radius,
            height: params.height,
            divisions: params.divisions,
            outside: params.faces.outside,
            inside: params.faces.inside,
            stepping: params.stepping,
        }
    }
}

impl From<CylinderRecord> for CylinderParams {
    fn from(record: CylinderRecord) -> Self {
        Self {
            radius: record.radius,
            height: record.height,
            divisions: record.divisions,
            faces: Faces::new(record.outside, record.inside),
            stepping: record.stepping,
        }
    }
}

/// Flat JSON layout of [`SphereParams`].
#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SphereRecord {
    radius: f64,
    divisions_xz: u32,
    divisions_y: u32,
    clip_min_y: f64,
    clip_max_y: f64,
    outside: bool,
    inside: bool,
    stepping: AngleStepping,
}

impl Default for SphereRecord {
    fn default() -> Self {
        SphereParams::default().into()
    }
}

impl From<SphereParams> for SphereRecord {
    fn from(params: SphereParams) -> Self {
        Self {
            radius: params.radius,
            divisions_xz: params.divisions_xz,
            divisions_y: params.divisions_y,
            clip_min_y: params.clip_min_y,
            clip_max_y: params.clip_max_y,
            outside: params.faces.outside,
            inside: params.faces.inside,
            stepping: params.stepping,
        }
    }
}

impl From<SphereRecord> for SphereParams {
    fn from(record: SphereRecord) -> Self {
        Self {
            radius: record.radius,
            divisions_xz: record.divisions_xz,
            divisions_y: record.divisions_y,
            clip_min_y: record.clip_min_y,
            clip_max_y: record.clip_max_y,
            faces: Faces::new(record.outside, record.inside),
            stepping: record.stepping,
        }
    }
}

fn check_length(name: &str, value: f64) -> Result<(), MeshError> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be finite and non-negative: {value}"
        )));
    }
    Ok(())
}

fn check_divisions(name: &str, value: u32, min: u32) -> Result<(), MeshError> {
    if value < min {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be at least {min}: {value}"
        )));
    }
    Ok(())
}
