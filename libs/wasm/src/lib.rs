//! WASM-facing entry points for the revolve-mesh builders.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust error types and never touch a JS host.
//!
//! ```
//! let mesh = revolve_mesh_wasm::build_cylinder_internal(1.0, 1.0, 4, true, false).unwrap();
//! assert_eq!(mesh.vertex_count(), 16);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use revolve_mesh::primitives::{create_cylinder, create_sphere};
use revolve_mesh::{MeshError, ShapeParams};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "revolve_mesh_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Builds an open cylinder wall.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the parameters are malformed or the wall collapses.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const tube = build_cylinder(1.0, 2.0, 30, true, true);
/// ```
#[wasm_bindgen]
pub fn build_cylinder(
    radius: f64,
    height: f64,
    divisions: u32,
    outside: bool,
    inside: bool,
) -> Result<MeshHandle, JsValue> {
    build_cylinder_internal(radius, height, divisions, outside, inside).map_err(to_js_error)
}

/// Builds a latitude-clipped sphere shell.
///
/// # Errors
/// Returns a JavaScript error value when the parameters are malformed or
/// the shell collapses. An inverted clip range is not an error; it yields
/// an empty mesh.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const dome = build_sphere(10.0, 30, 15, 0.0, 1.0, false, true);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn build_sphere(
    radius: f64,
    divisions_xz: u32,
    divisions_y: u32,
    clip_min_y: f64,
    clip_max_y: f64,
    outside: bool,
    inside: bool,
) -> Result<MeshHandle, JsValue> {
    build_sphere_internal(
        radius,
        divisions_xz,
        divisions_y,
        clip_min_y,
        clip_max_y,
        outside,
        inside,
    )
    .map_err(to_js_error)
}

/// Builds a shape from a JSON description such as
/// `{"shape": "sphere", "radius": 2.0, "inside": false}`.
///
/// Omitted fields take their defaults.
#[wasm_bindgen]
pub fn build_from_json(source: &str) -> Result<MeshHandle, JsValue> {
    build_from_json_internal(source).map_err(to_js_error)
}

/// Host-only variant of [`build_cylinder`].
pub fn build_cylinder_internal(
    radius: f64,
    height: f64,
    divisions: u32,
    outside: bool,
    inside: bool,
) -> Result<MeshHandle, MeshError> {
    let mesh = create_cylinder(radius, height, divisions, outside, inside)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Host-only variant of [`build_sphere`].
#[allow(clippy::too_many_arguments)]
pub fn build_sphere_internal(
    radius: f64,
    divisions_xz: u32,
    divisions_y: u32,
    clip_min_y: f64,
    clip_max_y: f64,
    outside: bool,
    inside: bool,
) -> Result<MeshHandle, MeshError> {
    let mesh = create_sphere(
        radius,
        divisions_xz,
        divisions_y,
        clip_min_y,
        clip_max_y,
        outside,
        inside,
    )?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Host-only variant of [`build_from_json`].
pub fn build_from_json_internal(source: &str) -> Result<MeshHandle, MeshError> {
    let mesh = ShapeParams::from_json(source)?.build()?;
    Ok(MeshHandle::from_mesh(&mesh))
}

fn to_js_error(err: MeshError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
