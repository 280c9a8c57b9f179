//! trisoup-export - triangle-soup mesh export
//!
//! Writes meshes generated by the [`trisoup`] crate to disk for inspection
//! and asset pipelines.
//!
//! # Modules
//!
//! - [`obj`] - Wavefront OBJ writer
//! - [`json`] - JSON document writer

pub mod json;
pub mod obj;
