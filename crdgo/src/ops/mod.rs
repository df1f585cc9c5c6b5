//! Core operations.
//!
//! This module contains the business logic for crdgo commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;

use crdgo_codegen::pipeline::Descriptors;
use crdgo_manifest::Manifest;
pub use check::check;
use eyre::{Context, Result};
pub use explain::explain;
pub use generate::{GenerateOptions, generate};

/// Load every descriptor the manifest lists under `[inputs]`.
fn load_descriptors(manifest: &Manifest) -> Result<Descriptors> {
    crdgo_apiext::load_descriptors(&manifest.inputs.descriptors)
        .wrap_err("Failed to load descriptors")
}
