//! Check operation - dry validation of a manifest and its descriptors.

use std::path::Path;

use crdgo_codegen::{
    GeneratorConfig,
    pipeline::{GenerationContext, Pipeline, Severity},
};
use crdgo_manifest::Manifest;
use eyre::Result;

use super::load_descriptors;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline in memory and collects its diagnostics; nothing
/// is written. A fatal phase error with no matching diagnostic is reported
/// as an error too.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let descriptors = load_descriptors(manifest)?;
    let mut ctx = GenerationContext::new(GeneratorConfig::from(manifest), descriptors);
    let failure = Pipeline::new().execute(&mut ctx).err();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    if let Some(err) = failure {
        if errors.is_empty() {
            errors.push(format!("{err:#}"));
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        descriptor_count: ctx.descriptors.len(),
        versions: ctx.config.crd_versions().iter().map(|v| v.to_string()).collect(),
        errors,
        warnings,
        infos,
    })
}
