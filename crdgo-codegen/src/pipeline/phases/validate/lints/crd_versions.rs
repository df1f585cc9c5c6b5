//! Lint for the requested CustomResourceDefinition versions.

use super::super::Lint;
use crate::{
    config::GeneratorConfig,
    pipeline::{Descriptors, Diagnostic},
};

/// Lint that rejects a version requested twice.
///
/// Each version becomes one `New<Version>Set` function, so a repeat would
/// emit a duplicate declaration. Unknown versions are left to conversion,
/// which reports them against the descriptor being converted.
pub struct CrdVersionLint;

impl Lint for CrdVersionLint {
    fn name(&self) -> &'static str {
        "crd-versions"
    }

    fn description(&self) -> &'static str {
        "Check each output version is requested once"
    }

    fn check(
        &self,
        config: &GeneratorConfig,
        _descriptors: &Descriptors,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let versions = config.crd_versions();
        for (i, version) in versions.iter().enumerate() {
            if versions[..i].contains(version) {
                diagnostics.push(
                    Diagnostic::error("validate", format!("version '{}' is requested twice", version))
                        .at("generator.crd_versions"),
                );
            }
        }
    }
}
