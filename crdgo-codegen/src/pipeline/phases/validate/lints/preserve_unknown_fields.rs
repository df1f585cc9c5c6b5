//! Lint for the `preserve_unknown_fields` switch.

use super::super::Lint;
use crate::{
    config::GeneratorConfig,
    pipeline::{Descriptors, Diagnostic},
};

/// Lint that rejects `preserve_unknown_fields = true` unless only v1beta1 is
/// requested; v1 descriptors always prune unknown fields.
pub struct PreserveUnknownFieldsLint;

impl Lint for PreserveUnknownFieldsLint {
    fn name(&self) -> &'static str {
        "preserve-unknown-fields"
    }

    fn description(&self) -> &'static str {
        "Check preserve_unknown_fields is only enabled for v1beta1-only output"
    }

    fn check(
        &self,
        config: &GeneratorConfig,
        _descriptors: &Descriptors,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if config.preserve_unknown_fields == Some(true) && !config.v1beta1_only() {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    "you may only set preserve_unknown_fields to true with v1beta1 CRDs",
                )
                .at("generator.preserve_unknown_fields"),
            );
        }
    }
}
