//! Lint for runs without descriptors.

use super::super::Lint;
use crate::{
    config::GeneratorConfig,
    pipeline::{Descriptors, Diagnostic},
};

/// Lint that warns when there is nothing to generate.
pub struct EmptyInputLint;

impl Lint for EmptyInputLint {
    fn name(&self) -> &'static str {
        "empty-input"
    }

    fn description(&self) -> &'static str {
        "Warn when no descriptors were found"
    }

    fn check(
        &self,
        _config: &GeneratorConfig,
        descriptors: &Descriptors,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if descriptors.is_empty() {
            diagnostics.push(
                Diagnostic::warning("validate", "no descriptors found, nothing will be generated")
                    .at("inputs.descriptors"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crdgo_apiext::{GroupKind, v1};

    use super::*;

    #[test]
    fn test_empty_input_warns() {
        let mut diagnostics = Vec::new();
        EmptyInputLint.check(&GeneratorConfig::new("crds"), &Descriptors::new(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_non_empty_input() {
        let descriptors = Descriptors::from([(
            GroupKind::new("a.io", "Alpha"),
            v1::CustomResourceDefinition::default(),
        )]);
        let mut diagnostics = Vec::new();
        EmptyInputLint.check(&GeneratorConfig::new("crds"), &descriptors, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
