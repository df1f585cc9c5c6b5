//! Lint trait for configuration validation.

use crate::{
    config::GeneratorConfig,
    pipeline::{Descriptors, Diagnostic},
};

/// Name and description of a lint, for listing.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks a run's inputs for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the configuration and descriptors and add any diagnostics.
    fn check(
        &self,
        config: &GeneratorConfig,
        descriptors: &Descriptors,
        diagnostics: &mut Vec<Diagnostic>,
    );

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
