//! Generation context passed through pipeline phases.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crdgo_apiext::{GroupKind, META_PACKAGE, V1_PACKAGE, V1BETA1_PACKAGE, VersionedCrd, v1};
use crdgo_core::{File, WriteResult};
use eyre::{Result, WrapErr};
use indexmap::IndexMap;

use super::diagnostic::{Diagnostic, Severity};
use crate::{config::GeneratorConfig, imports::ImportRegistry};

/// Input descriptors keyed, and therefore ordered, by group and kind.
pub type Descriptors = BTreeMap<GroupKind, v1::CustomResourceDefinition>;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of a generation run through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct GenerationContext {
    pub config: GeneratorConfig,
    /// Descriptors as loaded, shaped in place by the shape phase.
    pub descriptors: Descriptors,
    /// License header with the year filled in (set by the validate phase).
    pub header: String,
    /// Converted descriptors per requested version, in request order.
    pub versioned: IndexMap<String, Vec<(GroupKind, VersionedCrd)>>,
    /// Aliases shared by every file of the run.
    pub imports: ImportRegistry,
    /// Rendered files, relative to the output directory.
    pub files: Vec<File>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(config: GeneratorConfig, descriptors: Descriptors) -> Self {
        Self {
            config,
            descriptors,
            header: String::new(),
            versioned: IndexMap::new(),
            imports: default_imports(),
            files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Find a rendered file by name.
    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|f| f.path() == Path::new(name))
    }

    /// Write every rendered file below `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<(PathBuf, WriteResult)>> {
        self.files
            .iter()
            .map(|file| {
                let path = dir.join(file.path());
                let result = File::new(&path, file.content())
                    .write()
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                Ok((path, result))
            })
            .collect()
    }
}

fn default_imports() -> ImportRegistry {
    ImportRegistry::new()
        .with_alias(META_PACKAGE, "metav1")
        .with_alias(V1_PACKAGE, "apiextensionsv1")
        .with_alias(V1BETA1_PACKAGE, "apiextensionsv1beta1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(GeneratorConfig::new("crds"), Descriptors::new());

        assert!(ctx.header.is_empty());
        assert!(ctx.versioned.is_empty());
        assert!(ctx.files.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.imports.alias(META_PACKAGE), Some("metav1"));
        assert_eq!(ctx.imports.alias(V1BETA1_PACKAGE), Some("apiextensionsv1beta1"));
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(GeneratorConfig::new("crds"), Descriptors::new());

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.errors().count(), 1);
    }

    #[test]
    fn test_write_to() {
        let temp = tempfile::tempdir().unwrap();
        let mut ctx = GenerationContext::new(GeneratorConfig::new("crds"), Descriptors::new());
        ctx.files.push(File::new("zz.generated.crds.go", "package crds\n"));

        let written = ctx.write_to(temp.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].1, WriteResult::Written);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("zz.generated.crds.go")).unwrap(),
            "package crds\n"
        );
        assert!(ctx.file("zz.generated.crds.go").is_some());

        let again = ctx.write_to(temp.path()).unwrap();
        assert_eq!(again[0].1, WriteResult::Unchanged);
    }
}
