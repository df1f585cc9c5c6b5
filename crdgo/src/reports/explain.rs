//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    /// Generator settings in effect.
    pub manifest: ManifestInfo,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// Loaded descriptors.
    pub descriptors: Vec<DescriptorInfo>,
    /// Constructor functions in the values file.
    pub constructors: Vec<ConstructorInfo>,
    /// Files a generate run would write.
    pub files: Vec<String>,
}

/// Generator settings extracted from the manifest.
#[derive(Debug)]
pub struct ManifestInfo {
    pub package: String,
    pub crd_versions: String,
    pub trivial_versions: bool,
    pub max_desc_len: Option<usize>,
    /// Version recorded in the attribution annotation.
    pub attribution: String,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    /// Phase name.
    pub name: String,
    /// Phase description.
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    /// Lint name.
    pub name: String,
    /// Lint description.
    pub description: String,
}

/// A loaded descriptor.
#[derive(Debug)]
pub struct DescriptorInfo {
    /// `Kind.group`
    pub name: String,
    pub scope: String,
    /// Served versions, as declared.
    pub versions: Vec<String>,
}

/// A generated `New<Version>Set` function.
#[derive(Debug)]
pub struct ConstructorInfo {
    pub name: String,
    /// Number of descriptors it returns.
    pub count: usize,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("crdgo Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Package", &self.manifest.package);
        out.key_value_indented("CRD versions", &self.manifest.crd_versions);
        out.key_value_indented(
            "Trivial versions",
            if self.manifest.trivial_versions {
                "yes"
            } else {
                "no"
            },
        );
        let max_desc_len = match self.manifest.max_desc_len {
            Some(0) => "descriptions dropped".to_string(),
            Some(n) => n.to_string(),
            None => "unlimited".to_string(),
        };
        out.key_value_indented("Description limit", &max_desc_len);
        out.key_value_indented("Attribution", &self.manifest.attribution);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section(&format!("Descriptors ({})", self.descriptors.len()));
        for descriptor in &self.descriptors {
            out.list_item(&format!(
                "{} ({}; {})",
                descriptor.name,
                descriptor.scope,
                descriptor.versions.join(", ")
            ));
        }

        if !self.constructors.is_empty() {
            out.newline();
            out.section("Constructors");
            for constructor in &self.constructors {
                out.list_item(&format!(
                    "{}() returns {} descriptor(s)",
                    constructor.name, constructor.count
                ));
            }
        }

        if !self.files.is_empty() {
            out.newline();
            out.section("Files to Generate");
            for file in &self.files {
                out.list_item(file);
            }
        }
    }
}
