//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Go package of the generated files.
    pub package: String,

    /// Emitted CRD API versions.
    pub versions: Vec<String>,

    /// Descriptors rendered, as `Kind.group`.
    pub descriptors: Vec<String>,

    /// Error diagnostics that stopped the run.
    pub errors: Vec<String>,

    /// Warning diagnostics from the pipeline.
    pub warnings: Vec<String>,

    /// What happened to the rendered files.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written (or left alone when unchanged).
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// Validation failed; nothing was rendered.
    Failed,
}

/// A file on disk after a run.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: String,
    /// False when the file already had this content.
    pub changed: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether generation got past validation.
    pub fn is_success(&self) -> bool {
        !matches!(self.result, GenerationResult::Failed)
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::Failed => {}
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        if files.is_empty() {
            return;
        }

        out.preformatted(&format!(
            "package {} ({})",
            self.package,
            self.versions.join(", ")
        ));
        out.newline();

        out.section(&format!("Descriptors ({})", self.descriptors.len()));
        for name in &self.descriptors {
            out.list_item(name);
        }
        out.newline();

        out.section("Files");
        for file in files {
            if file.changed {
                out.added_item(&file.path);
            } else {
                out.unchanged_item(&file.path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package: "crds".into(),
            versions: vec!["v1".into()],
            descriptors: vec!["CronTab.batch.acme.io".into()],
            errors: Vec::new(),
            warnings: vec!["cannot represent value".into()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(vec![
            WrittenFile {
                path: "out/zz.generated.scheme.go".into(),
                changed: false,
            },
            WrittenFile {
                path: "out/zz.generated.crds.go".into(),
                changed: true,
            },
        ]))
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: cannot represent value",
                "package crds (v1)",
                "",
                "Descriptors (1):",
                "  - CronTab.batch.acme.io",
                "",
                "Files:",
                "  = out/zz.generated.scheme.go",
                "  + out/zz.generated.crds.go",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(vec![PreviewFile {
            path: "zz.generated.crds.go".into(),
            content: "package crds".into(),
        }]))
        .render(&mut out);

        assert_eq!(out.lines[1], "-- zz.generated.crds.go --");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }

    #[test]
    fn test_failed_reports_errors_only() {
        let mut rep = report(GenerationResult::Failed);
        rep.errors.push("package name is missing".into());
        rep.warnings.clear();

        let mut out = RecordingOutput::default();
        rep.render(&mut out);

        assert!(!rep.is_success());
        assert_eq!(out.lines, ["error: package name is missing"]);
    }
}
