//! Generate operation - Go sources from descriptors.

use std::path::Path;

use crdgo_codegen::{
    GeneratorConfig,
    pipeline::{GenerationContext, Pipeline},
};
use crdgo_core::WriteResult;
use crdgo_manifest::Manifest;
use eyre::{Context, Result};

use super::load_descriptors;
use crate::{
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenFile},
    trace::TracePlugin,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the generated files go to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline over the manifest's descriptors and writes (or previews)
/// the rendered files. Lint errors are reported rather than returned, so the
/// caller can print all of them.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let descriptors = load_descriptors(manifest)?;
    let config = GeneratorConfig::from(manifest);
    let versions = config.crd_versions().iter().map(|v| v.to_string()).collect();

    let mut ctx = GenerationContext::new(config, descriptors);
    let pipeline = Pipeline::new().plugin(TracePlugin::new());
    if let Err(err) = pipeline.execute(&mut ctx) {
        if !ctx.has_errors() {
            return Err(err.wrap_err("Pipeline failed"));
        }
        return Ok(GenerateReport {
            package: manifest.generator.package.clone(),
            versions,
            descriptors: Vec::new(),
            errors: ctx.errors().map(ToString::to_string).collect(),
            warnings: ctx.warnings().map(ToString::to_string).collect(),
            result: GenerationResult::Failed,
        });
    }

    let result = if opts.dry_run {
        GenerationResult::Preview(
            ctx.files
                .iter()
                .map(|file| PreviewFile {
                    path: opts.output_dir.join(file.path()).display().to_string(),
                    content: file.content().to_string(),
                })
                .collect(),
        )
    } else {
        let written = ctx
            .write_to(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(
            written
                .into_iter()
                .map(|(path, result)| WrittenFile {
                    path: path.display().to_string(),
                    changed: result == WriteResult::Written,
                })
                .collect(),
        )
    };

    Ok(GenerateReport {
        package: ctx.config.package_name.clone(),
        versions,
        descriptors: ctx.descriptors.keys().map(ToString::to_string).collect(),
        errors: Vec::new(),
        warnings: ctx.warnings().map(ToString::to_string).collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DESCRIPTOR: &str = r#"{
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": {"name": "crontabs.batch.acme.io"},
        "spec": {
            "group": "batch.acme.io",
            "names": {"plural": "crontabs", "kind": "CronTab"},
            "scope": "Namespaced",
            "versions": [{"name": "v1", "served": true, "storage": true}]
        }
    }"#;

    fn manifest(dir: &Path, package: &str) -> Manifest {
        fs::write(dir.join("crontab.json"), DESCRIPTOR).unwrap();
        let toml = format!(
            "[generator]\npackage = \"{package}\"\n\n[inputs]\ndescriptors = [\"crontab.json\"]\n"
        );
        toml.parse::<Manifest>().unwrap().rebase(dir)
    }

    #[test]
    fn test_generate_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest(dir.path(), "crds");
        let out = dir.path().join("out");

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: &out,
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.is_success());
        assert_eq!(report.descriptors, vec!["CronTab.batch.acme.io"]);
        assert!(out.join("zz.generated.scheme.go").exists());
        assert!(out.join("zz.generated.crds.go").exists());
        match report.result {
            GenerationResult::Written(files) => assert!(files.iter().all(|f| f.changed)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest(dir.path(), "crds");
        let opts = || GenerateOptions {
            output_dir: dir.path(),
            dry_run: false,
        };

        generate(&manifest, opts()).unwrap();
        let report = generate(&manifest, opts()).unwrap();
        match report.result {
            GenerationResult::Written(files) => assert!(files.iter().all(|f| !f.changed)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest(dir.path(), "crds");
        let out = dir.path().join("out");

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: &out,
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!out.exists());
        match report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 2);
                assert!(files[1].content.contains("func NewV1Set()"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lint_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest(dir.path(), "");

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(!report.is_success());
        assert!(!report.errors.is_empty());
        assert!(!dir.path().join("zz.generated.crds.go").exists());
    }
}
