//! Explain operation - what a generate run would do.

use std::path::Path;

use crdgo_codegen::{
    GeneratorConfig,
    pipeline::{Pipeline, phases::ValidatePhase},
};
use crdgo_core::capitalize;
use crdgo_manifest::Manifest;
use eyre::{Context, Result};

use super::load_descriptors;
use crate::reports::{
    ConstructorInfo, DescriptorInfo, ExplainReport, LintInfo, ManifestInfo, PhaseInfo,
};

/// Execute the explain operation.
///
/// Runs the pipeline in memory and describes its phases, lints and output.
pub fn explain(manifest: &Manifest, config_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let config = GeneratorConfig::from(manifest);
    let manifest_info = ManifestInfo {
        package: config.package_name.clone(),
        crd_versions: config.crd_versions().join(", "),
        trivial_versions: config.trivial_versions,
        max_desc_len: config.max_desc_len,
        attribution: config.tool_version.clone(),
    };

    let descriptors = load_descriptors(manifest)?;
    let ctx = pipeline
        .run(config, descriptors)
        .wrap_err("Pipeline failed")?;

    let descriptors = ctx
        .descriptors
        .iter()
        .map(|(gk, crd)| DescriptorInfo {
            name: gk.to_string(),
            scope: crd.spec.scope.clone(),
            versions: crd.spec.versions.iter().map(|v| v.name.clone()).collect(),
        })
        .collect();

    let constructors = ctx
        .versioned
        .iter()
        .map(|(version, crds)| ConstructorInfo {
            name: format!("New{}Set", capitalize(version)),
            count: crds.len(),
        })
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        manifest: manifest_info,
        phases,
        lints,
        descriptors,
        constructors,
        files: ctx.files.iter().map(|f| f.path().display().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_without_descriptors() {
        let manifest: Manifest = "[generator]\npackage = \"crds\"\ncrd_versions = [\"v1\", \"v1beta1\"]\n"
            .parse()
            .unwrap();
        let report = explain(&manifest, Path::new("crdgo.toml")).unwrap();

        assert_eq!(report.manifest.crd_versions, "v1, v1beta1");
        assert_eq!(
            report.phases.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["validate", "shape", "convert", "render"]
        );
        assert!(report.lints.len() >= 4);
        assert!(report.descriptors.is_empty());
        assert!(report.files.is_empty());
    }
}
