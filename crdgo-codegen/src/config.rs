//! Generator settings, decoupled from how they were written down.

use std::path::PathBuf;

use crdgo_core::Version;
use crdgo_manifest::Manifest;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Go package name of the generated files.
    pub package_name: String,
    /// Output API versions, in emission order. Empty means `["v1"]`.
    pub crd_versions: Vec<String>,
    /// Collapse v1beta1 output to the storage version's schema.
    pub trivial_versions: bool,
    pub preserve_unknown_fields: Option<bool>,
    /// Description limit; `Some(0)` drops descriptions.
    pub max_desc_len: Option<usize>,
    pub header_file: Option<PathBuf>,
    /// Replaces ` YEAR` in the header.
    pub year: String,
    /// Packages registered with the client scheme, besides apiextensions.
    pub scheme_packages: Vec<String>,
    /// Recorded in the attribution annotation.
    pub tool_version: String,
}

impl GeneratorConfig {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    /// The versions to emit, defaulting to `v1`.
    pub fn crd_versions(&self) -> Vec<&str> {
        if self.crd_versions.is_empty() {
            vec!["v1"]
        } else {
            self.crd_versions.iter().map(String::as_str).collect()
        }
    }

    /// True when `v1beta1` is the only requested version.
    pub fn v1beta1_only(&self) -> bool {
        self.crd_versions() == ["v1beta1"]
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: String::new(),
            crd_versions: vec!["v1".to_string()],
            trivial_versions: false,
            preserve_unknown_fields: None,
            max_desc_len: None,
            header_file: None,
            year: String::new(),
            scheme_packages: Vec::new(),
            tool_version: Version::current().to_string(),
        }
    }
}

impl From<&Manifest> for GeneratorConfig {
    fn from(manifest: &Manifest) -> Self {
        let generator = &manifest.generator;
        Self {
            package_name: generator.package.clone(),
            crd_versions: generator.crd_versions.clone(),
            trivial_versions: generator.trivial_versions,
            preserve_unknown_fields: generator.preserve_unknown_fields,
            max_desc_len: generator.max_desc_len,
            header_file: generator.header_file.clone(),
            year: generator.year.clone(),
            scheme_packages: manifest.inputs.scheme_packages.clone(),
            tool_version: generator
                .attribution
                .clone()
                .unwrap_or_else(Version::current)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("crds");
        assert_eq!(config.crd_versions(), ["v1"]);
        assert!(!config.v1beta1_only());
        assert_eq!(config.tool_version, Version::current().to_string());
    }

    #[test]
    fn test_empty_versions_mean_v1() {
        let config = GeneratorConfig {
            crd_versions: Vec::new(),
            ..GeneratorConfig::new("crds")
        };
        assert_eq!(config.crd_versions(), ["v1"]);
    }

    #[test]
    fn test_from_manifest() {
        let manifest: Manifest = r#"
            [generator]
            package = "crds"
            crd_versions = ["v1beta1"]
            max_desc_len = 0
            year = "2025"
            attribution = "v9.9.9"

            [inputs]
            scheme_packages = ["github.com/acme/api/v1"]
        "#
        .parse()
        .unwrap();

        let config = GeneratorConfig::from(&manifest);
        assert_eq!(config.package_name, "crds");
        assert!(config.v1beta1_only());
        assert_eq!(config.max_desc_len, Some(0));
        assert_eq!(config.year, "2025");
        assert_eq!(config.tool_version, "v9.9.9");
        assert_eq!(config.scheme_packages, vec!["github.com/acme/api/v1"]);
    }
}
