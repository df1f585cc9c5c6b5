use std::path::PathBuf;

use crdgo_core::Version;
use serde::Deserialize;

/// CustomResourceDefinition API versions crdgo can emit.
pub const SUPPORTED_CRD_VERSIONS: &[&str] = &["v1", "v1beta1"];

/// The `[generator]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Go package name of the generated files
    #[serde(default)]
    pub package: String,

    /// Output API versions, in the order their constructors are emitted
    #[serde(default = "default_crd_versions")]
    pub crd_versions: Vec<String>,

    /// Collapse v1beta1 output to a single schema taken from the storage version
    #[serde(default)]
    pub trivial_versions: bool,

    /// Turn off pruning of unknown fields; unset means "v1beta1 default"
    pub preserve_unknown_fields: Option<bool>,

    /// Maximum description length; 0 drops descriptions
    pub max_desc_len: Option<usize>,

    /// License header prepended to generated files
    pub header_file: Option<PathBuf>,

    /// Substituted for " YEAR" in the header
    #[serde(default)]
    pub year: String,

    /// Version recorded in the attribution annotation (defaults to this tool's version)
    pub attribution: Option<Version>,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            package: String::new(),
            crd_versions: default_crd_versions(),
            trivial_versions: false,
            preserve_unknown_fields: None,
            max_desc_len: None,
            header_file: None,
            year: String::new(),
            attribution: None,
        }
    }
}

fn default_crd_versions() -> Vec<String> {
    vec!["v1".to_string()]
}
