use std::path::PathBuf;

use serde::Deserialize;

/// The `[inputs]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsSection {
    /// Descriptor JSON files, or directories holding `*.json` descriptors
    #[serde(default)]
    pub descriptors: Vec<PathBuf>,

    /// Go packages whose types are registered with the client scheme
    #[serde(default)]
    pub scheme_packages: Vec<String>,
}

/// The `[output]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Directory the generated files are written to
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}
