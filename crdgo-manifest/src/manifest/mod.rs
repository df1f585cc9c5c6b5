//! Manifest types and parsing for crdgo.toml files.

mod file;
mod generator;
mod inputs;
mod parse;
mod validate;

use std::path::Path;

pub use file::CrdgoToml;
pub use generator::{GeneratorSection, SUPPORTED_CRD_VERSIONS};
pub use inputs::{InputsSection, OutputSection};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for crdgo.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Descriptor sources and scheme packages
    #[serde(default)]
    pub inputs: InputsSection,

    /// Where generated files are written
    #[serde(default)]
    pub output: OutputSection,
}

impl Manifest {
    /// Resolve relative paths against `base`, normally the manifest's directory.
    pub fn rebase(mut self, base: &Path) -> Self {
        let join = |p: &Path| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.to_path_buf()
            }
        };
        self.generator.header_file = self.generator.header_file.as_deref().map(join);
        self.inputs.descriptors = self.inputs.descriptors.iter().map(|p| join(p)).collect();
        self.output.dir = join(&self.output.dir);
        self
    }
}
