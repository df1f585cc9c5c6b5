//! crdgo.toml parsing and validation.
//!
//! ```toml
//! [generator]
//! package = "crds"
//! crd_versions = ["v1"]
//!
//! [inputs]
//! descriptors = ["config/crd"]
//! scheme_packages = ["github.com/acme/api/v1"]
//!
//! [output]
//! dir = "pkg/crds"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CrdgoToml, GeneratorSection, InputsSection, Manifest, OutputSection, ParseContext,
    SUPPORTED_CRD_VERSIONS,
};
