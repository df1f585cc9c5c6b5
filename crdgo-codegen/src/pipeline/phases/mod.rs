//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the configuration and loads the header
//! - [`ShapePhase`] - truncates descriptions and stamps attribution
//! - [`ConvertPhase`] - converts descriptors into each requested version
//! - [`RenderPhase`] - renders the scheme and values files

mod convert;
mod render;
mod shape;
mod validate;

pub use convert::ConvertPhase;
pub use render::{CRDS_FILE, RenderPhase, SCHEME_FILE, scheme_packages};
pub use shape::ShapePhase;
pub use validate::{
    CrdVersionLint, EmptyInputLint, Lint, LintInfo, PackageNameLint, PreserveUnknownFieldsLint,
    ValidatePhase, load_header,
};
