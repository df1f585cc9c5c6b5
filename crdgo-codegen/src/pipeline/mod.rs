//! Generation pipeline.
//!
//! A [`Pipeline`] runs a fixed sequence of phases over one
//! [`GenerationContext`]:
//!
//! - validate: configuration lints, header loading
//! - shape: description truncation and attribution on the v1 descriptors
//! - convert: per-version conversion, trivial-version collapse and the
//!   `preserveUnknownFields` default
//! - render: `zz.generated.scheme.go` and `zz.generated.crds.go`
//!
//! Plugins are called before and after each phase.
//!
//! # Example
//!
//! ```no_run
//! use crdgo_codegen::{config::GeneratorConfig, pipeline::Pipeline};
//!
//! let descriptors = crdgo_apiext::load_descriptors(&["config/crd"])?;
//! let ctx = Pipeline::new().run(GeneratorConfig::new("crds"), descriptors)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ctx.write_to("pkg/crds".as_ref())?;
//! # Ok::<(), eyre::Report>(())
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{Descriptors, GenerationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
