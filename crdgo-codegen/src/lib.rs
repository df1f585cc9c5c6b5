//! Go source generation for crdgo.
//!
//! Turns reflected values into Go expressions that rebuild them, and drives
//! the generation of the scheme and values files for a set of
//! CustomResourceDefinitions.
//!
//! # Module Organization
//!
//! - [`builder`] - indentation-aware code building and Go expressions
//! - [`imports`] - run-wide import alias registry and per-file scopes
//! - [`literal`] - scalar literals
//! - [`types`] - Go type expressions
//! - [`serializer`] - structural value serializer and its gap reporting
//! - [`opaque`] - decode-at-runtime fallback for records with private state
//! - [`go_file`] - Go file layout
//! - [`config`] - generator settings
//! - [`pipeline`] - validate, shape, convert and render phases

pub mod builder;
pub mod config;
pub mod go_file;
pub mod imports;
pub mod literal;
pub mod opaque;
pub mod pipeline;
pub mod serializer;
pub mod types;

pub use config::GeneratorConfig;
pub use imports::{ImportRegistry, ImportScope};
pub use pipeline::{GenerationContext, Pipeline};
pub use serializer::{Emitted, GapReason, Serializer, Unsupported};
