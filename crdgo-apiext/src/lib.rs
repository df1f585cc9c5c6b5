//! CustomResourceDefinition descriptors for crdgo.
//!
//! Descriptors are authored and loaded in the `apiextensions.k8s.io/v1`
//! shape ([`v1::CustomResourceDefinition`]) and converted on demand into the
//! legacy `v1beta1` shape. Every descriptor type implements
//! [`crdgo_ir::Reflect`], so the serializer sees them as ordinary Go values
//! of the matching upstream packages.
//!
//! # Module Organization
//!
//! - [`meta`] - `metav1` object metadata
//! - [`schema`] - types shared verbatim by both API versions
//! - [`v1`], [`v1beta1`] - version-specific descriptor types
//! - [`convert`] - v1 to v1beta1 conversion and [`VersionedCrd`]
//! - [`shape`] - trivial-version collapse, description truncation, attribution
//! - [`load`] - reading descriptors from JSON files

mod error;
mod group_kind;
mod versioned;

pub mod convert;
pub mod load;
pub mod meta;
pub mod schema;
pub mod shape;
pub mod v1;
pub mod v1beta1;

pub use convert::{VersionedCrd, as_version};
pub use error::{Error, Result};
pub use group_kind::GroupKind;
pub use load::load_descriptors;
pub use versioned::Versioned;

/// API group of CustomResourceDefinition itself.
pub const GROUP: &str = "apiextensions.k8s.io";

/// Go package of the object metadata types.
pub const META_PACKAGE: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";

/// Go package of the `v1` descriptor types.
pub const V1_PACKAGE: &str = "k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1";

/// Go package of the `v1beta1` descriptor types.
pub const V1BETA1_PACKAGE: &str = "k8s.io/apiextensions-apiserver/pkg/apis/apiextensions/v1beta1";
