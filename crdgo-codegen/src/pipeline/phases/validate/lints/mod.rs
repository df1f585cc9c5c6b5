//! Built-in lints for configuration validation.

mod crd_versions;
mod empty_input;
mod package_name;
mod preserve_unknown_fields;

pub use crd_versions::CrdVersionLint;
pub use empty_input::EmptyInputLint;
pub use package_name::PackageNameLint;
pub use preserve_unknown_fields::PreserveUnknownFieldsLint;
