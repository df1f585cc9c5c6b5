use std::path::PathBuf;

use crate::GroupKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported CustomResourceDefinition version '{0}' (expected v1 or v1beta1)")]
    UnknownVersion(String),

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected apiVersion '{expected}', found '{found}'")]
    ApiVersion {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("{path}: fields not carried by crdgo: {}", .fields.join(", "))]
    UnknownFields { path: PathBuf, fields: Vec<String> },

    #[error("descriptor for {group_kind} defined twice ({first} and {second})")]
    Duplicate {
        group_kind: GroupKind,
        first: PathBuf,
        second: PathBuf,
    },
}
