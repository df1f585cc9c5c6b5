//! Object metadata (`k8s.io/apimachinery/pkg/apis/meta/v1`).

use std::collections::BTreeMap;

use crdgo_ir::{Codec, Record, Reflect, TypeDesc, Value};
use serde::{Deserialize, Serialize};

use crate::META_PACKAGE;

/// Kind and API version of a serialized object. Embedded in every descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

impl TypeMeta {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            api_version: api_version.into(),
        }
    }
}

impl Reflect for TypeMeta {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(META_PACKAGE, "TypeMeta")
    }

    fn reflect(&self) -> Value {
        Record::named(META_PACKAGE, "TypeMeta")
            .field("Kind", self.kind.reflect())
            .field("APIVersion", self.api_version.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    pub creation_timestamp: Time,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Reflect for ObjectMeta {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(META_PACKAGE, "ObjectMeta")
    }

    fn reflect(&self) -> Value {
        Record::named(META_PACKAGE, "ObjectMeta")
            .field("Name", self.name.reflect())
            .field("Namespace", self.namespace.reflect())
            .field("CreationTimestamp", self.creation_timestamp.reflect())
            .field("Labels", self.labels.reflect())
            .field("Annotations", self.annotations.reflect())
            .into()
    }
}

/// A timestamp in RFC 3339 form; `None` is the zero time and encodes as `null`.
///
/// The Go type keeps its state in unexported fields, so it reflects as a
/// record with a private field plus a JSON codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(pub Option<String>);

impl Time {
    pub fn new(rfc3339: impl Into<String>) -> Self {
        Self(Some(rfc3339.into()))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }
}

impl Reflect for Time {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(META_PACKAGE, "Time")
    }

    fn reflect(&self) -> Value {
        Record::named(META_PACKAGE, "Time")
            .private("time", self.0.clone().unwrap_or_default().reflect())
            .with_codec(Codec::json(self))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_json() {
        assert_eq!(serde_json::to_string(&Time::default()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Time::new("2025-01-02T03:04:05Z")).unwrap(),
            r#""2025-01-02T03:04:05Z""#
        );
        let back: Time = serde_json::from_str("null").unwrap();
        assert!(back.is_zero());
    }

    #[test]
    fn test_time_reflects_with_codec() {
        let Value::Record(record) = Time::new("2025-01-02T03:04:05Z").reflect() else {
            panic!("expected a record");
        };
        assert!(record.has_private_fields());
        assert!(!record.is_zero());
        let codec = record.codec.expect("codec");
        assert_eq!(codec.encoded(), Ok(r#""2025-01-02T03:04:05Z""#));

        assert!(Time::default().reflect().is_zero());
    }

    #[test]
    fn test_object_meta_defaults_are_zero() {
        assert!(ObjectMeta::default().reflect().is_zero());

        let mut meta = ObjectMeta {
            name: "crontabs.batch.acme.io".into(),
            ..Default::default()
        };
        meta.annotations.insert("a".into(), "b".into());
        assert!(!meta.reflect().is_zero());
    }

    #[test]
    fn test_object_meta_parses_controller_gen_output() {
        let meta: ObjectMeta = serde_json::from_str(
            r#"{"name":"x","creationTimestamp":null,"annotations":{"k":"v"}}"#,
        )
        .unwrap();
        assert_eq!(meta.name, "x");
        assert!(meta.creation_timestamp.is_zero());
        assert_eq!(meta.annotations.get("k").map(String::as_str), Some("v"));
    }
}
