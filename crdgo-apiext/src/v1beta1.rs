//! `apiextensions.k8s.io/v1beta1` descriptors.
//!
//! The legacy shape keeps a top-level `validation`, `subresources` and
//! `additionalPrinterColumns` next to the per-version fields, flattens the
//! webhook settings into `conversion`, and leaves `preserveUnknownFields`
//! optional.

use crdgo_ir::{Field, Record, Reflect, TypeDesc, Value};
use serde::{Deserialize, Serialize};

use crate::V1BETA1_PACKAGE;
use crate::meta::{ObjectMeta, TypeMeta};
use crate::schema::{
    CustomResourceDefinitionNames, CustomResourceDefinitionStatus, CustomResourceSubresources,
    CustomResourceValidation, SelectableField, WebhookClientConfig, conversion_strategy,
    resource_scope,
};
use crate::versioned::Versioned;

pub const API_VERSION: &str = "apiextensions.k8s.io/v1beta1";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceDefinition {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: CustomResourceDefinitionSpec,
    pub status: CustomResourceDefinitionStatus,
}

impl Reflect for CustomResourceDefinition {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1BETA1_PACKAGE, "CustomResourceDefinition")
    }

    fn reflect(&self) -> Value {
        let mut record = Record::named(V1BETA1_PACKAGE, "CustomResourceDefinition");
        record.fields = vec![
            Field::embedded("TypeMeta", self.type_meta.reflect()),
            Field::embedded("ObjectMeta", self.metadata.reflect()),
            Field::exported("Spec", self.spec.reflect()),
            Field::exported("Status", self.status.reflect_in(V1BETA1_PACKAGE)),
        ];
        record.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionSpec {
    pub group: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    pub names: CustomResourceDefinitionNames,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<CustomResourceValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subresources: Option<CustomResourceSubresources>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<CustomResourceDefinitionVersion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_printer_columns: Vec<CustomResourceColumnDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selectable_fields: Vec<SelectableField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<CustomResourceConversion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_unknown_fields: Option<bool>,
}

impl Reflect for CustomResourceDefinitionSpec {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1BETA1_PACKAGE, "CustomResourceDefinitionSpec")
    }

    fn reflect(&self) -> Value {
        Record::named(V1BETA1_PACKAGE, "CustomResourceDefinitionSpec")
            .field("Group", self.group.reflect())
            .field("Version", self.version.reflect())
            .field("Names", self.names.reflect_in(V1BETA1_PACKAGE))
            .field("Scope", resource_scope(V1BETA1_PACKAGE, &self.scope))
            .field("Validation", self.validation.reflect_in(V1BETA1_PACKAGE))
            .field("Subresources", self.subresources.reflect_in(V1BETA1_PACKAGE))
            .field("Versions", self.versions.reflect())
            .field(
                "AdditionalPrinterColumns",
                self.additional_printer_columns.reflect(),
            )
            .field(
                "SelectableFields",
                self.selectable_fields.reflect_in(V1BETA1_PACKAGE),
            )
            .field("Conversion", self.conversion.reflect())
            .field("PreserveUnknownFields", self.preserve_unknown_fields.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionVersion {
    pub name: String,
    pub served: bool,
    pub storage: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<CustomResourceValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subresources: Option<CustomResourceSubresources>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_printer_columns: Vec<CustomResourceColumnDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selectable_fields: Vec<SelectableField>,
}

impl Reflect for CustomResourceDefinitionVersion {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1BETA1_PACKAGE, "CustomResourceDefinitionVersion")
    }

    fn reflect(&self) -> Value {
        Record::named(V1BETA1_PACKAGE, "CustomResourceDefinitionVersion")
            .field("Name", self.name.reflect())
            .field("Served", self.served.reflect())
            .field("Storage", self.storage.reflect())
            .field("Deprecated", self.deprecated.reflect())
            .field("DeprecationWarning", self.deprecation_warning.reflect())
            .field("Schema", self.schema.reflect_in(V1BETA1_PACKAGE))
            .field("Subresources", self.subresources.reflect_in(V1BETA1_PACKAGE))
            .field(
                "AdditionalPrinterColumns",
                self.additional_printer_columns.reflect(),
            )
            .field(
                "SelectableFields",
                self.selectable_fields.reflect_in(V1BETA1_PACKAGE),
            )
            .into()
    }
}

/// A printer column. The JSON key for the path is `JSONPath` in this version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub priority: i32,
    #[serde(rename = "JSONPath")]
    pub json_path: String,
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

impl Reflect for CustomResourceColumnDefinition {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1BETA1_PACKAGE, "CustomResourceColumnDefinition")
    }

    fn reflect(&self) -> Value {
        Record::named(V1BETA1_PACKAGE, "CustomResourceColumnDefinition")
            .field("Name", self.name.reflect())
            .field("Type", self.type_.reflect())
            .field("Format", self.format.reflect())
            .field("Description", self.description.reflect())
            .field("Priority", self.priority.reflect())
            .field("JSONPath", self.json_path.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceConversion {
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_client_config: Option<WebhookClientConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conversion_review_versions: Vec<String>,
}

impl Reflect for CustomResourceConversion {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1BETA1_PACKAGE, "CustomResourceConversion")
    }

    fn reflect(&self) -> Value {
        Record::named(V1BETA1_PACKAGE, "CustomResourceConversion")
            .field("Strategy", conversion_strategy(V1BETA1_PACKAGE, &self.strategy))
            .field(
                "WebhookClientConfig",
                self.webhook_client_config.reflect_in(V1BETA1_PACKAGE),
            )
            .field(
                "ConversionReviewVersions",
                self.conversion_review_versions.reflect(),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_uses_legacy_json_key() {
        let column = CustomResourceColumnDefinition {
            name: "Ready".into(),
            type_: "string".into(),
            json_path: ".status.ready".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["JSONPath"], ".status.ready");
        assert!(json.get("jsonPath").is_none());
    }

    #[test]
    fn test_unset_preserve_unknown_fields_is_zero() {
        let Value::Record(record) = CustomResourceDefinitionSpec::default().reflect() else {
            panic!("expected a record");
        };
        let field = record
            .fields
            .iter()
            .find(|f| f.name == "PreserveUnknownFields")
            .unwrap();
        assert!(field.value.is_zero());
    }
}
