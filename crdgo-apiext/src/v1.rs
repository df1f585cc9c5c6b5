//! `apiextensions.k8s.io/v1` descriptors.

use crdgo_ir::{Field, Record, Reflect, TypeDesc, Value};
use serde::{Deserialize, Serialize};

use crate::V1_PACKAGE;
use crate::meta::{ObjectMeta, TypeMeta};
use crate::schema::{
    CustomResourceDefinitionNames, CustomResourceDefinitionStatus, CustomResourceSubresources,
    CustomResourceValidation, SelectableField, WebhookClientConfig, conversion_strategy,
    resource_scope,
};
use crate::versioned::Versioned;

pub const API_VERSION: &str = "apiextensions.k8s.io/v1";

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
        TypeDesc::named_struct(V1_PACKAGE, "CustomResourceDefinition")
    }

    fn reflect(&self) -> Value {
        let mut record = Record::named(V1_PACKAGE, "CustomResourceDefinition");
        record.fields = vec![
            Field::embedded("TypeMeta", self.type_meta.reflect()),
            Field::embedded("ObjectMeta", self.metadata.reflect()),
            Field::exported("Spec", self.spec.reflect()),
            Field::exported("Status", self.status.reflect_in(V1_PACKAGE)),
        ];
        record.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionSpec {
    pub group: String,
    pub names: CustomResourceDefinitionNames,
    pub scope: String,
    pub versions: Vec<CustomResourceDefinitionVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<CustomResourceConversion>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preserve_unknown_fields: bool,
}

impl Reflect for CustomResourceDefinitionSpec {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1_PACKAGE, "CustomResourceDefinitionSpec")
    }

    fn reflect(&self) -> Value {
        Record::named(V1_PACKAGE, "CustomResourceDefinitionSpec")
            .field("Group", self.group.reflect())
            .field("Names", self.names.reflect_in(V1_PACKAGE))
            .field("Scope", resource_scope(V1_PACKAGE, &self.scope))
            .field("Versions", self.versions.reflect())
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
        TypeDesc::named_struct(V1_PACKAGE, "CustomResourceDefinitionVersion")
    }

    fn reflect(&self) -> Value {
        Record::named(V1_PACKAGE, "CustomResourceDefinitionVersion")
            .field("Name", self.name.reflect())
            .field("Served", self.served.reflect())
            .field("Storage", self.storage.reflect())
            .field("Deprecated", self.deprecated.reflect())
            .field("DeprecationWarning", self.deprecation_warning.reflect())
            .field("Schema", self.schema.reflect_in(V1_PACKAGE))
            .field("Subresources", self.subresources.reflect_in(V1_PACKAGE))
            .field(
                "AdditionalPrinterColumns",
                self.additional_printer_columns.reflect(),
            )
            .field("SelectableFields", self.selectable_fields.reflect_in(V1_PACKAGE))
            .into()
    }
}

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
    pub json_path: String,
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

impl Reflect for CustomResourceColumnDefinition {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1_PACKAGE, "CustomResourceColumnDefinition")
    }

    fn reflect(&self) -> Value {
        Record::named(V1_PACKAGE, "CustomResourceColumnDefinition")
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
#[serde(default)]
pub struct CustomResourceConversion {
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookConversion>,
}

impl Reflect for CustomResourceConversion {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1_PACKAGE, "CustomResourceConversion")
    }

    fn reflect(&self) -> Value {
        Record::named(V1_PACKAGE, "CustomResourceConversion")
            .field("Strategy", conversion_strategy(V1_PACKAGE, &self.strategy))
            .field("Webhook", self.webhook.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookConversion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_config: Option<WebhookClientConfig>,
    pub conversion_review_versions: Vec<String>,
}

impl Reflect for WebhookConversion {
    fn type_desc() -> TypeDesc {
        TypeDesc::named_struct(V1_PACKAGE, "WebhookConversion")
    }

    fn reflect(&self) -> Value {
        Record::named(V1_PACKAGE, "WebhookConversion")
            .field("ClientConfig", self.client_config.reflect_in(V1_PACKAGE))
            .field(
                "ConversionReviewVersions",
                self.conversion_review_versions.reflect(),
            )
            .into()
    }
}
