//! Types declared identically in the `v1` and `v1beta1` packages.
//!
//! They implement [`Versioned`] rather than [`Reflect`]: the Go package a
//! value belongs to is decided by the descriptor that embeds it.

use std::collections::BTreeMap;

use crdgo_ir::{Record, Reflect, ScalarKind, TypeDesc, TypeName, Value};
use serde::{Deserialize, Serialize};

use crate::meta::Time;
use crate::versioned::{Versioned, named_string};

/// Arbitrary JSON, held as `Raw []byte` on the Go side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(pub serde_json::Value);

impl Versioned for Json {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "JSON")
    }

    fn reflect_in(&self, package: &str) -> Value {
        let raw = self.0.to_string().into_bytes();
        Record::named(package, "JSON")
            .field("Raw", raw.reflect())
            .into()
    }
}

/// An OpenAPI v3 schema with the Kubernetes extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonSchemaProps {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "$schema", skip_serializing_if = "String::is_empty")]
    pub schema: String,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_maximum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "is_false")]
    pub exclusive_minimum: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<i64>,
    #[serde(skip_serializing_if = "is_false")]
    pub unique_items: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_: Vec<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchemaPropsOrArray>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<JsonSchemaProps>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<JsonSchemaPropsOrBool>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub pattern_properties: BTreeMap<String, JsonSchemaProps>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, JsonSchemaPropsOrStringArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<Box<JsonSchemaPropsOrBool>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, JsonSchemaProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Json>,
    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,
    #[serde(
        rename = "x-kubernetes-preserve-unknown-fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub x_preserve_unknown_fields: Option<bool>,
    #[serde(
        rename = "x-kubernetes-embedded-resource",
        skip_serializing_if = "is_false"
    )]
    pub x_embedded_resource: bool,
    #[serde(rename = "x-kubernetes-int-or-string", skip_serializing_if = "is_false")]
    pub x_int_or_string: bool,
    #[serde(
        rename = "x-kubernetes-list-map-keys",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub x_list_map_keys: Vec<String>,
    #[serde(rename = "x-kubernetes-list-type", skip_serializing_if = "Option::is_none")]
    pub x_list_type: Option<String>,
    #[serde(rename = "x-kubernetes-map-type", skip_serializing_if = "Option::is_none")]
    pub x_map_type: Option<String>,
    #[serde(
        rename = "x-kubernetes-validations",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub x_validations: Vec<ValidationRule>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl JsonSchemaProps {
    /// Visit this schema and every nested schema, parents before children.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut JsonSchemaProps)) {
        f(self);
        if let Some(items) = self.items.as_deref_mut() {
            if let Some(schema) = items.schema.as_deref_mut() {
                schema.walk_mut(f);
            }
            for schema in &mut items.json_schemas {
                schema.walk_mut(f);
            }
        }
        for schema in self
            .all_of
            .iter_mut()
            .chain(self.one_of.iter_mut())
            .chain(self.any_of.iter_mut())
        {
            schema.walk_mut(f);
        }
        if let Some(not) = self.not.as_deref_mut() {
            not.walk_mut(f);
        }
        for schema in [
            self.additional_properties.as_deref_mut(),
            self.additional_items.as_deref_mut(),
        ]
        .into_iter()
        .flatten()
        .filter_map(|a| a.schema.as_deref_mut())
        {
            schema.walk_mut(f);
        }
        for schema in self
            .dependencies
            .values_mut()
            .filter_map(|d| d.schema.as_deref_mut())
        {
            schema.walk_mut(f);
        }
        for schema in self
            .properties
            .values_mut()
            .chain(self.pattern_properties.values_mut())
            .chain(self.definitions.values_mut())
        {
            schema.walk_mut(f);
        }
    }
}

impl Versioned for JsonSchemaProps {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "JSONSchemaProps")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "JSONSchemaProps")
            .field("ID", self.id.reflect())
            .field("Schema", named_string(package, "JSONSchemaURL", &self.schema))
            .field("Ref", self.reference.reflect())
            .field("Description", self.description.reflect())
            .field("Type", self.type_.reflect())
            .field("Format", self.format.reflect())
            .field("Title", self.title.reflect())
            .field("Default", self.default.reflect_in(package))
            .field("Maximum", self.maximum.reflect())
            .field("ExclusiveMaximum", self.exclusive_maximum.reflect())
            .field("Minimum", self.minimum.reflect())
            .field("ExclusiveMinimum", self.exclusive_minimum.reflect())
            .field("MaxLength", self.max_length.reflect())
            .field("MinLength", self.min_length.reflect())
            .field("Pattern", self.pattern.reflect())
            .field("MaxItems", self.max_items.reflect())
            .field("MinItems", self.min_items.reflect())
            .field("UniqueItems", self.unique_items.reflect())
            .field("MultipleOf", self.multiple_of.reflect())
            .field("Enum", self.enum_.reflect_in(package))
            .field("MaxProperties", self.max_properties.reflect())
            .field("MinProperties", self.min_properties.reflect())
            .field("Required", self.required.reflect())
            .field("Items", self.items.reflect_in(package))
            .field("AllOf", self.all_of.reflect_in(package))
            .field("OneOf", self.one_of.reflect_in(package))
            .field("AnyOf", self.any_of.reflect_in(package))
            .field("Not", self.not.reflect_in(package))
            .field("Properties", self.properties.reflect_in(package))
            .field(
                "AdditionalProperties",
                self.additional_properties.reflect_in(package),
            )
            .field(
                "PatternProperties",
                self.pattern_properties.reflect_in(package),
            )
            .field("Dependencies", self.dependencies.reflect_in(package))
            .field("AdditionalItems", self.additional_items.reflect_in(package))
            .field("Definitions", self.definitions.reflect_in(package))
            .field("ExternalDocs", self.external_docs.reflect_in(package))
            .field("Example", self.example.reflect_in(package))
            .field("Nullable", self.nullable.reflect())
            .field(
                "XPreserveUnknownFields",
                self.x_preserve_unknown_fields.reflect(),
            )
            .field("XEmbeddedResource", self.x_embedded_resource.reflect())
            .field("XIntOrString", self.x_int_or_string.reflect())
            .field("XListMapKeys", self.x_list_map_keys.reflect())
            .field("XListType", self.x_list_type.reflect())
            .field("XMapType", self.x_map_type.reflect())
            .field("XValidations", self.x_validations.reflect_in(package))
            .into()
    }
}

/// `items`: a single schema for every element, or one schema per position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrArrayRepr", into = "OrArrayRepr")]
pub struct JsonSchemaPropsOrArray {
    pub schema: Option<Box<JsonSchemaProps>>,
    pub json_schemas: Vec<JsonSchemaProps>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OrArrayRepr {
    Array(Vec<JsonSchemaProps>),
    Schema(Box<JsonSchemaProps>),
}

impl From<OrArrayRepr> for JsonSchemaPropsOrArray {
    fn from(repr: OrArrayRepr) -> Self {
        match repr {
            OrArrayRepr::Array(json_schemas) => Self {
                schema: None,
                json_schemas,
            },
            OrArrayRepr::Schema(schema) => Self {
                schema: Some(schema),
                json_schemas: Vec::new(),
            },
        }
    }
}

impl From<JsonSchemaPropsOrArray> for OrArrayRepr {
    fn from(value: JsonSchemaPropsOrArray) -> Self {
        match value.schema {
            Some(schema) => Self::Schema(schema),
            None => Self::Array(value.json_schemas),
        }
    }
}

impl Versioned for JsonSchemaPropsOrArray {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "JSONSchemaPropsOrArray")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "JSONSchemaPropsOrArray")
            .field("Schema", self.schema.reflect_in(package))
            .field("JSONSchemas", self.json_schemas.reflect_in(package))
            .into()
    }
}

/// `additionalProperties`: a boolean, or a schema (which implies `true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrBoolRepr", into = "OrBoolRepr")]
pub struct JsonSchemaPropsOrBool {
    pub allows: bool,
    pub schema: Option<Box<JsonSchemaProps>>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OrBoolRepr {
    Bool(bool),
    Schema(Box<JsonSchemaProps>),
}

impl From<OrBoolRepr> for JsonSchemaPropsOrBool {
    fn from(repr: OrBoolRepr) -> Self {
        match repr {
            OrBoolRepr::Bool(allows) => Self {
                allows,
                schema: None,
            },
            OrBoolRepr::Schema(schema) => Self {
                allows: true,
                schema: Some(schema),
            },
        }
    }
}

impl From<JsonSchemaPropsOrBool> for OrBoolRepr {
    fn from(value: JsonSchemaPropsOrBool) -> Self {
        match value.schema {
            Some(schema) => Self::Schema(schema),
            None => Self::Bool(value.allows),
        }
    }
}

impl Versioned for JsonSchemaPropsOrBool {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "JSONSchemaPropsOrBool")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "JSONSchemaPropsOrBool")
            .field("Allows", self.allows.reflect())
            .field("Schema", self.schema.reflect_in(package))
            .into()
    }
}

/// A `dependencies` entry: a schema the object must also satisfy, or the
/// properties that must be present alongside the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrStringArrayRepr", into = "OrStringArrayRepr")]
pub struct JsonSchemaPropsOrStringArray {
    pub schema: Option<Box<JsonSchemaProps>>,
    pub property: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OrStringArrayRepr {
    Property(Vec<String>),
    Schema(Box<JsonSchemaProps>),
}

impl From<OrStringArrayRepr> for JsonSchemaPropsOrStringArray {
    fn from(repr: OrStringArrayRepr) -> Self {
        match repr {
            OrStringArrayRepr::Property(property) => Self {
                schema: None,
                property,
            },
            OrStringArrayRepr::Schema(schema) => Self {
                schema: Some(schema),
                property: Vec::new(),
            },
        }
    }
}

impl From<JsonSchemaPropsOrStringArray> for OrStringArrayRepr {
    fn from(value: JsonSchemaPropsOrStringArray) -> Self {
        match value.schema {
            Some(schema) => Self::Schema(schema),
            None => Self::Property(value.property),
        }
    }
}

impl Versioned for JsonSchemaPropsOrStringArray {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "JSONSchemaPropsOrStringArray")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "JSONSchemaPropsOrStringArray")
            .field("Schema", self.schema.reflect_in(package))
            .field("Property", self.property.reflect())
            .into()
    }
}

/// A CEL rule from `x-kubernetes-validations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRule {
    pub rule: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_old_self: Option<bool>,
}

impl Versioned for ValidationRule {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "ValidationRule")
    }

    fn reflect_in(&self, package: &str) -> Value {
        let reason_type = TypeName::new(package, "FieldValueErrorReason");
        let reason = match &self.reason {
            Some(reason) => {
                Value::pointer_to(named_string(package, "FieldValueErrorReason", reason))
            }
            None => Value::nil(TypeDesc::named_scalar(ScalarKind::String, reason_type)),
        };
        Record::named(package, "ValidationRule")
            .field("Rule", self.rule.reflect())
            .field("Message", self.message.reflect())
            .field("MessageExpression", self.message_expression.reflect())
            .field("Reason", reason)
            .field("FieldPath", self.field_path.reflect())
            .field("OptionalOldSelf", self.optional_old_self.reflect())
            .into()
    }
}

/// A field usable in field selectors, named by a JSON path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectableField {
    pub json_path: String,
}

impl Versioned for SelectableField {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "SelectableField")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "SelectableField")
            .field("JSONPath", self.json_path.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Versioned for ExternalDocumentation {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "ExternalDocumentation")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "ExternalDocumentation")
            .field("Description", self.description.reflect())
            .field("URL", self.url.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionNames {
    pub plural: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub singular: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub short_names: Vec<String>,
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub list_kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

impl Versioned for CustomResourceDefinitionNames {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceDefinitionNames")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceDefinitionNames")
            .field("Plural", self.plural.reflect())
            .field("Singular", self.singular.reflect())
            .field("ShortNames", self.short_names.reflect())
            .field("Kind", self.kind.reflect())
            .field("ListKind", self.list_kind.reflect())
            .field("Categories", self.categories.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceValidation {
    #[serde(rename = "openAPIV3Schema", skip_serializing_if = "Option::is_none")]
    pub open_api_v3_schema: Option<JsonSchemaProps>,
}

impl Versioned for CustomResourceValidation {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceValidation")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceValidation")
            .field("OpenAPIV3Schema", self.open_api_v3_schema.reflect_in(package))
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomResourceSubresources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomResourceSubresourceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<CustomResourceSubresourceScale>,
}

impl Versioned for CustomResourceSubresources {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceSubresources")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceSubresources")
            .field("Status", self.status.reflect_in(package))
            .field("Scale", self.scale.reflect_in(package))
            .into()
    }
}

/// Enables the `/status` subresource. Carries no configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomResourceSubresourceStatus {}

impl Versioned for CustomResourceSubresourceStatus {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceSubresourceStatus")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceSubresourceStatus").into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceSubresourceScale {
    pub spec_replicas_path: String,
    pub status_replicas_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector_path: Option<String>,
}

impl Versioned for CustomResourceSubresourceScale {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceSubresourceScale")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceSubresourceScale")
            .field("SpecReplicasPath", self.spec_replicas_path.reflect())
            .field("StatusReplicasPath", self.status_replicas_path.reflect())
            .field("LabelSelectorPath", self.label_selector_path.reflect())
            .into()
    }
}

/// How the API server reaches a conversion webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceReference>,
}

impl Versioned for WebhookClientConfig {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "WebhookClientConfig")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "WebhookClientConfig")
            .field("URL", self.url.reflect())
            .field("Service", self.service.reflect_in(package))
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceReference {
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
}

impl Versioned for ServiceReference {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "ServiceReference")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "ServiceReference")
            .field("Namespace", self.namespace.reflect())
            .field("Name", self.name.reflect())
            .field("Path", self.path.reflect())
            .field("Port", self.port.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<CustomResourceDefinitionCondition>,
    pub accepted_names: CustomResourceDefinitionNames,
    pub stored_versions: Vec<String>,
}

impl Versioned for CustomResourceDefinitionStatus {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceDefinitionStatus")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceDefinitionStatus")
            .field("Conditions", self.conditions.reflect_in(package))
            .field("AcceptedNames", self.accepted_names.reflect_in(package))
            .field("StoredVersions", self.stored_versions.reflect())
            .into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomResourceDefinitionCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub last_transition_time: Time,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Versioned for CustomResourceDefinitionCondition {
    fn type_desc_in(package: &str) -> TypeDesc {
        TypeDesc::named_struct(package, "CustomResourceDefinitionCondition")
    }

    fn reflect_in(&self, package: &str) -> Value {
        Record::named(package, "CustomResourceDefinitionCondition")
            .field(
                "Type",
                named_string(package, "CustomResourceDefinitionConditionType", &self.type_),
            )
            .field(
                "Status",
                named_string(package, "ConditionStatus", &self.status),
            )
            .field("LastTransitionTime", self.last_transition_time.reflect())
            .field("Reason", self.reason.reflect())
            .field("Message", self.message.reflect())
            .into()
    }
}

/// `type ResourceScope string`
pub(crate) fn resource_scope(package: &str, scope: &str) -> Value {
    named_string(package, "ResourceScope", scope)
}

/// `type ConversionStrategyType string`
pub(crate) fn conversion_strategy(package: &str, strategy: &str) -> Value {
    named_string(package, "ConversionStrategyType", strategy)
}

#[cfg(test)]
mod tests {
    use crdgo_ir::Kind;

    use super::*;
    use crate::V1_PACKAGE;

    #[test]
    fn test_or_array_parses_both_forms() {
        let single: JsonSchemaPropsOrArray =
            serde_json::from_str(r#"{"type":"string"}"#).unwrap();
        assert_eq!(single.schema.as_deref().map(|s| s.type_.as_str()), Some("string"));
        assert!(single.json_schemas.is_empty());

        let tuple: JsonSchemaPropsOrArray =
            serde_json::from_str(r#"[{"type":"string"},{"type":"integer"}]"#).unwrap();
        assert!(tuple.schema.is_none());
        assert_eq!(tuple.json_schemas.len(), 2);
    }

    #[test]
    fn test_or_bool_parses_both_forms() {
        let flag: JsonSchemaPropsOrBool = serde_json::from_str("false").unwrap();
        assert!(!flag.allows);
        assert!(flag.schema.is_none());

        let schema: JsonSchemaPropsOrBool =
            serde_json::from_str(r#"{"type":"integer"}"#).unwrap();
        assert!(schema.allows);
        assert!(schema.schema.is_some());
        assert_eq!(serde_json::to_string(&flag).unwrap(), "false");
    }

    #[test]
    fn test_schema_parses_extensions() {
        let props: JsonSchemaProps = serde_json::from_str(
            r#"{
                "type": "object",
                "x-kubernetes-preserve-unknown-fields": true,
                "properties": {"replicas": {"type": "integer", "format": "int32", "minimum": 0}},
                "required": ["replicas"]
            }"#,
        )
        .unwrap();
        assert_eq!(props.x_preserve_unknown_fields, Some(true));
        assert_eq!(props.properties["replicas"].minimum, Some(0.0));
        assert_eq!(props.required, vec!["replicas".to_string()]);
    }

    #[test]
    fn test_walk_mut_reaches_nested_schemas() {
        let mut props: JsonSchemaProps = serde_json::from_str(
            r#"{
                "description": "root",
                "properties": {
                    "a": {"description": "a", "items": {"description": "item"}},
                    "b": {"description": "b", "additionalProperties": {"description": "extra"}}
                },
                "allOf": [{"description": "all"}],
                "dependencies": {"b": {"description": "dep"}, "a": ["b"]},
                "additionalItems": {"description": "more"}
            }"#,
        )
        .unwrap();

        let mut seen = Vec::new();
        props.walk_mut(&mut |s| seen.push(s.description.clone()));
        seen.sort();
        assert_eq!(
            seen,
            vec!["a", "all", "b", "dep", "extra", "item", "more", "root"]
        );
    }

    #[test]
    fn test_reflect_uses_requested_package() {
        let Value::Record(record) = JsonSchemaProps::default().reflect_in(V1_PACKAGE) else {
            panic!("expected a record");
        };
        assert_eq!(
            record.name,
            Some(TypeName::new(V1_PACKAGE, "JSONSchemaProps"))
        );
        assert!(record.is_zero());
    }

    #[test]
    fn test_dependencies_parse_both_forms() {
        let props: JsonSchemaProps = serde_json::from_str(
            r#"{"dependencies": {"size": ["color"], "color": {"required": ["size"]}}}"#,
        )
        .unwrap();
        assert_eq!(props.dependencies["size"].property, vec!["color".to_string()]);
        assert!(props.dependencies["size"].schema.is_none());
        let color = props.dependencies["color"].schema.as_deref().unwrap();
        assert_eq!(color.required, vec!["size".to_string()]);
    }

    #[test]
    fn test_validation_rule_reason_is_named_pointer() {
        let rule = ValidationRule {
            rule: "self.x > 0".into(),
            reason: Some("FieldValueInvalid".into()),
            ..Default::default()
        };
        let Value::Record(record) = rule.reflect_in(V1_PACKAGE) else {
            panic!("expected a record");
        };
        let reason = record.fields.iter().find(|f| f.name == "Reason").unwrap();
        assert_eq!(
            reason.value.ty(),
            TypeDesc::pointer(TypeDesc::named_scalar(
                ScalarKind::String,
                TypeName::new(V1_PACKAGE, "FieldValueErrorReason")
            ))
        );

        let Value::Record(unset) = ValidationRule::default().reflect_in(V1_PACKAGE) else {
            panic!("expected a record");
        };
        assert!(unset.is_zero());
    }

    #[test]
    fn test_json_reflects_raw_bytes() {
        let Value::Record(record) = Json(serde_json::json!(1)).reflect_in(V1_PACKAGE) else {
            panic!("expected a record");
        };
        let raw = &record.fields[0];
        assert_eq!(raw.name, "Raw");
        assert_eq!(raw.value.kind(), Kind::Slice);
        assert_eq!(
            raw.value.ty(),
            TypeDesc::slice(TypeDesc::scalar(ScalarKind::Uint8))
        );
    }
}
