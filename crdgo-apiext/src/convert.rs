//! Conversion of `v1` descriptors into the requested API version.

use crdgo_ir::{Reflect, Value};
use tracing::debug;

use crate::meta::TypeMeta;
use crate::{Error, Result, V1_PACKAGE, V1BETA1_PACKAGE, v1, v1beta1};

const KIND: &str = "CustomResourceDefinition";

/// A descriptor in one of the supported API versions.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedCrd {
    V1(v1::CustomResourceDefinition),
    V1Beta1(v1beta1::CustomResourceDefinition),
}

impl VersionedCrd {
    /// The API version name (`v1` or `v1beta1`).
    pub fn version(&self) -> &'static str {
        match self {
            Self::V1(_) => "v1",
            Self::V1Beta1(_) => "v1beta1",
        }
    }

    /// The Go package declaring this version's types.
    pub fn package(&self) -> &'static str {
        match self {
            Self::V1(_) => V1_PACKAGE,
            Self::V1Beta1(_) => V1BETA1_PACKAGE,
        }
    }

    pub fn as_v1beta1_mut(&mut self) -> Option<&mut v1beta1::CustomResourceDefinition> {
        match self {
            Self::V1Beta1(crd) => Some(crd),
            Self::V1(_) => None,
        }
    }

    pub fn reflect(&self) -> Value {
        match self {
            Self::V1(crd) => crd.reflect(),
            Self::V1Beta1(crd) => crd.reflect(),
        }
    }
}

/// Convert a `v1` descriptor into `version` (`v1` or `v1beta1`).
pub fn as_version(crd: &v1::CustomResourceDefinition, version: &str) -> Result<VersionedCrd> {
    match version {
        "v1" => {
            let mut out = crd.clone();
            out.type_meta = TypeMeta::new(v1::API_VERSION, KIND);
            Ok(VersionedCrd::V1(out))
        }
        "v1beta1" => Ok(VersionedCrd::V1Beta1(to_v1beta1(crd))),
        other => Err(Error::UnknownVersion(other.to_string())),
    }
}

/// Structural conversion into the legacy shape.
///
/// Per-version schemas, subresources, printer columns and selectable fields
/// move to the top-level fields when every version carries the same value.
pub fn to_v1beta1(crd: &v1::CustomResourceDefinition) -> v1beta1::CustomResourceDefinition {
    let spec = &crd.spec;

    let versions = spec
        .versions
        .iter()
        .map(|v| v1beta1::CustomResourceDefinitionVersion {
            name: v.name.clone(),
            served: v.served,
            storage: v.storage,
            deprecated: v.deprecated,
            deprecation_warning: v.deprecation_warning.clone(),
            schema: v.schema.clone(),
            subresources: v.subresources.clone(),
            additional_printer_columns: v
                .additional_printer_columns
                .iter()
                .map(column_to_v1beta1)
                .collect(),
            selectable_fields: v.selectable_fields.clone(),
        })
        .collect();

    let mut out = v1beta1::CustomResourceDefinitionSpec {
        group: spec.group.clone(),
        version: spec
            .versions
            .first()
            .map(|v| v.name.clone())
            .unwrap_or_default(),
        names: spec.names.clone(),
        scope: spec.scope.clone(),
        versions,
        conversion: spec.conversion.as_ref().map(conversion_to_v1beta1),
        preserve_unknown_fields: Some(spec.preserve_unknown_fields),
        ..Default::default()
    };
    hoist_identical(&mut out);

    v1beta1::CustomResourceDefinition {
        type_meta: TypeMeta::new(v1beta1::API_VERSION, KIND),
        metadata: crd.metadata.clone(),
        spec: out,
        status: crd.status.clone(),
    }
}

fn hoist_identical(spec: &mut v1beta1::CustomResourceDefinitionSpec) {
    let Some((first, rest)) = spec.versions.split_first() else {
        return;
    };

    if rest.iter().all(|v| v.schema == first.schema) {
        spec.validation = first.schema.clone();
        for v in &mut spec.versions {
            v.schema = None;
        }
        debug!(group = %spec.group, "hoisted per-version schema");
    }

    let first = &spec.versions[0];
    if spec.versions.iter().all(|v| v.subresources == first.subresources) {
        spec.subresources = first.subresources.clone();
        for v in &mut spec.versions {
            v.subresources = None;
        }
    }

    let first = &spec.versions[0];
    if spec
        .versions
        .iter()
        .all(|v| v.additional_printer_columns == first.additional_printer_columns)
    {
        spec.additional_printer_columns = first.additional_printer_columns.clone();
        for v in &mut spec.versions {
            v.additional_printer_columns.clear();
        }
    }

    let first = &spec.versions[0];
    if spec
        .versions
        .iter()
        .all(|v| v.selectable_fields == first.selectable_fields)
    {
        spec.selectable_fields = first.selectable_fields.clone();
        for v in &mut spec.versions {
            v.selectable_fields.clear();
        }
    }
}

fn column_to_v1beta1(
    column: &v1::CustomResourceColumnDefinition,
) -> v1beta1::CustomResourceColumnDefinition {
    v1beta1::CustomResourceColumnDefinition {
        name: column.name.clone(),
        type_: column.type_.clone(),
        format: column.format.clone(),
        description: column.description.clone(),
        priority: column.priority,
        json_path: column.json_path.clone(),
    }
}

fn conversion_to_v1beta1(
    conversion: &v1::CustomResourceConversion,
) -> v1beta1::CustomResourceConversion {
    let (webhook_client_config, conversion_review_versions) = match &conversion.webhook {
        Some(webhook) => (
            webhook.client_config.clone(),
            webhook.conversion_review_versions.clone(),
        ),
        None => (None, Vec::new()),
    };
    v1beta1::CustomResourceConversion {
        strategy: conversion.strategy.clone(),
        webhook_client_config,
        conversion_review_versions,
    }
}
