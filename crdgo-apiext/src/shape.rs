//! In-place shaping of descriptors before they are rendered.

use crate::{v1, v1beta1};

/// Annotation recording which crdgo version produced a descriptor.
pub const ATTRIBUTION_ANNOTATION: &str = "crdgo.dev/version";

/// Stamp the attribution annotation, creating the annotation map if needed.
pub fn add_attribution(crd: &mut v1::CustomResourceDefinition, tool_version: &str) {
    crd.metadata
        .annotations
        .insert(ATTRIBUTION_ANNOTATION.to_string(), tool_version.to_string());
}

/// Collapse a multi-version descriptor for clusters that predate per-version
/// schemas.
///
/// Every version loses its schema, subresources, printer columns and
/// selectable fields. The values of the storage version are promoted to the
/// top level, unless the storage version has no schema, in which case nothing
/// is promoted.
pub fn to_trivial_versions(crd: &mut v1beta1::CustomResourceDefinition) {
    let mut schema = None;
    let mut subresources = None;
    let mut columns = Vec::new();
    let mut selectable = Vec::new();

    for version in &mut crd.spec.versions {
        let version_schema = version.schema.take();
        let version_subresources = version.subresources.take();
        let version_columns = std::mem::take(&mut version.additional_printer_columns);
        let version_selectable = std::mem::take(&mut version.selectable_fields);
        if version.storage {
            schema = version_schema;
            subresources = version_subresources;
            columns = version_columns;
            selectable = version_selectable;
        }
    }

    if schema.is_none() {
        return;
    }
    crd.spec.validation = schema;
    crd.spec.subresources = subresources;
    crd.spec.additional_printer_columns = columns;
    crd.spec.selectable_fields = selectable;
}

/// Limit every schema description in `crd` to `max_len` bytes.
///
/// `0` removes descriptions entirely. Longer descriptions are cut back to
/// the last whitespace before the limit and marked with `...`.
pub fn truncate_descriptions(crd: &mut v1::CustomResourceDefinition, max_len: usize) {
    for version in &mut crd.spec.versions {
        let Some(schema) = version
            .schema
            .as_mut()
            .and_then(|v| v.open_api_v3_schema.as_mut())
        else {
            continue;
        };
        schema.walk_mut(&mut |props| {
            props.description = truncate(&props.description, max_len);
        });
    }
}

fn truncate(desc: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if desc.len() <= max_len {
        return desc.to_string();
    }
    let mut end = max_len;
    while !desc.is_char_boundary(end) {
        end -= 1;
    }
    let cut = &desc[..end];
    match cut.rfind(char::is_whitespace) {
        Some(n) if n > 0 => format!("{}...", &cut[..n]),
        _ => format!("{cut}..."),
    }
}
