//! Loading `v1` descriptors from JSON files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value as Json;
use tracing::debug;

use crate::{Error, GroupKind, Result, v1};

/// Read descriptors from JSON files or directories of `*.json` files.
///
/// Directory entries are read in name order and are not searched
/// recursively. A descriptor with an `apiVersion` other than
/// `apiextensions.k8s.io/v1` is rejected; a missing one is accepted. So is a
/// descriptor carrying a non-empty field the descriptor types do not model,
/// since the generated code could not reproduce it.
pub fn load_descriptors<P: AsRef<Path>>(
    paths: &[P],
) -> Result<BTreeMap<GroupKind, v1::CustomResourceDefinition>> {
    let mut crds = BTreeMap::new();
    let mut origins: BTreeMap<GroupKind, PathBuf> = BTreeMap::new();

    for path in paths {
        for file in expand(path.as_ref())? {
            let crd = read_descriptor(&file)?;
            let group_kind = GroupKind::new(&crd.spec.group, &crd.spec.names.kind);
            if let Some(first) = origins.get(&group_kind) {
                return Err(Error::Duplicate {
                    group_kind,
                    first: first.clone(),
                    second: file,
                });
            }
            debug!(%group_kind, path = %file.display(), "loaded descriptor");
            origins.insert(group_kind.clone(), file);
            crds.insert(group_kind, crd);
        }
    }

    Ok(crds)
}

fn expand(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(path).map_err(read_err)? {
        let file = entry.map_err(read_err)?.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

fn read_descriptor(path: &Path) -> Result<v1::CustomResourceDefinition> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source| Error::Parse {
        path: path.to_path_buf(),
        source,
    };
    let crd: v1::CustomResourceDefinition = serde_json::from_str(&content).map_err(parse_err)?;
    let found = &crd.type_meta.api_version;
    if !found.is_empty() && found != v1::API_VERSION {
        return Err(Error::ApiVersion {
            path: path.to_path_buf(),
            expected: v1::API_VERSION.to_string(),
            found: found.clone(),
        });
    }

    let raw: Json = serde_json::from_str(&content).map_err(parse_err)?;
    let kept = serde_json::to_value(&crd).map_err(parse_err)?;
    let mut dropped = Vec::new();
    dropped_fields(&raw, &kept, "", &mut dropped);
    if !dropped.is_empty() {
        return Err(Error::UnknownFields {
            path: path.to_path_buf(),
            fields: dropped,
        });
    }
    Ok(crd)
}

/// Collect the paths of keys in `raw` that are missing from `kept`.
///
/// Keys holding an empty or zero value are skipped: the typed form omits
/// those as well, and they decode to the same Go value.
fn dropped_fields(raw: &Json, kept: &Json, at: &str, out: &mut Vec<String>) {
    match (raw, kept) {
        (Json::Object(raw), Json::Object(kept)) => {
            for (key, value) in raw {
                let path = if at.is_empty() {
                    key.clone()
                } else {
                    format!("{at}.{key}")
                };
                match kept.get(key) {
                    Some(kept) => dropped_fields(value, kept, &path, out),
                    None if is_empty(value) => {}
                    None => out.push(path),
                }
            }
        }
        (Json::Array(raw), Json::Array(kept)) => {
            for (i, (raw, kept)) in raw.iter().zip(kept).enumerate() {
                dropped_fields(raw, kept, &format!("{at}[{i}]"), out);
            }
        }
        _ => {}
    }
}

fn is_empty(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Bool(b) => !b,
        Json::Number(n) => n.as_f64() == Some(0.0),
        Json::String(s) => s.is_empty(),
        Json::Array(items) => items.is_empty(),
        Json::Object(entries) => entries.is_empty(),
    }
}
