//! Import alias assignment.
//!
//! One [`ImportRegistry`] lives for a whole generation run, so a package
//! keeps the same alias in every file. Each output file borrows it through an
//! [`ImportScope`], which remembers the packages that file actually refers to.

use std::collections::{BTreeMap, BTreeSet};

use crdgo_core::non_vendor_path;

/// Go keywords and predeclared identifiers an alias must not shadow.
const RESERVED: &[&str] = &[
    // keywords
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
    // predeclared
    "any", "append", "bool", "byte", "cap", "clear", "close", "comparable", "complex",
    "complex128", "complex64", "copy", "delete", "error", "false", "float32", "float64",
    "imag", "int", "int16", "int32", "int64", "int8", "iota", "len", "make", "max", "min",
    "new", "nil", "panic", "print", "println", "real", "recover", "rune", "string", "true",
    "uint", "uint16", "uint32", "uint64", "uint8", "uintptr",
    // not importable under these names
    "_", "init",
];

/// Run-wide mapping between package paths and their aliases.
///
/// Both directions are kept in sync: an alias names exactly one path and a
/// path has exactly one alias. Assignments are never removed.
///
/// # Example
///
/// ```
/// use crdgo_codegen::imports::ImportRegistry;
///
/// let mut imports = ImportRegistry::new();
/// assert_eq!(imports.ensure_import("k8s.io/api/core/v1"), "v1");
/// assert_eq!(imports.ensure_import("k8s.io/api/apps/v1"), "appsv1");
/// assert_eq!(imports.ensure_import("k8s.io/api/core/v1"), "v1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    by_path: BTreeMap<String, String>,
    by_alias: BTreeMap<String, String>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `alias` to `path` up front. Ignored if either side is already bound.
    pub fn with_alias(mut self, path: &str, alias: &str) -> Self {
        let path = non_vendor_path(path);
        if !self.by_path.contains_key(path) && !self.by_alias.contains_key(alias) {
            self.bind(path, alias.to_string());
        }
        self
    }

    /// Get the alias for `path`, assigning a new one on first use.
    ///
    /// The candidate is the last path segment made into a valid identifier.
    /// While it is taken, reserved or empty, the next segment toward the root
    /// is prepended; once the path is exhausted, `x` is appended.
    pub fn ensure_import(&mut self, path: &str) -> String {
        let path = non_vendor_path(path);
        if let Some(alias) = self.by_path.get(path) {
            return alias.clone();
        }

        let mut alias = String::new();
        let mut segments = path.rsplit('/').map(sanitize);
        loop {
            if self.is_available(&alias) {
                break;
            }
            match segments.next() {
                Some(segment) => alias.insert_str(0, &segment),
                None => alias.push('x'),
            }
        }

        self.bind(path, alias.clone());
        alias
    }

    /// Get the alias already assigned to `path`.
    pub fn alias(&self, path: &str) -> Option<&str> {
        self.by_path.get(non_vendor_path(path)).map(String::as_str)
    }

    /// Get the path an alias is bound to.
    pub fn path(&self, alias: &str) -> Option<&str> {
        self.by_alias.get(alias).map(String::as_str)
    }

    /// Iterate over all (path, alias) pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_path.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    fn is_available(&self, alias: &str) -> bool {
        !alias.is_empty() && !RESERVED.contains(&alias) && !self.by_alias.contains_key(alias)
    }

    fn bind(&mut self, path: &str, alias: String) {
        self.by_alias.insert(alias.clone(), path.to_string());
        self.by_path.insert(path.to_string(), alias);
    }
}

/// Make one path segment usable as (part of) an identifier: drop leading
/// digits and replace anything but letters, digits and `_` with `_`.
fn sanitize(segment: &str) -> String {
    segment
        .trim_start_matches(|c: char| c.is_numeric())
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// A package referenced by one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub alias: String,
}

impl Import {
    /// Whether the import line must spell out the alias.
    ///
    /// An unaliased import is named after the package clause of the imported
    /// code, which need not match the directory (`.../v2`, `go-kit`). Only
    /// standard library paths are known to follow the last segment, so every
    /// other import is written with its alias.
    pub fn needs_alias(&self) -> bool {
        let standard = self
            .path
            .split('/')
            .next()
            .is_some_and(|root| !root.contains('.'));
        let last = self.path.rsplit('/').next().unwrap_or(&self.path);
        !(standard && last == self.alias && !is_major_version(last))
    }
}

/// `v2`, `v3`, ... as used for module major versions.
fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// The view of the run registry from one output file.
#[derive(Debug)]
pub struct ImportScope<'r> {
    registry: &'r mut ImportRegistry,
    used: BTreeSet<String>,
}

impl<'r> ImportScope<'r> {
    pub fn new(registry: &'r mut ImportRegistry) -> Self {
        Self {
            registry,
            used: BTreeSet::new(),
        }
    }

    /// Get the alias for `path` and record that this file imports it.
    pub fn import(&mut self, path: &str) -> String {
        let alias = self.registry.ensure_import(path);
        self.used.insert(non_vendor_path(path).to_string());
        alias
    }

    /// Spell `name` from package `path` as `alias.name`.
    ///
    /// An empty path denotes a predeclared or local name and is returned bare.
    pub fn qualify(&mut self, path: &str, name: &str) -> String {
        if path.is_empty() {
            return name.to_string();
        }
        format!("{}.{}", self.import(path), name)
    }

    /// The imports this file needs, ordered by path.
    pub fn imports(&self) -> Vec<Import> {
        self.used
            .iter()
            .filter_map(|path| {
                self.registry.alias(path).map(|alias| Import {
                    path: path.clone(),
                    alias: alias.to_string(),
                })
            })
            .collect()
    }
}
