//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::SUPPORTED_CRD_VERSIONS;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "crdgo.toml");
/// ctx.validate_package("crds")?;
/// ctx.validate_crd_versions(&["v1".to_string()])?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Validate the Go package name. An empty name is left to the generator,
    /// which reports it as missing.
    pub fn validate_package(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }

        let span = find_string_span(self.src(), name);
        if is_go_keyword(name) {
            return Err(self.source.reserved_keyword_error(name, span));
        }
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_package_error(name, reason, span));
        }
        Ok(())
    }

    /// Validate that every requested version is supported and listed once.
    pub fn validate_crd_versions(&self, versions: &[String]) -> Result<()> {
        if versions.is_empty() {
            return Err(self.source.validation_error_at(
                "crd_versions must list at least one version",
                find_key_span(self.src(), "crd_versions"),
            ));
        }

        for (i, version) in versions.iter().enumerate() {
            if !SUPPORTED_CRD_VERSIONS.contains(&version.as_str()) {
                return Err(self
                    .source
                    .unknown_version_error(version, find_string_span(self.src(), version)));
            }
            if versions[..i].contains(version) {
                return Err(self.source.validation_error_at(
                    format!("version '{}' is listed twice", version),
                    find_key_span(self.src(), "crd_versions"),
                ));
            }
        }
        Ok(())
    }

    /// `preserve_unknown_fields = true` is only meaningful for v1beta1-only output.
    pub fn validate_preserve_unknown_fields(
        &self,
        preserve: Option<bool>,
        versions: &[String],
    ) -> Result<()> {
        let v1beta1_only = versions.len() == 1 && versions[0] == "v1beta1";
        if preserve == Some(true) && !v1beta1_only {
            return Err(self
                .source
                .preserve_unknown_fields_error(find_key_span(self.src(), "preserve_unknown_fields")));
        }
        Ok(())
    }
}

/// Go keywords; a package cannot be named after one.
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Validate that a name is a usable Go package name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;

    if !(first.is_alphabetic() || first == '_') {
        return Some(format!("must start with a letter or underscore, found '{}'", first));
    }
    if let Some(c) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Some(format!("contains invalid character '{}'", c));
    }
    if name == "_" {
        return Some("the blank identifier cannot name a package".to_string());
    }
    None
}

/// Find the span of a key at the start of a line, e.g. `crd_versions = [...]`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Find the span of a quoted string value (quotes excluded).
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}
