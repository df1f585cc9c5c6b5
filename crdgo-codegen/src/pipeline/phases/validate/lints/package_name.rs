//! Lint for the generated Go package name.

use super::super::Lint;
use crate::{
    config::GeneratorConfig,
    pipeline::{Descriptors, Diagnostic},
};

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Lint that rejects a missing or unusable package name.
pub struct PackageNameLint;

impl Lint for PackageNameLint {
    fn name(&self) -> &'static str {
        "package-name"
    }

    fn description(&self) -> &'static str {
        "Check the package name is set and is a valid Go identifier"
    }

    fn check(
        &self,
        config: &GeneratorConfig,
        _descriptors: &Descriptors,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let name = config.package_name.as_str();
        let problem = if name.is_empty() {
            Some("package name is required".to_string())
        } else if GO_KEYWORDS.contains(&name) {
            Some(format!("package name '{}' is a Go keyword", name))
        } else if !is_identifier(name) {
            Some(format!("package name '{}' is not a valid Go identifier", name))
        } else {
            None
        };

        if let Some(message) = problem {
            diagnostics.push(Diagnostic::error("validate", message).at("generator.package"));
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_alphanumeric() || c == '_')
}
