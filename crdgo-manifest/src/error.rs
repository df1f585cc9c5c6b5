use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for crdgo-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "crdgo.toml");
/// ctx.validation_error("missing required field");
/// ctx.reserved_keyword_error("type", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved keyword error for a package name.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an invalid package name error.
    pub fn invalid_package_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackageName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an unknown CRD version error.
    pub fn unknown_version_error(
        &self,
        version: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownCrdVersion {
            src: self.named_source(),
            span,
            version: version.into(),
        })
    }

    /// Create an error for `preserve_unknown_fields = true` outside v1beta1-only output.
    pub fn preserve_unknown_fields_error(&self, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::PreserveUnknownFields {
            src: self.named_source(),
            span,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a crdgo.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse crdgo.toml")]
    #[diagnostic(code(crdgo::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(crdgo::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Go reserved keyword")]
    #[diagnostic(
        code(crdgo::reserved_keyword),
        help("Go packages cannot be named after keywords, e.g. use '{name}s' instead")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid package name '{name}'")]
    #[diagnostic(
        code(crdgo::invalid_package),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidPackageName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("unknown CustomResourceDefinition version '{version}'")]
    #[diagnostic(
        code(crdgo::unknown_crd_version),
        help("supported versions are: v1, v1beta1")
    )]
    UnknownCrdVersion {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown version")]
        span: Option<SourceSpan>,
        version: String,
    },

    #[error("you may only set preserve_unknown_fields to true with v1beta1 CRDs")]
    #[diagnostic(
        code(crdgo::preserve_unknown_fields),
        help("set crd_versions = [\"v1beta1\"] or remove preserve_unknown_fields")
    )]
    PreserveUnknownFields {
        #[source_code]
        src: NamedSource<String>,
        #[label("only valid when crd_versions is [\"v1beta1\"]")]
        span: Option<SourceSpan>,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        SourceContext::new(src, filename).parse_error(source)
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        SourceContext::new(src, filename).validation_error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let ctx = SourceContext::new("[generator]\n", "crdgo.toml");
        assert_eq!(
            ctx.unknown_version_error("v2", None).to_string(),
            "unknown CustomResourceDefinition version 'v2'"
        );
        assert_eq!(
            ctx.reserved_keyword_error("type", None).to_string(),
            "'type' is a Go reserved keyword"
        );
        assert_eq!(
            ctx.preserve_unknown_fields_error(None).to_string(),
            "you may only set preserve_unknown_fields to true with v1beta1 CRDs"
        );
    }

    #[test]
    fn test_validation_keeps_filename() {
        let err = Error::validation("bad", "x = 1", "custom.toml");
        match *err {
            Error::Validation { ref src, .. } => assert_eq!(src.name(), "custom.toml"),
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
