//! Go expression trees.
//!
//! An [`Expr`] is built by the encoders and serializer and only becomes text
//! when rendered. Composite literals and closures span several lines; every
//! other node renders inline.
//!
//! # Example
//!
//! ```
//! use crdgo_codegen::builder::{CodeBuilder, Entry, Expr};
//!
//! let expr = Expr::composite(
//!     Some("metav1.ObjectMeta".into()),
//!     vec![Entry::keyed(Expr::raw("Name"), Expr::raw("\"widgets.acme.io\""))],
//! );
//!
//! let mut builder = CodeBuilder::go();
//! builder.emit(&expr);
//! assert_eq!(
//!     builder.build(),
//!     "metav1.ObjectMeta{\n\tName: \"widgets.acme.io\",\n}\n"
//! );
//! ```

use super::{CodeBuilder, CodeFragment, Renderable};

/// A Go expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Verbatim source: identifiers, literals, `nil`.
    Raw(String),
    /// `func(args...)`, where `func` may itself be parenthesised, e.g. `(*v1.T)`.
    Call { func: String, args: Vec<Expr> },
    /// `&expr`
    AddressOf(Box<Expr>),
    /// `T{...}`, or `{...}` when the type is elided by the enclosing literal.
    Composite {
        ty: Option<String>,
        entries: Vec<Entry>,
    },
    /// `func() result { body }()`
    Closure { result: String, body: Vec<String> },
}

/// One element of a composite literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Positional(Expr),
    Keyed(Expr, Expr),
}

impl Entry {
    pub fn positional(value: Expr) -> Self {
        Self::Positional(value)
    }

    pub fn keyed(key: Expr, value: Expr) -> Self {
        Self::Keyed(key, value)
    }
}

impl Expr {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            func: func.into(),
            args,
        }
    }

    pub fn address_of(expr: Expr) -> Self {
        Self::AddressOf(Box::new(expr))
    }

    pub fn composite(ty: Option<String>, entries: Vec<Entry>) -> Self {
        Self::Composite { ty, entries }
    }

    /// An immediately invoked function literal.
    pub fn closure(result: impl Into<String>, body: Vec<String>) -> Self {
        Self::Closure {
            result: result.into(),
            body,
        }
    }

    /// Render on a single line.
    pub fn inline(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::Call { func, args } => {
                let args: Vec<String> = args.iter().map(Expr::inline).collect();
                format!("{}({})", func, args.join(", "))
            }
            Self::AddressOf(inner) => format!("&{}", inner.inline()),
            Self::Composite { ty, entries } => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry {
                        Entry::Positional(value) => value.inline(),
                        Entry::Keyed(key, value) => format!("{}: {}", key.inline(), value.inline()),
                    })
                    .collect();
                format!("{}{{{}}}", ty.as_deref().unwrap_or(""), entries.join(", "))
            }
            Self::Closure { result, body } => {
                format!("func() {} {{ {} }}()", result, body.join("; "))
            }
        }
    }

    /// Lay the expression out as fragments, starting after `prefix` on the
    /// first line and ending with `suffix` on the last.
    pub fn fragments(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        match self {
            Self::AddressOf(inner) => inner.fragments(&format!("{}&", prefix), suffix),
            Self::Composite { ty, entries } if !entries.is_empty() => {
                let body = entries
                    .iter()
                    .flat_map(|entry| match entry {
                        Entry::Positional(value) => value.fragments("", ","),
                        Entry::Keyed(key, value) => {
                            value.fragments(&format!("{}: ", key.inline()), ",")
                        }
                    })
                    .collect();
                vec![CodeFragment::block(
                    format!("{}{}{{", prefix, ty.as_deref().unwrap_or("")),
                    body,
                    format!("}}{}", suffix),
                )]
            }
            Self::Closure { result, body } => vec![CodeFragment::block(
                format!("{}func() {} {{", prefix, result),
                body.iter().map(CodeFragment::line).collect(),
                format!("}}(){}", suffix),
            )],
            _ => vec![CodeFragment::line(format!(
                "{}{}{}",
                prefix,
                self.inline(),
                suffix
            ))],
        }
    }

    /// Render with tab indentation and no trailing newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        let mut out = builder.build();
        out.truncate(out.trim_end_matches('\n').len());
        out
    }
}

impl Renderable for Expr {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_is_inline() {
        let expr = Expr::call(
            "(*v1.ResourceScope)",
            vec![Expr::call("pointer.String", vec![Expr::raw("\"Namespaced\"")])],
        );
        assert_eq!(
            expr.render(),
            "(*v1.ResourceScope)(pointer.String(\"Namespaced\"))"
        );
    }

    #[test]
    fn test_empty_composite_stays_on_one_line() {
        let expr = Expr::composite(Some("[]string".into()), vec![]);
        assert_eq!(expr.render(), "[]string{}");
        assert_eq!(Expr::composite(None, vec![]).render(), "{}");
    }

    #[test]
    fn test_nested_composites() {
        let expr = Expr::address_of(Expr::composite(
            Some("v1.CustomResourceDefinition".into()),
            vec![Entry::keyed(
                Expr::raw("Spec"),
                Expr::composite(
                    Some("v1.CustomResourceDefinitionSpec".into()),
                    vec![Entry::keyed(
                        Expr::raw("Versions"),
                        Expr::composite(
                            Some("[]v1.CustomResourceDefinitionVersion".into()),
                            vec![Entry::positional(Expr::composite(
                                None,
                                vec![Entry::keyed(Expr::raw("Name"), Expr::raw("\"v1\""))],
                            ))],
                        ),
                    )],
                ),
            )],
        ));

        assert_eq!(
            expr.render(),
            "&v1.CustomResourceDefinition{\n\
             \tSpec: v1.CustomResourceDefinitionSpec{\n\
             \t\tVersions: []v1.CustomResourceDefinitionVersion{\n\
             \t\t\t{\n\
             \t\t\t\tName: \"v1\",\n\
             \t\t\t},\n\
             \t\t},\n\
             \t},\n\
             }"
        );
    }

    #[test]
    fn test_closure_layout() {
        let expr = Expr::closure("*v1.Time", vec!["var obj v1.Time".into(), "return &obj".into()]);
        let mut builder = CodeBuilder::go();
        builder.emit(&expr.fragments("CreationTimestamp: ", ",")[..]);
        assert_eq!(
            builder.build(),
            "CreationTimestamp: func() *v1.Time {\n\tvar obj v1.Time\n\treturn &obj\n}(),\n"
        );
    }

    #[test]
    fn test_inline_composite() {
        let expr = Expr::composite(
            Some("map[string]int".into()),
            vec![
                Entry::keyed(Expr::raw("\"a\""), Expr::raw("1")),
                Entry::keyed(Expr::raw("\"b\""), Expr::raw("2")),
            ],
        );
        assert_eq!(expr.inline(), "map[string]int{\"a\": 1, \"b\": 2}");
    }
}
