//! GoFile abstraction for structured Go file generation.
//!
//! Lays out the build constraint, license header, generated-code marker,
//! package clause, import block and body declarations in gofmt order.

use crate::{
    builder::{CodeBuilder, CodeFragment, Expr, Indent, Renderable},
    imports::Import,
};

/// Marker recognised by linters and `go generate` tooling.
pub const GENERATED_MARKER: &str = "// Code generated by crdgo. DO NOT EDIT.";

const BUILD_CONSTRAINT: &str = "//go:build !ignore_autogenerated";

/// A top-level function declaration.
///
/// ```
/// use crdgo_codegen::builder::{CodeBuilder, Expr};
/// use crdgo_codegen::go_file::FuncDecl;
///
/// let func = FuncDecl::new("init").statement(Expr::raw("register()"));
/// let mut builder = CodeBuilder::go();
/// builder.emit(&func);
/// assert_eq!(builder.build(), "func init() {\n\tregister()\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct FuncDecl {
    name: String,
    result: Option<String>,
    doc: Vec<CodeFragment>,
    body: Vec<CodeFragment>,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: None,
            doc: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the result type.
    pub fn returns(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    /// Add a comment line above the declaration; `// ` is added.
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.doc.push(CodeFragment::comment(text));
        self
    }

    /// Add a tool directive above the declaration, e.g. `//nolint`.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.doc
            .push(CodeFragment::line(format!("//{}", directive.into())));
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: impl Renderable) -> Self {
        self.body.extend(stmt.to_fragments());
        self
    }

    /// Add a `return` statement.
    pub fn returning(mut self, expr: &Expr) -> Self {
        self.body.extend(expr.fragments("return ", ""));
        self
    }
}

impl Renderable for FuncDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.clone();
        let header = match &self.result {
            Some(result) => format!("func {}() {} {{", self.name, result),
            None => format!("func {}() {{", self.name),
        };
        fragments.push(CodeFragment::block(header, self.body.clone(), "}"));
        fragments
    }
}

/// A structured representation of a Go source file.
///
/// # Example
///
/// ```
/// use crdgo_codegen::go_file::{FuncDecl, GoFile};
///
/// let file = GoFile::new("crds").add(FuncDecl::new("init"));
/// assert!(file.render().ends_with("package crds\n\nfunc init() {\n}\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoFile {
    header: String,
    package: String,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Set the license header, written verbatim after the build constraint.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the import block. Imports are written in the given order.
    pub fn imports(mut self, imports: Vec<Import>) -> Self {
        self.imports = imports;
        self
    }

    /// Add a body declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);

        builder.push_line(BUILD_CONSTRAINT).push_blank();

        let header = self.header.trim_end();
        if !header.is_empty() {
            builder.push_raw(header).push_raw("\n").push_blank();
        }

        builder
            .push_line(GENERATED_MARKER)
            .push_blank()
            .push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            let lines = self.imports.iter().map(|import| {
                let path = format!("\"{}\"", import.path);
                if import.needs_alias() {
                    CodeFragment::line(format!("{} {}", import.alias, path))
                } else {
                    CodeFragment::line(path)
                }
            });
            builder.apply_fragment(CodeFragment::block("import (", lines.collect(), ")"));
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
