//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented source text line by line.
///
/// # Example
///
/// ```
/// use crdgo_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func init() {")
///     .push_indent()
///     .push_line("register()")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func init() {\n\tregister()\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a `//` comment line. Multi-line text becomes one comment per line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.write_indent();
            if line.is_empty() {
                self.buffer.push_str("//");
            } else {
                self.buffer.push_str("// ");
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::go();
        builder.push_line("package crds");
        assert_eq!(builder.build(), "package crds\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::go();
        builder
            .push_line("func init() {")
            .push_indent()
            .push_line("x()")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "func init() {\n\tx()\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::go();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.as_str(), "x\n");
    }

    #[test]
    fn test_comment_lines() {
        let mut builder = CodeBuilder::go();
        builder.push_comment("Copyright 2025\n\nLicensed under MIT");
        assert_eq!(
            builder.build(),
            "// Copyright 2025\n//\n// Licensed under MIT\n"
        );
    }

    #[test]
    fn test_emit_nested_blocks() {
        let node = CodeFragment::block(
            "func f() T {",
            vec![CodeFragment::block(
                "return T{",
                vec![CodeFragment::line("A: 1,")],
                "}",
            )],
            "}",
        );

        let mut builder = CodeBuilder::go();
        builder.emit(&node);
        assert_eq!(
            builder.build(),
            "func f() T {\n\treturn T{\n\t\tA: 1,\n\t}\n}\n"
        );
    }

    #[test]
    fn test_spaces() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.push_indent().push_line("x");
        assert_eq!(builder.build(), "  x\n");
    }
}
