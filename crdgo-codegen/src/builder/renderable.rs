//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Expressions and declarations describe themselves as fragments; only the
//! [`CodeBuilder`](super::CodeBuilder) knows about indentation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `//` comment line.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: impl Into<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constructor_sets_close() {
        let block = CodeFragment::block("func init() {", vec![], "}");
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "func init() {".to_string(),
                body: vec![],
                close: Some("}".to_string()),
            }
        );
    }

    #[test]
    fn test_slice_flattens() {
        let lines = [CodeFragment::line("a"), CodeFragment::line("b")];
        assert_eq!(lines[..].to_fragments().len(), 2);
    }
}
