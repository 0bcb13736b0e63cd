//! Renderable trait and CodeFragment for decoupled text generation.
//!
//! Output nodes describe themselves as fragments; [`CodeBuilder`] owns the
//! indentation and turns fragments into text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// A fragment of generated text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (will have newline appended).
    Line(String),
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A multi-line `/** ... */` comment.
    DocBlock(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn doc_block(s: impl Into<String>) -> Self {
        Self::DocBlock(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(
            CodeFragment::doc_block("text"),
            CodeFragment::DocBlock("text".to_string())
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "interface IA {",
            vec![CodeFragment::line("a: number;")],
            Some("}".to_string()),
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "interface IA {");
                assert_eq!(body.len(), 1);
                assert_eq!(close, Some("}".to_string()));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
