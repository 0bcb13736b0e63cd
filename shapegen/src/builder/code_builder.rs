//! Code builder utility for generating properly indented text.

use super::{CodeFragment, Renderable};

/// Line-oriented text builder with a configurable indentation unit.
///
/// # Example
///
/// ```
/// use shapegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new("\t");
/// builder
///     .push_line("interface IPoint {")
///     .push_indent()
///     .push_line("x: number;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "interface IPoint {\n\tx: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder that indents each level with `indent`.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent_level: 0,
            indent: indent.into(),
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a multi-line `/** ... */` comment, one ` * ` line per text line.
    ///
    /// A `*/` inside the text is written as `*\/` so it cannot close the
    /// comment early.
    pub fn push_doc_block(&mut self, text: &str) -> &mut Self {
        self.push_line("/**");
        for line in text.lines() {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line.replace("*/", "*\\/")));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
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
            CodeFragment::DocBlock(text) => {
                self.push_doc_block(&text);
            }
        }
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new("\t")
    }
}
