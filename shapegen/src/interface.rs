//! Output-ready interface shapes and their text form.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// One resolved field line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub name: String,
    pub ty: String,
    pub description: Option<String>,
}

/// The fully resolved shape of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInterface {
    /// Interface name, prefix and marker already applied.
    pub name: String,
    pub fields: Vec<RenderedField>,
}

impl RenderedInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: RenderedField) -> Self {
        self.fields.push(field);
        self
    }

    /// Render the block with the given indentation unit.
    ///
    /// The result has no trailing newline.
    pub fn render(&self, indentation: &str) -> String {
        let mut builder = CodeBuilder::new(indentation);
        builder.emit(self);
        let mut text = builder.build();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }
}

impl RenderedField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

impl Renderable for RenderedInterface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if let Some(description) = field.description.as_deref().filter(|d| !d.is_empty()) {
                body.push(CodeFragment::doc_block(description));
            }
            body.push(CodeFragment::line(format!("{}: {};", field.name, field.ty)));
        }

        vec![CodeFragment::block(
            format!("interface {} {{", self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
