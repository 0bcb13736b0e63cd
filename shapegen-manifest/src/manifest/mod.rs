//! Manifest types for shapegen.toml files.

mod file;
mod parse;
mod type_expr;
mod validate;

use serde::Deserialize;
use shapegen_ir::TypeRegistry;

pub use file::ShapegenToml;
pub use parse::parse_manifest;
pub use type_expr::parse_type_expr;
pub use validate::ParseContext;

/// Root manifest for shapegen.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Declared records, in declaration order
    #[serde(default, rename = "record")]
    pub records: Vec<RecordDecl>,

    /// Resolved record types, filled in by validation
    #[serde(skip)]
    registry: TypeRegistry,
}

/// The `[output]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    /// Inserted between the interface marker and each record name
    pub prefix: Option<String>,

    /// Indentation unit for field lines
    pub indentation: Option<String>,

    /// Banner written ahead of the generated interfaces
    pub header: Option<String>,

    /// Records to generate from; every record when absent
    pub roots: Option<Vec<String>>,
}

/// A `[[record]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDecl {
    pub name: String,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDecl>,
}

/// A `[[record.field]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    pub name: String,

    /// Type expression, see [`parse_type_expr`]
    #[serde(rename = "type")]
    pub ty: String,

    /// Serialization name and modifiers, e.g. `"x,omitempty"` or `"-"`
    pub json: Option<String>,

    /// Literal output type
    pub tstype: Option<String>,

    /// Description rendered as a comment above the field
    pub tsdesc: Option<String>,

    /// Unexported fields never appear in the output
    #[serde(default)]
    pub private: bool,
}

impl Manifest {
    /// The record types this manifest declares.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> TypeRegistry {
        self.registry
    }

    /// Root record names: the configured roots, or every record in order.
    pub fn roots(&self) -> Vec<&str> {
        match &self.output.roots {
            Some(roots) => roots.iter().map(String::as_str).collect(),
            None => self.records.iter().map(|r| r.name.as_str()).collect(),
        }
    }
}
