// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `shapegen.toml` schema descriptions.
//!
//! A manifest declares record types without any Rust source: every record
//! lists its fields with a type expression and the same annotations the
//! derive macro understands. Parsing yields a [`shapegen_ir::TypeRegistry`]
//! plus the output settings and root list for the generator.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{
    FieldDecl, Manifest, OutputSettings, ParseContext, RecordDecl, ShapegenToml, parse_manifest,
    parse_type_expr,
};
