//! Record type descriptors for the shapegen interface generator.
//!
//! Rust has no runtime reflection, so host record types describe themselves
//! through the [`Describe`] and [`Record`] traits (usually derived with
//! `#[derive(Record)]`) or are built by hand from a schema file. Either way
//! they end up as [`RecordType`] values collected in a [`TypeRegistry`].
//!
//! # Architecture
//!
//! ```text
//! #[derive(Record)] / shapegen.toml → shapegen-ir (descriptors) → shapegen (walker) → text
//! ```
//!
//! The descriptors are language-agnostic: they record what the host declared
//! (names, field types, raw annotations) and leave every output decision to
//! the walker.

mod describe;
mod registry;
mod types;

pub use describe::{Describe, Record, instantiated_name};
pub use registry::TypeRegistry;
pub use types::{Annotations, FieldDef, Primitive, RecordType, TypeDescriptor};
