//! Interface declarations generated from Rust record types.
//!
//! Define the data model once as Rust structs, derive [`Record`], and render
//! an always-in-sync set of TypeScript-style interface declarations for a
//! consumer written in another language.
//!
//! # Usage
//!
//! ```
//! use shapegen::{Generator, Record};
//!
//! #[derive(Record)]
//! pub struct Outer {
//!     #[shapegen(json = "inner")]
//!     pub inner_stuff: Inner,
//! }
//!
//! #[derive(Record)]
//! pub struct Inner {
//!     #[shapegen(json = "x,omitempty")]
//!     pub x: Option<i32>,
//!     #[shapegen(json = "y")]
//!     pub y: Option<i32>,
//! }
//!
//! let mut out = Vec::new();
//! Generator::new().generate::<Outer>(&mut out)?;
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "interface IOuter {\n\tinner: IInner;\n}\n\n\
//!      interface IInner {\n\tx: number | null | undefined;\n\ty: number | null;\n}"
//! );
//! # Ok::<(), shapegen::Error>(())
//! ```
//!
//! # Generated Output
//!
//! One `interface I<Prefix><Name> { ... }` block per distinct record type,
//! separated by a blank line, with no trailing newline. Banners, file
//! creation and final newlines belong to the caller.

extern crate self as shapegen;

pub mod builder;
mod config;
mod error;
mod generator;
mod interface;
mod ledger;
mod naming;
mod type_mapper;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{Generator, TypeList};
pub use interface::{RenderedField, RenderedInterface};
pub use ledger::EmissionLedger;
pub use naming::interface_name;
/// Host type descriptors.
pub use shapegen_ir as ir;
#[cfg(feature = "derive")]
pub use shapegen_derive::Record;
pub use shapegen_ir::{Describe, Record, TypeRegistry};
pub use type_mapper::{Mapping, TypeMapper, TypeScriptTypeMapper};
