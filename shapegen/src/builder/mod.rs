//! Text generation building blocks.
//!
//! - [`CodeBuilder`] - line builder with a configurable indentation unit
//! - [`CodeFragment`] - intermediate representation for pieces of output
//! - [`Renderable`] - trait for nodes that convert to fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
