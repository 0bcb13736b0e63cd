//! Core operations.
//!
//! This module contains the business logic for shapegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{Overrides, render, resolve_config, write_output};
pub use list::list;
