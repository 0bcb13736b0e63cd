//! Check command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    plural,
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub records: usize,
    pub fields: usize,
    pub roots: usize,
    /// Interfaces the dry generation rendered.
    pub interfaces: usize,
    /// Generation errors.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value_indented("records", &plural(self.records, "record"));
        out.key_value_indented("fields", &plural(self.fields, "field"));
        out.key_value_indented("roots", &plural(self.roots, "root"));
        out.key_value_indented("interfaces", &plural(self.interfaces, "interface"));
    }
}
