//! Generate command report.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    plural,
};

/// Summary of a written output file.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub interfaces: usize,
    pub roots: usize,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "✓ Generated {} from {}",
            plural(self.interfaces, "interface"),
            plural(self.roots, "root"),
        ));
        out.key_value_indented("output", &self.output.display().to_string());
    }
}
