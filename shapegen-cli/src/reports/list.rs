//! List command report.

use serde::Serialize;

use super::output::{Output, Report};

/// Records declared in a manifest.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub name: String,
    /// Declared fields
    pub fields: usize,
    /// Fields that appear in the output
    pub exported: usize,
    /// Whether generation starts from this record
    pub root: bool,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.records.is_empty() {
            out.preformatted("No records defined");
            return;
        }

        out.section("Records");
        for record in &self.records {
            let marker = if record.root { " (root)" } else { "" };
            out.list_item(&format!(
                "{}{} [{}/{} fields]",
                record.name, marker, record.exported, record.fields
            ));
        }
    }
}
