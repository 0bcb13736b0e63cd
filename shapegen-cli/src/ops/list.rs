//! List operation - record summary.

use shapegen_manifest::Manifest;

use crate::reports::{ListReport, RecordSummary};

pub fn list(manifest: &Manifest) -> ListReport {
    let roots = manifest.roots();
    let records = manifest
        .records
        .iter()
        .map(|record| RecordSummary {
            name: record.name.clone(),
            fields: record.fields.len(),
            exported: record
                .fields
                .iter()
                .filter(|f| !f.private && f.json.as_deref() != Some("-"))
                .count(),
            root: roots.contains(&record.name.as_str()),
        })
        .collect();

    ListReport { records }
}
