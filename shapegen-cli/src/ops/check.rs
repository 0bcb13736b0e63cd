//! Check operation - manifest validation plus a dry generation.

use std::{io, path::Path};

use shapegen::{Generator, TypeList};
use shapegen_manifest::Manifest;
use tracing::debug;

use super::{Overrides, resolve_config};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The manifest has already passed validation while loading; this renders
/// every root into a sink so type mapping failures surface too.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let config = resolve_config(&manifest.output, &Overrides::default());
    let types = TypeList::from_registry(manifest.registry().clone(), manifest.roots());

    let mut generator = Generator::with_config(config);
    let mut errors = Vec::new();
    if let Err(e) = generator.generate_types(&mut io::sink(), &types) {
        debug!(error = %e, "dry generation failed");
        errors.push(e.to_string());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        records: manifest.records.len(),
        fields: manifest.records.iter().map(|r| r.fields.len()).sum(),
        roots: manifest.roots().len(),
        interfaces: generator.ledger().len(),
        errors,
    }
}
