//! Manifest parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use shapegen_ir::{FieldDef, RecordType, TypeRegistry};

use super::{Manifest, RecordDecl, parse_type_expr, validate::ParseContext};
use crate::{Error, Result};

const DEFAULT_FILENAME: &str = "shapegen.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a shapegen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a shapegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    manifest.registry = validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest and resolve its records.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<TypeRegistry> {
    let ctx = ParseContext::new(src, filename);

    let mut seen = HashSet::new();
    for record in &manifest.records {
        ctx.validate_name(&record.name, "record")?;
        if !seen.insert(record.name.as_str()) {
            return Err(ctx.duplicate_record_error(&record.name));
        }
    }

    if let Some(roots) = &manifest.output.roots {
        for root in roots {
            if !seen.contains(root.as_str()) {
                return Err(ctx.unknown_root_error(root));
            }
        }
    }

    let is_record = |name: &str| seen.contains(name);
    let mut registry = TypeRegistry::new();
    for record in &manifest.records {
        let resolved = resolve_record(&ctx.push(&record.name), record, &is_record)?;
        registry.insert(resolved);
    }
    Ok(registry)
}

fn resolve_record<'a>(
    ctx: &ParseContext<'a>,
    record: &'a RecordDecl,
    is_record: &dyn Fn(&str) -> bool,
) -> Result<RecordType> {
    let mut seen = HashSet::new();
    let mut resolved = RecordType::new(&record.name);

    for field in &record.fields {
        ctx.validate_name(&field.name, "field")?;
        if !seen.insert(field.name.as_str()) {
            return Err(ctx.duplicate_field_error(&record.name, &field.name));
        }

        let ty = parse_type_expr(&field.ty, is_record).map_err(|reason| {
            ctx.push(&field.name)
                .invalid_type_error(&field.ty, "field", reason)
        })?;

        let mut def = FieldDef::new(&field.name, ty);
        if let Some(json) = &field.json {
            def = def.json(json);
        }
        if let Some(ts_type) = &field.tstype {
            def = def.ts_type(ts_type);
        }
        if let Some(description) = &field.tsdesc {
            def = def.description(description);
        }
        if field.private {
            def = def.private();
        }
        resolved = resolved.field(def);
    }

    Ok(resolved)
}
