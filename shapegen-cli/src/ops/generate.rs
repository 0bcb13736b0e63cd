//! Generate operation - manifest to interface file.

use std::{fs, path::Path};

use eyre::{Context, Result};
use shapegen::{Config, Generator, TypeList};
use shapegen_manifest::{Manifest, OutputSettings};
use tracing::debug;

use crate::reports::GenerateReport;

/// Output settings given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub indentation: Option<String>,
}

/// A fully assembled output file.
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    /// Interfaces written
    pub interfaces: usize,
    pub roots: usize,
}

/// Merge manifest settings with command-line overrides.
pub fn resolve_config(settings: &OutputSettings, overrides: &Overrides) -> Config {
    let mut config = Config::new();
    if let Some(prefix) = overrides.prefix.as_ref().or(settings.prefix.as_ref()) {
        config = config.prefix(prefix.as_str());
    }
    if let Some(indentation) = overrides
        .indentation
        .as_ref()
        .or(settings.indentation.as_ref())
    {
        config = config.indentation(indentation.as_str());
    }
    config
}

/// Generate every root of the manifest into one buffer.
///
/// The buffer holds the optional header banner and a blank line, the
/// interface blocks, and a final newline.
pub fn render(manifest: &Manifest, config: Config) -> Result<Rendered> {
    let roots = manifest.roots();
    let types = TypeList::from_registry(manifest.registry().clone(), roots.iter().copied());
    debug!(roots = roots.len(), records = manifest.records.len(), "generating interfaces");

    let mut generator = Generator::with_config(config);
    let mut body = Vec::new();
    generator
        .generate_types(&mut body, &types)
        .wrap_err("Failed to generate interfaces")?;
    let body = String::from_utf8(body).wrap_err("Generated output is not valid UTF-8")?;

    let mut text = String::new();
    if let Some(header) = manifest.output.header.as_deref().filter(|h| !h.is_empty()) {
        text.push_str(header);
        text.push_str("\n\n");
    }
    text.push_str(&body);
    text.push('\n');

    Ok(Rendered {
        text,
        interfaces: generator.ledger().len(),
        roots: roots.len(),
    })
}

/// Write a rendered file, creating missing parent directories.
pub fn write_output(path: &Path, rendered: &Rendered) -> Result<GenerateReport> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, &rendered.text)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = rendered.text.len(), "wrote output file");

    Ok(GenerateReport {
        output: path.to_path_buf(),
        interfaces: rendered.interfaces,
        roots: rendered.roots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[output]
header = "/* THIS FILE IS GENERATED, DO NOT EDIT */"

[[record]]
name = "Outer"

[[record.field]]
name = "InnerStuff"
type = "Inner"

[[record]]
name = "Inner"

[[record.field]]
name = "X"
type = "*int"
json = "X,omitempty"
"#;

    #[test]
    fn test_resolve_config_prefers_overrides() {
        let settings = OutputSettings {
            prefix: Some("Message".to_string()),
            indentation: Some("  ".to_string()),
            ..OutputSettings::default()
        };

        let config = resolve_config(&settings, &Overrides::default());
        assert_eq!(config, Config::new().prefix("Message").indentation("  "));

        let overrides = Overrides {
            prefix: Some("Api".to_string()),
            indentation: None,
        };
        let config = resolve_config(&settings, &overrides);
        assert_eq!(config, Config::new().prefix("Api").indentation("  "));

        let config = resolve_config(&OutputSettings::default(), &Overrides::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_render_with_header() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let rendered = render(&manifest, Config::default()).unwrap();

        assert_eq!(
            rendered.text,
            "/* THIS FILE IS GENERATED, DO NOT EDIT */\n\n\
             interface IOuter {\n\tInnerStuff: IInner;\n}\n\n\
             interface IInner {\n\tX: number | null | undefined;\n}\n"
        );
        assert_eq!(rendered.interfaces, 2);
        assert_eq!(rendered.roots, 2);
    }

    #[test]
    fn test_render_without_header() {
        let manifest: Manifest = "[[record]]\nname = \"Empty\"\n".parse().unwrap();
        let rendered = render(&manifest, Config::default()).unwrap();
        assert_eq!(rendered.text, "interface IEmpty {\n}\n");
    }

    #[test]
    fn test_render_failure() {
        let src = "[[record]]\nname = \"A\"\n\n[[record.field]]\nname = \"z\"\ntype = \"complex64\"\n";
        let manifest: Manifest = src.parse().unwrap();
        let err = render(&manifest, Config::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to generate interfaces"));
        assert!(err.downcast_ref::<shapegen::Error>().is_some());
    }

    #[test]
    fn test_write_output_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated").join("types.ts");

        let manifest: Manifest = MANIFEST.parse().unwrap();
        let rendered = render(&manifest, Config::default()).unwrap();
        let report = write_output(&path, &rendered).unwrap();

        assert_eq!(report.output, path);
        assert_eq!(report.interfaces, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), rendered.text);
    }

    #[test]
    fn test_write_output_replaces_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "stale contents that are longer than the new ones").unwrap();

        let manifest: Manifest = "[[record]]\nname = \"Empty\"\n".parse().unwrap();
        let rendered = render(&manifest, Config::default()).unwrap();
        write_output(file.path(), &rendered).unwrap();

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "interface IEmpty {\n}\n"
        );
    }
}
