use std::{io::Write, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use shapegen_manifest::ShapegenToml;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Overrides},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to shapegen.toml (defaults to ./shapegen.toml)
    #[arg(short, long, default_value = "shapegen.toml")]
    pub config: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interface name prefix (overrides shapegen.toml setting)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Indentation: a number of spaces, "tab", or literal whitespace
    /// (overrides shapegen.toml setting)
    #[arg(long, value_parser = parse_indent)]
    pub indent: Option<String>,

    /// Print the generated interfaces instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        debug!(path = %self.config.display(), "loading manifest");
        let shapegen_toml = ShapegenToml::open(&self.config).unwrap_or_exit();
        let manifest = shapegen_toml.manifest();

        let overrides = Overrides {
            prefix: self.prefix.clone(),
            indentation: self.indent.clone(),
        };
        let rendered = ops::render(manifest, ops::resolve_config(&manifest.output, &overrides))?;

        match &self.output {
            Some(path) if !self.dry_run => {
                let report = ops::write_output(path, &rendered)?;
                report.render(&mut TerminalOutput::new());
            }
            _ => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(rendered.text.as_bytes())
                    .wrap_err("Failed to write to stdout")?;
            }
        }

        Ok(())
    }
}

/// Parse the `--indent` value.
fn parse_indent(value: &str) -> std::result::Result<String, String> {
    if value == "tab" || value == "\\t" {
        return Ok("\t".to_string());
    }
    if let Ok(width) = value.parse::<usize>() {
        return Ok(" ".repeat(width));
    }
    if value.chars().all(|c| c == ' ' || c == '\t') {
        return Ok(value.to_string());
    }
    Err(format!(
        "expected a number of spaces, 'tab', or whitespace, got '{}'",
        value
    ))
}
