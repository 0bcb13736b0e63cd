use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use shapegen_manifest::ShapegenToml;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to shapegen.toml (defaults to ./shapegen.toml)
    #[arg(short, long, default_value = "shapegen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        debug!(path = %self.config.display(), "loading manifest");
        let shapegen_toml = ShapegenToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(shapegen_toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
