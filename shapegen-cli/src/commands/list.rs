use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use shapegen_manifest::ShapegenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to shapegen.toml (defaults to ./shapegen.toml)
    #[arg(short, long, default_value = "shapegen.toml")]
    pub config: PathBuf,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let shapegen_toml = ShapegenToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(shapegen_toml.manifest());

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize listing")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
