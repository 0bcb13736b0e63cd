mod check;
mod completions;
mod generate;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for shapegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "shapegen")]
#[command(version)]
#[command(about = "Generate TypeScript-style interfaces from record type descriptions")]
pub(crate) struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate interface declarations from shapegen.toml
    Generate(GenerateCommand),

    /// Validate shapegen.toml and perform a dry generation
    Check(CheckCommand),

    /// List records defined in shapegen.toml
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "shapegen", "generate", "-c", "types.toml", "-o", "out.ts", "--prefix", "Message",
            "--indent", "2",
        ])
        .unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.config.to_str(), Some("types.toml"));
        assert_eq!(cmd.output.as_deref().and_then(|p| p.to_str()), Some("out.ts"));
        assert_eq!(cmd.prefix.as_deref(), Some("Message"));
        assert_eq!(cmd.indent.as_deref(), Some("  "));
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["shapegen", "check", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
