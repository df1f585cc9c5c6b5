mod check;
mod completions;
mod explain;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crdgo_manifest::Result<T> {
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
#[command(name = "crdgo")]
#[command(version)]
#[command(about = "Generate Go constructors for CustomResourceDefinitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go sources from crdgo.toml
    Generate(GenerateCommand),

    /// Validate crdgo.toml and its descriptors without writing files
    Check(CheckCommand),

    /// Describe the pipeline and what a run would produce
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
