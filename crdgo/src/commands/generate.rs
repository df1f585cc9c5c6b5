use std::path::PathBuf;

use clap::Args;
use crdgo_manifest::CrdgoToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to crdgo.toml (defaults to ./crdgo.toml)
    #[arg(short, long, default_value = "crdgo.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [output] dir in crdgo.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = CrdgoToml::open(&self.config).unwrap_or_exit().into_manifest();
        let output_dir = self.output.as_ref().unwrap_or(&manifest.output.dir).clone();

        let report = ops::generate(
            &manifest,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
