use std::path::PathBuf;

use clap::Args;
use crdgo_manifest::CrdgoToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to crdgo.toml (defaults to ./crdgo.toml)
    #[arg(short, long, default_value = "crdgo.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = CrdgoToml::open(&self.config).unwrap_or_exit().into_manifest();
        let report = ops::explain(&manifest, &self.config)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
