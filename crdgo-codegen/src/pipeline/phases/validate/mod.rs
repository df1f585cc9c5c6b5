//! Validate phase - lints the configuration and loads the license header.

mod lint;
pub mod lints;

use eyre::{Result, WrapErr, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{CrdVersionLint, EmptyInputLint, PackageNameLint, PreserveUnknownFieldsLint};
use tracing::debug;

use crate::{
    config::GeneratorConfig,
    pipeline::{GenerationContext, Phase},
};

/// Phase that validates the configuration using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(PackageNameLint),
                Box::new(CrdVersionLint),
                Box::new(PreserveUnknownFieldsLint),
                Box::new(EmptyInputLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check configuration and load the license header"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.config, &ctx.descriptors, &mut ctx.diagnostics);
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        ctx.header = load_header(&ctx.config)?;
        Ok(())
    }
}

/// Read the header file, replacing ` YEAR` with ` <year>`.
pub fn load_header(config: &GeneratorConfig) -> Result<String> {
    let text = match &config.header_file {
        Some(path) => {
            debug!(path = %path.display(), "reading header");
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read header file {}", path.display()))?
        }
        None => String::new(),
    };
    Ok(text.replace(" YEAR", &format!(" {}", config.year)))
}
