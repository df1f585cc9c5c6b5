//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the generation pipeline.
///
/// Built-in phases, in order:
/// - `ValidatePhase` - lints the configuration and loads the header
/// - `ShapePhase` - truncates descriptions and stamps attribution
/// - `ConvertPhase` - converts each descriptor into every requested version
/// - `RenderPhase` - renders the scheme and values files
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
