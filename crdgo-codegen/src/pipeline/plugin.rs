//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the generation context.
///
/// # Example
///
/// ```
/// use crdgo_codegen::pipeline::{GenerationContext, Plugin};
///
/// struct FileCount;
///
/// impl Plugin for FileCount {
///     fn name(&self) -> &'static str {
///         "file-count"
///     }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> eyre::Result<()> {
///         if phase == "render" {
///             println!("{} files rendered", ctx.files.len());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully. Return an error to abort
    /// the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}
