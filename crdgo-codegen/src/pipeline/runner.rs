//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;

use super::{
    Descriptors, GenerationContext, Phase, PhaseInfo, Plugin,
    phases::{ConvertPhase, RenderPhase, ShapePhase, ValidatePhase},
};
use crate::config::GeneratorConfig;

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (validate, shape, convert, render) followed by
/// any extra phases, calling plugin hooks before and after each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(config, descriptors)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Built-in phases in execution order.
    pub fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(ValidatePhase::new()),
            Box::new(ShapePhase),
            Box::new(ConvertPhase),
            Box::new(RenderPhase),
        ]
    }

    /// Run the pipeline over `descriptors`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. The run succeeds or
    /// fails as a whole; nothing is written by the pipeline itself.
    pub fn run(
        &self,
        config: GeneratorConfig,
        descriptors: Descriptors,
    ) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(config, descriptors);
        self.execute(&mut ctx)?;
        Ok(ctx)
    }

    /// Run every phase against a caller-owned context.
    ///
    /// Diagnostics recorded before a failure stay in `ctx`, so callers that
    /// report them (such as `crdgo check`) use this instead of [`Self::run`].
    pub fn execute(&self, ctx: &mut GenerationContext) -> Result<()> {
        for phase in Self::builtin_phases().iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    /// Name and description of every phase, in execution order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.info())
            .collect()
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        debug!(phase = phase_name, "running phase");
        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use crdgo_apiext::{GroupKind, v1};

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            if let Ok(mut phases) = self.0.lock() {
                phases.push(phase.to_string());
            }
            Ok(())
        }
    }

    struct ExtraPhase;

    impl Phase for ExtraPhase {
        fn name(&self) -> &'static str {
            "extra"
        }

        fn description(&self) -> &'static str {
            "Adds a note"
        }

        fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
            ctx.add_info("extra", "ran last");
            Ok(())
        }
    }

    fn descriptors() -> Descriptors {
        let mut crd = v1::CustomResourceDefinition::default();
        crd.spec.group = "batch.acme.io".into();
        crd.spec.names.kind = "CronTab".into();
        crd.spec.scope = "Namespaced".into();
        Descriptors::from([(GroupKind::new("batch.acme.io", "CronTab"), crd)])
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(GeneratorConfig::new("crds"), descriptors())
            .expect("pipeline should succeed");

        assert_eq!(ctx.versioned.len(), 1);
        assert_eq!(ctx.files.len(), 2);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(GeneratorConfig::new("crds"), descriptors())
            .expect("pipeline should succeed");

        // 4 built-in phases = 4 before + 4 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 4);
        assert_eq!(after_count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_extra_phases_run_after_builtins() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let ctx = Pipeline::new()
            .phase(ExtraPhase)
            .plugin(RecordingPlugin(seen.clone()))
            .run(GeneratorConfig::new("crds"), descriptors())
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["validate", "shape", "convert", "render", "extra"]
        );
        assert_eq!(ctx.diagnostics.last().map(|d| d.phase.as_str()), Some("extra"));
    }

    #[test]
    fn test_invalid_config_stops_before_render() {
        let (plugin, _, after_count) = CountingPlugin::new();
        let result = Pipeline::new()
            .plugin(plugin)
            .run(GeneratorConfig::new(""), descriptors());

        assert!(result.is_err());
        assert_eq!(after_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_execute_keeps_diagnostics_on_failure() {
        let mut ctx = GenerationContext::new(GeneratorConfig::new(""), descriptors());
        let result = Pipeline::new().execute(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
        assert!(ctx.files.is_empty());
    }

    #[test]
    fn test_phase_info_order() {
        let names: Vec<_> = Pipeline::new()
            .phase(ExtraPhase)
            .phase_info()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(names, ["validate", "shape", "convert", "render", "extra"]);
    }
}
