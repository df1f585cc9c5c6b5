//! Pipeline plugin that logs phase timings.

use std::{collections::HashMap, sync::Mutex, time::Instant};

use crdgo_codegen::pipeline::{GenerationContext, Plugin};
use eyre::Result;
use tracing::{debug, info};

/// Logs how long each phase took and what it left behind.
#[derive(Default)]
pub struct TracePlugin {
    started: Mutex<HashMap<String, Instant>>,
}

impl TracePlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TracePlugin {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
        if let Ok(mut started) = self.started.lock() {
            started.insert(phase.to_string(), Instant::now());
        }
        debug!(phase, "phase starting");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.remove(phase))
            .map(|start| start.elapsed());

        info!(
            phase,
            elapsed_us = elapsed.map(|d| d.as_micros() as u64).unwrap_or_default(),
            descriptors = ctx.descriptors.len(),
            files = ctx.files.len(),
            warnings = ctx.warning_count(),
            "phase finished"
        );
        Ok(())
    }
}
