//! Bundle of services a single script run talks to

use super::output::OutputSink;
use super::runner::FormRunner;
use super::traits::UiBackend;
use crate::state::ScriptContext;
use std::sync::Arc;

/// Everything the root object hands out to one script execution
pub struct HostServices {
    pub sink: OutputSink,
    pub runner: FormRunner,
    pub context: ScriptContext,
}

impl HostServices {
    /// Services echoing to stdout and presenting modals through `ui`
    pub fn new(ui: Arc<dyn UiBackend>, context: ScriptContext) -> Self {
        let sink = OutputSink::stdout(ui.clone(), context.name());
        Self::with_sink(sink, ui, context)
    }

    pub fn with_sink(sink: OutputSink, ui: Arc<dyn UiBackend>, context: ScriptContext) -> Self {
        Self {
            sink,
            runner: FormRunner::new(ui),
            context,
        }
    }
}
