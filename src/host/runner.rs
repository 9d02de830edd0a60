//! Form runner: displays a form once and turns the dismissal into an exit code

use super::traits::UiBackend;
use crate::error::HostResult;
use crate::state::{Dismissal, FormHandle, DISMISSED_EXIT_CODE};
use std::sync::Arc;

/// Runs forms through a UI backend
#[derive(Clone)]
pub struct FormRunner {
    ui: Arc<dyn UiBackend>,
}

impl FormRunner {
    pub fn new(ui: Arc<dyn UiBackend>) -> Self {
        Self { ui }
    }

    /// Display the form modally and return its exit code.
    ///
    /// Text typed into text boxes is written back before returning, so later
    /// `Text` reads see the user's input.
    pub fn execute(&self, form: &FormHandle) -> HostResult<i64> {
        let view = form.begin_execute()?;
        tracing::debug!(
            "Executing form '{}' with {} controls",
            view.title,
            view.controls.len()
        );

        let outcome = self.ui.present_form(&view)?;
        form.apply_edits(&outcome.edits);

        let code = match outcome.dismissal {
            Dismissal::Button(index) => view.exit_code_at(index)?,
            Dismissal::Closed => DISMISSED_EXIT_CODE,
        };
        tracing::info!("Form '{}' closed with exit code {code}", view.title);
        Ok(code)
    }
}
