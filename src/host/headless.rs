//! Non-interactive UI backend

use super::traits::UiBackend;
use crate::error::HostResult;
use crate::state::{FormOutcome, FormView};

/// Backend for runs without a terminal.
///
/// Every form is dismissed as soon as it is shown and message boxes are
/// written to the log instead of waiting for the user.
#[derive(Debug, Default)]
pub struct HeadlessUi;

impl UiBackend for HeadlessUi {
    fn present_form(&self, form: &FormView) -> HostResult<FormOutcome> {
        tracing::info!(
            "Headless: dismissing form '{}' ({} controls)",
            form.title,
            form.controls.len()
        );
        Ok(FormOutcome::closed())
    }

    fn message_box(&self, title: &str, message: &str) -> HostResult<()> {
        tracing::info!("Headless message box [{title}]: {message}");
        Ok(())
    }
}
