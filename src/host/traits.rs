//! Trait abstraction for the UI toolkit to enable mocking in tests

use crate::error::HostResult;
use crate::state::{FormOutcome, FormView};

/// Modal presentation surface, enabling mocking in tests.
///
/// Both calls block the calling script until the user dismisses the modal.
#[cfg_attr(test, mockall::automock)]
pub trait UiBackend: Send + Sync {
    /// Display a form and wait for it to be dismissed
    fn present_form(&self, form: &FormView) -> HostResult<FormOutcome>;

    /// Display a message box and wait for it to be acknowledged
    fn message_box(&self, title: &str, message: &str) -> HostResult<()>;
}
