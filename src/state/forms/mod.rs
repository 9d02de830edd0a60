//! Form domain layer
//!
//! Type-safe controls and the shared handles scripts hold onto while a form
//! is being built and executed.

mod control;
mod form_state;

pub use control::{Control, ControlKind, ControlProperty};
pub use form_state::{
    ControlHandle, Dismissal, FormHandle, FormOutcome, FormView, TextEdit,
    DISMISSED_EXIT_CODE,
};
