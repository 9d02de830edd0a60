//! Host-level errors surfaced to scripts

use rhai::EvalAltResult;

/// Result alias for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Errors raised by the automation host object model
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A control kind outside Label/Button/TextBox was requested
    #[error("Invalid control kind '{0}' (expected Label, Button or TextBox)")]
    InvalidControlKind(String),

    /// Arguments passed to a control constructor did not fit the kind
    #[error("Invalid arguments for {kind}: {reason}")]
    InvalidArguments { kind: String, reason: String },

    /// A property was accessed on a control variant that does not carry it
    #[error("Type mismatch: {kind} has no property '{property}'")]
    PropertyTypeMismatch { kind: String, property: String },

    /// No control is attached to the form under this name
    #[error("Form has no control named '{0}'")]
    UnknownControl(String),

    /// Execute was called on a form that already ran
    #[error("Form has already been executed")]
    FormAlreadyExecuted,

    /// The UI reported activation of a control that is not a button
    #[error("Control at position {0} is not a button")]
    NotAButton(usize),

    /// The UI backend failed to present a form or message box
    #[error("UI error: {0}")]
    Ui(String),

    /// Terminal or output I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<HostError> for Box<EvalAltResult> {
    fn from(err: HostError) -> Self {
        err.to_string().into()
    }
}
