//! Control value objects

use crate::error::{HostError, HostResult};
use std::fmt;
use std::str::FromStr;

/// The closed set of control variants a form can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Label,
    Button,
    TextBox,
}

impl ControlKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Button => "Button",
            Self::TextBox => "TextBox",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlKind {
    type Err = HostError;

    fn from_str(s: &str) -> HostResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "label" => Ok(Self::Label),
            "button" => Ok(Self::Button),
            "textbox" => Ok(Self::TextBox),
            _ => Err(HostError::InvalidControlKind(s.to_string())),
        }
    }
}

/// Properties a script may read or write on a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlProperty {
    Text,
    ExitCode,
}

impl ControlProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::ExitCode => "ExitCode",
        }
    }
}

/// A single control with its variant-specific fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Label {
        text: String,
    },
    Button {
        text: String,
        /// `None` means the code is assigned from the button's ordinal at execute time
        exit_code: Option<i64>,
    },
    TextBox {
        text: String,
    },
}

impl Control {
    /// Create a label
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label { text: text.into() }
    }

    /// Create a button with an explicit exit code
    pub fn button(text: impl Into<String>, exit_code: i64) -> Self {
        Self::Button {
            text: text.into(),
            exit_code: Some(exit_code),
        }
    }

    /// Create a button whose exit code is computed when the form runs
    pub fn auto_button(text: impl Into<String>) -> Self {
        Self::Button {
            text: text.into(),
            exit_code: None,
        }
    }

    /// Create a text box
    pub fn text_box(text: impl Into<String>) -> Self {
        Self::TextBox { text: text.into() }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Label { .. } => ControlKind::Label,
            Self::Button { .. } => ControlKind::Button,
            Self::TextBox { .. } => ControlKind::TextBox,
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button { .. })
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self, Self::TextBox { .. })
    }

    /// Labels never take focus
    pub fn is_focusable(&self) -> bool {
        !matches!(self, Self::Label { .. })
    }

    /// Get the text value (every variant has one)
    pub fn text(&self) -> &str {
        match self {
            Self::Label { text } | Self::Button { text, .. } | Self::TextBox { text } => text,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        match self {
            Self::Label { text } | Self::Button { text, .. } | Self::TextBox { text } => {
                *text = value
            }
        }
    }

    /// Get the configured exit code of a button
    pub fn exit_code(&self) -> HostResult<Option<i64>> {
        match self {
            Self::Button { exit_code, .. } => Ok(*exit_code),
            _ => Err(self.mismatch(ControlProperty::ExitCode)),
        }
    }

    /// Set the exit code of a button
    pub fn set_exit_code(&mut self, value: i64) -> HostResult<()> {
        match self {
            Self::Button { exit_code, .. } => {
                *exit_code = Some(value);
                Ok(())
            }
            _ => Err(self.mismatch(ControlProperty::ExitCode)),
        }
    }

    /// Push a character to a text box
    pub fn push_char(&mut self, c: char) {
        if let Self::TextBox { text } = self {
            text.push(c);
        }
    }

    /// Remove the last character from a text box
    pub fn pop_char(&mut self) {
        if let Self::TextBox { text } = self {
            text.pop();
        }
    }

    fn mismatch(&self, property: ControlProperty) -> HostError {
        HostError::PropertyTypeMismatch {
            kind: self.kind().name().to_string(),
            property: property.name().to_string(),
        }
    }
}
