use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rhai::{EvalAltResult, ParseError, Position};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable error details for a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptErrorInfo {
    /// Short error category.
    pub error_type: String,
    /// Human-readable error message.
    pub message: String,
    /// Location in the script, when available.
    pub location: Option<String>,
}

/// Serializable record of one script run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    /// Script name as seen by `Script.Name`.
    pub script: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// JSON value of the script's final expression.
    pub value: Option<serde_json::Value>,
    /// Lines written through `Echo` (and `print`).
    pub echoes: Vec<String>,
    /// Lines written through `TraceI`.
    pub traces: Vec<String>,
    /// Error details when the run failed.
    pub error: Option<ScriptErrorInfo>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Write the report as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Result type for script execution.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while loading or evaluating a script.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("Cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },
    /// The script failed to parse.
    #[error("Parse error: {0}")]
    Parse(ParseError),
    /// The script failed at runtime, including host errors raised by the object model.
    #[error("Runtime error: {0}")]
    Runtime(Arc<EvalAltResult>),
}

/// Convert a script error to a structured, serializable form.
pub fn format_error(err: &ScriptError) -> ScriptErrorInfo {
    match err {
        ScriptError::Io { .. } => ScriptErrorInfo {
            error_type: "io".to_string(),
            message: err.to_string(),
            location: None,
        },
        ScriptError::Parse(err) => ScriptErrorInfo {
            error_type: "parse".to_string(),
            message: err.to_string(),
            location: format_location(err.position()),
        },
        ScriptError::Runtime(err) => ScriptErrorInfo {
            error_type: "runtime".to_string(),
            message: err.to_string(),
            location: format_location(err.position()),
        },
    }
}

fn format_location(pos: Position) -> Option<String> {
    if pos.is_none() {
        None
    } else {
        Some(format!("line {}", pos.line().unwrap_or(0)))
    }
}
