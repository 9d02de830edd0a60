//! Metadata about the script currently being executed

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identity of the running script.
///
/// Set by the host before execution starts; there is no way to mutate it
/// afterwards, so every read during one run returns the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptContext {
    inner: Arc<ScriptIdentity>,
}

#[derive(Debug, PartialEq, Eq)]
struct ScriptIdentity {
    name: String,
    path: PathBuf,
}

impl ScriptContext {
    /// Build the context for a script file; the name is the file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(name, path.to_path_buf())
    }

    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(ScriptIdentity {
                name: name.into(),
                path,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}
