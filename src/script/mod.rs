//! Rhai scripting integration for the automation host.
//!
//! Builds a sandboxed engine, injects the root automation object and reports
//! each run in a serializable form.

mod api;
mod config;
mod engine;
mod executor;
mod report;

pub use config::ScriptConfig;
pub use executor::{load_script, ScriptExecutor, DEFAULT_ROOT_NAME};
pub use report::RunReport;
