use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use rhai::{Dynamic, Scope};
use serde_json::Value;
use uuid::Uuid;

use super::{
    api::{self, HostHandle},
    config::ScriptConfig,
    engine::build_engine,
    report::{format_error, RunReport, ScriptError, ScriptResult},
};
use crate::host::HostServices;

/// Name the root object is injected under unless configured otherwise
pub const DEFAULT_ROOT_NAME: &str = "Salamander";

/// Read a script file from disk
pub fn load_script(path: &Path) -> ScriptResult<String> {
    std::fs::read_to_string(path).map_err(|err| ScriptError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Executes scripts against the host object model
pub struct ScriptExecutor {
    config: ScriptConfig,
    root_name: String,
}

impl ScriptExecutor {
    pub fn new(config: ScriptConfig, root_name: impl Into<String>) -> Self {
        Self {
            config,
            root_name: root_name.into(),
        }
    }

    /// Run one script to completion and report what happened
    pub fn execute(&self, source: &str, services: Arc<HostServices>) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let script = services.context.name().to_string();
        let _span = tracing::info_span!("script", %run_id, script = %script).entered();
        tracing::info!("Running script");

        let result = self.eval(source, &services);

        let transcript = services.sink.transcript();
        let (value, error) = match result {
            Ok(val) => {
                let json_val = rhai::serde::from_dynamic::<Value>(&val).unwrap_or(Value::Null);
                (Some(json_val), None)
            }
            Err(err) => {
                tracing::error!("Script failed: {err}");
                (None, Some(format_error(&err)))
            }
        };

        RunReport {
            run_id,
            script,
            started_at,
            finished_at: Utc::now(),
            value,
            echoes: transcript.echoes,
            traces: transcript.traces,
            error,
        }
    }

    fn eval(&self, source: &str, services: &Arc<HostServices>) -> ScriptResult<Dynamic> {
        let mut engine = build_engine(&self.config);

        // Register API
        api::register(&mut engine, services);

        // `print` behaves like Echo
        let print_services = services.clone();
        engine.on_print(move |text| print_services.sink.echo(text));
        engine.on_debug(|text, src, pos| {
            tracing::debug!("{}{:?}: {text}", src.unwrap_or("script"), pos);
        });

        // Setup Scope
        let mut scope = Scope::new();
        scope.push(self.root_name.clone(), HostHandle::new(services.clone()));

        // Parse & Eval
        let ast = engine
            .compile_with_scope(&scope, source)
            .map_err(ScriptError::Parse)?;
        engine
            .eval_ast_with_scope::<Dynamic>(&mut scope, &ast)
            .map_err(|err| ScriptError::Runtime(Arc::from(err)))
    }
}

impl Default for ScriptExecutor {
    fn default() -> Self {
        Self::new(ScriptConfig::default(), DEFAULT_ROOT_NAME)
    }
}
