//! Automation Host - runs automation scripts against a forms object model
//!
//! Scripts reach the host through a single root object (`Salamander` by
//! default) that offers output, modal forms and script metadata. Forms are
//! drawn in the terminal with Ratatui.

mod app;
mod config;
mod error;
mod host;
mod platform;
mod script;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::HostConfig;
use host::{HeadlessUi, HostServices, TerminalUi, UiBackend};
use script::{load_script, RunReport, ScriptExecutor};
use state::ScriptContext;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run automation scripts that build and display forms
#[derive(Parser)]
#[command(name = "automation-host")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script
    Run(RunArgs),

    /// Write a config file with the default settings
    InitConfig {
        /// Where to write it (default: the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
struct RunArgs {
    /// Path to the script file
    script: PathBuf,

    /// Dismiss forms and message boxes without opening the terminal UI
    #[arg(long)]
    headless: bool,

    /// Name the root object is injected under
    #[arg(long)]
    root_name: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Config file to use instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "automation_host=info,script_trace=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let report = run_script(args).await?;
            if let Some(error) = &report.error {
                eprintln!("Error: {}", error.message);
                std::process::exit(1);
            }
        }
        Commands::InitConfig { path } => {
            let path = path
                .or_else(HostConfig::config_path)
                .context("could not determine config directory")?;
            HostConfig::default().save_to(&path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

async fn run_script(args: RunArgs) -> Result<RunReport> {
    let config = match &args.config {
        Some(path) => HostConfig::load_from(path)?,
        None => HostConfig::load()?,
    };

    let source = load_script(&args.script)?;

    let headless = args.headless || config.headless() || !io::stdout().is_terminal();
    let ui: Arc<dyn UiBackend> = if headless {
        tracing::debug!("Using headless UI");
        Arc::new(HeadlessUi)
    } else {
        Arc::new(TerminalUi::new())
    };

    let context = ScriptContext::from_path(&args.script);
    let services = Arc::new(HostServices::new(ui, context));
    let root_name = args
        .root_name
        .unwrap_or_else(|| config.root_name().to_string());
    let executor = ScriptExecutor::new(config.script_config(), root_name);

    // Execute and MsgBox block until the user responds
    let report = tokio::task::spawn_blocking(move || executor.execute(&source, services))
        .await
        .context("script task failed")?;

    if let Some(path) = &args.report {
        report
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::parse_from(["automation-host", "run", "demo.rhai", "--headless"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.script, PathBuf::from("demo.rhai"));
                assert!(args.headless);
                assert!(args.report.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_headless_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            &dir,
            "gui02.rhai",
            include_str!("../demos/gui02.rhai"),
        );
        let report_path = dir.path().join("report.json");

        let report = tokio_test::block_on(run_script(RunArgs {
            script,
            headless: true,
            report: Some(report_path.clone()),
            config: Some(dir.path().join("config.json")),
            ..Default::default()
        }))
        .unwrap();

        assert!(report.is_success(), "{:?}", report.error);
        assert_eq!(report.script, "gui02.rhai");
        assert!(report_path.exists());
    }

    #[test]
    fn test_root_name_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"root_name": "WScript", "headless": true}"#).unwrap();
        let script = write_script(&dir, "scope.rhai", r#"WScript.TraceI("ok");"#);

        let report = tokio_test::block_on(run_script(RunArgs {
            script,
            config: Some(config_path),
            ..Default::default()
        }))
        .unwrap();

        assert!(report.is_success(), "{:?}", report.error);
        assert_eq!(report.traces, vec!["ok"]);
    }

    #[test]
    fn test_missing_script_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokio_test::block_on(run_script(RunArgs {
            script: dir.path().join("absent.rhai"),
            headless: true,
            config: Some(dir.path().join("config.json")),
            ..Default::default()
        }));
        assert!(result.is_err());
    }
}
