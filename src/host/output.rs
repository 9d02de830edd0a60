//! Output sink: Echo, TraceI and MsgBox

use super::traits::UiBackend;
use crate::error::HostResult;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Tracing target for script diagnostics, separate from user-facing output
pub const TRACE_TARGET: &str = "script_trace";

/// Everything a script sent through the sink during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub echoes: Vec<String>,
    pub traces: Vec<String>,
}

/// Host-side destination for script output
pub struct OutputSink {
    writer: Mutex<Box<dyn Write + Send>>,
    transcript: Mutex<Transcript>,
    ui: Arc<dyn UiBackend>,
    title: String,
}

impl OutputSink {
    /// Create a sink that echoes to stdout
    pub fn stdout(ui: Arc<dyn UiBackend>, title: impl Into<String>) -> Self {
        Self::with_writer(Box::new(io::stdout()), ui, title)
    }

    pub fn with_writer(
        writer: Box<dyn Write + Send>,
        ui: Arc<dyn UiBackend>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            writer: Mutex::new(writer),
            transcript: Mutex::new(Transcript::default()),
            ui,
            title: title.into(),
        }
    }

    /// Write a line of user-facing output.
    ///
    /// Never fails the script: a write error is logged and the line is still
    /// recorded in the transcript.
    pub fn echo(&self, text: &str) {
        if let Err(err) = self.write_line(text) {
            tracing::warn!("Failed to write script output: {err}");
        }
        tracing::debug!("Echo: {text}");
        self.transcript
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .echoes
            .push(text.to_string());
    }

    fn write_line(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(writer, "{text}")?;
        writer.flush()
    }

    /// Write an informational diagnostic trace
    pub fn trace_info(&self, text: &str) {
        tracing::info!(target: TRACE_TARGET, "{text}");
        self.transcript
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .traces
            .push(text.to_string());
    }

    /// Show a modal message and wait until the user dismisses it
    pub fn msg_box(&self, text: &str) -> HostResult<()> {
        tracing::debug!("MsgBox: {text}");
        self.ui.message_box(&self.title, text)
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// In-memory writer whose contents stay readable after the sink takes it
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that fails every write, like stdout after the reader went away
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ClosedPipe;

#[cfg(test)]
impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::traits::MockUiBackend;
    use pretty_assertions::assert_eq;

    fn sink_with(ui: MockUiBackend) -> (OutputSink, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let sink = OutputSink::with_writer(Box::new(buffer.clone()), Arc::new(ui), "demo.rhai");
        (sink, buffer)
    }

    #[test]
    fn test_echo_writes_line() {
        let (sink, buffer) = sink_with(MockUiBackend::new());
        sink.echo("GLOBAL");
        sink.echo("In Class");
        assert_eq!(buffer.contents(), "GLOBAL\nIn Class\n");
        assert_eq!(sink.transcript().echoes, vec!["GLOBAL", "In Class"]);
    }

    #[test]
    fn test_echo_survives_write_failure() {
        let sink = OutputSink::with_writer(
            Box::new(ClosedPipe),
            Arc::new(MockUiBackend::new()),
            "demo.rhai",
        );
        sink.echo("lost");
        sink.echo("also lost");
        assert_eq!(sink.transcript().echoes, vec!["lost", "also lost"]);
    }

    #[test]
    fn test_trace_does_not_touch_user_output() {
        let (sink, buffer) = sink_with(MockUiBackend::new());
        sink.trace_info("diagnostic");
        assert_eq!(buffer.contents(), "");
        assert_eq!(sink.transcript().traces, vec!["diagnostic"]);
        assert!(sink.transcript().echoes.is_empty());
    }

    #[test]
    fn test_msg_box_delegates_to_ui() {
        let mut ui = MockUiBackend::new();
        ui.expect_message_box()
            .withf(|title, message| title == "demo.rhai" && message == "2")
            .times(1)
            .returning(|_, _| Ok(()));
        let (sink, buffer) = sink_with(ui);
        sink.msg_box("2").unwrap();
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_msg_box_propagates_ui_failure() {
        let mut ui = MockUiBackend::new();
        ui.expect_message_box()
            .returning(|_, _| Err(crate::error::HostError::Ui("no tty".to_string())));
        let (sink, _) = sink_with(ui);
        assert!(sink.msg_box("x").is_err());
    }
}
