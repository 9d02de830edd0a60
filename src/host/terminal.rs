//! Terminal UI backend built on ratatui and crossterm

use super::traits::UiBackend;
use crate::app::{message_key, FormSession, MessageKey};
use crate::error::{HostError, HostResult};
use crate::state::{FormOutcome, FormView};
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Presents modals on the alternate screen of the controlling terminal.
///
/// The alternate screen is entered only while a modal is up, so Echo output
/// written between modals lands in the normal scrollback.
#[derive(Default)]
pub struct TerminalUi {
    // Serializes modals; only one may own the terminal at a time
    screen: Mutex<()>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_terminal<T>(&self, run: impl FnOnce(&mut Term) -> io::Result<T>) -> HostResult<T> {
        let _screen = self.screen.lock().unwrap_or_else(|e| e.into_inner());

        // Setup terminal
        enable_raw_mode().map_err(setup_error("enable raw mode"))?;
        let _restore = Restore { out: io::stdout() };
        execute!(io::stdout(), EnterAlternateScreen)
            .map_err(setup_error("enter the alternate screen"))?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(setup_error("open the terminal"))?;

        Ok(run(&mut terminal)?)
    }
}

fn setup_error(step: &'static str) -> impl FnOnce(io::Error) -> HostError {
    move |err| HostError::Ui(format!("cannot {step}: {err}"))
}

/// Puts the terminal back when dropped, however the modal ended
struct Restore<W: Write> {
    out: W,
}

impl<W: Write> Drop for Restore<W> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, cursor::Show) {
            tracing::warn!("Failed to restore terminal: {err}");
        }
    }
}

impl UiBackend for TerminalUi {
    fn present_form(&self, form: &FormView) -> HostResult<FormOutcome> {
        let mut session = FormSession::new(form.clone());
        self.with_terminal(|terminal| loop {
            terminal.draw(|frame| ui::draw_form(frame, &session))?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(outcome) = session.handle_key(key) {
                    return Ok(outcome);
                }
            }
        })
    }

    fn message_box(&self, title: &str, message: &str) -> HostResult<()> {
        let mut copied = false;
        self.with_terminal(|terminal| loop {
            terminal.draw(|frame| ui::render_message_dialog(frame, title, message, copied))?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match message_key(key) {
                    MessageKey::Dismiss => return Ok(()),
                    MessageKey::Copy => match copy_to_clipboard(message) {
                        Ok(()) => copied = true,
                        Err(err) => tracing::warn!("Failed to copy message: {err}"),
                    },
                    MessageKey::Ignore => {}
                }
            }
        })
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        drop(Restore { out: &mut out });
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
    }

    #[test]
    fn test_setup_failure_is_ui_error() {
        let err = setup_error("enable raw mode")(io::Error::other("not a tty"));
        assert!(matches!(&err, HostError::Ui(msg) if msg == "cannot enable raw mode: not a tty"));
    }
}
