//! Host services exposed to scripts: output, form running and UI backends

mod headless;
mod output;
mod runner;
mod services;
mod terminal;
mod traits;

pub use headless::HeadlessUi;
pub use output::OutputSink;
pub use services::HostServices;
pub use terminal::TerminalUi;
pub use traits::UiBackend;

#[cfg(test)]
pub(crate) use output::{ClosedPipe, SharedBuffer};
#[cfg(test)]
pub use traits::MockUiBackend;
