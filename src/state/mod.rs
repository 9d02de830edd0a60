//! Host state module

mod forms;
mod script_context;

pub use forms::*;
pub use script_context::*;
