//! Form rendering module
//!
//! - `field_renderer`: label and text box rendering utilities
//! - `form_view`: lays out a whole form in control order

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
