//! Message box dialog component

use super::base::{render_dialog, DialogConfig};
use crate::platform::COPY_SHORTCUT;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a message box overlay centered on the screen
pub fn render_message_dialog(frame: &mut Frame, title: &str, message: &str, copied: bool) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" to close, "),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::raw(" to copy"),
    ];
    if copied {
        hint.push(Span::styled("  (copied)", Style::default().fg(Color::Green)));
    }

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::White,
            border_color: Color::Cyan,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
