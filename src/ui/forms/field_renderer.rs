//! Field rendering utilities for form controls

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Text box height in rows (top border + content + bottom border)
pub const TEXT_BOX_HEIGHT: u16 = 3;

/// Draw a single-line text box
pub fn draw_text_box(frame: &mut Frame, area: Rect, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail visible when the text is wider than the box
    let inner_width = area.width.saturating_sub(2) as usize;
    let char_count = display_value.chars().count() + cursor.chars().count();
    let visible: String = if char_count > inner_width {
        display_value
            .chars()
            .skip(char_count - inner_width)
            .collect()
    } else {
        display_value.to_string()
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default().borders(Borders::ALL).border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw a static label line
pub fn draw_label(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(Paragraph::new(format!(" {text}")), area);
}

/// Draw the key help line at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, has_buttons: bool) {
    let key = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let enter_hint = if has_buttons { " press  " } else { " close  " };
    let help = Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(" next  ", dim),
        Span::styled("Enter", key),
        Span::styled(enter_hint, dim),
        Span::styled("Esc", key),
        Span::styled(" cancel", dim),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
