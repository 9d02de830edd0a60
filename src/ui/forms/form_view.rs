//! Modal form rendering

use super::field_renderer::{draw_help_text, draw_label, draw_text_box, TEXT_BOX_HEIGHT};
use crate::app::FormSession;
use crate::state::Control;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};
use std::ops::Range;

const FORM_MAX_WIDTH: u16 = 60;
const DEFAULT_TITLE: &str = "Form";

/// Rows a control occupies
fn control_height(control: &Control) -> u16 {
    match control {
        Control::Label { .. } => 1,
        Control::Button { .. } => BUTTON_HEIGHT,
        Control::TextBox { .. } => TEXT_BOX_HEIGHT,
    }
}

/// Controls that fit in `available` rows, scrolled so `focused` is shown
fn visible_range(heights: &[u16], available: u16, focused: Option<usize>) -> Range<usize> {
    let available = u32::from(available);
    let fill_from = |start: usize| {
        let mut used = 0u32;
        let mut end = start;
        while end < heights.len() && used + u32::from(heights[end]) <= available {
            used += u32::from(heights[end]);
            end += 1;
        }
        // Always show at least one control, even if it gets clipped
        end.max((start + 1).min(heights.len()))
    };

    let end = fill_from(0);
    match focused {
        Some(index) if index >= end => {
            let mut start = index;
            let mut used = u32::from(heights[index]);
            while start > 0 && used + u32::from(heights[start - 1]) <= available {
                start -= 1;
                used += u32::from(heights[start]);
            }
            start..fill_from(start).max(index + 1)
        }
        _ => 0..end,
    }
}

/// Draw a form centered on screen, controls stacked in insertion order
pub fn draw_form(frame: &mut Frame, session: &FormSession) {
    let view = session.view();
    let area = frame.area();

    let heights: Vec<u16> = view.controls.iter().map(control_height).collect();
    let body_height: u32 = heights.iter().copied().map(u32::from).sum();
    // Borders + blank line + help line
    let height = (body_height + 4).min(u32::from(area.height)) as u16;
    let width = FORM_MAX_WIDTH.min(area.width);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let title = if view.title.is_empty() {
        DEFAULT_TITLE
    } else {
        view.title.as_str()
    };

    frame.render_widget(Clear, form_area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let visible = visible_range(
        &heights,
        inner.height.saturating_sub(1),
        session.focused_index(),
    );

    let mut constraints: Vec<Constraint> = heights[visible.clone()]
        .iter()
        .map(|h| Constraint::Length(*h))
        .collect();
    constraints.push(Constraint::Min(0)); // Spacer
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (chunk, index) in chunks.iter().zip(visible) {
        let is_focused = session.is_focused(index);
        match &view.controls[index] {
            Control::Label { text } => draw_label(frame, *chunk, text),
            Control::Button { text, .. } => render_button(frame, *chunk, text, is_focused),
            Control::TextBox { text } => draw_text_box(frame, *chunk, text, is_focused),
        }
    }

    draw_help_text(frame, chunks[chunks.len() - 1], view.has_buttons());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[1, 3, 3], 10, Some(2)), 0..3);
    }

    #[test]
    fn test_scrolls_to_focused_control() {
        let heights = [3; 10];
        assert_eq!(visible_range(&heights, 9, Some(0)), 0..3);
        assert_eq!(visible_range(&heights, 9, Some(5)), 3..6);
        assert_eq!(visible_range(&heights, 9, Some(9)), 7..10);
    }

    #[test]
    fn test_oversized_control_still_shown() {
        assert_eq!(visible_range(&[3, 1], 2, None), 0..1);
        assert_eq!(visible_range(&[1, 3], 2, Some(1)), 1..2);
    }

    #[test]
    fn test_no_controls() {
        assert_eq!(visible_range(&[], 5, None), 0..0);
    }
}
