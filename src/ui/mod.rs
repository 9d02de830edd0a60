//! UI module for rendering modal forms and message boxes

mod components;
mod forms;

pub use components::render_message_dialog;
pub use forms::draw_form;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormSession;
    use crate::state::{Control, FormView};
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> usize {
        rows.iter()
            .position(|r| r.contains(needle))
            .unwrap_or_else(|| panic!("'{needle}' not rendered in {rows:#?}"))
    }

    fn render_form(view: FormView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        let session = FormSession::new(view);
        terminal.draw(|frame| draw_form(frame, &session)).unwrap();
        rows(terminal.backend().buffer())
    }

    #[test]
    fn test_controls_render_in_insertion_order() {
        let rows = render_form(FormView {
            title: "Order".to_string(),
            controls: vec![
                Control::label("alpha"),
                Control::text_box("bravo"),
                Control::button("charlie", 1),
                Control::label("delta"),
            ],
        });

        let positions: Vec<usize> = ["alpha", "bravo", "charlie", "delta"]
            .iter()
            .map(|needle| row_of(&rows, needle))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_form_title_in_border() {
        let rows = render_form(FormView {
            title: "aaa".to_string(),
            controls: vec![Control::text_box("")],
        });
        assert!(rows.iter().any(|r| r.contains(" aaa ")));
    }

    #[test]
    fn test_buttonless_form_shows_close_hint() {
        let rows = render_form(FormView {
            title: String::new(),
            controls: vec![Control::text_box("")],
        });
        assert!(rows.iter().any(|r| r.contains("close")));
    }

    #[test]
    fn test_large_form_draws_without_overflow() {
        let rows = render_form(FormView {
            title: "Many".to_string(),
            controls: (0..22_000)
                .map(|i| Control::button(format!("button {i}"), i))
                .collect(),
        });
        assert!(rows.iter().any(|r| r.contains("button 0")));
        assert!(rows.iter().any(|r| r.contains("Enter")));
    }

    #[test]
    fn test_focused_control_scrolled_into_view() {
        let view = FormView {
            title: String::new(),
            controls: (0..10)
                .map(|i| Control::button(format!("button {i}"), i))
                .collect(),
        };
        let mut session = FormSession::new(view);
        for _ in 0..9 {
            session.handle_key(KeyEvent::from(KeyCode::Tab));
        }

        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|frame| draw_form(frame, &session)).unwrap();
        let rows = rows(terminal.backend().buffer());

        assert!(rows.iter().any(|r| r.contains("button 9")));
        assert!(!rows.iter().any(|r| r.contains("button 0")));
    }

    #[test]
    fn test_message_dialog_renders_message() {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| render_message_dialog(frame, "gui02.rhai", "2", false))
            .unwrap();
        let rows = rows(terminal.backend().buffer());
        assert!(rows.iter().any(|r| r.contains("gui02.rhai")));
        assert!(rows.iter().any(|r| r.contains("│ 2 ")));
    }
}
