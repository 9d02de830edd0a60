//! Interactive state of a modal while it is on screen

use crate::platform::COPY_MODIFIER;
use crate::state::{Control, Dismissal, FormOutcome, FormView, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Trait for cycling focus through the focusable controls of a form
pub trait FocusCycle {
    fn focus_count(&self) -> usize;
    fn focus_position(&self) -> usize;
    fn set_focus_position(&mut self, position: usize);
    fn next_focus(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            return;
        }
        let current = self.focus_position();
        self.set_focus_position((current + 1) % count);
    }
    fn prev_focus(&mut self) {
        let count = self.focus_count();
        if count == 0 {
            return;
        }
        let current = self.focus_position();
        if current == 0 {
            self.set_focus_position(count - 1);
        } else {
            self.set_focus_position(current - 1);
        }
    }
}

/// A form being displayed: focus, in-progress edits and the original contents
#[derive(Debug, Clone)]
pub struct FormSession {
    original: FormView,
    current: FormView,
    /// Indices of focusable controls, in display order
    focusable: Vec<usize>,
    focus_position: usize,
}

impl FormSession {
    pub fn new(view: FormView) -> Self {
        let focusable = view
            .controls
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_focusable())
            .map(|(i, _)| i)
            .collect();
        Self {
            original: view.clone(),
            current: view,
            focusable,
            focus_position: 0,
        }
    }

    pub fn view(&self) -> &FormView {
        &self.current
    }

    /// Index of the focused control, if any control can take focus
    pub fn focused_index(&self) -> Option<usize> {
        self.focusable.get(self.focus_position).copied()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused_index() == Some(index)
    }

    /// Handle a key press; returns the outcome once the form is dismissed
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        match key.code {
            KeyCode::Esc => Some(self.finish(Dismissal::Closed)),
            KeyCode::Tab | KeyCode::Down => {
                self.next_focus();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_focus();
                None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => {
                if let Some(control) = self.focused_text_box_mut() {
                    control.pop_char();
                }
                None
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                if let Some(control) = self.focused_text_box_mut() {
                    control.push_char(c);
                }
                None
            }
            _ => None,
        }
    }

    fn activate(&mut self) -> Option<FormOutcome> {
        let Some(index) = self.focused_index() else {
            // Nothing can take focus, so Enter is the only way out
            return Some(self.finish(Dismissal::Closed));
        };
        if self.current.controls[index].is_button() {
            return Some(self.finish(Dismissal::Button(index)));
        }
        if !self.current.has_buttons() {
            return Some(self.finish(Dismissal::Closed));
        }
        self.next_focus();
        None
    }

    fn focused_text_box_mut(&mut self) -> Option<&mut Control> {
        let index = self.focused_index()?;
        self.current
            .controls
            .get_mut(index)
            .filter(|c| c.is_text_box())
    }

    fn finish(&self, dismissal: Dismissal) -> FormOutcome {
        let edits = self
            .current
            .controls
            .iter()
            .zip(&self.original.controls)
            .enumerate()
            .filter(|(_, (now, before))| now.is_text_box() && now.text() != before.text())
            .map(|(index, (now, _))| TextEdit {
                index,
                text: now.text().to_string(),
            })
            .collect();
        FormOutcome { dismissal, edits }
    }
}

impl FocusCycle for FormSession {
    fn focus_count(&self) -> usize {
        self.focusable.len()
    }
    fn focus_position(&self) -> usize {
        self.focus_position
    }
    fn set_focus_position(&mut self, position: usize) {
        self.focus_position = position.min(self.focusable.len().saturating_sub(1));
    }
}

/// What a key press means while a message box is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Dismiss,
    Copy,
    Ignore,
}

/// Classify a key press for a message box
pub fn message_key(key: KeyEvent) -> MessageKey {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => MessageKey::Dismiss,
        KeyCode::Char('c') if key.modifiers.contains(COPY_MODIFIER) => MessageKey::Copy,
        _ => MessageKey::Ignore,
    }
}
