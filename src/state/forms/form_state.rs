//! Form state management and shared handles

use super::control::{Control, ControlKind};
use crate::error::{HostError, HostResult};
use std::sync::{Arc, Mutex, MutexGuard};

/// Exit code returned when a form is dismissed without activating a button
pub const DISMISSED_EXIT_CODE: i64 = 0;

/// Lifecycle of a form: built up, then executed exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Building,
    Executed,
}

/// Shared reference to one control.
///
/// Clones point at the same control, so a property set through one clone is
/// visible through every other.
#[derive(Debug, Clone)]
pub struct ControlHandle(Arc<Mutex<Control>>);

impl ControlHandle {
    pub fn new(control: Control) -> Self {
        Self(Arc::new(Mutex::new(control)))
    }

    pub fn lock(&self) -> MutexGuard<'_, Control> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> Control {
        self.lock().clone()
    }

    pub fn kind(&self) -> ControlKind {
        self.lock().kind()
    }

    pub fn text(&self) -> String {
        self.lock().text().to_string()
    }

    pub fn set_text(&self, value: String) {
        self.lock().set_text(value);
    }
}

#[derive(Debug, Clone)]
struct Slot {
    name: Option<String>,
    control: ControlHandle,
}

/// Immutable view of a form handed to a UI backend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub title: String,
    pub controls: Vec<Control>,
}

impl FormView {
    pub fn has_buttons(&self) -> bool {
        self.controls.iter().any(Control::is_button)
    }

    /// Exit code of the button at `index`.
    ///
    /// Buttons without an explicit code get their 1-based ordinal among the
    /// form's buttons.
    pub fn exit_code_at(&self, index: usize) -> HostResult<i64> {
        match self.controls.get(index) {
            Some(Control::Button { exit_code, .. }) => Ok(exit_code.unwrap_or_else(|| {
                self.controls[..=index]
                    .iter()
                    .filter(|c| c.is_button())
                    .count() as i64
            })),
            _ => Err(HostError::NotAButton(index)),
        }
    }
}

/// Text typed into a text box while the form was displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub index: usize,
    pub text: String,
}

/// How the user closed a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The button at this position was activated
    Button(usize),
    /// Closed without a button (Esc or a button-less form)
    Closed,
}

/// Result reported by a UI backend after a form is closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub dismissal: Dismissal,
    pub edits: Vec<TextEdit>,
}

impl FormOutcome {
    pub fn closed() -> Self {
        Self {
            dismissal: Dismissal::Closed,
            edits: Vec::new(),
        }
    }

    pub fn button(index: usize) -> Self {
        Self {
            dismissal: Dismissal::Button(index),
            edits: Vec::new(),
        }
    }
}

/// Form contents owned by the script that built it
#[derive(Debug, Default)]
pub struct FormState {
    text: String,
    slots: Vec<Slot>,
    phase: FormPhase,
}

/// Shared reference to a form
#[derive(Debug, Clone, Default)]
pub struct FormHandle(Arc<Mutex<FormState>>);

impl FormHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Form caption
    pub fn text(&self) -> String {
        self.lock().text.clone()
    }

    pub fn set_text(&self, value: String) {
        self.lock().text = value;
    }

    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    /// Append an unnamed control
    pub fn add(&self, control: ControlHandle) -> ControlHandle {
        self.lock().slots.push(Slot {
            name: None,
            control: control.clone(),
        });
        control
    }

    /// Attach a control under a name.
    ///
    /// A new name appends; an existing name keeps its position and swaps the control.
    pub fn attach(&self, name: &str, control: ControlHandle) {
        let mut state = self.lock();
        if let Some(slot) = state
            .slots
            .iter_mut()
            .find(|slot| slot.name.as_deref() == Some(name))
        {
            slot.control = control;
            return;
        }
        state.slots.push(Slot {
            name: Some(name.to_string()),
            control,
        });
    }

    /// Look up a control attached by name
    pub fn get(&self, name: &str) -> HostResult<ControlHandle> {
        self.lock()
            .slots
            .iter()
            .find(|slot| slot.name.as_deref() == Some(name))
            .map(|slot| slot.control.clone())
            .ok_or_else(|| HostError::UnknownControl(name.to_string()))
    }

    /// Controls in insertion order
    pub fn controls(&self) -> Vec<ControlHandle> {
        self.lock().slots.iter().map(|s| s.control.clone()).collect()
    }

    pub fn snapshot(&self) -> FormView {
        let state = self.lock();
        FormView {
            title: state.text.clone(),
            controls: state.slots.iter().map(|s| s.control.snapshot()).collect(),
        }
    }

    /// Move to the executed phase and return what should be displayed.
    ///
    /// Buttons still on an automatic exit code are fixed to their 1-based
    /// ordinal among the form's buttons, so `ExitCode` reads it afterwards.
    pub fn begin_execute(&self) -> HostResult<FormView> {
        {
            let mut state = self.lock();
            if state.phase == FormPhase::Executed {
                return Err(HostError::FormAlreadyExecuted);
            }
            state.phase = FormPhase::Executed;

            let mut ordinal = 0;
            for slot in &state.slots {
                if let Control::Button { exit_code, .. } = &mut *slot.control.lock() {
                    ordinal += 1;
                    exit_code.get_or_insert(ordinal);
                }
            }
        }
        Ok(self.snapshot())
    }

    /// Write text typed by the user back into the controls
    pub fn apply_edits(&self, edits: &[TextEdit]) {
        let controls = self.controls();
        for edit in edits {
            match controls.get(edit.index) {
                Some(control) => control.set_text(edit.text.clone()),
                None => tracing::warn!("Ignoring edit for missing control {}", edit.index),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(controls: Vec<Control>) -> FormHandle {
        let form = FormHandle::new();
        for control in controls {
            form.add(ControlHandle::new(control));
        }
        form
    }

    mod handles {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clones_share_state() {
            let control = ControlHandle::new(Control::text_box(""));
            let alias = control.clone();
            alias.set_text("aaa".to_string());
            assert_eq!(control.text(), "aaa");
            assert!(Arc::ptr_eq(&control.0, &alias.0));
        }

        #[test]
        fn test_form_text_round_trips() {
            let form = FormHandle::new();
            form.set_text("aaa".to_string());
            assert_eq!(form.text(), "aaa");
        }
    }

    mod attachment {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_insertion_order_preserved() {
            let form = FormHandle::new();
            form.attach("lb", ControlHandle::new(Control::label("first")));
            form.add(ControlHandle::new(Control::text_box("second")));
            form.attach("bt", ControlHandle::new(Control::button("third", 2)));

            let texts: Vec<String> = form.snapshot().controls.iter().map(|c| c.text().to_string()).collect();
            assert_eq!(texts, vec!["first", "second", "third"]);
        }

        #[test]
        fn test_reattach_replaces_in_place() {
            let form = FormHandle::new();
            form.attach("a", ControlHandle::new(Control::label("one")));
            form.attach("b", ControlHandle::new(Control::label("two")));
            form.attach("a", ControlHandle::new(Control::label("three")));

            assert_eq!(form.len(), 2);
            assert_eq!(form.snapshot().controls[0].text(), "three");
        }

        #[test]
        fn test_duplicate_controls_allowed_unnamed() {
            let form = FormHandle::new();
            let label = ControlHandle::new(Control::label("same"));
            form.add(label.clone());
            form.add(label);
            assert_eq!(form.len(), 2);
        }

        #[test]
        fn test_get_by_name() {
            let form = FormHandle::new();
            let label = ControlHandle::new(Control::label("hi"));
            form.attach("lb", label.clone());
            assert!(Arc::ptr_eq(&form.get("lb").unwrap().0, &label.0));
        }

        #[test]
        fn test_get_unknown_name_fails() {
            let form = FormHandle::new();
            assert!(matches!(
                form.get("missing"),
                Err(HostError::UnknownControl(name)) if name == "missing"
            ));
        }

        #[test]
        fn test_set_after_attach_visible_in_snapshot() {
            let form = FormHandle::new();
            let text_box = ControlHandle::new(Control::text_box(""));
            form.attach("dst", text_box.clone());
            text_box.set_text("late".to_string());
            assert_eq!(form.snapshot().controls[0].text(), "late");
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_phase_is_building() {
            assert_eq!(FormHandle::new().lock().phase, FormPhase::Building);
        }

        #[test]
        fn test_execute_only_once() {
            let form = form_with(vec![Control::label("x")]);
            assert!(form.begin_execute().is_ok());
            assert_eq!(form.lock().phase, FormPhase::Executed);
            assert!(matches!(
                form.begin_execute(),
                Err(HostError::FormAlreadyExecuted)
            ));
        }

        #[test]
        fn test_apply_edits_writes_back() {
            let form = form_with(vec![Control::label("x"), Control::text_box("")]);
            form.apply_edits(&[TextEdit {
                index: 1,
                text: "typed".to_string(),
            }]);
            assert_eq!(form.controls()[1].text(), "typed");
        }

        #[test]
        fn test_apply_edits_ignores_out_of_range() {
            let form = form_with(vec![Control::text_box("keep")]);
            form.apply_edits(&[TextEdit {
                index: 5,
                text: "lost".to_string(),
            }]);
            assert_eq!(form.controls()[0].text(), "keep");
        }
    }

    mod exit_codes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_explicit_code() {
            let view = form_with(vec![Control::label("x"), Control::button("Exit", 2)]).snapshot();
            assert_eq!(view.exit_code_at(1).unwrap(), 2);
        }

        #[test]
        fn test_automatic_codes_follow_button_ordinal() {
            let view = form_with(vec![
                Control::auto_button("Yes"),
                Control::label("between"),
                Control::button("Cancel", 99),
                Control::auto_button("No"),
            ])
            .snapshot();
            assert_eq!(view.exit_code_at(0).unwrap(), 1);
            assert_eq!(view.exit_code_at(2).unwrap(), 99);
            assert_eq!(view.exit_code_at(3).unwrap(), 3);
        }

        #[test]
        fn test_execute_fixes_automatic_codes() {
            let no = ControlHandle::new(Control::auto_button("No"));
            let form = form_with(vec![
                Control::auto_button("Yes"),
                Control::label("between"),
                Control::button("Cancel", 99),
            ]);
            form.add(no.clone());

            let view = form.begin_execute().unwrap();
            assert_eq!(view.controls[0].exit_code().unwrap(), Some(1));
            assert_eq!(view.controls[2].exit_code().unwrap(), Some(99));
            assert_eq!(no.lock().exit_code().unwrap(), Some(3));
            assert_eq!(view.exit_code_at(3).unwrap(), 3);
        }

        #[test]
        fn test_non_button_index_fails() {
            let view = form_with(vec![Control::label("x")]).snapshot();
            assert!(matches!(view.exit_code_at(0), Err(HostError::NotAButton(0))));
            assert!(view.exit_code_at(4).is_err());
        }

        #[test]
        fn test_has_buttons() {
            assert!(!form_with(vec![Control::text_box("")]).snapshot().has_buttons());
            assert!(form_with(vec![Control::auto_button("OK")]).snapshot().has_buttons());
        }
    }
}
