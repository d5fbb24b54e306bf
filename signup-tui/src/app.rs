//! Form state and trigger bindings.
//!
//! Inputs hold the text being edited. A field's value is only committed to
//! the form, and its validator run, when focus leaves it with a different
//! value than last committed. This mirrors a browser `change` event.

use signup_core::{FieldId, FormController, FormEvent, FormView, ValidationRules};

use crate::event::Action;
use crate::input::{TextEditResult, TextInput};

pub struct App {
    controller: FormController<FormView>,
    inputs: [TextInput; 5],
    focus: FieldId,
    quit: bool,
}

impl App {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            controller: FormController::new(rules, FormView::new()),
            inputs: Default::default(),
            focus: FieldId::Name,
            quit: false,
        }
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn input(&self, field: FieldId) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn view(&self) -> &FormView {
        self.controller.presenter()
    }

    /// Committed value of a field.
    pub fn value(&self, field: FieldId) -> &str {
        self.controller.form().get(field)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply an action. Returns whether the screen needs redrawing.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Edit(key, modifiers) => {
                let result = self.inputs[self.focus.index()].handle_key(key, modifiers);
                return result != TextEditResult::Ignored;
            }
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(FieldId::ALL.len() - 1),
            Action::Submit => self.submit(),
            Action::Reset => self.reset(),
            Action::Quit => self.quit = true,
        }
        true
    }

    /// Fire the change trigger if the input differs from the committed value.
    fn commit(&mut self, field: FieldId) {
        let text = self.inputs[field.index()].text();
        if text == self.value(field) {
            return;
        }
        let event = FormEvent::change(field, text);
        self.controller.dispatch(event);
    }

    fn move_focus(&mut self, step: usize) {
        self.commit(self.focus);
        let next = (self.focus.index() + step) % FieldId::ALL.len();
        self.focus = FieldId::ALL[next];
    }

    fn submit(&mut self) {
        // The focused field may hold an uncommitted edit.
        self.commit(self.focus);
        let outcome = self.controller.dispatch(FormEvent::Submit);
        if let Some(first) = outcome.as_ref().and_then(|o| o.errors().first()) {
            self.focus = first.field;
        }
    }

    fn reset(&mut self) {
        self.controller.dispatch(FormEvent::Reset);
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = FieldId::Name;
    }
}

#[cfg(test)]
mod tests {
    use signup_core::{FAILURE_MESSAGE, MessageKind, SUCCESS_MESSAGE};

    use super::*;
    use crate::event::{Key, Modifiers};

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle(Action::Edit(Key::Char(c), Modifiers::default()));
        }
    }

    fn fill(app: &mut App, values: [&str; 5]) {
        for value in values {
            type_str(app, value);
            app.handle(Action::FocusNext);
        }
    }

    #[test]
    fn test_typing_does_not_validate_until_blur() {
        let mut app = App::new(ValidationRules::default());
        type_str(&mut app, "Bob");
        assert!(!app.view().has_errors());
        assert_eq!(app.value(FieldId::Name), "");

        app.handle(Action::FocusNext);
        assert_eq!(app.value(FieldId::Name), "Bob");
        assert_eq!(app.view().error(FieldId::Name), "Name must be at least 5 characters.");
        assert_eq!(app.focus(), FieldId::Email);
    }

    #[test]
    fn test_blur_without_edit_does_not_validate() {
        let mut app = App::new(ValidationRules::default());
        app.handle(Action::FocusNext);
        assert!(!app.view().has_errors());
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = App::new(ValidationRules::default());
        app.handle(Action::FocusPrev);
        assert_eq!(app.focus(), FieldId::ConfirmPassword);
        app.handle(Action::FocusNext);
        assert_eq!(app.focus(), FieldId::Name);
    }

    #[test]
    fn test_submit_valid_form() {
        let mut app = App::new(ValidationRules::default());
        fill(
            &mut app,
            ["Alice Smith", "alice@example.com", "555-123-4567", "Xk7mQzpt", "Xk7mQzpt"],
        );

        app.handle(Action::Submit);

        let message = app.view().message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_submit_commits_focused_field() {
        let mut app = App::new(ValidationRules::default());
        fill(&mut app, ["Alice Smith", "alice@example.com", "555-123-4567", "Xk7mQzpt", ""]);
        app.handle(Action::FocusPrev);
        type_str(&mut app, "Xk7mQzpt");

        app.handle(Action::Submit);

        assert_eq!(app.value(FieldId::ConfirmPassword), "Xk7mQzpt");
        assert!(!app.view().has_errors());
        assert_eq!(app.view().message().unwrap().kind, MessageKind::Success);
    }

    #[test]
    fn test_submit_invalid_focuses_first_error() {
        let mut app = App::new(ValidationRules::default());
        fill(&mut app, ["Alice Smith", "abc", "1234567890", "Xk7mQzpt", "Xk7mQzpt"]);

        app.handle(Action::Submit);

        assert_eq!(app.focus(), FieldId::Email);
        assert_eq!(app.view().invalid_fields(), vec![FieldId::Email, FieldId::Phone]);
        assert_eq!(app.view().message().unwrap().text, FAILURE_MESSAGE);
    }

    #[test]
    fn test_reset_clears_inputs() {
        let mut app = App::new(ValidationRules::default());
        fill(&mut app, ["Bob", "abc", "", "", ""]);
        app.handle(Action::Submit);

        app.handle(Action::Reset);
        app.handle(Action::Reset);

        for field in FieldId::ALL {
            assert_eq!(app.input(field).text(), "");
            assert_eq!(app.value(field), "");
        }
        assert_eq!(app.view(), &FormView::new());
        assert_eq!(app.focus(), FieldId::Name);
    }

    #[test]
    fn test_ignored_edit_skips_redraw() {
        let mut app = App::new(ValidationRules::default());
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        assert!(!app.handle(Action::Edit(Key::Char('x'), ctrl)));
        assert_eq!(app.input(FieldId::Name).text(), "");

        assert!(app.handle(Action::Edit(Key::Char('x'), Modifiers::default())));
        assert!(app.handle(Action::Edit(Key::Left, Modifiers::default())));
        assert!(app.handle(Action::FocusNext));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(ValidationRules::default());
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
