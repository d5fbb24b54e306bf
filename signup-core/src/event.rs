//! Trigger dispatch: the three events a front end forwards to the form.

use crate::config::ValidationRules;
use crate::field::FieldId;
use crate::form::RegistrationForm;
use crate::presenter::ErrorPresenter;
use crate::reset::reset;
use crate::submit::{SubmitOutcome, submit};
use crate::validation::{ValidationResult, validate_field};

/// A user-triggered form event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value was committed.
    Change { field: FieldId, value: String },
    /// The form was submitted.
    Submit,
    /// The reset control was activated.
    Reset,
}

impl FormEvent {
    pub fn change(field: FieldId, value: impl Into<String>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }
}

/// Owns the field values and the presenter, and routes events between them.
#[derive(Debug)]
pub struct FormController<P> {
    form: RegistrationForm,
    rules: ValidationRules,
    presenter: P,
}

impl<P: ErrorPresenter> FormController<P> {
    pub fn new(rules: ValidationRules, presenter: P) -> Self {
        Self {
            form: RegistrationForm::new(),
            rules,
            presenter,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Handle one event. Returns the outcome when the event was a submit.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change { field, value } => {
                self.change(field, value);
                None
            }
            FormEvent::Submit => Some(self.submit()),
            FormEvent::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Store a new value and run that field's validator.
    ///
    /// Changing the password also rechecks a non-empty confirmation.
    pub fn change(&mut self, field: FieldId, value: impl Into<String>) -> ValidationResult {
        self.form.set(field, value);
        let result = self.validate(field);

        if field == FieldId::Password && !self.form.get(FieldId::ConfirmPassword).is_empty() {
            self.validate(FieldId::ConfirmPassword);
        }

        result
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        submit(&self.form, &self.rules, &mut self.presenter)
    }

    pub fn reset(&mut self) {
        reset(&mut self.form, &mut self.presenter);
    }

    fn validate(&mut self, field: FieldId) -> ValidationResult {
        let result = validate_field(field, &self.form.snapshot(), &self.rules);
        log::debug!("change: {field} -> {result:?}");
        self.presenter.present(field, &result);
        result
    }
}
