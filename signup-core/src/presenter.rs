//! Error presenter: the output surface the validators' results are shown on.

use crate::field::FieldId;
use crate::validation::ValidationResult;

/// Styling of the form-level message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Danger,
    Success,
}

/// Output surface for validation feedback.
///
/// Every operation is side-effect only and idempotent: clearing a clear
/// field or showing the same message twice leaves the surface unchanged.
pub trait ErrorPresenter {
    /// Set the field's error text and mark it invalid.
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Empty the field's error text and remove the invalid mark.
    fn clear_error(&mut self, field: FieldId);

    /// Show the form-level message.
    fn show_message(&mut self, kind: MessageKind, text: &str);

    /// Remove the form-level message.
    fn clear_message(&mut self);

    /// Show or clear a field's error to match a result.
    fn present(&mut self, field: FieldId, result: &ValidationResult) {
        match result {
            ValidationResult::Valid => self.clear_error(field),
            ValidationResult::Invalid { message } => self.show_error(field, message),
        }
    }

    /// Clear the error of every field.
    fn clear_all_errors(&mut self) {
        for field in FieldId::ALL {
            self.clear_error(field);
        }
    }
}

/// Visible feedback for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFeedback {
    pub error: String,
    pub invalid: bool,
}

/// The form-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// In-memory presenter holding exactly what a rendered form would show.
///
/// Front ends render from it; tests assert on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    fields: [FieldFeedback; 5],
    message: Option<FormMessage>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback(&self, field: FieldId) -> &FieldFeedback {
        &self.fields[field.index()]
    }

    /// Error text of a field, empty when valid.
    pub fn error(&self, field: FieldId) -> &str {
        &self.feedback(field).error
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.feedback(field).invalid
    }

    /// Fields currently marked invalid, in form order.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|f| self.is_invalid(*f))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.invalid)
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}

impl ErrorPresenter for FormView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        let feedback = &mut self.fields[field.index()];
        feedback.error = message.to_string();
        feedback.invalid = true;
    }

    fn clear_error(&mut self, field: FieldId) {
        let feedback = &mut self.fields[field.index()];
        feedback.error.clear();
        feedback.invalid = false;
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.message = Some(FormMessage {
            kind,
            text: text.to_string(),
        });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_clear() {
        let mut view = FormView::new();
        view.show_error(FieldId::Email, "Email is required.");
        assert!(view.is_invalid(FieldId::Email));
        assert_eq!(view.error(FieldId::Email), "Email is required.");
        assert_eq!(view.invalid_fields(), vec![FieldId::Email]);

        view.clear_error(FieldId::Email);
        assert!(!view.is_invalid(FieldId::Email));
        assert_eq!(view.error(FieldId::Email), "");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut view = FormView::new();
        view.clear_error(FieldId::Phone);
        view.clear_error(FieldId::Phone);
        assert_eq!(view, FormView::new());
    }

    #[test]
    fn test_present_follows_result() {
        let mut view = FormView::new();
        view.present(FieldId::Name, &ValidationResult::invalid("Full name is required."));
        assert_eq!(view.error(FieldId::Name), "Full name is required.");

        view.present(FieldId::Name, &ValidationResult::Valid);
        assert!(!view.has_errors());
    }

    #[test]
    fn test_message_replaced() {
        let mut view = FormView::new();
        view.show_message(MessageKind::Danger, "bad");
        view.show_message(MessageKind::Success, "good");
        let message = view.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "good");

        view.clear_message();
        assert!(view.message().is_none());
    }
}
