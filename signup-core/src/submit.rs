//! Submission: run every validator, show the results, decide.

use crate::config::ValidationRules;
use crate::field::FieldId;
use crate::form::{FormSnapshot, RegistrationForm};
use crate::presenter::{ErrorPresenter, MessageKind};
use crate::validation::{FIELD_VALIDATORS, FieldError, ValidationResult};

/// Form-level message shown when any field fails.
pub const FAILURE_MESSAGE: &str = "Please fix the highlighted errors and resubmit.";

/// Form-level message shown when every field passes.
pub const SUCCESS_MESSAGE: &str = "Registration details look good!";

/// Result of a submit attempt.
///
/// Neither variant implies any external action: the form is never sent
/// anywhere by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed.
    Accepted,
    /// One or more fields failed, in form order.
    Rejected(Vec<FieldError>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(errors) => errors,
        }
    }
}

/// Run every validator without touching any presenter.
///
/// All five run, whatever the earlier results.
pub fn validate_all(
    form: &FormSnapshot<'_>,
    rules: &ValidationRules,
) -> Vec<(FieldId, ValidationResult)> {
    FIELD_VALIDATORS
        .iter()
        .map(|(field, validator)| (*field, validator(form, rules)))
        .collect()
}

/// Validate the whole form and push the results to `presenter`.
pub fn submit<P>(form: &RegistrationForm, rules: &ValidationRules, presenter: &mut P) -> SubmitOutcome
where
    P: ErrorPresenter + ?Sized,
{
    presenter.clear_message();

    let mut errors = Vec::new();
    for (field, result) in validate_all(&form.snapshot(), rules) {
        log::debug!("submit: {field} -> {result:?}");
        presenter.present(field, &result);
        errors.extend(result.into_error(field));
    }

    if !errors.is_empty() {
        log::info!("submit rejected: {} invalid field(s)", errors.len());
        presenter.show_message(MessageKind::Danger, FAILURE_MESSAGE);
        return SubmitOutcome::Rejected(errors);
    }

    log::info!("submit accepted");
    presenter.show_message(MessageKind::Success, SUCCESS_MESSAGE);
    presenter.clear_all_errors();
    SubmitOutcome::Accepted
}
