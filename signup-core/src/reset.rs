//! Reset: return the form to its initial state.

use crate::form::RegistrationForm;
use crate::presenter::ErrorPresenter;

/// Empty every field, clear every field error and the form-level message.
///
/// Nothing is validated. Calling it again changes nothing.
pub fn reset<P>(form: &mut RegistrationForm, presenter: &mut P)
where
    P: ErrorPresenter + ?Sized,
{
    form.clear();
    presenter.clear_all_errors();
    presenter.clear_message();
    log::info!("form reset");
}
