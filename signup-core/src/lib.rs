//! Registration form validation.
//!
//! This crate holds everything about the registration form that does not
//! depend on a rendered surface: the field values, one validator per field,
//! the presenter interface the validators' results are pushed through, the
//! submit and reset flows, and the event dispatch a front end binds to.
//!
//! # Example
//!
//! ```
//! use signup_core::{FieldId, FormController, FormEvent, FormView, SubmitOutcome, ValidationRules};
//!
//! let mut form = FormController::new(ValidationRules::default(), FormView::new());
//! form.dispatch(FormEvent::change(FieldId::Name, "Alice Smith"));
//! form.dispatch(FormEvent::change(FieldId::Email, "alice@example.com"));
//! form.dispatch(FormEvent::change(FieldId::Phone, "555-123-4567"));
//! form.dispatch(FormEvent::change(FieldId::Password, "Xk7mQzpt"));
//! form.dispatch(FormEvent::change(FieldId::ConfirmPassword, "Xk7mQzpt"));
//!
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//! assert!(!form.presenter().has_errors());
//! ```

pub mod config;
pub mod event;
pub mod field;
pub mod form;
pub mod presenter;
pub mod reset;
pub mod submit;
pub mod validation;

pub use config::{ConfigError, ValidationRules};
pub use event::{FormController, FormEvent};
pub use field::FieldId;
pub use form::{FormSnapshot, RegistrationForm};
pub use presenter::{ErrorPresenter, FieldFeedback, FormMessage, FormView, MessageKind};
pub use reset::reset;
pub use submit::{FAILURE_MESSAGE, SUCCESS_MESSAGE, SubmitOutcome, submit, validate_all};
pub use validation::{FieldError, ValidationResult, validate_field};
