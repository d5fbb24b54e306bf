//! Field validators.
//!
//! Each validator is a plain function from the relevant field value(s) to a
//! [`ValidationResult`]. They never touch a presenter; the submit and change
//! flows decide what to show.
//!
//! # Example
//!
//! ```
//! use signup_core::ValidationRules;
//! use signup_core::validation::{validate_name, validate_phone};
//!
//! let rules = ValidationRules::default();
//! assert!(validate_name("Alice", &rules).is_valid());
//! assert_eq!(
//!     validate_phone("12345", &rules).message(),
//!     Some("Phone number must be exactly 10 digits."),
//! );
//! ```

mod result;
mod validators;

pub use result::{FieldError, ValidationResult};
pub use validators::{
    FIELD_VALIDATORS, FieldValidator, digits_only, validate_confirm_password, validate_email,
    validate_field, validate_name, validate_password, validate_phone,
};
