//! One validator per registration field.

use crate::config::ValidationRules;
use crate::field::FieldId;
use crate::form::FormSnapshot;

use super::result::ValidationResult;

/// Always rejected, whatever extra entries the rules carry.
const BANNED_LITERAL: &str = "password";

/// Signature shared by every entry of [`FIELD_VALIDATORS`].
pub type FieldValidator = fn(&FormSnapshot<'_>, &ValidationRules) -> ValidationResult;

/// Validators paired with the field they check, in submit order.
pub const FIELD_VALIDATORS: [(FieldId, FieldValidator); 5] = [
    (FieldId::Name, name_rule),
    (FieldId::Email, email_rule),
    (FieldId::Phone, phone_rule),
    (FieldId::Password, password_rule),
    (FieldId::ConfirmPassword, confirm_password_rule),
];

fn name_rule(form: &FormSnapshot<'_>, rules: &ValidationRules) -> ValidationResult {
    validate_name(form.name, rules)
}

fn email_rule(form: &FormSnapshot<'_>, _rules: &ValidationRules) -> ValidationResult {
    validate_email(form.email)
}

fn phone_rule(form: &FormSnapshot<'_>, rules: &ValidationRules) -> ValidationResult {
    validate_phone(form.phone, rules)
}

fn password_rule(form: &FormSnapshot<'_>, rules: &ValidationRules) -> ValidationResult {
    validate_password(form.password, form.name, rules)
}

fn confirm_password_rule(form: &FormSnapshot<'_>, _rules: &ValidationRules) -> ValidationResult {
    validate_confirm_password(form.confirm_password, form.password)
}

/// Run the validator belonging to `field` against a snapshot.
pub fn validate_field(
    field: FieldId,
    form: &FormSnapshot<'_>,
    rules: &ValidationRules,
) -> ValidationResult {
    let (_, validator) = FIELD_VALIDATORS[field.index()];
    validator(form, rules)
}

/// Full name: required, and at least `name_min_length` characters once trimmed.
pub fn validate_name(name: &str, rules: &ValidationRules) -> ValidationResult {
    let name = name.trim();
    if name.is_empty() {
        return ValidationResult::invalid("Full name is required.");
    }
    if name.chars().count() < rules.name_min_length {
        return ValidationResult::invalid(format!(
            "Name must be at least {} characters.",
            rules.name_min_length
        ));
    }
    ValidationResult::Valid
}

/// Email: a sanity check only, `local@domain.tld` with a single `@`.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::invalid("Email is required.");
    }
    if !is_plausible_email(email) {
        return ValidationResult::invalid("Enter a valid email address.");
    }
    ValidationResult::Valid
}

fn is_plausible_email(email: &str) -> bool {
    if email.matches('@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Keep only the ASCII digits of a raw phone entry.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Phone: exactly `phone_digits` digits after stripping punctuation, and not
/// one of the reserved placeholder numbers.
pub fn validate_phone(phone: &str, rules: &ValidationRules) -> ValidationResult {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return ValidationResult::invalid("Phone number is required.");
    }
    if digits.len() != rules.phone_digits {
        return ValidationResult::invalid(format!(
            "Phone number must be exactly {} digits.",
            rules.phone_digits
        ));
    }
    if rules.reserved_phone_numbers.iter().any(|r| *r == digits) {
        return ValidationResult::invalid(
            "Enter a real phone number, not a sequential placeholder.",
        );
    }
    ValidationResult::Valid
}

/// Password, checked against the (untrimmed) raw value.
///
/// The checks run in a fixed order and the first failure wins.
pub fn validate_password(password: &str, name: &str, rules: &ValidationRules) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::invalid("Password is required.");
    }
    if password.chars().count() < rules.password_min_length {
        return ValidationResult::invalid(format!(
            "Password must be at least {} characters.",
            rules.password_min_length
        ));
    }

    let lowered = password.to_lowercase();
    if lowered == BANNED_LITERAL {
        return ValidationResult::invalid(format!("Password cannot be \"{BANNED_LITERAL}\"."));
    }
    if let Some(banned) = rules
        .banned_passwords
        .iter()
        .find(|b| b.to_lowercase() == lowered)
    {
        return ValidationResult::invalid(format!("Password cannot be \"{banned}\"."));
    }
    if contains_name(&lowered, name) {
        return ValidationResult::invalid("Password must not contain your name.");
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return ValidationResult::invalid(
            "Password must include at least one letter and one number.",
        );
    }
    ValidationResult::Valid
}

/// Substring check of the lowercased name inside the lowercased password.
///
/// The name is also compared with its whitespace removed, so "Alice Smith"
/// catches "alicesmith".
fn contains_name(lowered_password: &str, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return false;
    }
    let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    lowered_password.contains(&name) || lowered_password.contains(&compact)
}

/// Confirmation: required, and an exact (case-sensitive) copy of the password.
pub fn validate_confirm_password(confirm: &str, password: &str) -> ValidationResult {
    if confirm.is_empty() {
        return ValidationResult::invalid("Confirm your password.");
    }
    if confirm != password {
        return ValidationResult::invalid("Passwords do not match.");
    }
    ValidationResult::Valid
}
