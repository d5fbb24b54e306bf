//! Field model: the current raw value of every input.

use crate::field::FieldId;

/// Current value of each registration field.
///
/// Values are stored exactly as typed. Validators decide on their own whether
/// to trim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    values: [String; 5],
}

impl RegistrationForm {
    /// Create a form with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the form. Handy for building fixtures.
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the current value of a field.
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Check if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Borrow all values at once for validation.
    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            name: self.get(FieldId::Name),
            email: self.get(FieldId::Email),
            phone: self.get(FieldId::Phone),
            password: self.get(FieldId::Password),
            confirm_password: self.get(FieldId::ConfirmPassword),
        }
    }
}

/// Read-only view of every field value at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSnapshot<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl<'a> FormSnapshot<'a> {
    /// Get the value of a field.
    pub fn get(&self, field: FieldId) -> &'a str {
        match field {
            FieldId::Name => self.name,
            FieldId::Email => self.email,
            FieldId::Phone => self.phone,
            FieldId::Password => self.password,
            FieldId::ConfirmPassword => self.confirm_password,
        }
    }
}
