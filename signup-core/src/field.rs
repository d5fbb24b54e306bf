//! Field identifiers.

use std::fmt;

/// One named input slot of the registration form.
///
/// The declaration order is the order fields are validated in on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in submit order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Stable identifier of the input widget.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }

    /// Identifier of the error region belonging to this field.
    pub fn error_id(self) -> &'static str {
        match self {
            FieldId::Name => "nameError",
            FieldId::Email => "emailError",
            FieldId::Phone => "phoneError",
            FieldId::Password => "passwordError",
            FieldId::ConfirmPassword => "confirmPasswordError",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether the value should be masked when displayed.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }

    /// Position of this field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
