//! Validation results.

use crate::field::FieldId;

/// Outcome of validating a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// The field passed validation.
    #[default]
    Valid,
    /// The field failed validation.
    Invalid {
        /// User-facing message. Never empty.
        message: String,
    },
}

impl ValidationResult {
    /// Create a failed result.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "invalid result needs a message");
        Self::Invalid { message }
    }

    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the failure message (if any).
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }

    /// Attach the field this result belongs to, keeping only failures.
    pub fn into_error(self, field: FieldId) -> Option<FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(FieldError { field, message }),
        }
    }
}

/// A failed validation, tied to the field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}
