//! Member validation errors.

use thiserror::Error;

/// Errors that can occur creating or updating a member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// Member name is empty or blank.
    #[error("Member name cannot be empty")]
    EmptyName,

    /// Member email is empty or blank.
    #[error("Email cannot be empty")]
    EmptyEmail,
}

impl MemberError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyEmail => "EMPTY_EMAIL",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        // All member errors are validation errors.
        400
    }
}
