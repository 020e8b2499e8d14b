//! Expense validation errors.

use fairsplit_shared::MoneyError;
use thiserror::Error;

/// Errors that can occur creating or splitting an expense.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Expense description is empty or blank.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Expense or split amount is zero or negative.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Equal split requested with no participants.
    #[error("Must have at least one participant to split")]
    EmptyParticipantList,

    /// Underlying money arithmetic failure.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl ExpenseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::EmptyParticipantList => "EMPTY_PARTICIPANT_LIST",
            Self::Money(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        // All expense errors are validation errors.
        400
    }
}
