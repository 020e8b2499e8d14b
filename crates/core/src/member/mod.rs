//! Group member identity.
//!
//! A member is an identity value: an ID used as a map key plus a display
//! name and email. The balance calculator only reads identity and name;
//! lifecycle belongs to the persistence collaborator.

pub mod error;

pub use error::MemberError;

use chrono::{DateTime, Utc};
use fairsplit_shared::MemberId;
use serde::{Deserialize, Serialize};

/// A person participating in one or more expense-sharing groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new member.
    ///
    /// # Errors
    ///
    /// Returns [`MemberError::EmptyName`] or [`MemberError::EmptyEmail`]
    /// if the corresponding field is empty or blank.
    pub fn new(name: &str, email: &str) -> Result<Self, MemberError> {
        validate_details(name, email)?;
        let now = Utc::now();
        Ok(Self {
            id: MemberId::new(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the member's ID.
    #[must_use]
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns when the member was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the member was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Updates name and email, re-validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`MemberError::EmptyName`] or [`MemberError::EmptyEmail`]
    /// if the corresponding field is empty or blank.
    pub fn update_details(&mut self, name: &str, email: &str) -> Result<(), MemberError> {
        validate_details(name, email)?;
        self.name = name.to_string();
        self.email = email.to_string();
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_details(name: &str, email: &str) -> Result<(), MemberError> {
    if name.trim().is_empty() {
        return Err(MemberError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(MemberError::EmptyEmail);
    }
    Ok(())
}
