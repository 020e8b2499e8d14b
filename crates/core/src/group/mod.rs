//! Group aggregate owning members and expenses.
//!
//! The group is the consistency boundary for referential invariants:
//! expense payers and split participants must be current members, and a
//! member with recorded activity cannot be removed. Internal collections
//! are exposed only as read-only slices; all mutation goes through the
//! guard methods below.

pub mod error;

pub use error::GroupError;

use chrono::{DateTime, Utc};
use fairsplit_shared::{Currency, GroupId, MemberId};
use serde::{Deserialize, Serialize};

use crate::expense::Expense;
use crate::member::Member;

/// An expense-sharing group: a set of members and their recorded expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    currency: Currency,
    description: Option<String>,
    members: Vec<Member>,
    expenses: Vec<Expense>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Group {
    /// Creates a new empty group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::EmptyName`] if the name is empty or blank.
    pub fn new(
        name: &str,
        currency: Currency,
        description: Option<&str>,
    ) -> Result<Self, GroupError> {
        if name.trim().is_empty() {
            return Err(GroupError::EmptyName);
        }
        let now = Utc::now();
        Ok(Self {
            id: GroupId::new(),
            name: name.to_string(),
            currency,
            description: description.map(ToString::to_string),
            members: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the group ID.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the members, in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns the expenses, in the order they were attached.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Returns when the group was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the group was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Adds a member to the group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::DuplicateMember`] if a member with the same ID
    /// is already present.
    pub fn add_member(&mut self, member: Member) -> Result<(), GroupError> {
        if self.members.iter().any(|m| m.id() == member.id()) {
            return Err(GroupError::DuplicateMember(member.id()));
        }
        self.members.push(member);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes a member from the group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::MemberNotFound`] if the member is not in the
    /// group and [`GroupError::MemberHasActivity`] if the member is payer
    /// or split participant of any attached expense.
    pub fn remove_member(&mut self, member_id: MemberId) -> Result<(), GroupError> {
        let position = self
            .members
            .iter()
            .position(|m| m.id() == member_id)
            .ok_or(GroupError::MemberNotFound(member_id))?;

        let has_activity = self.expenses.iter().any(|e| {
            e.paid_by().id() == member_id
                || e.splits().iter().any(|s| s.member().id() == member_id)
        });
        if has_activity {
            return Err(GroupError::MemberHasActivity(member_id));
        }

        self.members.remove(position);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Attaches an expense to the group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::NonMemberParticipant`] if the payer or any
    /// split participant is not a current group member.
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), GroupError> {
        if !self.is_member(expense.paid_by().id()) {
            return Err(GroupError::NonMemberParticipant(expense.paid_by().id()));
        }
        for split in expense.splits() {
            if !self.is_member(split.member().id()) {
                return Err(GroupError::NonMemberParticipant(split.member().id()));
            }
        }

        self.expenses.push(expense);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Updates name and description, re-validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::EmptyName`] if the name is empty or blank.
    pub fn update_details(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), GroupError> {
        if name.trim().is_empty() {
            return Err(GroupError::EmptyName);
        }
        self.name = name.to_string();
        self.description = description.map(ToString::to_string);
        self.updated_at = Utc::now();
        Ok(())
    }

    fn is_member(&self, member_id: MemberId) -> bool {
        self.members.iter().any(|m| m.id() == member_id)
    }
}
