//! Expense aggregate with equal splitting.
//!
//! An expense records one payment event: who paid, how much, and how the
//! cost is divided among participants. Splits are owned by the expense and
//! can only be replaced wholesale via [`Expense::split_equally`].

pub mod error;

pub use error::ExpenseError;

use chrono::{DateTime, Utc};
use fairsplit_shared::{ExpenseId, GroupId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::member::Member;

/// One participant's share of an expense.
///
/// Constructed only by [`Expense::split_equally`]; never mutated after
/// creation, only replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    member: Member,
    amount: Money,
}

impl ExpenseSplit {
    /// Creates a split. Share amounts must be strictly positive.
    pub(crate) fn new(member: Member, amount: Money) -> Result<Self, ExpenseError> {
        if !amount.is_positive() {
            return Err(ExpenseError::NonPositiveAmount);
        }
        Ok(Self { member, amount })
    }

    /// Returns the participant this share belongs to.
    #[must_use]
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Returns the share amount.
    #[must_use]
    pub fn amount(&self) -> &Money {
        &self.amount
    }
}

/// A recorded payment event with a payer and a division of cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Money,
    paid_by: Member,
    group_id: GroupId,
    expense_date: DateTime<Utc>,
    splits: Vec<ExpenseSplit>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense with no splits.
    ///
    /// `expense_date` defaults to the current time when not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError::EmptyDescription`] for a blank description
    /// and [`ExpenseError::NonPositiveAmount`] for a zero or negative amount.
    pub fn new(
        description: &str,
        amount: Money,
        paid_by: Member,
        group_id: GroupId,
        expense_date: Option<DateTime<Utc>>,
    ) -> Result<Self, ExpenseError> {
        if description.trim().is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(ExpenseError::NonPositiveAmount);
        }

        let now = Utc::now();
        Ok(Self {
            id: ExpenseId::new(),
            description: description.to_string(),
            amount,
            paid_by,
            group_id,
            expense_date: expense_date.unwrap_or(now),
            splits: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the expense ID.
    #[must_use]
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the total amount paid.
    #[must_use]
    pub fn amount(&self) -> &Money {
        &self.amount
    }

    /// Returns the member who paid.
    #[must_use]
    pub fn paid_by(&self) -> &Member {
        &self.paid_by
    }

    /// Returns the ID of the owning group.
    #[must_use]
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Returns when the expense occurred.
    #[must_use]
    pub fn expense_date(&self) -> DateTime<Utc> {
        self.expense_date
    }

    /// Returns the current splits, in the order they were assigned.
    #[must_use]
    pub fn splits(&self) -> &[ExpenseSplit] {
        &self.splits
    }

    /// Returns when the expense was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Divides the amount equally among `participants`, replacing any
    /// previous splits.
    ///
    /// Each share is `amount / participants.len()` rounded to 2 decimal
    /// places, so the sum of shares may differ from the total by up to
    /// half a cent per participant. The residual is not reconciled.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError::EmptyParticipantList`] when `participants`
    /// is empty, and [`ExpenseError::NonPositiveAmount`] when the per-share
    /// amount rounds to zero (e.g. 0.01 split three ways).
    pub fn split_equally(&mut self, participants: &[Member]) -> Result<(), ExpenseError> {
        if participants.is_empty() {
            return Err(ExpenseError::EmptyParticipantList);
        }

        let share = self.amount.divide(Decimal::from(participants.len()))?;

        let splits = participants
            .iter()
            .map(|member| ExpenseSplit::new(member.clone(), share.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        self.splits = splits;
        self.updated_at = Utc::now();
        Ok(())
    }
}
