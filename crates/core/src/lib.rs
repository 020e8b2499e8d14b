//! Core business logic for FairSplit.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain aggregates, validation rules, and the balance
//! calculations live here.
//!
//! # Modules
//!
//! - `member` - Group member identity
//! - `expense` - Expense aggregate with equal splitting
//! - `group` - Group aggregate owning members and expenses
//! - `settlement` - Balance calculation and settlement suggestions

pub mod expense;
pub mod group;
pub mod member;
pub mod settlement;

pub use expense::{Expense, ExpenseError, ExpenseSplit};
pub use group::{Group, GroupError};
pub use member::{Member, MemberError};
pub use settlement::{calculate_balances, suggest_settlements, Balance, Settlement};
