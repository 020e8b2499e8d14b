//! Shared value types for FairSplit.
//!
//! This crate provides the common types used across all other crates:
//! - Money and Currency types with decimal precision
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{Currency, ExpenseId, GroupId, MemberId, Money, MoneyError};
