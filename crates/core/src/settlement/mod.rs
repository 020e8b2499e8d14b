//! Balance calculation and settlement suggestions.
//!
//! Pure functions that reduce a group's expenses into net per-member
//! balances and a greedy set of pairwise payments that settles them.
//! Both operations are stateless, synchronous, single-pass transformations;
//! callers may invoke them concurrently on distinct input snapshots.
//!
//! All expenses fed to [`calculate_balances`] are assumed to share one
//! currency. The functions take the currency of the first element for
//! output formatting and do not validate the rest; mixed-currency input
//! produces meaningless numbers, not an error.

use std::collections::HashMap;

use fairsplit_shared::{MemberId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;
use crate::member::Member;

#[cfg(test)]
mod props;

/// A member's net position across all expenses in a group.
///
/// Positive means the member is owed money, negative means the member
/// owes. The sign convention is a public contract: the presentation
/// collaborator colors output by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The member this balance belongs to.
    pub member: Member,
    /// Net amount: positive = is owed, negative = owes.
    pub amount: Money,
}

/// A suggested payment from one member to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The debtor making the payment.
    pub from: Member,
    /// The creditor receiving the payment.
    pub to: Member,
    /// The payment amount, always positive.
    pub amount: Money,
}

/// Amounts at or below a cent are treated as already settled.
fn negligible() -> Decimal {
    Decimal::new(1, 2)
}

/// Computes each member's net balance across `expenses`.
///
/// Per expense the payer is credited the full amount and every split
/// participant (payer included, in the normal equal-split case) is debited
/// their share. Totals are keyed by member ID; the first occurrence of a
/// member determines the record kept for display.
///
/// The result is sorted descending by amount with a stable sort, so the
/// largest creditor comes first and members with equal balances keep their
/// first-seen order. Consumers rely on this ordering.
#[must_use]
pub fn calculate_balances(expenses: &[Expense]) -> Vec<Balance> {
    let Some(first) = expenses.first() else {
        return Vec::new();
    };
    let currency = first.amount().currency().clone();

    // First-seen order is preserved so ties sort deterministically.
    let mut index: HashMap<MemberId, usize> = HashMap::new();
    let mut totals: Vec<(Member, Decimal)> = Vec::new();

    for expense in expenses {
        accumulate(&mut index, &mut totals, expense.paid_by(), expense.amount().amount());
        for split in expense.splits() {
            accumulate(&mut index, &mut totals, split.member(), -split.amount().amount());
        }
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .map(|(member, amount)| Balance {
            member,
            amount: Money::new(amount, currency.clone()),
        })
        .collect()
}

fn accumulate(
    index: &mut HashMap<MemberId, usize>,
    totals: &mut Vec<(Member, Decimal)>,
    member: &Member,
    delta: Decimal,
) {
    if let Some(&position) = index.get(&member.id()) {
        totals[position].1 += delta;
    } else {
        index.insert(member.id(), totals.len());
        totals.push((member.clone(), delta));
    }
}

/// Derives a settlement plan from net balances via greedy two-pointer
/// netting.
///
/// Debtors (negative balances) are taken most-negative first, creditors
/// (positive balances) largest first; each round settles
/// `min(|debt|, credit)` between the current pair. A settlement is
/// recorded only when the settled amount exceeds the negligible threshold
/// of 0.01; sub-cent remainders are suppressed rather than folded into an
/// existing settlement. Zero balances never appear in the plan.
///
/// Produces at most `debtors + creditors - 1` settlements. This is a
/// greedy heuristic: it usually matches the minimum-cardinality plan but
/// is not a proven minimum-transaction solver. Both partitions use stable
/// sorts, so equal-magnitude balances keep their input order and the
/// output is reproducible.
#[must_use]
pub fn suggest_settlements(balances: &[Balance]) -> Vec<Settlement> {
    let Some(first) = balances.first() else {
        return Vec::new();
    };
    let currency = first.amount.currency().clone();
    let threshold = negligible();

    let mut debtors: Vec<(Member, Decimal)> = balances
        .iter()
        .filter(|b| b.amount.is_negative())
        .map(|b| (b.member.clone(), b.amount.amount()))
        .collect();
    debtors.sort_by(|a, b| a.1.cmp(&b.1));

    let mut creditors: Vec<(Member, Decimal)> = balances
        .iter()
        .filter(|b| b.amount.is_positive())
        .map(|b| (b.member.clone(), b.amount.amount()))
        .collect();
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut settlements = Vec::new();
    let mut debtor_index = 0;
    let mut creditor_index = 0;

    while debtor_index < debtors.len() && creditor_index < creditors.len() {
        let debt = debtors[debtor_index].1.abs();
        let credit = creditors[creditor_index].1;
        let settled = debt.min(credit);

        if settled > threshold {
            settlements.push(Settlement {
                from: debtors[debtor_index].0.clone(),
                to: creditors[creditor_index].0.clone(),
                amount: Money::new(settled, currency.clone()),
            });
        }

        if (debt - credit).abs() < threshold {
            // Both sides fully settled this round.
            debtor_index += 1;
            creditor_index += 1;
        } else if debt > credit {
            // Creditor settled; debtor keeps the remainder.
            debtors[debtor_index].1 += settled;
            creditor_index += 1;
        } else {
            // Debtor settled; creditor keeps the remainder.
            creditors[creditor_index].1 -= settled;
            debtor_index += 1;
        }
    }

    settlements
}
