//! Per-person spending split

use crate::models::{Money, Person};
use crate::store::LedgerStore;

/// One household member's share of the total spend
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSummary {
    pub person: Person,
    pub amount: Money,
    /// Share of the global total, 0 when the total is 0
    pub percentage: f64,
}

impl LedgerStore {
    /// Spending split between the two household members
    ///
    /// Always returns exactly two entries, one per person, even when one
    /// (or both) has no transactions.
    pub fn person_summary(&self) -> Vec<PersonSummary> {
        let total: Money = self.transactions().iter().map(|t| t.amount).sum();

        Person::ALL
            .into_iter()
            .map(|person| {
                let amount: Money = self
                    .transactions()
                    .iter()
                    .filter(|t| t.person == person)
                    .map(|t| t.amount)
                    .sum();
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                };
                PersonSummary {
                    person,
                    amount,
                    percentage,
                }
            })
            .collect()
    }
}
