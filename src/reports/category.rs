//! Per-category spending breakdown

use std::collections::BTreeMap;

use crate::models::{Money, DEFAULT_COLOR};
use crate::store::LedgerStore;

/// Spend and budget position of one category name
///
/// Covers every category name appearing in the transaction set, including
/// names with no matching [`Category`](crate::models::Category) (orphaned by
/// a rename, or never defined); those get the default color and no budget.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    /// Summed transaction amounts for this name, all months
    pub amount: Money,
    pub color: String,
    /// Share of the total across all transactions, 0 when the total is 0
    pub percentage: f64,
    pub budget: Option<Money>,
    /// budget − spent, present only when a positive budget exists
    pub remaining_budget: Option<Money>,
}

impl LedgerStore {
    /// Break down spending by category name, largest first
    pub fn category_summary(&self) -> Vec<CategorySummary> {
        let total: Money = self.transactions().iter().map(|t| t.amount).sum();

        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        for transaction in self.transactions() {
            *by_category
                .entry(transaction.category.as_str())
                .or_insert_with(Money::zero) += transaction.amount;
        }

        let mut summaries: Vec<CategorySummary> = by_category
            .into_iter()
            .map(|(name, amount)| {
                let category = self.category_by_name(name);
                let budget = category.and_then(|c| c.budget);
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                };

                CategorySummary {
                    category: name.to_string(),
                    amount,
                    color: category
                        .map(|c| c.color.clone())
                        .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                    percentage,
                    budget,
                    remaining_budget: budget.filter(|b| b.is_positive()).map(|b| b - amount),
                }
            })
            .collect();

        summaries.sort_by(|a, b| b.amount.cmp(&a.amount));
        summaries
    }
}
