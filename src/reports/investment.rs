//! Portfolio totals

use crate::models::Money;
use crate::store::LedgerStore;

/// Aggregate position across all investments
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentSummary {
    pub total_invested: Money,
    pub total_value: Money,
    /// total_value − total_invested
    pub total_return: Money,
    /// Return over invested × 100, 0 when nothing is invested
    pub return_percentage: f64,
    /// Sum of recurring deposits (absent counts as 0)
    pub monthly_contributions: Money,
}

impl LedgerStore {
    /// Aggregate all investment positions
    pub fn investment_summary(&self) -> InvestmentSummary {
        let total_invested: Money = self.investments().iter().map(|i| i.initial_amount).sum();
        let total_value: Money = self.investments().iter().map(|i| i.current_amount).sum();
        let total_return = total_value - total_invested;

        let return_percentage = if total_invested.is_zero() {
            0.0
        } else {
            total_return.cents() as f64 / total_invested.cents() as f64 * 100.0
        };

        let monthly_contributions: Money = self
            .investments()
            .iter()
            .filter_map(|i| i.monthly_contribution)
            .sum();

        InvestmentSummary {
            total_invested,
            total_value,
            total_return,
            return_percentage,
            monthly_contributions,
        }
    }
}
