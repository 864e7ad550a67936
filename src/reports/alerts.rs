//! Budget threshold alerts

use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Money;
use crate::store::LedgerStore;

/// Spend fraction of budget at which a category starts alerting, in percent
pub const BUDGET_ALERT_THRESHOLD: f64 = 80.0;

/// A category at or over the alert threshold of its monthly budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub budget: Money,
    /// Spend in the current calendar month
    pub spent: Money,
    /// spent / budget × 100
    pub percentage: f64,
}

impl LedgerStore {
    /// Categories at or above the alert threshold for the month of `today`
    ///
    /// Only categories with a positive budget participate. Sorted with the
    /// most-exceeded budget first.
    pub fn budget_alerts(&self, today: NaiveDate) -> Vec<BudgetAlert> {
        let (year, month) = (today.year(), today.month());

        let mut spending: HashMap<&str, Money> = HashMap::new();
        for transaction in self.transactions().iter().filter(|t| t.in_month(year, month)) {
            *spending
                .entry(transaction.category.as_str())
                .or_insert_with(Money::zero) += transaction.amount;
        }

        let mut alerts: Vec<BudgetAlert> = self
            .categories()
            .iter()
            .filter_map(|category| {
                let budget = category.budget.filter(|b| b.is_positive())?;
                let spent = spending
                    .get(category.name.as_str())
                    .copied()
                    .unwrap_or_else(Money::zero);
                let percentage = spent.cents() as f64 / budget.cents() as f64 * 100.0;

                (percentage >= BUDGET_ALERT_THRESHOLD).then(|| BudgetAlert {
                    category: category.name.clone(),
                    budget,
                    spent,
                    percentage,
                })
            })
            .collect();

        alerts.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(Ordering::Equal)
        });
        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{PaymentSource, Person};
    use crate::store::{NewCategory, NewTransaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_category(store: &mut LedgerStore, name: &str, budget_cents: i64) {
        let id = store.add_category(NewCategory {
            name: name.into(),
            color: "#000000".into(),
            keywords: vec![],
        });
        store.set_budget(id, Some(Money::from_cents(budget_cents)));
    }

    fn txn(store: &mut LedgerStore, d: NaiveDate, cents: i64, category: &str) {
        store.add_transaction(NewTransaction {
            date: d,
            amount: Money::from_cents(cents),
            description: String::new(),
            category: category.into(),
            person: Person::Benny,
            source: PaymentSource::CreditCard,
            notes: String::new(),
        });
    }

    #[test]
    fn test_alerts_only_at_or_above_threshold() {
        let mut store = LedgerStore::new();
        setup_category(&mut store, "מזון", 100_000);
        setup_category(&mut store, "דיור", 100_000);
        setup_category(&mut store, "בידור", 100_000);

        let today = date(2024, 3, 15);
        txn(&mut store, today, 80_000, "מזון"); // exactly 80%
        txn(&mut store, today, 79_999, "דיור"); // just under
        txn(&mut store, today, 120_000, "בידור"); // over budget

        let alerts = store.budget_alerts(today);
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.percentage >= BUDGET_ALERT_THRESHOLD));
        assert!(!alerts.iter().any(|a| a.category == "דיור"));
    }

    #[test]
    fn test_sorted_descending_by_percentage() {
        let mut store = LedgerStore::new();
        setup_category(&mut store, "מזון", 100_000);
        setup_category(&mut store, "בידור", 100_000);

        let today = date(2024, 3, 15);
        txn(&mut store, today, 90_000, "מזון");
        txn(&mut store, today, 120_000, "בידור");

        let alerts = store.budget_alerts(today);
        assert_eq!(alerts[0].category, "בידור");
        assert!((alerts[0].percentage - 120.0).abs() < 1e-9);
        assert_eq!(alerts[1].category, "מזון");
    }

    #[test]
    fn test_spend_is_month_scoped() {
        let mut store = LedgerStore::new();
        setup_category(&mut store, "מזון", 100_000);

        txn(&mut store, date(2024, 2, 20), 95_000, "מזון");
        txn(&mut store, date(2024, 3, 5), 10_000, "מזון");

        // last month's blowout does not alert this month
        assert!(store.budget_alerts(date(2024, 3, 15)).is_empty());
        assert_eq!(store.budget_alerts(date(2024, 2, 25)).len(), 1);
    }

    #[test]
    fn test_categories_without_budget_never_alert() {
        let mut store = LedgerStore::new();
        store.add_category(NewCategory {
            name: "מזון".into(),
            color: "#EF4444".into(),
            keywords: vec![],
        });
        let today = date(2024, 3, 15);
        txn(&mut store, today, 500_000, "מזון");

        assert!(store.budget_alerts(today).is_empty());
    }
}
