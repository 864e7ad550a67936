//! Current-month overview

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::models::Money;
use crate::store::LedgerStore;

/// Income, spending, and savings for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Sum of both persons' income entries dated in the month
    pub income: Money,
    /// Sum of transaction amounts dated in the month
    pub expenses: Money,
    /// income − expenses
    pub balance: Money,
    /// income × savings rate
    pub savings: Money,
    /// Category with the largest all-time spend; empty when there are no
    /// transactions (or none with a positive total)
    pub top_category: String,
}

impl LedgerStore {
    /// Summarize the calendar month containing `today`
    ///
    /// Both the income and the expense side are scoped to the month. The
    /// top category intentionally looks at the whole transaction set, the
    /// same window the category breakdown uses.
    pub fn monthly_summary(&self, today: NaiveDate) -> MonthlySummary {
        let (year, month) = (today.year(), today.month());

        let income: Money = self
            .monthly_incomes()
            .iter()
            .filter(|i| i.in_month(year, month))
            .map(|i| i.amount)
            .sum();

        let expenses: Money = self
            .transactions()
            .iter()
            .filter(|t| t.in_month(year, month))
            .map(|t| t.amount)
            .sum();

        let balance = income - expenses;
        let savings = Money::from_float(income.to_float() * self.savings_percentage() / 100.0);

        // BTreeMap keeps ties deterministic (first name in order wins)
        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        for transaction in self.transactions() {
            *by_category
                .entry(transaction.category.as_str())
                .or_insert_with(Money::zero) += transaction.amount;
        }

        let mut top_category = String::new();
        let mut top_amount = Money::zero();
        for (name, amount) in by_category {
            if amount > top_amount {
                top_amount = amount;
                top_category = name.to_string();
            }
        }

        MonthlySummary {
            income,
            expenses,
            balance,
            savings,
            top_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthlyIncome, PaymentSource, Person};
    use crate::store::NewTransaction;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(store: &mut LedgerStore, d: NaiveDate, cents: i64, category: &str) {
        store.add_transaction(NewTransaction {
            date: d,
            amount: Money::from_cents(cents),
            description: String::new(),
            category: category.into(),
            person: Person::Yuval,
            source: PaymentSource::CreditCard,
            notes: String::new(),
        });
    }

    #[test]
    fn test_empty_store_yields_zeroes() {
        let store = LedgerStore::new();
        let summary = store.monthly_summary(date(2024, 3, 15));
        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.expenses, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.savings, Money::zero());
        assert_eq!(summary.top_category, "");
    }

    #[test]
    fn test_income_and_expenses_are_month_scoped() {
        let mut store = LedgerStore::new();
        store.add_monthly_income(MonthlyIncome::new(
            Person::Yuval,
            Money::from_cents(900_000),
            date(2024, 3, 1),
        ));
        store.add_monthly_income(MonthlyIncome::new(
            Person::Benny,
            Money::from_cents(800_000),
            date(2024, 3, 10),
        ));
        // previous month: excluded from both sides
        store.add_monthly_income(MonthlyIncome::new(
            Person::Yuval,
            Money::from_cents(900_000),
            date(2024, 2, 1),
        ));
        txn(&mut store, date(2024, 3, 5), 50_000, "מזון");
        txn(&mut store, date(2024, 2, 5), 70_000, "מזון");

        let summary = store.monthly_summary(date(2024, 3, 15));
        assert_eq!(summary.income.cents(), 1_700_000);
        assert_eq!(summary.expenses.cents(), 50_000);
        assert_eq!(summary.balance.cents(), 1_650_000);
    }

    #[test]
    fn test_savings_uses_savings_rate() {
        let mut store = LedgerStore::new();
        store.add_monthly_income(MonthlyIncome::new(
            Person::Yuval,
            Money::from_cents(1_000_000),
            date(2024, 3, 1),
        ));
        store.set_savings_percentage(15.0);

        let summary = store.monthly_summary(date(2024, 3, 15));
        assert_eq!(summary.savings.cents(), 150_000);
    }

    #[test]
    fn test_top_category_spans_all_months() {
        let mut store = LedgerStore::new();
        txn(&mut store, date(2024, 3, 5), 10_000, "מזון");
        txn(&mut store, date(2024, 1, 5), 90_000, "דיור");

        let summary = store.monthly_summary(date(2024, 3, 15));
        assert_eq!(summary.top_category, "דיור");
    }

    #[test]
    fn test_top_category_ignores_non_positive_totals() {
        let mut store = LedgerStore::new();
        txn(&mut store, date(2024, 3, 5), -10_000, "מזון");

        let summary = store.monthly_summary(date(2024, 3, 15));
        assert_eq!(summary.top_category, "");
    }
}
