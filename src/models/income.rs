//! Monthly income entries
//!
//! One entry per salary (or other income) event. Entries have no id of
//! their own; (person, date) identifies them, and several entries per
//! person per month are allowed and summed by the aggregations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::person::Person;

/// An income amount received by one household member on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub person: Person,
    pub amount: Money,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl MonthlyIncome {
    pub fn new(person: Person, amount: Money, date: NaiveDate) -> Self {
        Self {
            person,
            amount,
            date,
            notes: None,
        }
    }

    /// True when the entry falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}
