//! Investment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::InvestmentId;
use super::money::Money;

/// The asset class of an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentType {
    Stocks,
    Bonds,
    Savings,
    Pension,
    Property,
    Other,
}

impl InvestmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::Savings => "savings",
            Self::Pension => "pension",
            Self::Property => "property",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stocks" => Ok(Self::Stocks),
            "bonds" => Ok(Self::Bonds),
            "savings" => Ok(Self::Savings),
            "pension" => Ok(Self::Pension),
            "property" => Ok(Self::Property),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown investment type: '{}'", other)),
        }
    }
}

/// A tracked investment position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InvestmentType,
    /// Amount originally put in
    pub initial_amount: Money,
    /// Current market value
    pub current_amount: Money,
    pub start_date: NaiveDate,
    /// Recurring deposit, when one exists
    pub monthly_contribution: Option<Money>,
    #[serde(default)]
    pub notes: String,
}

impl Investment {
    pub fn new(
        name: impl Into<String>,
        kind: InvestmentType,
        initial_amount: Money,
        current_amount: Money,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: InvestmentId::new(),
            name: name.into(),
            kind,
            initial_amount,
            current_amount,
            start_date,
            monthly_contribution: None,
            notes: String::new(),
        }
    }

    /// Gain (or loss, negative) since the initial deposit
    pub fn gain(&self) -> Money {
        self.current_amount - self.initial_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain() {
        let inv = Investment::new(
            "קרן השתלמות",
            InvestmentType::Savings,
            Money::from_cents(100_000),
            Money::from_cents(120_000),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        );
        assert_eq!(inv.gain().cents(), 20_000);
    }

    #[test]
    fn test_type_serde_rename() {
        let inv = Investment::new(
            "תיק מניות",
            InvestmentType::Stocks,
            Money::from_cents(100),
            Money::from_cents(100),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let json = serde_json::to_string(&inv).unwrap();
        assert!(json.contains("\"type\":\"stocks\""));
    }
}
