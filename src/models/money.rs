//! Money type for representing currency amounts
//!
//! Internally stores amounts in agorot (i64 hundredths of a shekel) to avoid
//! floating-point precision issues. Provides safe arithmetic, parsing of
//! statement-style strings ("₪1,234.50"), and conversion to/from the float
//! cells a spreadsheet yields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents (agorot)
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create a Money amount from a float in whole currency units
    ///
    /// Spreadsheet cells arrive as f64; rounding to the nearest agora keeps
    /// the sign and absorbs float noise.
    pub fn from_float(units: f64) -> Self {
        Self((units * 100.0).round() as i64)
    }

    /// The amount in cents (agorot)
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount in whole currency units, as a float
    pub fn to_float(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts the forms a card statement produces: an optional currency
    /// symbol, thousands separators, and whitespace are stripped before the
    /// value is read as a decimal. The sign is preserved, so refund/credit
    /// rows ("-50") come through negative.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, '₪' | ',') && !c.is_whitespace())
            .collect();

        let (negative, cleaned) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let cents = match cleaned.split_once('.') {
            Some((units_str, frac_str)) => {
                let units: i64 = units_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

                // Pad or truncate the fraction to 2 digits
                let frac_digits: String = frac_str.chars().take(2).collect();
                let frac: i64 = if frac_digits.is_empty() {
                    0
                } else {
                    let value = frac_digits
                        .parse::<u32>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        as i64;
                    if frac_digits.len() == 1 {
                        value * 10
                    } else {
                        value
                    }
                };

                units * 100 + frac
            }
            None => {
                cleaned
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-₪{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "₪{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
