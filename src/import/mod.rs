//! Statement import
//!
//! Turns a card issuer's spreadsheet export into a batch of normalized
//! transaction candidates. Independent of the ledger store; the caller
//! attaches a person tag and forwards the batch to
//! [`LedgerStore::import_transactions`](crate::store::LedgerStore::import_transactions).

pub mod statement;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{Money, PaymentSource};

pub use statement::import_statement;

/// Which institution produced the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementSource {
    /// Credit-card issuer export (the implemented format)
    CreditCard,
    /// Bank account export; recognized but not parsed yet
    BankAccount,
}

impl fmt::Display for StatementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditCard => write!(f, "credit_card"),
            Self::BankAccount => write!(f, "bank_account"),
        }
    }
}

impl FromStr for StatementSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit_card" => Ok(Self::CreditCard),
            "bank_account" => Ok(Self::BankAccount),
            other => Err(format!("unknown statement source: '{}'", other)),
        }
    }
}

/// Structural failures that abort the whole import call
///
/// Per-row problems never surface here; they accumulate in
/// [`ImportBatch::errors`] while parsing continues.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The workbook could not be opened or read
    #[error("failed to read statement workbook: {0}")]
    Workbook(String),

    /// The workbook contains no sheets at all
    #[error("the statement workbook has no sheets")]
    NoSheet,

    /// No row carries the transaction-date column label
    #[error("no header row with the transaction-date column was found")]
    HeaderRowNotFound,

    /// The header row lacks the transaction-date or charge-amount column
    #[error("required statement columns are missing (transaction date, charge amount)")]
    RequiredColumnsMissing,

    /// The declared source format has no parser
    #[error("bank account statements are not supported")]
    UnsupportedSource,
}

/// A parsed statement row, not yet a ledger transaction
///
/// Carries no identifier and no person tag; both are attached by the store's
/// import mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCandidate {
    pub date: NaiveDate,
    /// Sign-preserving: refund/credit rows stay negative
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub source: PaymentSource,
    pub notes: String,
}

/// Outcome of one import call
///
/// A batch is successful when at least one row parsed; the error list always
/// rides along, so a successful batch can still report failed rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBatch {
    pub success: bool,
    /// Number of accepted rows
    pub records_processed: usize,
    /// One entry per failed row, tagged with its 1-based sheet row index
    pub errors: Vec<String>,
    pub transactions: Vec<TransactionCandidate>,
}
