//! homeledger - Household ledger engine
//!
//! Tracks a two-person household's income, expenses, budgets, loans, and
//! investments, and imports credit-card statement exports (XLSX) into the
//! ledger.
//!
//! # Architecture
//!
//! - `models`: core data types (transactions, categories, incomes, loans,
//!   investments)
//! - `store`: the in-memory state container and its mutation surface
//! - `reports`: derived aggregations (monthly overview, category/person
//!   splits, budget alerts, portfolio totals)
//! - `import`: statement parsing into normalized transaction batches
//! - `storage`: JSON snapshot persistence
//! - `config`: path resolution
//! - `cli`: clap command handlers for the binary
//! - `error`: crate error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use homeledger::models::{Money, PaymentSource, Person};
//! use homeledger::store::{LedgerStore, NewTransaction};
//!
//! let mut store = LedgerStore::new();
//! store.add_transaction(NewTransaction {
//!     date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
//!     amount: Money::from_cents(4200),
//!     description: "קפה".into(),
//!     category: "מזון".into(),
//!     person: Person::Yuval,
//!     source: PaymentSource::Cash,
//!     notes: String::new(),
//! });
//!
//! let split = store.person_summary();
//! assert_eq!(split.len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::{LedgerError, LedgerResult};
