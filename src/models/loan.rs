//! Loan model
//!
//! A loan owns its payment list exclusively. The remaining balance is
//! maintained incrementally: every payment subtracts from it, removing a
//! payment adds the amount back, and a withdrawal (new borrowing against the
//! linked savings pool) adds to it. Invariant:
//! remaining = initial − Σ(payments) + Σ(withdrawals).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{LoanId, LoanPaymentId};
use super::money::Money;

/// A single repayment against a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub id: LoanPaymentId,
    pub date: NaiveDate,
    /// Expected > 0; the sign is not enforced here
    pub amount: Money,
    pub notes: Option<String>,
}

impl LoanPayment {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: LoanPaymentId::new(),
            date,
            amount,
            notes: None,
        }
    }
}

/// A loan from a named lender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub initial_amount: Money,
    pub remaining_amount: Money,
    /// Owned exclusively by this loan
    #[serde(default)]
    pub payments: Vec<LoanPayment>,
    pub start_date: NaiveDate,
    pub lender: String,
}

impl Loan {
    /// Create a new loan; the remaining balance starts at the principal
    pub fn new(initial_amount: Money, start_date: NaiveDate, lender: impl Into<String>) -> Self {
        Self {
            id: LoanId::new(),
            initial_amount,
            remaining_amount: initial_amount,
            payments: Vec::new(),
            start_date,
            lender: lender.into(),
        }
    }

    /// Record a payment: subtract from the balance and append to the list
    pub fn record_payment(&mut self, payment: LoanPayment) {
        self.remaining_amount -= payment.amount;
        self.payments.push(payment);
    }

    /// Remove a payment by id, reversing its effect on the balance
    ///
    /// Returns false (and leaves the balance untouched) when the id is not
    /// found in this loan's payment list.
    pub fn remove_payment(&mut self, payment_id: LoanPaymentId) -> bool {
        let Some(index) = self.payments.iter().position(|p| p.id == payment_id) else {
            return false;
        };
        let payment = self.payments.remove(index);
        self.remaining_amount += payment.amount;
        true
    }

    /// Change a payment's amount, keeping the balance invariant
    ///
    /// The balance absorbs the difference between the old and new amounts.
    /// Returns false when the id is not found.
    pub fn reprice_payment(&mut self, payment_id: LoanPaymentId, amount: Money) -> bool {
        let Some(payment) = self.payments.iter_mut().find(|p| p.id == payment_id) else {
            return false;
        };
        self.remaining_amount += payment.amount - amount;
        payment.amount = amount;
        true
    }

    /// Borrow again against the linked savings pool
    ///
    /// Only the running balance moves; no withdrawal ledger is kept.
    pub fn withdraw(&mut self, amount: Money) {
        self.remaining_amount += amount;
    }

    /// Total of all recorded payments
    pub fn total_paid(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }
}
