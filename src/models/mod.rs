//! Core data models
//!
//! All models serialize with serde; dates are calendar days
//! (`chrono::NaiveDate`, ISO on the wire) and amounts are the cents-based
//! [`Money`] type.

pub mod category;
pub mod ids;
pub mod income;
pub mod investment;
pub mod loan;
pub mod money;
pub mod person;
pub mod transaction;

pub use category::{default_categories, suggest_category, Category, DEFAULT_COLOR};
pub use ids::{CategoryId, InvestmentId, LoanId, LoanPaymentId, TransactionId};
pub use income::MonthlyIncome;
pub use investment::{Investment, InvestmentType};
pub use loan::{Loan, LoanPayment};
pub use money::{Money, MoneyParseError};
pub use person::Person;
pub use transaction::{PaymentSource, Transaction};
