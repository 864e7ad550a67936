//! Strongly-typed ID wrappers for all entity types
//!
//! Newtype wrappers prevent mixing up IDs from different entity types
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");
define_id!(LoanId, "loan-");
define_id!(LoanPaymentId, "pmt-");
define_id!(InvestmentId, "inv-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_prefix() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12); // "txn-" + 8 chars
    }

    #[test]
    fn test_id_uniqueness() {
        assert_ne!(LoanId::new(), LoanId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_from_str_accepts_full_uuid() {
        let id = InvestmentId::new();
        let parsed: InvestmentId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
