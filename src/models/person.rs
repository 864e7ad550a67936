//! The two household members
//!
//! A closed two-value enumeration, not an open user directory. Every
//! transaction and income entry is tagged with one of the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two fixed household members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    Yuval,
    Benny,
}

impl Person {
    /// Both members, in canonical order
    pub const ALL: [Person; 2] = [Person::Yuval, Person::Benny];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yuval => "yuval",
            Self::Benny => "benny",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yuval" => Ok(Self::Yuval),
            "benny" => Ok(Self::Benny),
            other => Err(format!("unknown person: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for person in Person::ALL {
            assert_eq!(person.as_str().parse::<Person>().unwrap(), person);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Person::Yuval).unwrap(), "\"yuval\"");
        let p: Person = serde_json::from_str("\"benny\"").unwrap();
        assert_eq!(p, Person::Benny);
    }

    #[test]
    fn test_unknown_person_rejected() {
        assert!("carol".parse::<Person>().is_err());
    }
}
