//! Category model
//!
//! Categories carry a display color, an optional monthly budget, and a set
//! of merchant keywords used for advisory auto-categorization. The display
//! name is the join key from transactions (see `Transaction::category`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Fallback color for category names with no matching category
pub const DEFAULT_COLOR: &str = "#CBD5E1";

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, unique per household; transactions join on it
    pub name: String,

    /// Hex color token for charts and tables
    pub color: String,

    /// Merchant keywords for auto-categorization suggestions
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Optional monthly budget ceiling
    pub budget: Option<Money>,
}

impl Category {
    /// Create a new category with no budget
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            color: color.into(),
            keywords: Vec::new(),
            budget: None,
        }
    }

    /// Builder-style keyword list
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if let Some(budget) = self.budget {
            if budget.is_negative() {
                return Err(CategoryValidationError::NegativeBudget);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeBudget => write!(f, "Category budget cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// The default category set a fresh household ledger starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("מזון", "#EF4444")
            .with_keywords(&["סופר", "מסעדה", "משלוח", "קפה", "שופרסל", "רמי לוי"]),
        Category::new("תחבורה", "#F59E0B")
            .with_keywords(&["דלק", "רכבת", "אוטובוס", "מונית", "חניה", "טסלה", "רכב"]),
        Category::new("דיור", "#3B82F6")
            .with_keywords(&["שכירות", "ארנונה", "חשמל", "מים", "גז", "ועד בית"]),
        Category::new("בידור", "#8B5CF6")
            .with_keywords(&["סרט", "הופעה", "מוזיקה", "נטפליקס", "ספוטיפיי", "סטרימינג"]),
        Category::new("בריאות", "#10B981")
            .with_keywords(&["רופא", "תרופות", "קופת חולים", "טיפול", "ביטוח בריאות"]),
        Category::new("ילדים", "#EC4899")
            .with_keywords(&["צעצועים", "בית ספר", "חוגים", "בייביסיטר", "גן"]),
        Category::new("מנויים", "#6366F1").with_keywords(&[
            "חבילת סלולר",
            "אינטרנט",
            "כבלים",
            "עיתון",
            "הוט",
            "בזק",
            "סלקום",
            "פרטנר",
        ]),
    ]
}

/// Suggest a category for a transaction description
///
/// Returns the name of the first category one of whose keywords appears in
/// the description (case-insensitive). Advisory only; nothing enforces the
/// suggestion.
pub fn suggest_category<'a>(description: &str, categories: &'a [Category]) -> Option<&'a str> {
    let description = description.to_lowercase();
    categories.iter().find_map(|category| {
        category
            .keywords
            .iter()
            .any(|keyword| description.contains(&keyword.to_lowercase()))
            .then_some(category.name.as_str())
    })
}
