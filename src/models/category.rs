//! Category classification
//!
//! Expense categories are free-form strings. Three labels receive budget
//! treatment; everything else falls into the `Other` bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Budget bucket an expense is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Clothes,
    Fun,
    Other,
}

impl Category {
    /// Order in which buckets win a tie for the largest monthly total
    pub const PRIORITY: [Category; 4] = [
        Category::Food,
        Category::Fun,
        Category::Clothes,
        Category::Other,
    ];

    /// Classify a free-form category label
    ///
    /// Matching is exact: `"Food"` or `" food"` are `Other`.
    pub fn classify(label: &str) -> Self {
        match label {
            "food" => Self::Food,
            "clothes" => Self::Clothes,
            "fun" => Self::Fun,
            _ => Self::Other,
        }
    }

    /// The display label of the bucket
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Clothes => "clothes",
            Self::Fun => "fun",
            Self::Other => "Other",
        }
    }

    /// Index of this bucket into per-category arrays
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::Clothes => 1,
            Self::Fun => 2,
            Self::Other => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
