//! Budget thresholds
//!
//! Fixed per-category reference amounts plus daily and monthly limits. The
//! configuration is a plain value held by the tracker, so alternate
//! thresholds can be supplied without touching any global state.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Per-category reference amounts used for budget percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReferences {
    #[serde(default = "default_food")]
    pub food: i64,
    #[serde(default = "default_clothes")]
    pub clothes: i64,
    #[serde(default = "default_fun")]
    pub fun: i64,
}

fn default_food() -> i64 {
    100
}

fn default_clothes() -> i64 {
    50
}

fn default_fun() -> i64 {
    80
}

impl Default for CategoryReferences {
    fn default() -> Self {
        Self {
            food: default_food(),
            clothes: default_clothes(),
            fun: default_fun(),
        }
    }
}

/// Budget configuration for an expense tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Reference amounts for the budgeted categories
    #[serde(default)]
    pub references: CategoryReferences,

    /// Daily totals must stay strictly below this
    #[serde(default = "default_daily_limit")]
    pub daily_limit: i64,

    /// Monthly totals must stay strictly below this
    #[serde(default = "default_monthly_limit")]
    pub monthly_limit: i64,
}

fn default_daily_limit() -> i64 {
    30
}

fn default_monthly_limit() -> i64 {
    30 * 30
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            references: CategoryReferences::default(),
            daily_limit: default_daily_limit(),
            monthly_limit: default_monthly_limit(),
        }
    }
}

impl BudgetConfig {
    /// Reference amount for a category; `Other` has none
    pub fn reference_for(&self, category: Category) -> Option<i64> {
        match category {
            Category::Food => Some(self.references.food),
            Category::Clothes => Some(self.references.clothes),
            Category::Fun => Some(self.references.fun),
            Category::Other => None,
        }
    }

    /// Check the configuration can be used for percentage calculations
    pub fn validate(&self) -> Result<(), String> {
        for category in [Category::Food, Category::Clothes, Category::Fun] {
            if let Some(reference) = self.reference_for(category) {
                if reference <= 0 {
                    return Err(format!(
                        "reference amount for '{}' must be positive, got {}",
                        category, reference
                    ));
                }
            }
        }
        Ok(())
    }
}
