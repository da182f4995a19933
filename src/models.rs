// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The fixed set of spending classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Health,
        Category::Other,
    ];

    /// Stable key used in storage and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "🍴",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛒",
            Category::Bills => "⚡",
            Category::Health => "❤",
            Category::Other => "…",
        }
    }

    /// Chart colour as sRGB.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Category::Food => (72, 170, 96),
            Category::Transport => (66, 125, 199),
            Category::Entertainment => (170, 110, 220),
            Category::Shopping => (221, 96, 84),
            Category::Bills => (214, 171, 60),
            Category::Health => (222, 82, 124),
            Category::Other => (110, 118, 135),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    /// Epoch milliseconds; only breaks ties when sorting.
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: Category,
    pub limit: Decimal,
}

/// A budget joined with the current month's spending. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub category: Category,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

impl BudgetStatus {
    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::from_percentage(self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetHealth {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetHealth {
    pub fn from_percentage(pct: Decimal) -> Self {
        if pct >= Decimal::ONE_HUNDRED {
            BudgetHealth::OverBudget
        } else if pct >= Decimal::from(70) {
            BudgetHealth::Warning
        } else {
            BudgetHealth::OnTrack
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetHealth::OnTrack => "On Track",
            BudgetHealth::Warning => "Warning",
            BudgetHealth::OverBudget => "Over Budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: Decimal,
}

/// Category total with its share of all spending, for breakdown views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// One bar of the daily spending chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendBucket {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
}
