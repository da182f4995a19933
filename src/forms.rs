// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-progress user input and its validation.
//!
//! Forms hold raw text the way the user typed it. Submitting a form either
//! yields exactly one [`Command`] for the store or a [`ValidationError`], in
//! which case nothing is written.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{Category, Expense};
use crate::store::Command;
use crate::utils::{generate_id, parse_date, parse_positive_amount};

pub const DEFAULT_DESCRIPTION: &str = "No description";

pub fn normalize_description(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: Category,
    pub description: String,
    pub date: String,
}

impl ExpenseForm {
    /// Empty form: food, dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            category: Category::Food,
            description: String::new(),
            date: today.to_string(),
        }
    }

    /// Form pre-filled from an existing expense for editing.
    pub fn from_expense(e: &Expense) -> Self {
        Self {
            amount: e.amount.to_string(),
            category: e.category,
            description: e.description.clone(),
            date: e.date.to_string(),
        }
    }

    fn validated(&self) -> Result<(rust_decimal::Decimal, NaiveDate, String), ValidationError> {
        let amount = parse_positive_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        Ok((amount, date, normalize_description(&self.description)))
    }

    /// A new expense with a fresh id, created at `now_ms`.
    pub fn build_new(&self, now_ms: i64) -> Result<Expense, ValidationError> {
        let (amount, date, description) = self.validated()?;
        Ok(Expense {
            id: generate_id(now_ms),
            amount,
            category: self.category,
            description,
            date,
            created_at: now_ms,
        })
    }

    pub fn submit_new(&self, now_ms: i64) -> Result<Command, ValidationError> {
        self.build_new(now_ms).map(Command::AddExpense)
    }

    /// Keeps the original id and creation time.
    pub fn submit_edit(&self, original: &Expense) -> Result<Command, ValidationError> {
        let (amount, date, description) = self.validated()?;
        Ok(Command::UpdateExpense(Expense {
            id: original.id.clone(),
            amount,
            category: self.category,
            description,
            date,
            created_at: original.created_at,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: Category,
    pub limit: String,
}

impl BudgetForm {
    pub fn parsed_limit(&self) -> Result<rust_decimal::Decimal, ValidationError> {
        parse_positive_amount(&self.limit)
    }

    pub fn submit(&self) -> Result<Command, ValidationError> {
        Ok(Command::SetBudget {
            category: self.category,
            limit: self.parsed_limit()?,
        })
    }
}
