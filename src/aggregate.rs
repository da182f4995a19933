// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the expense and budget collections.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! read. Percentages divide by a limit or total that may be zero; those cases
//! yield zero instead of failing. Sums saturate rather than overflow.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    Budget, BudgetStatus, Category, CategoryShare, CategoryTotal, Expense, SpendingSummary,
    TrendBucket,
};

pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_TREND_BUCKETS: usize = 14;

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `100 * part / whole`, or zero when `whole` is not positive.
/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        part.checked_div(whole)
            .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

/// One status per category, in `Category::ALL` order, for the calendar month of `today`.
/// Categories without a budget get a zero limit and a zero percentage.
pub fn compute_budget_statuses(
    expenses: &[Expense],
    budgets: &[Budget],
    today: NaiveDate,
) -> Vec<BudgetStatus> {
    let mut spent_by_cat: BTreeMap<Category, Decimal> = BTreeMap::new();
    for e in expenses.iter().filter(|e| same_month(e.date, today)) {
        let spent = spent_by_cat.entry(e.category).or_insert(Decimal::ZERO);
        *spent = spent.saturating_add(e.amount);
    }

    Category::ALL
        .into_iter()
        .map(|category| {
            let limit = budgets
                .iter()
                .find(|b| b.category == category)
                .map(|b| b.limit)
                .unwrap_or(Decimal::ZERO);
            let spent = spent_by_cat
                .get(&category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            BudgetStatus {
                category,
                limit,
                spent,
                remaining: limit.saturating_sub(spent),
                percentage: percent_of(spent, limit),
            }
        })
        .collect()
}

/// Statuses that actually carry a budget; the rest mean "no budget".
pub fn active_budgets(statuses: &[BudgetStatus]) -> Vec<BudgetStatus> {
    statuses
        .iter()
        .filter(|s| s.limit > Decimal::ZERO)
        .cloned()
        .collect()
}

/// Totals per category over the full history, in first-seen order.
pub fn compute_category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for e in expenses {
        match out.iter_mut().find(|t| t.category == e.category) {
            Some(t) => t.amount = t.amount.saturating_add(e.amount),
            None => out.push(CategoryTotal {
                category: e.category,
                amount: e.amount,
            }),
        }
    }
    out
}

/// Category totals, largest first, each with its share of total spending.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
    let total = total_spent(expenses);
    let mut shares: Vec<CategoryShare> = compute_category_totals(expenses)
        .into_iter()
        .map(|t| CategoryShare {
            category: t.category,
            amount: t.amount,
            percentage: percent_of(t.amount, total),
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares
}

/// Daily totals for dates on or after `today - window_days`, ascending by date,
/// keeping only the most recent `max_buckets` days that have spending.
pub fn compute_daily_trend(
    expenses: &[Expense],
    today: NaiveDate,
    window_days: u32,
    max_buckets: usize,
) -> Vec<TrendBucket> {
    let cutoff = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in expenses.iter().filter(|e| e.date >= cutoff) {
        let day = by_day.entry(e.date).or_insert(Decimal::ZERO);
        *day = day.saturating_add(e.amount);
    }

    let skip = by_day.len().saturating_sub(max_buckets);
    by_day
        .into_iter()
        .skip(skip)
        .map(|(date, amount)| TrendBucket { date, amount })
        .collect()
}

pub fn total_spent(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
}

pub fn summarize(expenses: &[Expense]) -> SpendingSummary {
    let total = total_spent(expenses);
    let count = expenses.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    };
    SpendingSummary {
        total,
        count,
        average,
    }
}

/// Newest first: date descending, then creation time descending.
pub fn sort_for_display(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// `None` means all categories.
pub fn filter_by_category(expenses: &[Expense], category: Option<Category>) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .cloned()
        .collect()
}
