// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{active_budgets, compute_budget_statuses};
use crate::forms::BudgetForm;
use crate::models::{BudgetStatus, Category};
use crate::store::{Command, RecordStore, SqliteKv};
use crate::utils::{
    bar, category_cell, fmt_money, fmt_percent, get_currency, maybe_print_json, parse_date, today,
};
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::Connection;
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 20;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().parse::<Category>()?;
    let form = BudgetForm {
        category,
        limit: sub.get_one::<String>("limit").unwrap().clone(),
    };
    let limit = form.parsed_limit()?;
    RecordStore::new(SqliteKv::new(conn)).apply(Command::SetBudget { category, limit })?;
    println!("{}", set_message(category, &limit, &get_currency(conn)?));
    Ok(())
}

/// Confirmation shown after a limit is stored.
pub fn set_message(category: Category, limit: &Decimal, ccy: &str) -> String {
    format!(
        "Budget set for {} = {} / month",
        category.label(),
        fmt_money(limit, ccy)
    )
}

/// Budget statuses for the month of `--as-of` (default today).
pub fn query_statuses(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<BudgetStatus>> {
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let store = RecordStore::new(SqliteKv::new(conn));
    let statuses = compute_budget_statuses(&store.expenses()?, &store.budgets()?, as_of);
    if sub.get_flag("all") {
        Ok(statuses)
    } else {
        Ok(active_budgets(&statuses))
    }
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_statuses(conn, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!(
            "No budgets set. Set monthly budget limits for your spending categories to track your progress."
        );
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header([
        "Category", "Limit", "Spent", "Remaining", "Used", "", "Status",
    ]);
    for s in &data {
        let status = if s.limit > Decimal::ZERO {
            s.health().label()
        } else {
            "No budget"
        };
        t.add_row(vec![
            category_cell(s.category),
            Cell::new(fmt_money(&s.limit, &ccy)),
            Cell::new(fmt_money(&s.spent, &ccy)),
            Cell::new(fmt_money(&s.remaining, &ccy)),
            Cell::new(fmt_percent(&s.percentage, 0)),
            Cell::new(bar(s.spent, s.limit, BAR_WIDTH)),
            Cell::new(status),
        ]);
    }
    println!("{}", t);
    Ok(())
}
