// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    category_breakdown, compute_daily_trend, summarize, DEFAULT_TREND_BUCKETS,
    DEFAULT_TREND_WINDOW_DAYS,
};
use crate::models::{CategoryShare, SpendingSummary, TrendBucket};
use crate::store::{RecordStore, SqliteKv};
use crate::utils::{
    bar, category_cell, fmt_money, fmt_percent, fmt_short_date, get_currency, parse_date,
    pretty_table, today,
};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Serialize)]
pub struct TrendsReport {
    pub as_of: NaiveDate,
    pub summary: SpendingSummary,
    pub categories: Vec<CategoryShare>,
    pub daily: Vec<TrendBucket>,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let report = build_report(conn, m)?;
    if m.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if report.summary.count == 0 {
        println!("No trends data. Add some expenses to see your spending trends and category breakdown.");
        return Ok(());
    }
    let ccy = get_currency(conn)?;

    println!(
        "{}",
        pretty_table(
            &["Total Spent", "Total Expenses", "Average Expense"],
            vec![vec![
                fmt_money(&report.summary.total, &ccy),
                report.summary.count.to_string(),
                fmt_money(&report.summary.average, &ccy),
            ]],
        )
    );

    let mut cats = Table::new();
    cats.load_preset(UTF8_FULL);
    cats.set_header(["Category", "Share", "Spent"]);
    for c in &report.categories {
        cats.add_row(vec![
            category_cell(c.category),
            Cell::new(fmt_percent(&c.percentage, 1)),
            Cell::new(fmt_money(&c.amount, &ccy)),
        ]);
    }
    println!("Spending by category\n{}", cats);

    if report.daily.is_empty() {
        println!("No spending in the trailing window.");
        return Ok(());
    }
    let peak = report
        .daily
        .iter()
        .map(|b| b.amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    let rows = report
        .daily
        .iter()
        .map(|b| {
            vec![
                fmt_short_date(b.date),
                fmt_money(&b.amount, &ccy),
                bar(b.amount, peak, BAR_WIDTH),
            ]
        })
        .collect();
    println!(
        "Daily spending (last {} days with spending)\n{}",
        report.daily.len(),
        pretty_table(&["Date", "Spent", ""], rows)
    );
    Ok(())
}

pub fn build_report(conn: &Connection, m: &clap::ArgMatches) -> Result<TrendsReport> {
    let as_of = match m.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let window = m
        .get_one::<u32>("window-days")
        .copied()
        .unwrap_or(DEFAULT_TREND_WINDOW_DAYS);
    let buckets = m
        .get_one::<usize>("max-buckets")
        .copied()
        .unwrap_or(DEFAULT_TREND_BUCKETS);

    let expenses = RecordStore::new(SqliteKv::new(conn)).expenses()?;
    Ok(TrendsReport {
        as_of,
        summary: summarize(&expenses),
        categories: category_breakdown(&expenses),
        daily: compute_daily_trend(&expenses, as_of, window, buckets),
    })
}
