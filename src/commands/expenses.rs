// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{filter_by_category, sort_for_display};
use crate::forms::ExpenseForm;
use crate::models::{Category, Expense};
use crate::store::{Command, RecordStore, SqliteKv};
use crate::utils::{
    category_cell, fmt_date, fmt_money, get_currency, maybe_print_json, now_millis, today,
};
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Overlays whichever fields were given on the command line.
fn fill_form(mut form: ExpenseForm, sub: &clap::ArgMatches) -> Result<ExpenseForm> {
    if let Some(a) = sub.get_one::<String>("amount") {
        form.amount = a.clone();
    }
    if let Some(c) = sub.get_one::<String>("category") {
        form.category = c.parse::<Category>()?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        form.description = d.clone();
    }
    if let Some(d) = sub.get_one::<String>("date") {
        form.date = d.clone();
    }
    Ok(form)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = fill_form(ExpenseForm::blank(today()), sub)?;
    let e = form.build_new(now_millis())?;
    let summary = added_message(&e, &get_currency(conn)?);
    RecordStore::new(SqliteKv::new(conn)).apply(Command::AddExpense(e))?;
    println!("{}", summary);
    Ok(())
}

/// Confirmation shown after an expense is stored.
pub fn added_message(e: &Expense, ccy: &str) -> String {
    format!(
        "Expense added: {} {} on {} ({})",
        fmt_money(&e.amount, ccy),
        e.category.label(),
        fmt_date(e.date),
        e.id
    )
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut store = RecordStore::new(SqliteKv::new(conn));
    let Some(existing) = store.find_expense(id)? else {
        println!("No expense with id '{}'", id);
        return Ok(());
    };
    let form = fill_form(ExpenseForm::from_expense(&existing), sub)?;
    let cmd = form.submit_edit(&existing)?;
    store.apply(cmd)?;
    println!("Expense updated: {}", id);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut store = RecordStore::new(SqliteKv::new(conn));
    if store.delete_expense(id)? {
        println!("Expense deleted: {}", id);
    } else {
        println!("No expense with id '{}'", id);
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let store = RecordStore::new(SqliteKv::new(conn));
    let Some(e) = store.find_expense(id)? else {
        println!("No expense with id '{}'", id);
        return Ok(());
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &e)? {
        return Ok(());
    }
    let ccy = get_currency(conn)?;
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.add_row(vec![Cell::new("ID"), Cell::new(&e.id)]);
    t.add_row(vec![Cell::new("Amount"), Cell::new(fmt_money(&e.amount, &ccy))]);
    t.add_row(vec![Cell::new("Category"), category_cell(e.category)]);
    t.add_row(vec![Cell::new("Description"), Cell::new(&e.description)]);
    t.add_row(vec![Cell::new("Date"), Cell::new(fmt_date(e.date))]);
    println!("{}", t);
    Ok(())
}

/// Stored expenses after the list filters, in display order.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let store = RecordStore::new(SqliteKv::new(conn));
    let category = sub
        .get_one::<String>("category")
        .map(|c| c.parse::<Category>())
        .transpose()?;
    let mut rows = filter_by_category(&store.expenses()?, category);
    sort_for_display(&mut rows);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }

    if data.is_empty() {
        let store = RecordStore::new(SqliteKv::new(conn));
        if store.expenses()?.is_empty() {
            println!("No expenses yet. Start tracking your spending by adding your first expense.");
        } else {
            println!("No expenses in this category.");
        }
        return Ok(());
    }

    let ccy = get_currency(conn)?;
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(["Date", "Category", "Description", "Amount", "ID"]);
    for e in &data {
        t.add_row(vec![
            Cell::new(fmt_date(e.date)),
            category_cell(e.category),
            Cell::new(&e.description),
            Cell::new(fmt_money(&e.amount, &ccy)),
            Cell::new(&e.id),
        ]);
    }
    println!("{}", t);
    println!(
        "{} {}",
        data.len(),
        if data.len() == 1 { "expense" } else { "expenses" }
    );
    Ok(())
}
