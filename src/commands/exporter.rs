// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{RecordStore, SqliteKv};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(conn, sub),
        _ => Ok(()),
    }
}

/// Writes expenses in stored (insertion) order.
fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let expenses = RecordStore::new(SqliteKv::new(conn)).expenses()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "category",
                "amount",
                "description",
                "created_at",
            ])?;
            for e in &expenses {
                wtr.write_record([
                    e.id.clone(),
                    e.date.to_string(),
                    e.category.to_string(),
                    e.amount.to_string(),
                    e.description.clone(),
                    e.created_at.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&expenses)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::info!(count = expenses.len(), %out, "exported expenses");
    println!("Exported {} expenses to {}", expenses.len(), out);
    Ok(())
}
