// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_currency, pretty_table, set_currency};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let ccy = get_currency(conn)?;
            println!("{}", pretty_table(&["Setting", "Value"], vec![vec!["currency".into(), ccy]]));
        }
        Some(("set-currency", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap().trim().to_uppercase();
            if ccy.len() != 3 || !ccy.chars().all(|c| c.is_ascii_alphabetic()) {
                bail!("Invalid currency code '{}', expected three letters like USD", ccy);
            }
            set_currency(conn, &ccy)?;
            println!("Display currency set to {}", ccy);
        }
        _ => {}
    }
    Ok(())
}
