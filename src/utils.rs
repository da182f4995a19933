// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::Category;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;
const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal, ValidationError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))
}

/// Largest accepted amount or limit: one trillion.
pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_UNITS)
}

/// A number strictly greater than zero and at most [`max_amount`], as required
/// for amounts and limits.
pub fn parse_positive_amount(s: &str) -> Result<Decimal, ValidationError> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(s.trim().to_string()));
    }
    if d > max_amount() {
        return Err(ValidationError::AmountTooLarge(s.trim().to_string()));
    }
    Ok(d)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// `<millis>-<9 base36 chars>`. Practically unique for one local user, not collision-proof.
pub fn generate_id(now_ms: i64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}", now_ms, suffix)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234.50` for USD, `EUR 1,234.50` for anything else.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    let rounded = d.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let symbol = if ccy.eq_ignore_ascii_case("USD") {
        "$".to_string()
    } else {
        format!("{} ", ccy)
    };
    format!("{}{}{}.{}", sign, symbol, group_thousands(int_part), frac)
}

pub fn fmt_percent(d: &Decimal, places: u32) -> String {
    format!("{:.*}%", places as usize, d.round_dp(places))
}

/// `Jun 1, 2024`
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// `Jun 1`
pub fn fmt_short_date(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

/// Horizontal bar of `width` cells filled in proportion to `value / max`, capped at full.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    let filled = if max > Decimal::ZERO && value > Decimal::ZERO {
        let ratio = value.checked_div(max).unwrap_or(Decimal::ONE).min(Decimal::ONE);
        let cells = (ratio * Decimal::from(width)).round();
        cells.to_usize().unwrap_or(width).min(width)
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn category_cell(c: Category) -> Cell {
    let (r, g, b) = c.rgb();
    Cell::new(format!("{} {}", c.icon(), c.label())).fg(Color::Rgb { r, g, b })
}

pub fn get_currency(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='currency'", [], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or_else(|| "USD".to_string()))
}

pub fn set_currency(conn: &Connection, ccy: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![ccy],
    )?;
    Ok(())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
