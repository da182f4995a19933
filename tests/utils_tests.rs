// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::utils::{bar, fmt_date, fmt_money, fmt_percent, fmt_short_date};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn money_uses_fixed_two_decimal_format() {
    assert_eq!(fmt_money(&dec("0"), "USD"), "$0.00");
    assert_eq!(fmt_money(&dec("12.5"), "USD"), "$12.50");
    assert_eq!(fmt_money(&dec("1234567.891"), "USD"), "$1,234,567.89");
    assert_eq!(fmt_money(&dec("-20"), "USD"), "-$20.00");
    assert_eq!(fmt_money(&dec("999.999"), "EUR"), "EUR 1,000.00");
}

#[test]
fn dates_use_short_month_names() {
    let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(fmt_date(d), "Jun 1, 2024");
    assert_eq!(fmt_short_date(d), "Jun 1");
}

#[test]
fn percent_formatting() {
    assert_eq!(fmt_percent(&dec("80"), 0), "80%");
    assert_eq!(fmt_percent(&dec("33.3333"), 1), "33.3%");
}

#[test]
fn bar_is_capped_and_handles_zero_max() {
    assert_eq!(bar(dec("5"), dec("10"), 4), "██░░");
    assert_eq!(bar(dec("50"), dec("10"), 4), "████");
    assert_eq!(bar(dec("5"), Decimal::ZERO, 4), "░░░░");
}
