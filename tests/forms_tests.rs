// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::error::ValidationError;
use fintrack::forms::{BudgetForm, ExpenseForm, DEFAULT_DESCRIPTION};
use fintrack::models::{Category, Expense};
use fintrack::store::Command;
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
}

fn filled(amount: &str) -> ExpenseForm {
    let mut form = ExpenseForm::blank(today());
    form.amount = amount.to_string();
    form
}

#[test]
fn blank_form_defaults_to_food_today() {
    let form = ExpenseForm::blank(today());
    assert_eq!(form.category, Category::Food);
    assert_eq!(form.date, "2024-06-20");
    assert!(form.amount.is_empty());
}

#[test]
fn non_numeric_amount_is_rejected() {
    assert_eq!(
        filled("abc").submit_new(1).unwrap_err(),
        ValidationError::InvalidAmount("abc".into())
    );
    assert!(matches!(
        filled("").submit_new(1),
        Err(ValidationError::InvalidAmount(_))
    ));
}

#[test]
fn zero_and_negative_amounts_are_rejected() {
    assert!(matches!(
        filled("0").submit_new(1),
        Err(ValidationError::NonPositiveAmount(_))
    ));
    assert!(matches!(
        filled("-4.20").submit_new(1),
        Err(ValidationError::NonPositiveAmount(_))
    ));
}

#[test]
fn bad_date_is_rejected() {
    let mut form = filled("10");
    form.date = "2024-13-01".into();
    assert_eq!(
        form.submit_new(1).unwrap_err(),
        ValidationError::InvalidDate("2024-13-01".into())
    );
}

#[test]
fn new_expense_gets_id_and_default_description() {
    let mut form = filled(" 19.99 ");
    form.category = Category::Entertainment;
    form.description = "   ".into();
    let Command::AddExpense(e) = form.submit_new(1_718_000_000_123).unwrap() else {
        panic!("expected AddExpense");
    };
    assert_eq!(e.amount, "19.99".parse::<Decimal>().unwrap());
    assert_eq!(e.category, Category::Entertainment);
    assert_eq!(e.description, DEFAULT_DESCRIPTION);
    assert_eq!(e.date, today());
    assert_eq!(e.created_at, 1_718_000_000_123);

    let (prefix, suffix) = e.id.split_once('-').unwrap();
    assert_eq!(prefix, "1718000000123");
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn description_is_trimmed() {
    let mut form = filled("3");
    form.description = "  Coffee  ".into();
    let e = form.build_new(1).unwrap();
    assert_eq!(e.description, "Coffee");
}

#[test]
fn edit_keeps_identity_and_creation_time() {
    let original = Expense {
        id: "42-abcdefghi".into(),
        amount: Decimal::from(10),
        category: Category::Food,
        description: "Lunch".into(),
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        created_at: 42,
    };
    let mut form = ExpenseForm::from_expense(&original);
    assert_eq!(form.amount, "10");
    assert_eq!(form.date, "2024-06-01");

    form.amount = "12".into();
    form.category = Category::Shopping;
    let Command::UpdateExpense(e) = form.submit_edit(&original).unwrap() else {
        panic!("expected UpdateExpense");
    };
    assert_eq!(e.id, original.id);
    assert_eq!(e.created_at, 42);
    assert_eq!(e.amount, Decimal::from(12));
    assert_eq!(e.category, Category::Shopping);
    assert_eq!(e.description, "Lunch");
}

#[test]
fn invalid_edit_produces_no_command() {
    let original = filled("5").build_new(1).unwrap();
    let mut form = ExpenseForm::from_expense(&original);
    form.amount = "-1".into();
    assert!(form.submit_edit(&original).is_err());
}

#[test]
fn budget_form_requires_positive_limit() {
    let ok = BudgetForm {
        category: Category::Bills,
        limit: "250".into(),
    };
    assert_eq!(
        ok.submit().unwrap(),
        Command::SetBudget {
            category: Category::Bills,
            limit: Decimal::from(250)
        }
    );

    for bad in ["0", "-10", "lots"] {
        let form = BudgetForm {
            category: Category::Bills,
            limit: bad.into(),
        };
        assert!(form.submit().is_err(), "accepted {}", bad);
    }
}

#[test]
fn category_parses_case_insensitively() {
    assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
    assert_eq!(" HEALTH ".parse::<Category>().unwrap(), Category::Health);
    assert_eq!(
        "groceries".parse::<Category>().unwrap_err(),
        ValidationError::UnknownCategory("groceries".into())
    );
}

#[test]
fn amounts_above_one_trillion_are_rejected() {
    assert!(filled("1000000000000").submit_new(1).is_ok());
    assert_eq!(
        filled("1000000000000.01").submit_new(1).unwrap_err(),
        ValidationError::AmountTooLarge("1000000000000.01".into())
    );
    assert!(matches!(
        filled("79228162514264337593543950335").submit_new(1),
        Err(ValidationError::AmountTooLarge(_))
    ));

    let huge_limit = BudgetForm {
        category: Category::Food,
        limit: "1000000000000000000000000000".into(),
    };
    assert!(matches!(
        huge_limit.submit(),
        Err(ValidationError::AmountTooLarge(_))
    ));
}
