// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketclip::derived;
use pocketclip::models::{
    new_id, ExpenseItem, FixedExpenseCategory, MonthlyExpenseEntry, UserProfile,
    VariableExpenseCategory,
};
use rust_decimal::Decimal;

fn profile_with_income(income: u32, fixed: u32) -> UserProfile {
    let mut p = UserProfile::fresh();
    p.monthly_income = Decimal::from(income);
    p.savings_target_percentage = 20;
    if fixed > 0 {
        p.expense_breakdown.push(ExpenseItem {
            id: new_id(),
            name: "Rent".into(),
            amount: Decimal::from(fixed),
            category: FixedExpenseCategory::Rent,
        });
        p.fixed_expenses = Decimal::from(fixed);
    }
    p
}

fn expense(amount: u32, date: &str) -> MonthlyExpenseEntry {
    MonthlyExpenseEntry {
        id: new_id(),
        name: "Groceries".into(),
        amount: Decimal::from(amount),
        category: VariableExpenseCategory::Food,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[test]
fn month_window_includes_only_current_month() {
    let mut p = profile_with_income(4200, 1000);
    p.monthly_expenses.push(expense(200, "2024-02-05"));

    let feb = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    assert_eq!(feb.spent, Decimal::from(1200));

    // Same profile a month later: the entry stays in the log but leaves the window.
    let mar = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert_eq!(mar.spent, Decimal::from(1000));
}

#[test]
fn savings_and_budget_arithmetic() {
    let mut p = profile_with_income(4200, 1000);
    p.monthly_expenses.push(expense(200, "2024-02-05"));
    let d = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());

    assert_eq!(d.target_savings_amount, Decimal::from(840));
    assert_eq!(d.available_for_spending, Decimal::from(2360));
    assert_eq!(d.saved, Decimal::from(3000));
    assert_eq!(d.actual_savings_rate, 71); // round(3000/4200*100)
    assert_eq!(d.days_in_month, 29); // leap February
    assert_eq!(d.days_left, 19);
    // remaining 4200-1200-840 = 2160 over 19 days
    assert_eq!(d.daily_budget, Decimal::from(114));
}

#[test]
fn zero_income_never_divides() {
    let mut p = profile_with_income(0, 0);
    p.monthly_expenses.push(expense(50, "2024-02-05"));
    let d = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());

    assert_eq!(d.actual_savings_rate, 0);
    assert_eq!(d.target_savings_amount, Decimal::ZERO);
    assert_eq!(d.saved, Decimal::ZERO);
    assert_eq!(d.daily_budget, Decimal::ZERO);
}

#[test]
fn last_day_of_month_zeroes_daily_budget() {
    let p = profile_with_income(4200, 1000);
    let d = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(d.days_left, 0);
    assert_eq!(d.daily_budget, Decimal::ZERO);
}

#[test]
fn overspending_shows_in_spent_not_negative_saved() {
    let mut p = profile_with_income(1000, 800);
    p.monthly_expenses.push(expense(500, "2024-02-05"));
    let d = derived::compute(&p, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    assert_eq!(d.spent, Decimal::from(1300));
    assert_eq!(d.saved, Decimal::ZERO);
    assert_eq!(d.actual_savings_rate, 0);
}

#[test]
fn compute_is_pure() {
    let mut p = profile_with_income(4200, 1000);
    p.monthly_expenses.push(expense(200, "2024-02-05"));
    let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
    assert_eq!(derived::compute(&p, today), derived::compute(&p, today));
}
