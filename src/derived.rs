// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DerivedFinancials, UserProfile};
use crate::utils::{days_in_month, in_month, round_whole};
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Derived financials for `profile` as of `today`. Pure: same profile and
/// date always yield the same output. Zero-income and zero-days-left
/// denominators produce 0 instead of an error.
pub fn compute(profile: &UserProfile, today: NaiveDate) -> DerivedFinancials {
    let days_in_month = days_in_month(today);
    let days_left = days_in_month - today.day();

    let income = profile.monthly_income;
    let fixed = profile.fixed_expenses;
    let pct = Decimal::from(profile.savings_target_percentage);

    let target_savings_amount = round_whole(income * pct / Decimal::from(100));
    let available_for_spending = income - fixed - target_savings_amount;

    // Only entries dated in the current calendar month count toward spent;
    // older entries stay in the log but fall out of the window.
    let total_variable_spent: Decimal = profile
        .monthly_expenses
        .iter()
        .filter(|e| in_month(e.date, today.year(), today.month()))
        .map(|e| e.amount)
        .sum();

    let spent = fixed + total_variable_spent;
    let saved = (income - spent).max(Decimal::ZERO);

    let actual_savings_rate = if income > Decimal::ZERO {
        round_whole(saved / income * Decimal::from(100))
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    let remaining_budget = income - spent - target_savings_amount;
    let daily_budget = if days_left > 0 {
        round_whole(remaining_budget / Decimal::from(days_left)).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    DerivedFinancials {
        available_for_spending,
        target_savings_amount,
        actual_savings_rate,
        spent,
        saved,
        days_in_month,
        days_left,
        daily_budget,
    }
}
