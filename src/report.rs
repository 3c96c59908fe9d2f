// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    Currency, DerivedFinancials, MonthlyExpenseEntry, UserProfile, VariableExpenseCategory,
};
use crate::utils::in_month;
use rust_decimal::Decimal;
use serde::Serialize;

const CATEGORIES: [VariableExpenseCategory; 6] = [
    VariableExpenseCategory::Food,
    VariableExpenseCategory::Transport,
    VariableExpenseCategory::Entertainment,
    VariableExpenseCategory::Shopping,
    VariableExpenseCategory::Health,
    VariableExpenseCategory::Other,
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: VariableExpenseCategory,
    pub total: Decimal,
}

/// Data handed to external report renderers (PDF, JSON, CSV). The engine
/// only assembles this; rendering lives elsewhere.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub user_name: String,
    pub currency: Currency,
    pub year: i32,
    pub month: u32,
    pub monthly_income: Decimal,
    pub fixed_expenses: Decimal,
    pub savings_target_percentage: u32,
    pub derived: DerivedFinancials,
    pub expenses: Vec<MonthlyExpenseEntry>,
    pub category_totals: Vec<CategoryTotal>,
    pub total_variable_spent: Decimal,
}

impl MonthlyReport {
    pub fn build(
        profile: &UserProfile,
        derived: DerivedFinancials,
        year: i32,
        month: u32,
    ) -> Self {
        let expenses: Vec<MonthlyExpenseEntry> = profile
            .monthly_expenses
            .iter()
            .filter(|e| in_month(e.date, year, month))
            .cloned()
            .collect();
        let total_variable_spent: Decimal = expenses.iter().map(|e| e.amount).sum();
        let category_totals: Vec<CategoryTotal> = CATEGORIES
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: expenses
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .filter(|t| t.total > Decimal::ZERO)
            .collect();
        MonthlyReport {
            user_name: profile.name.clone(),
            currency: profile.currency,
            year,
            month,
            monthly_income: profile.monthly_income,
            fixed_expenses: profile.fixed_expenses,
            savings_target_percentage: profile.savings_target_percentage,
            derived,
            expenses,
            category_totals,
            total_variable_spent,
        }
    }
}
