// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketclip::engine::ProfileEngine;
use pocketclip::models::{
    new_id, ExpenseItem, FixedExpenseCategory, NewExpenseItem, NewMonthlyExpense, ProfilePatch,
    VariableExpenseCategory,
};
use pocketclip::store::MemoryStore;
use rust_decimal::Decimal;

fn engine() -> ProfileEngine<MemoryStore> {
    ProfileEngine::load(MemoryStore::new(), "u1").unwrap()
}

fn item(name: &str, amount: u32) -> ExpenseItem {
    ExpenseItem {
        id: new_id(),
        name: name.into(),
        amount: Decimal::from(amount),
        category: FixedExpenseCategory::Other,
    }
}

#[test]
fn set_profile_recomputes_fixed_expenses_with_breakdown() {
    let mut e = engine();
    e.set_profile(ProfilePatch {
        monthly_income: Some(Decimal::from(4000)),
        expense_breakdown: Some(vec![item("Rent", 1200), item("Internet", 60)]),
        ..Default::default()
    })
    .unwrap();
    let p = e.profile();
    assert_eq!(p.fixed_expenses, Decimal::from(1260));
    assert_eq!(p.monthly_income, Decimal::from(4000));
}

#[test]
fn set_profile_without_breakdown_leaves_fixed_expenses_alone() {
    let mut e = engine();
    e.set_profile(ProfilePatch {
        expense_breakdown: Some(vec![item("Rent", 1200)]),
        ..Default::default()
    })
    .unwrap();
    e.set_profile(ProfilePatch {
        name: Some("Ada".into()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(e.profile().fixed_expenses, Decimal::from(1200));
    assert_eq!(e.profile().name, "Ada");
}

#[test]
fn expense_item_add_remove_keeps_invariant() {
    let mut e = engine();
    e.add_expense_item(NewExpenseItem {
        name: "Rent".into(),
        amount: Decimal::from(1200),
        category: FixedExpenseCategory::Rent,
    })
    .unwrap();
    e.add_expense_item(NewExpenseItem {
        name: "Insurance".into(),
        amount: Decimal::from(90),
        category: FixedExpenseCategory::Insurance,
    })
    .unwrap();
    assert_eq!(e.profile().fixed_expenses, Decimal::from(1290));

    let id = e.profile().expense_breakdown[1].id.clone();
    e.remove_expense_item(&id).unwrap();
    assert_eq!(e.profile().fixed_expenses, Decimal::from(1200));

    let p = e.profile();
    let total: Decimal = p.expense_breakdown.iter().map(|i| i.amount).sum();
    assert_eq!(p.fixed_expenses, total);
}

#[test]
fn monthly_expense_log_add_and_remove() {
    let mut e = engine();
    e.add_monthly_expense(NewMonthlyExpense {
        name: "Groceries".into(),
        amount: Decimal::from(80),
        category: VariableExpenseCategory::Food,
        date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
    })
    .unwrap();
    assert_eq!(e.profile().monthly_expenses.len(), 1);

    let id = e.profile().monthly_expenses[0].id.clone();
    e.remove_monthly_expense(&id).unwrap();
    assert!(e.profile().monthly_expenses.is_empty());

    // Removing again is a soft no-op.
    e.remove_monthly_expense(&id).unwrap();
    assert!(e.profile().monthly_expenses.is_empty());
}

#[test]
fn reset_persists_a_fresh_profile_with_new_id() {
    let mut e = engine();
    e.set_profile(ProfilePatch {
        name: Some("Ada".into()),
        monthly_income: Some(Decimal::from(4000)),
        onboarding_complete: Some(true),
        ..Default::default()
    })
    .unwrap();
    let old_id = e.profile().id.clone();

    e.reset_profile().unwrap();
    let p = e.profile();
    assert_ne!(p.id, old_id);
    assert!(!p.onboarding_complete);
    assert!(p.goals.is_empty());
    assert_eq!(p.monthly_income, Decimal::ZERO);
    assert!(p.name.is_empty());
}

#[test]
fn mutations_survive_a_reload_through_the_store() {
    let store = MemoryStore::new();
    let mut e = ProfileEngine::load(store, "u1").unwrap();
    e.set_profile(ProfilePatch {
        name: Some("Ada".into()),
        onboarding_complete: Some(true),
        ..Default::default()
    })
    .unwrap();
    let id = e.profile().id.clone();

    // A second engine over the same backend sees the committed state.
    let e2 = ProfileEngine::load(take_store(e), "u1").unwrap();
    assert_eq!(e2.profile().id, id);
    assert_eq!(e2.profile().name, "Ada");
    assert!(e2.profile().onboarding_complete);
}

fn take_store(e: ProfileEngine<MemoryStore>) -> MemoryStore {
    e.into_store()
}
