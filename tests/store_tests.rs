// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketclip::engine::ProfileEngine;
use pocketclip::models::{NewGoal, ProfilePatch, UserProfile};
use pocketclip::store::{load_profile, merge, MemoryStore, ProfileStore, SqliteStore, StoreError};
use rust_decimal::Decimal;

#[test]
fn absent_key_yields_fresh_default() {
    let store = MemoryStore::new();
    let p = load_profile(&store, "nobody").unwrap();
    assert!(!p.onboarding_complete);
    assert!(p.goals.is_empty());
    assert!(!p.id.is_empty());
}

#[test]
fn migration_fills_missing_fields_and_keeps_stored_values() {
    // An old-shape document from before budgets and subscriptions existed.
    let store = MemoryStore::new();
    store.put_raw(
        "u1",
        r#"{
            "id": "legacy-id",
            "name": "Ada",
            "onboardingComplete": true,
            "monthlyIncome": 3000,
            "fixedExpenses": 900,
            "savingsTargetPercentage": 25
        }"#,
    );
    let p = load_profile(&store, "u1").unwrap();
    assert_eq!(p.id, "legacy-id");
    assert_eq!(p.name, "Ada");
    assert!(p.onboarding_complete);
    assert_eq!(p.monthly_income, Decimal::from(3000));
    assert_eq!(p.savings_target_percentage, 25);
    // Fields the old shape lacked get defaults, never an error.
    assert!(p.budget_limits.is_empty());
    assert!(p.subscriptions.is_empty());
    assert!(p.bills.is_empty());
}

#[test]
fn malformed_field_falls_back_to_default() {
    let store = MemoryStore::new();
    store.put_raw(
        "u1",
        r#"{"id": "x", "monthlyIncome": "not-a-number", "name": "Ada"}"#,
    );
    let p = load_profile(&store, "u1").unwrap();
    assert_eq!(p.id, "x");
    assert_eq!(p.name, "Ada");
    assert_eq!(p.monthly_income, Decimal::ZERO);
}

#[test]
fn merge_of_non_object_document_is_a_fresh_profile() {
    let p = merge(serde_json::json!([1, 2, 3]));
    assert!(!p.onboarding_complete);
    assert!(p.goals.is_empty());
}

#[test]
fn unknown_stored_keys_survive_a_resave() {
    // A document written by a newer client carries fields this build does
    // not model. They must ride along through load, mutation, and save.
    let store = MemoryStore::new();
    store.put_raw("u1", r#"{"id": "x", "someFutureField": {"a": 1}}"#);

    let mut e = ProfileEngine::load(store, "u1").unwrap();
    assert_eq!(e.profile().id, "x");
    e.set_profile(ProfilePatch {
        name: Some("Ada".into()),
        ..Default::default()
    })
    .unwrap();

    let doc = e.store().read("u1").unwrap().unwrap();
    assert_eq!(doc["someFutureField"]["a"], 1);
    assert_eq!(doc["name"], "Ada");
}

#[test]
fn failed_write_surfaces_and_leaves_state_untouched() {
    let mut e = ProfileEngine::load(MemoryStore::new(), "u1").unwrap();
    e.add_goal(NewGoal {
        name: "Emergency fund".into(),
        target_amount: Decimal::from(1000),
        current_amount: Decimal::ZERO,
        deadline: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        category: "safety".into(),
    })
    .unwrap();

    e.store().set_fail_writes(true);
    let gid = e.profile().goals[0].id.clone();
    let err = e.delete_goal(&gid).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    // The in-memory profile still holds the goal; nothing was half-applied.
    assert_eq!(e.profile().goals.len(), 1);

    e.store().set_fail_writes(false);
    let id = e.profile().goals[0].id.clone();
    e.delete_goal(&id).unwrap();
    assert!(e.profile().goals.is_empty());
}

#[test]
fn sqlite_store_roundtrips_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.sqlite");
    let mut conn = rusqlite::Connection::open(&path).unwrap();
    pocketclip::db::init_schema(&mut conn).unwrap();
    let store = SqliteStore::new(conn);

    let mut p = UserProfile::fresh();
    p.name = "Ada".into();
    p.monthly_income = Decimal::from(3000);
    store.write("u1", &p).unwrap();

    // Reopen and read back through the migration path.
    let conn = rusqlite::Connection::open(&path).unwrap();
    let store = SqliteStore::new(conn);
    let loaded = load_profile(&store, "u1").unwrap();
    assert_eq!(loaded.id, p.id);
    assert_eq!(loaded.name, "Ada");
    assert_eq!(loaded.monthly_income, Decimal::from(3000));

    // Overwrites replace the document for the key.
    let mut p2 = loaded.clone();
    p2.name = "Grace".into();
    store.write("u1", &p2).unwrap();
    assert_eq!(load_profile(&store, "u1").unwrap().name, "Grace");
}
