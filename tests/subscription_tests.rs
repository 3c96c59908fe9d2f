// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketclip::engine::ProfileEngine;
use pocketclip::models::{BillingCycle, NewSubscription, SubscriptionPatch};
use pocketclip::store::MemoryStore;
use rust_decimal::Decimal;

fn engine() -> ProfileEngine<MemoryStore> {
    ProfileEngine::load(MemoryStore::new(), "u1").unwrap()
}

fn sub(name: &str, last_used: Option<NaiveDate>) -> NewSubscription {
    NewSubscription {
        name: name.into(),
        amount: Decimal::from(12),
        category: "streaming".into(),
        billing_cycle: BillingCycle::Monthly,
        next_billing_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        last_used,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn forgotten_after_31_days_not_29() {
    let mut e = engine();
    let today = date(2025, 6, 30);
    e.add_subscription(sub("Stale", Some(date(2025, 5, 30)))).unwrap(); // 31 days ago
    e.add_subscription(sub("Recent", Some(date(2025, 6, 1)))).unwrap(); // 29 days ago

    let forgotten = e.forgotten_subscriptions(today);
    let names: Vec<&str> = forgotten.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Stale"]);
}

#[test]
fn never_used_counts_as_forgotten() {
    let mut e = engine();
    e.add_subscription(sub("Untouched", None)).unwrap();
    assert_eq!(e.forgotten_subscriptions(date(2025, 6, 30)).len(), 1);
}

#[test]
fn inactive_subscriptions_are_never_forgotten() {
    let mut e = engine();
    e.add_subscription(sub("Cancelled", None)).unwrap();
    let id = e.profile().subscriptions[0].id.clone();
    e.update_subscription(
        &id,
        SubscriptionPatch {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(e.forgotten_subscriptions(date(2025, 6, 30)).is_empty());
}

#[test]
fn recording_usage_clears_forgotten_status() {
    let mut e = engine();
    e.add_subscription(sub("Gym", Some(date(2025, 4, 1)))).unwrap();
    let id = e.profile().subscriptions[0].id.clone();
    let today = date(2025, 6, 30);
    assert_eq!(e.forgotten_subscriptions(today).len(), 1);

    e.update_subscription(
        &id,
        SubscriptionPatch {
            last_used: Some(today),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(e.forgotten_subscriptions(today).is_empty());
}

#[test]
fn delete_subscription_removes_it() {
    let mut e = engine();
    e.add_subscription(sub("Gone", None)).unwrap();
    let id = e.profile().subscriptions[0].id.clone();
    e.delete_subscription(&id).unwrap();
    assert!(e.profile().subscriptions.is_empty());
}
