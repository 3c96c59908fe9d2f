// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketclip::engine::ProfileEngine;
use pocketclip::models::{BillPatch, NewBill};
use pocketclip::store::MemoryStore;
use rust_decimal::Decimal;

fn engine() -> ProfileEngine<MemoryStore> {
    ProfileEngine::load(MemoryStore::new(), "u1").unwrap()
}

fn bill(name: &str, due_date: u32, reminder_days: u32) -> NewBill {
    NewBill {
        name: name.into(),
        amount: Decimal::from(50),
        category: "utilities".into(),
        due_date,
        is_recurring: true,
        reminder_days,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mark_paid_sets_flag_and_date() {
    let mut e = engine();
    e.add_bill(bill("Power", 15, 3)).unwrap();
    let id = e.profile().bills[0].id.clone();

    let today = date(2025, 1, 14);
    e.mark_bill_paid(&id, today).unwrap();
    let b = &e.profile().bills[0];
    assert!(b.is_paid);
    assert_eq!(b.last_paid_date, Some(today));
}

#[test]
fn mark_paid_missing_id_is_a_noop() {
    let mut e = engine();
    e.add_bill(bill("Power", 15, 3)).unwrap();
    e.mark_bill_paid("no-such-id", date(2025, 1, 14)).unwrap();
    assert!(!e.profile().bills[0].is_paid);
}

#[test]
fn upcoming_within_reminder_window() {
    let mut e = engine();
    e.add_bill(bill("Due soon", 30, 3)).unwrap();
    e.add_bill(bill("Due later", 5, 3)).unwrap();

    // Jan 28: day 30 is 2 days out, day 5 is 8 days out (next month).
    let upcoming = e.upcoming_bills(date(2025, 1, 28));
    let names: Vec<&str> = upcoming.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Due soon"]);
}

#[test]
fn due_day_earlier_than_today_wraps_to_next_month() {
    let mut e = engine();
    e.add_bill(bill("Rent", 2, 7)).unwrap();

    // Jan 28, due day 2: treated as 5 days out, not overdue forever.
    let upcoming = e.upcoming_bills(date(2025, 1, 28));
    assert_eq!(upcoming.len(), 1);

    // Jan 20: 13 days out, beyond the 7-day reminder.
    assert!(e.upcoming_bills(date(2025, 1, 20)).is_empty());
}

#[test]
fn due_day_31_clamps_in_short_months() {
    let mut e = engine();
    e.add_bill(bill("Insurance", 31, 3)).unwrap();

    // April has 30 days; due day clamps to the 30th, one day out from the 29th.
    let upcoming = e.upcoming_bills(date(2025, 4, 29));
    assert_eq!(upcoming.len(), 1);
}

#[test]
fn paid_bills_are_not_upcoming() {
    let mut e = engine();
    e.add_bill(bill("Power", 30, 5)).unwrap();
    let id = e.profile().bills[0].id.clone();
    e.mark_bill_paid(&id, date(2025, 1, 27)).unwrap();
    assert!(e.upcoming_bills(date(2025, 1, 28)).is_empty());
}

#[test]
fn update_can_rearm_a_paid_bill() {
    let mut e = engine();
    e.add_bill(bill("Power", 30, 5)).unwrap();
    let id = e.profile().bills[0].id.clone();
    e.mark_bill_paid(&id, date(2025, 1, 27)).unwrap();

    e.update_bill(
        &id,
        BillPatch {
            is_paid: Some(false),
            ..Default::default()
        },
    )
    .unwrap();
    let b = &e.profile().bills[0];
    assert!(!b.is_paid);
    // Re-arming does not erase payment history.
    assert_eq!(b.last_paid_date, Some(date(2025, 1, 27)));
}
