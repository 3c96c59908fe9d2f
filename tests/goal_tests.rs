// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketclip::engine::ProfileEngine;
use pocketclip::models::{GoalPatch, NewGoal};
use pocketclip::store::MemoryStore;
use rust_decimal::Decimal;

fn engine() -> ProfileEngine<MemoryStore> {
    ProfileEngine::load(MemoryStore::new(), "u1").unwrap()
}

fn vacation(target: u32, current: u32) -> NewGoal {
    NewGoal {
        name: "Vacation".into(),
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        category: "travel".into(),
    }
}

#[test]
fn add_update_delete_goal() {
    let mut e = engine();
    e.add_goal(vacation(1000, 0)).unwrap();
    let id = e.profile().goals[0].id.clone();

    e.update_goal(
        &id,
        GoalPatch {
            name: Some("Big vacation".into()),
            target_amount: Some(Decimal::from(2000)),
            ..Default::default()
        },
    )
    .unwrap();
    let g = &e.profile().goals[0];
    assert_eq!(g.name, "Big vacation");
    assert_eq!(g.target_amount, Decimal::from(2000));
    // Untouched fields survive the patch.
    assert_eq!(g.category, "travel");

    e.delete_goal(&id).unwrap();
    assert!(e.profile().goals.is_empty());
}

#[test]
fn update_missing_goal_is_a_noop() {
    let mut e = engine();
    e.add_goal(vacation(1000, 0)).unwrap();
    e.update_goal(
        "no-such-id",
        GoalPatch {
            name: Some("ghost".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(e.profile().goals.len(), 1);
    assert_eq!(e.profile().goals[0].name, "Vacation");
}

#[test]
fn extra_money_is_clamped_at_target() {
    let mut e = engine();
    e.add_goal(vacation(1000, 900)).unwrap();
    let id = e.profile().goals[0].id.clone();

    e.add_extra_to_goal(&id, Decimal::from(500)).unwrap();
    assert_eq!(e.profile().goals[0].current_amount, Decimal::from(1000));

    // Already full: further extras change nothing.
    e.add_extra_to_goal(&id, Decimal::from(10)).unwrap();
    assert_eq!(e.profile().goals[0].current_amount, Decimal::from(1000));
}

#[test]
fn extra_money_below_target_accumulates() {
    let mut e = engine();
    e.add_goal(vacation(1000, 100)).unwrap();
    let id = e.profile().goals[0].id.clone();
    e.add_extra_to_goal(&id, Decimal::from(250)).unwrap();
    assert_eq!(e.profile().goals[0].current_amount, Decimal::from(350));
}
