// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::UserProfile;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read profile document '{key}': {message}")]
    Read { key: String, message: String },
    #[error("Failed to write profile document '{key}': {message}")]
    Write { key: String, message: String },
}

/// Persistence boundary for profile documents. Anything that can hand back
/// a JSON document per user key works: SQLite, a file, a remote doc store.
pub trait ProfileStore {
    /// `Ok(None)` means the key has never been written (not an error).
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn write(&self, key: &str, profile: &UserProfile) -> Result<(), StoreError>;
}

/// Load the profile for `key`, migrating older document shapes.
/// An absent key yields a fresh default profile with a new id.
pub fn load_profile<S: ProfileStore>(store: &S, key: &str) -> Result<UserProfile, StoreError> {
    match store.read(key)? {
        Some(doc) => Ok(merge(doc)),
        None => Ok(UserProfile::fresh()),
    }
}

const PROFILE_KEYS: [&str; 16] = [
    "id",
    "name",
    "onboardingComplete",
    "monthlyIncome",
    "fixedExpenses",
    "expenseBreakdown",
    "savingsTargetPercentage",
    "financialVibe",
    "currency",
    "goals",
    "monthlyExpenses",
    "subscriptions",
    "bills",
    "budgetLimits",
    "spendingEntries",
    "createdAt",
];

/// Versionless additive migration: overlay the stored document over a fresh
/// default, stored values winning key-by-key. Total by construction; a
/// field that fails to decode falls back to its default instead of failing
/// the load, and stored values that do decode are preserved verbatim.
/// Keys this build does not recognize are kept on the profile so a later
/// save writes them back out unchanged.
pub fn merge(stored: Value) -> UserProfile {
    let fresh = UserProfile::fresh();
    let obj = match stored {
        Value::Object(m) => m,
        _ => return fresh,
    };
    let mut profile = UserProfile {
        id: field(&obj, "id", fresh.id),
        name: field(&obj, "name", fresh.name),
        onboarding_complete: field(&obj, "onboardingComplete", fresh.onboarding_complete),
        monthly_income: field(&obj, "monthlyIncome", fresh.monthly_income),
        fixed_expenses: field(&obj, "fixedExpenses", fresh.fixed_expenses),
        expense_breakdown: field(&obj, "expenseBreakdown", fresh.expense_breakdown),
        savings_target_percentage: field(
            &obj,
            "savingsTargetPercentage",
            fresh.savings_target_percentage,
        ),
        financial_vibe: field(&obj, "financialVibe", fresh.financial_vibe),
        currency: field(&obj, "currency", fresh.currency),
        goals: field(&obj, "goals", fresh.goals),
        monthly_expenses: field(&obj, "monthlyExpenses", fresh.monthly_expenses),
        subscriptions: field(&obj, "subscriptions", fresh.subscriptions),
        bills: field(&obj, "bills", fresh.bills),
        budget_limits: field(&obj, "budgetLimits", fresh.budget_limits),
        spending_entries: field(&obj, "spendingEntries", fresh.spending_entries),
        created_at: field(&obj, "createdAt", fresh.created_at),
        extra: Map::new(),
    };
    profile.extra = obj
        .into_iter()
        .filter(|(k, _)| !PROFILE_KEYS.contains(&k.as_str()))
        .collect();
    profile
}

fn field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str, default: T) -> T {
    obj.get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or(default)
}

/// Default backend: one JSON document per user key in a SQLite table
/// (see db::init_schema).
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        SqliteStore { conn }
    }
}

impl ProfileStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let doc: Option<String> = self
            .conn
            .query_row(
                "SELECT doc FROM profiles WHERE user_key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        match doc {
            Some(s) => {
                let v = serde_json::from_str(&s).map_err(|e| StoreError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, profile: &UserProfile) -> Result<(), StoreError> {
        let doc = serde_json::to_string(profile).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.conn
            .execute(
                "INSERT INTO profiles(user_key, doc, updated_at) VALUES(?1, ?2, datetime('now'))
                 ON CONFLICT(user_key) DO UPDATE SET doc=excluded.doc, updated_at=excluded.updated_at",
                params![key, doc],
            )
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions. `fail_writes`
/// simulates a backend outage.
#[derive(Default)]
pub struct MemoryStore {
    docs: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw document access, mainly for seeding old-shape documents in tests.
    pub fn put_raw(&self, key: &str, doc: &str) {
        self.docs
            .borrow_mut()
            .insert(key.to_string(), doc.to_string());
    }
}

impl ProfileStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        match self.docs.borrow().get(key) {
            Some(s) => {
                let v = serde_json::from_str(s).map_err(|e| StoreError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, profile: &UserProfile) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "backend unavailable".to_string(),
            });
        }
        let doc = serde_json::to_string(profile).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.docs.borrow_mut().insert(key.to_string(), doc);
        Ok(())
    }
}
