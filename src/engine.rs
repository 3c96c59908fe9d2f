// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::derived;
use crate::models::{
    new_id, Bill, BillPatch, BudgetLimit, BudgetPatch, DerivedFinancials, ExpenseItem, Goal,
    GoalPatch, MonthlyExpenseEntry, NewBill, NewBudget, NewExpenseItem, NewGoal,
    NewMonthlyExpense, NewSpendingEntry, NewSubscription, ProfilePatch, SpendingEntry,
    SpendingEntryPatch, Subscription, SubscriptionPatch, UserProfile,
};
use crate::store::{load_profile, ProfileStore, StoreError};
use crate::utils::days_in_month;
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Active subscriptions unused for more than this many days count as
/// forgotten. Fixed threshold, not configurable.
const FORGOTTEN_AFTER_DAYS: i64 = 30;

/// Owns the in-memory profile for one user key plus the injected store.
///
/// Every mutator is a complete read-modify-write: the change is applied to a
/// working copy, persisted, and only then committed to the in-memory profile.
/// A failed write leaves the previous state untouched, and no write is
/// retried. `&mut self` on the mutators serializes logical operations within
/// the process; across processes the store is last-write-wins.
///
/// Updates and deletes against an id that no longer exists are silent no-ops
/// rather than errors, so a record removed from another view never crashes
/// the caller. Amount validation is the caller's concern; the engine accepts
/// what it is given.
pub struct ProfileEngine<S: ProfileStore> {
    store: S,
    user_key: String,
    profile: UserProfile,
}

impl<S: ProfileStore> ProfileEngine<S> {
    /// Load (or initialize) the profile for `user_key`.
    pub fn load(store: S, user_key: impl Into<String>) -> Result<Self, StoreError> {
        let user_key = user_key.into();
        let profile = load_profile(&store, &user_key)?;
        Ok(ProfileEngine {
            store,
            user_key,
            profile,
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn derived(&self, today: NaiveDate) -> DerivedFinancials {
        derived::compute(&self.profile, today)
    }

    fn commit(&mut self, next: UserProfile) -> Result<&UserProfile, StoreError> {
        self.store.write(&self.user_key, &next)?;
        self.profile = next;
        Ok(&self.profile)
    }

    // -- Goals --------------------------------------------------------------

    pub fn add_goal(&mut self, data: NewGoal) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.goals.push(Goal {
            id: new_id(),
            name: data.name,
            target_amount: data.target_amount,
            current_amount: data.current_amount,
            deadline: data.deadline,
            category: data.category,
            created_at: Utc::now(),
        });
        self.commit(next)
    }

    pub fn update_goal(&mut self, id: &str, patch: GoalPatch) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(g) = next.goals.iter_mut().find(|g| g.id == id) {
            if let Some(v) = patch.name {
                g.name = v;
            }
            if let Some(v) = patch.target_amount {
                g.target_amount = v;
            }
            if let Some(v) = patch.current_amount {
                g.current_amount = v;
            }
            if let Some(v) = patch.deadline {
                g.deadline = v;
            }
            if let Some(v) = patch.category {
                g.category = v;
            }
        }
        self.commit(next)
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.goals.retain(|g| g.id != id);
        self.commit(next)
    }

    /// Add `amount` toward a goal, capped at the target. Overshoot is
    /// clamped, not rejected; callers can report the effective amount.
    pub fn add_extra_to_goal(
        &mut self,
        id: &str,
        amount: Decimal,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(g) = next.goals.iter_mut().find(|g| g.id == id) {
            g.current_amount = (g.current_amount + amount).min(g.target_amount);
        }
        self.commit(next)
    }

    // -- Bills --------------------------------------------------------------

    pub fn add_bill(&mut self, data: NewBill) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.bills.push(Bill {
            id: new_id(),
            name: data.name,
            amount: data.amount,
            category: data.category,
            due_date: data.due_date,
            is_recurring: data.is_recurring,
            reminder_days: data.reminder_days,
            is_paid: false,
            last_paid_date: None,
            created_at: Utc::now(),
        });
        self.commit(next)
    }

    pub fn update_bill(&mut self, id: &str, patch: BillPatch) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(b) = next.bills.iter_mut().find(|b| b.id == id) {
            if let Some(v) = patch.name {
                b.name = v;
            }
            if let Some(v) = patch.amount {
                b.amount = v;
            }
            if let Some(v) = patch.category {
                b.category = v;
            }
            if let Some(v) = patch.due_date {
                b.due_date = v;
            }
            if let Some(v) = patch.is_recurring {
                b.is_recurring = v;
            }
            if let Some(v) = patch.reminder_days {
                b.reminder_days = v;
            }
            if let Some(v) = patch.is_paid {
                b.is_paid = v;
            }
        }
        self.commit(next)
    }

    pub fn delete_bill(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.bills.retain(|b| b.id != id);
        self.commit(next)
    }

    /// Paid status does not reset at month boundaries; recurring bills are
    /// re-armed by the caller when desired.
    pub fn mark_bill_paid(
        &mut self,
        id: &str,
        today: NaiveDate,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(b) = next.bills.iter_mut().find(|b| b.id == id) {
            b.is_paid = true;
            b.last_paid_date = Some(today);
        }
        self.commit(next)
    }

    /// Unpaid bills coming due within their reminder window. A due day
    /// earlier in the month than today rolls into next month rather than
    /// counting as overdue forever; due days past the month's end clamp to
    /// its last day.
    pub fn upcoming_bills(&self, today: NaiveDate) -> Vec<&Bill> {
        let dim = days_in_month(today);
        let day = today.day();
        self.profile
            .bills
            .iter()
            .filter(|b| !b.is_paid)
            .filter(|b| {
                let due = b.due_date.min(dim);
                let days_until = if due >= day { due - day } else { dim - day + due };
                days_until <= b.reminder_days
            })
            .collect()
    }

    // -- Subscriptions ------------------------------------------------------

    pub fn add_subscription(&mut self, data: NewSubscription) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.subscriptions.push(Subscription {
            id: new_id(),
            name: data.name,
            amount: data.amount,
            category: data.category,
            billing_cycle: data.billing_cycle,
            next_billing_date: data.next_billing_date,
            last_used: data.last_used,
            is_active: true,
            created_at: Utc::now(),
        });
        self.commit(next)
    }

    pub fn update_subscription(
        &mut self,
        id: &str,
        patch: SubscriptionPatch,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(s) = next.subscriptions.iter_mut().find(|s| s.id == id) {
            if let Some(v) = patch.name {
                s.name = v;
            }
            if let Some(v) = patch.amount {
                s.amount = v;
            }
            if let Some(v) = patch.category {
                s.category = v;
            }
            if let Some(v) = patch.billing_cycle {
                s.billing_cycle = v;
            }
            if let Some(v) = patch.next_billing_date {
                s.next_billing_date = v;
            }
            if let Some(v) = patch.last_used {
                s.last_used = Some(v);
            }
            if let Some(v) = patch.is_active {
                s.is_active = v;
            }
        }
        self.commit(next)
    }

    pub fn delete_subscription(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.subscriptions.retain(|s| s.id != id);
        self.commit(next)
    }

    /// Active subscriptions never used, or unused for more than 30 days.
    pub fn forgotten_subscriptions(&self, today: NaiveDate) -> Vec<&Subscription> {
        self.profile
            .subscriptions
            .iter()
            .filter(|s| s.is_active)
            .filter(|s| match s.last_used {
                None => true,
                Some(last) => (today - last).num_days() > FORGOTTEN_AFTER_DAYS,
            })
            .collect()
    }

    // -- Budgets & spending entries -----------------------------------------

    pub fn add_budget(&mut self, data: NewBudget) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.budget_limits.push(BudgetLimit {
            id: new_id(),
            name: data.name,
            category: data.category,
            monthly_limit: data.monthly_limit,
            spent: Decimal::ZERO,
            created_at: Utc::now(),
        });
        self.commit(next)
    }

    pub fn update_budget(
        &mut self,
        id: &str,
        patch: BudgetPatch,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(b) = next.budget_limits.iter_mut().find(|b| b.id == id) {
            if let Some(v) = patch.name {
                b.name = v;
            }
            if let Some(v) = patch.category {
                b.category = v;
            }
            if let Some(v) = patch.monthly_limit {
                b.monthly_limit = v;
            }
        }
        self.commit(next)
    }

    /// Cascade-deletes the budget's spending entries along with it.
    pub fn delete_budget(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.budget_limits.retain(|b| b.id != id);
        next.spending_entries.retain(|e| e.budget_id != id);
        self.commit(next)
    }

    pub fn add_spending_entry(
        &mut self,
        data: NewSpendingEntry,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.spending_entries.push(SpendingEntry {
            id: new_id(),
            budget_id: data.budget_id,
            name: data.name,
            amount: data.amount,
            date: data.date,
        });
        resum_budget_spent(&mut next);
        self.commit(next)
    }

    pub fn update_spending_entry(
        &mut self,
        id: &str,
        patch: SpendingEntryPatch,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(e) = next.spending_entries.iter_mut().find(|e| e.id == id) {
            if let Some(v) = patch.budget_id {
                e.budget_id = v;
            }
            if let Some(v) = patch.name {
                e.name = v;
            }
            if let Some(v) = patch.amount {
                e.amount = v;
            }
            if let Some(v) = patch.date {
                e.date = v;
            }
        }
        resum_budget_spent(&mut next);
        self.commit(next)
    }

    pub fn delete_spending_entry(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.spending_entries.retain(|e| e.id != id);
        resum_budget_spent(&mut next);
        self.commit(next)
    }

    // -- Monthly expense log ------------------------------------------------

    pub fn add_monthly_expense(
        &mut self,
        data: NewMonthlyExpense,
    ) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.monthly_expenses.push(MonthlyExpenseEntry {
            id: new_id(),
            name: data.name,
            amount: data.amount,
            category: data.category,
            date: data.date,
        });
        self.commit(next)
    }

    pub fn remove_monthly_expense(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.monthly_expenses.retain(|e| e.id != id);
        self.commit(next)
    }

    // -- Settings -----------------------------------------------------------

    pub fn set_profile(&mut self, patch: ProfilePatch) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        if let Some(v) = patch.name {
            next.name = v;
        }
        if let Some(v) = patch.monthly_income {
            next.monthly_income = v;
        }
        if let Some(v) = patch.savings_target_percentage {
            next.savings_target_percentage = v;
        }
        if let Some(v) = patch.financial_vibe {
            next.financial_vibe = v;
        }
        if let Some(v) = patch.currency {
            next.currency = v;
        }
        if let Some(v) = patch.expense_breakdown {
            next.expense_breakdown = v;
            next.fixed_expenses = breakdown_total(&next.expense_breakdown);
        }
        if let Some(v) = patch.onboarding_complete {
            next.onboarding_complete = v;
        }
        self.commit(next)
    }

    pub fn add_expense_item(&mut self, data: NewExpenseItem) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.expense_breakdown.push(ExpenseItem {
            id: new_id(),
            name: data.name,
            amount: data.amount,
            category: data.category,
        });
        next.fixed_expenses = breakdown_total(&next.expense_breakdown);
        self.commit(next)
    }

    pub fn remove_expense_item(&mut self, id: &str) -> Result<&UserProfile, StoreError> {
        let mut next = self.profile.clone();
        next.expense_breakdown.retain(|e| e.id != id);
        next.fixed_expenses = breakdown_total(&next.expense_breakdown);
        self.commit(next)
    }

    /// Discard everything and persist a fresh default profile (new id).
    pub fn reset_profile(&mut self) -> Result<&UserProfile, StoreError> {
        self.commit(UserProfile::fresh())
    }
}

fn breakdown_total(items: &[ExpenseItem]) -> Decimal {
    items.iter().map(|e| e.amount).sum()
}

/// Full re-sum of every budget's `spent` cache from its entries. Entries
/// whose `budget_id` matches no budget contribute nowhere.
fn resum_budget_spent(profile: &mut UserProfile) {
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for e in &profile.spending_entries {
        *sums.entry(e.budget_id.clone()).or_insert(Decimal::ZERO) += e.amount;
    }
    for b in &mut profile.budget_limits {
        b.spent = sums.get(&b.id).copied().unwrap_or(Decimal::ZERO);
    }
}
