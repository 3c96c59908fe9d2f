// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record identifier, generated once per record.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedExpenseCategory {
    Rent,
    Utilities,
    Subscriptions,
    Insurance,
    Other,
}

impl FromStr for FixedExpenseCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rent" => Ok(Self::Rent),
            "utilities" => Ok(Self::Utilities),
            "subscriptions" => Ok(Self::Subscriptions),
            "insurance" => Ok(Self::Insurance),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown fixed expense category '{}' (use rent|utilities|subscriptions|insurance|other)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Health,
    Other,
}

impl FromStr for VariableExpenseCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown expense category '{}' (use food|transport|entertainment|shopping|health|other)",
                s
            )),
        }
    }
}

/// Display-only tag picked during onboarding; affects no computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialVibe {
    Control,
    Save,
    Invest,
    FiguringOut,
}

impl FromStr for FinancialVibe {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "control" => Ok(Self::Control),
            "save" => Ok(Self::Save),
            "invest" => Ok(Self::Invest),
            "figuring-out" => Ok(Self::FiguringOut),
            _ => Err(format!(
                "Unknown vibe '{}' (use control|save|invest|figuring-out)",
                s
            )),
        }
    }
}

/// Display currency. Stored amounts are currency-agnostic decimals; this
/// tag only drives formatting in consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Cad,
    Aud,
    Chf,
}

impl FromStr for Currency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "INR" => Ok(Self::Inr),
            "JPY" => Ok(Self::Jpy),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            "CHF" => Ok(Self::Chf),
            _ => Err(format!(
                "Unknown currency '{}' (use USD|EUR|GBP|INR|JPY|CAD|AUD|CHF)",
                s
            )),
        }
    }
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Chf => "CHF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl FromStr for BillingCycle {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!(
                "Unknown billing cycle '{}' (use weekly|monthly|quarterly|yearly)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: FixedExpenseCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenseEntry {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: VariableExpenseCategory,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    #[serde(default)]
    pub last_used: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    /// Day of month, 1..=31. Clamped to the month's length in short months.
    pub due_date: u32,
    pub is_recurring: bool,
    pub reminder_days: u32,
    pub is_paid: bool,
    #[serde(default)]
    pub last_paid_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimit {
    pub id: String,
    pub name: String,
    pub category: String,
    pub monthly_limit: Decimal,
    /// Cached sum of this budget's spending entries; recomputed after every
    /// entry mutation, never edited directly.
    pub spent: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingEntry {
    pub id: String,
    /// Lookup key into `budget_limits`, not an owning pointer. Entries whose
    /// budget no longer exists are skipped during aggregation.
    pub budget_id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// Root per-user aggregate. One document per user key in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub onboarding_complete: bool,
    pub monthly_income: Decimal,
    /// Invariant: equals the sum of `expense_breakdown` amounts. Every
    /// mutator that touches the breakdown recomputes this in the same write.
    pub fixed_expenses: Decimal,
    pub expense_breakdown: Vec<ExpenseItem>,
    pub savings_target_percentage: u32,
    pub financial_vibe: FinancialVibe,
    pub currency: Currency,
    pub goals: Vec<Goal>,
    pub monthly_expenses: Vec<MonthlyExpenseEntry>,
    pub subscriptions: Vec<Subscription>,
    pub bills: Vec<Bill>,
    pub budget_limits: Vec<BudgetLimit>,
    pub spending_entries: Vec<SpendingEntry>,
    pub created_at: DateTime<Utc>,
    /// Keys written by newer clients that this build does not model.
    /// Carried through load and save untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    /// Fresh default profile: new id, onboarding not yet complete, empty
    /// collections. Used for absent keys and for `reset`.
    pub fn fresh() -> Self {
        UserProfile {
            id: new_id(),
            name: String::new(),
            onboarding_complete: false,
            monthly_income: Decimal::ZERO,
            fixed_expenses: Decimal::ZERO,
            expense_breakdown: Vec::new(),
            savings_target_percentage: 20,
            financial_vibe: FinancialVibe::FiguringOut,
            currency: Currency::Usd,
            goals: Vec::new(),
            monthly_expenses: Vec::new(),
            subscriptions: Vec::new(),
            bills: Vec::new(),
            budget_limits: Vec::new(),
            spending_entries: Vec::new(),
            created_at: Utc::now(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Computed from a profile plus the current date; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFinancials {
    pub available_for_spending: Decimal,
    pub target_savings_amount: Decimal,
    /// Whole percentage in 0..=100.
    pub actual_savings_rate: u32,
    pub spent: Decimal,
    pub saved: Decimal,
    pub days_in_month: u32,
    pub days_left: u32,
    pub daily_budget: Decimal,
}

// ---------------------------------------------------------------------------
// Engine inputs: `New*` carries caller data for adds (ids and timestamps are
// generated by the engine); `*Patch` carries optional fields for updates,
// merged field-by-field into the matching record.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewBill {
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub due_date: u32,
    pub is_recurring: bool,
    pub reminder_days: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BillPatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub due_date: Option<u32>,
    pub is_recurring: Option<bool>,
    pub reminder_days: Option<u32>,
    pub is_paid: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub billing_cycle: BillingCycle,
    pub next_billing_date: NaiveDate,
    pub last_used: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionPatch {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub billing_cycle: Option<BillingCycle>,
    pub next_billing_date: Option<NaiveDate>,
    pub last_used: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewBudget {
    pub name: String,
    pub category: String,
    pub monthly_limit: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub monthly_limit: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct NewSpendingEntry {
    pub budget_id: String,
    pub name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct SpendingEntryPatch {
    pub budget_id: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct NewMonthlyExpense {
    pub name: String,
    pub amount: Decimal,
    pub category: VariableExpenseCategory,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewExpenseItem {
    pub name: String,
    pub amount: Decimal,
    pub category: FixedExpenseCategory,
}

/// Shallow patch of top-level profile settings. When `expense_breakdown`
/// is present, `fixed_expenses` is recomputed from it in the same write.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub monthly_income: Option<Decimal>,
    pub savings_target_percentage: Option<u32>,
    pub financial_vibe: Option<FinancialVibe>,
    pub currency: Option<Currency>,
    pub expense_breakdown: Option<Vec<ExpenseItem>>,
    pub onboarding_complete: Option<bool>,
}
