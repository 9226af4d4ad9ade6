//! The single monthly budget record and its partial-update form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

const DEFAULT_BUDGET_ID: &str = "1";
const MONTH_FORMAT: &str = "%Y-%m";

/// Formats a date as the `YYYY-MM` month key stored on the budget.
pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_FORMAT).to_string()
}

/// Monthly budget. Percentages are not clamped; they may sum past 100 or go negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub total_amount: f64,
    pub needs_percentage: f64,
    pub wants_percentage: f64,
    pub month: String,
}

impl Budget {
    pub fn new(
        total_amount: f64,
        needs_percentage: f64,
        wants_percentage: f64,
        month: impl Into<String>,
    ) -> Self {
        Self {
            id: DEFAULT_BUDGET_ID.to_string(),
            total_amount,
            needs_percentage,
            wants_percentage,
            month: month.into(),
        }
    }

    /// Builds the budget a fresh install starts with for the month containing `today`.
    pub fn from_defaults(defaults: &BudgetDefaults, today: NaiveDate) -> Self {
        Self::new(
            defaults.total_amount,
            defaults.needs_percentage,
            defaults.wants_percentage,
            month_key(today),
        )
    }

    pub fn needs_allocation(&self) -> f64 {
        self.total_amount * (self.needs_percentage / 100.0)
    }

    pub fn wants_allocation(&self) -> f64 {
        self.total_amount * (self.wants_percentage / 100.0)
    }

    /// Share of the budget assigned to neither bucket. Negative when over-allocated.
    pub fn unallocated_percentage(&self) -> f64 {
        100.0 - self.needs_percentage - self.wants_percentage
    }

    pub fn is_over_allocated(&self) -> bool {
        self.unallocated_percentage() < 0.0
            || self.needs_percentage < 0.0
            || self.wants_percentage < 0.0
    }

    /// Merges the supplied fields into this budget, leaving the rest untouched.
    pub fn apply(&mut self, update: &BudgetUpdate) {
        if let Some(total) = update.total_amount {
            self.total_amount = total;
        }
        if let Some(needs) = update.needs_percentage {
            self.needs_percentage = needs;
        }
        if let Some(wants) = update.wants_percentage {
            self.wants_percentage = wants;
        }
        if let Some(month) = &update.month {
            self.month = month.clone();
        }
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!(
            "{} budget of {:.2} ({}% needs / {}% wants)",
            self.month, self.total_amount, self.needs_percentage, self.wants_percentage
        )
    }
}

/// Partial budget edit. Only fields that are `Some` change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wants_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

impl BudgetUpdate {
    pub fn total_amount(mut self, value: f64) -> Self {
        self.total_amount = Some(value);
        self
    }

    pub fn needs_percentage(mut self, value: f64) -> Self {
        self.needs_percentage = Some(value);
        self
    }

    pub fn wants_percentage(mut self, value: f64) -> Self {
        self.wants_percentage = Some(value);
        self
    }

    pub fn month(mut self, value: impl Into<String>) -> Self {
        self.month = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.total_amount.is_none()
            && self.needs_percentage.is_none()
            && self.wants_percentage.is_none()
            && self.month.is_none()
    }
}

/// Seed values for the budget of a fresh install.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetDefaults {
    pub total_amount: f64,
    pub needs_percentage: f64,
    pub wants_percentage: f64,
}

impl Default for BudgetDefaults {
    fn default() -> Self {
        Self {
            total_amount: 3000.0,
            needs_percentage: 50.0,
            wants_percentage: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> Budget {
        Budget::new(1000.0, 50.0, 30.0, "2025-10")
    }

    #[test]
    fn allocations_follow_percentages() {
        let budget = budget();
        assert_eq!(budget.needs_allocation(), 500.0);
        assert_eq!(budget.wants_allocation(), 300.0);
        assert_eq!(budget.unallocated_percentage(), 20.0);
        assert!(!budget.is_over_allocated());
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut budget = budget();
        budget.apply(&BudgetUpdate::default().needs_percentage(60.0));
        assert_eq!(budget.needs_percentage, 60.0);
        assert_eq!(budget.total_amount, 1000.0);
        assert_eq!(budget.wants_percentage, 30.0);
        assert_eq!(budget.month, "2025-10");
    }

    #[test]
    fn over_allocation_is_reported_not_clamped() {
        let mut budget = budget();
        budget.apply(&BudgetUpdate::default().wants_percentage(70.0));
        assert!(budget.is_over_allocated());
        assert_eq!(budget.wants_percentage, 70.0);
    }

    #[test]
    fn defaults_use_current_month_key() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let budget = Budget::from_defaults(&BudgetDefaults::default(), today);
        assert_eq!(budget.id, "1");
        assert_eq!(budget.month, "2026-03");
        assert_eq!(budget.total_amount, 3000.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&budget()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"id":"1","totalAmount":1000.0,"needsPercentage":50.0,"#,
                r#""wantsPercentage":30.0,"month":"2025-10"}"#
            )
        );
    }
}
