//! Derived, never-persisted views over the expense list and budget.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseType;

/// Totals, per-bucket spend, allocations and progress for the active budget.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining_balance: f64,
    pub needs_spent: f64,
    pub wants_spent: f64,
    pub needs_allocation: f64,
    pub wants_allocation: f64,
    pub needs_progress: f64,
    pub wants_progress: f64,
}

impl FinancialSummary {
    pub fn needs_status(&self) -> ProgressStatus {
        ProgressStatus::from_progress(self.needs_progress)
    }

    pub fn wants_status(&self) -> ProgressStatus {
        ProgressStatus::from_progress(self.wants_progress)
    }
}

/// Band a progress bar is drawn in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    OnTrack,
    Caution,
    Over,
}

impl ProgressStatus {
    pub fn from_progress(progress: f64) -> Self {
        if progress > 100.0 {
            ProgressStatus::Over
        } else if progress > 80.0 {
            ProgressStatus::Caution
        } else {
            ProgressStatus::OnTrack
        }
    }

    /// Bar fill, capped at a full bar.
    pub fn display_percentage(progress: f64) -> f64 {
        progress.min(100.0)
    }
}

/// Spend for one category, in first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpending {
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
}

impl CategorySpending {
    pub fn color(&self) -> &'static str {
        self.kind.chart_color()
    }
}

/// One slice of the budget pie. Never carries a non-positive value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub description: String,
}

impl DistributionSlice {
    /// Percentage of `total` this slice occupies, for pie labels.
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Warning,
    Success,
    Info,
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AdviceKind::Warning => "warning",
            AdviceKind::Success => "success",
            AdviceKind::Info => "info",
        };
        f.write_str(label)
    }
}

/// Advisory message derived from the summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advice {
    #[serde(rename = "type")]
    pub kind: AdviceKind,
    pub message: String,
}

impl Advice {
    pub fn new(kind: AdviceKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Footer figures under the expense list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub needs_total: f64,
    pub wants_total: f64,
    pub daily_average: f64,
    pub transaction_count: usize,
}
