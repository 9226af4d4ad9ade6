//! Everything the front-end draws, derived in one pass from the owned state.

use serde::Serialize;

use crate::core::services::{AdviceService, SummaryService};
use crate::domain::{
    ActivityStats, Advice, AppState, CategorySpending, DistributionSlice, FinancialSummary,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: FinancialSummary,
    pub category_spending: Vec<CategorySpending>,
    pub distribution: Vec<DistributionSlice>,
    pub advice: Advice,
    pub activity: ActivityStats,
}

impl DashboardView {
    /// Sum of all pie slice values, the denominator for slice shares.
    pub fn distribution_total(&self) -> f64 {
        self.distribution.iter().map(|slice| slice.value).sum::<f64>()
    }
}

/// Pure recomputation of the derived view. Call after every mutation.
pub fn recompute(state: &AppState) -> DashboardView {
    let summary = SummaryService::summarize(&state.expenses, &state.budget);
    let view = DashboardView {
        summary,
        category_spending: SummaryService::category_spending(&state.expenses),
        distribution: SummaryService::budget_distribution(&summary),
        advice: AdviceService::for_summary(&summary, &state.budget),
        activity: SummaryService::activity_stats(&state.expenses),
    };
    tracing::debug!(
        expenses = state.expenses.len(),
        total = view.summary.total_expenses,
        advice = %view.advice.kind,
        "dashboard recomputed"
    );
    view
}
