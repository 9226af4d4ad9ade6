use crate::domain::{Advice, AdviceKind, Budget, FinancialSummary};

/// Share of the budget that must remain unspent before savings are praised.
const SAVINGS_THRESHOLD: f64 = 0.2;

const NEEDS_OVERSPEND: &str =
    "You're overspending on needs! Consider reviewing essential expenses.";
const WANTS_OVERSPEND: &str = "Wants are exceeding budget! Time to prioritize your spending.";
const SAVING_WELL: &str = "Great job! You're saving well. Consider investing the extra funds.";
const ON_TRACK: &str = "You're on track! Keep monitoring your spending habits.";

pub struct AdviceService;

impl AdviceService {
    /// First matching rule wins: needs overspend, wants overspend, healthy savings, on track.
    pub fn advise(
        needs_progress: f64,
        wants_progress: f64,
        remaining_balance: f64,
        budget: &Budget,
    ) -> Advice {
        if needs_progress > 100.0 {
            Advice::new(AdviceKind::Warning, NEEDS_OVERSPEND)
        } else if wants_progress > 100.0 {
            Advice::new(AdviceKind::Warning, WANTS_OVERSPEND)
        } else if remaining_balance > budget.total_amount * SAVINGS_THRESHOLD {
            Advice::new(AdviceKind::Success, SAVING_WELL)
        } else {
            Advice::new(AdviceKind::Info, ON_TRACK)
        }
    }

    pub fn for_summary(summary: &FinancialSummary, budget: &Budget) -> Advice {
        Self::advise(
            summary.needs_progress,
            summary.wants_progress,
            summary.remaining_balance,
            budget,
        )
    }
}
