use crate::domain::{AppState, Budget, BudgetUpdate, Displayable};

pub struct BudgetService;

impl BudgetService {
    /// Merges `update` into the active budget and returns the result.
    ///
    /// Percentages are stored as given; an allocation past 100% or below zero
    /// is logged, not corrected. Non-finite numbers are dropped from the update.
    pub fn update(state: &mut AppState, update: &BudgetUpdate) -> Budget {
        state.budget.apply(&finite_fields(update));
        if state.budget.is_over_allocated() {
            tracing::warn!(
                needs = state.budget.needs_percentage,
                wants = state.budget.wants_percentage,
                "budget allocation is outside 0-100%"
            );
        }
        tracing::debug!(budget = %state.budget.display_label(), "budget updated");
        state.budget.clone()
    }
}

fn finite_fields(update: &BudgetUpdate) -> BudgetUpdate {
    let keep = |field: &'static str, value: Option<f64>| match value {
        Some(number) if !number.is_finite() => {
            tracing::warn!(field, "ignoring non-finite budget value");
            None
        }
        other => other,
    };
    BudgetUpdate {
        total_amount: keep("totalAmount", update.total_amount),
        needs_percentage: keep("needsPercentage", update.needs_percentage),
        wants_percentage: keep("wantsPercentage", update.wants_percentage),
        month: update.month.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_leaves_unsupplied_fields_alone() {
        let mut state = AppState::new(Budget::new(1000.0, 50.0, 30.0, "2025-10"));
        let budget =
            BudgetService::update(&mut state, &BudgetUpdate::default().total_amount(2400.0));
        assert_eq!(budget.total_amount, 2400.0);
        assert_eq!(budget.needs_percentage, 50.0);
        assert_eq!(state.budget, budget);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let original = Budget::new(1000.0, 50.0, 30.0, "2025-10");
        let mut state = AppState::new(original.clone());
        assert_eq!(
            BudgetService::update(&mut state, &BudgetUpdate::default()),
            original
        );
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut state = AppState::new(Budget::new(1000.0, 50.0, 30.0, "2025-10"));
        let update = BudgetUpdate::default()
            .total_amount(f64::NAN)
            .needs_percentage(f64::INFINITY)
            .wants_percentage(40.0);
        let budget = BudgetService::update(&mut state, &update);
        assert_eq!(budget.total_amount, 1000.0);
        assert_eq!(budget.needs_percentage, 50.0);
        assert_eq!(budget.wants_percentage, 40.0);
    }
}
