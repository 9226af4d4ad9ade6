use chrono::{DateTime, NaiveDate, Utc};

use crate::core::dashboard::{recompute, DashboardView};
use crate::core::services::{BudgetService, ExpenseInput, ExpenseService, ServiceResult};
use crate::domain::{
    ActivityStats, Advice, AppState, Budget, BudgetDefaults, BudgetUpdate, CategorySpending,
    DistributionSlice, Expense, FinancialSummary,
};
use crate::storage::StorageAdapter;

/// Owns the expense list and budget, recomputes the dashboard after each
/// mutation and writes the full state through the injected storage adapter.
pub struct BudgetController {
    state: AppState,
    view: DashboardView,
    storage: StorageAdapter,
    last_save_ok: bool,
}

impl BudgetController {
    /// Loads stored state, falling back to a fresh default state.
    pub fn open(storage: StorageAdapter, defaults: &BudgetDefaults, today: NaiveDate) -> Self {
        let state = storage.load_or_default(defaults, today);
        Self::with_state(state, storage)
    }

    pub fn with_state(state: AppState, storage: StorageAdapter) -> Self {
        let view = recompute(&state);
        Self {
            state,
            view,
            storage,
            last_save_ok: true,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn expenses(&self) -> &[Expense] {
        ExpenseService::list(&self.state)
    }

    pub fn budget(&self) -> &Budget {
        &self.state.budget
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn storage(&self) -> &StorageAdapter {
        &self.storage
    }

    /// Whether the most recent write reached the storage medium.
    pub fn last_save_succeeded(&self) -> bool {
        self.last_save_ok
    }

    pub fn add_expense(&mut self, input: ExpenseInput) -> ServiceResult<Expense> {
        self.add_expense_at(input, Utc::now())
    }

    pub fn add_expense_at(
        &mut self,
        input: ExpenseInput,
        now: DateTime<Utc>,
    ) -> ServiceResult<Expense> {
        let expense = ExpenseService::add(&mut self.state, input, now)?;
        self.commit();
        Ok(expense)
    }

    /// Removes the expense with `id`. Unknown ids change nothing and write nothing.
    pub fn delete_expense(&mut self, id: &str) -> Option<Expense> {
        let removed = ExpenseService::delete(&mut self.state, id)?;
        self.commit();
        Some(removed)
    }

    pub fn update_budget(&mut self, update: &BudgetUpdate) -> Budget {
        let budget = BudgetService::update(&mut self.state, update);
        self.commit();
        budget
    }

    pub fn summary(&self) -> FinancialSummary {
        self.view.summary
    }

    pub fn category_spending(&self) -> &[CategorySpending] {
        &self.view.category_spending
    }

    pub fn budget_distribution(&self) -> &[DistributionSlice] {
        &self.view.distribution
    }

    pub fn advice(&self) -> &Advice {
        &self.view.advice
    }

    pub fn activity(&self) -> ActivityStats {
        self.view.activity
    }

    fn commit(&mut self) {
        self.view = recompute(&self.state);
        self.last_save_ok = self.storage.save(&self.state);
    }
}
