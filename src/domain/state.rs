//! The owned application state, which is also the persisted blob.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::budget::{Budget, BudgetDefaults};
use crate::domain::common::Identifiable;
use crate::domain::expense::Expense;

/// Expense list (newest first) plus the active budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub budget: Budget,
}

/// Shape written to and read from the storage medium.
pub type PersistedState = AppState;

impl AppState {
    pub fn new(budget: Budget) -> Self {
        Self {
            expenses: Vec::new(),
            budget,
        }
    }

    /// Empty expense list with a budget seeded from `defaults`.
    pub fn with_defaults(defaults: &BudgetDefaults, today: NaiveDate) -> Self {
        Self::new(Budget::from_defaults(defaults, today))
    }

    pub fn expense(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id() == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
