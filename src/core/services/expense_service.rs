use chrono::{DateTime, Utc};

use crate::core::services::{ClassificationService, ServiceResult};
use crate::domain::{catalog, AppState, Displayable, Expense, Identifiable};
use crate::errors::ValidationError;

/// Fields submitted from the expense entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: Option<f64>,
    pub category: String,
    pub description: Option<String>,
}

impl ExpenseInput {
    pub fn new(title: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount: Some(amount),
            category: category.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds input from raw text fields. A blank amount counts as missing.
    pub fn from_form(
        title: &str,
        amount: &str,
        category: &str,
        description: Option<&str>,
    ) -> ServiceResult<Self> {
        let amount = amount.trim();
        let amount = if amount.is_empty() {
            None
        } else {
            Some(
                amount
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?,
            )
        };
        Ok(Self {
            title: title.to_string(),
            amount,
            category: category.to_string(),
            description: description.map(str::to_string),
        })
    }
}

pub struct ExpenseService;

impl ExpenseService {
    /// Validates `input`, classifies it and puts it at the head of the list.
    /// On error the list is untouched.
    pub fn add(
        state: &mut AppState,
        input: ExpenseInput,
        now: DateTime<Utc>,
    ) -> ServiceResult<Expense> {
        let expense = Self::build(input, now)?;
        state.expenses.insert(0, expense.clone());
        tracing::debug!(
            id = %expense.id,
            expense = %expense.display_label(),
            amount = expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    /// Removes the expense with `id`. Unknown ids leave the list unchanged.
    pub fn delete(state: &mut AppState, id: &str) -> Option<Expense> {
        let position = state.expenses.iter().position(|expense| expense.id() == id)?;
        let removed = state.expenses.remove(position);
        tracing::debug!(id = %removed.id, "expense removed");
        Some(removed)
    }

    pub fn list(state: &AppState) -> &[Expense] {
        &state.expenses
    }

    fn build(input: ExpenseInput, now: DateTime<Utc>) -> ServiceResult<Expense> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let amount = input.amount.ok_or(ValidationError::MissingAmount)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        let category = input.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let definition = catalog()
            .find_ignore_case(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))?;

        let kind = ClassificationService::classify(definition.name);
        let mut expense = Expense::new(title, amount, definition.name, kind, now);
        expense.description = input
            .description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Ok(expense)
    }
}
