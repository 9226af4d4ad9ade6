use std::result::Result as StdResult;

use thiserror::Error;

/// Rejection reasons for an expense submission. Nothing is inserted when one is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expense title is required")]
    MissingTitle,
    #[error("expense amount is required")]
    MissingAmount,
    #[error("expense category is required")]
    MissingCategory,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl ValidationError {
    /// True for the presence checks the entry form enforces.
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingTitle
                | ValidationError::MissingAmount
                | ValidationError::MissingCategory
        )
    }
}

/// Unified error type for the domain, storage and configuration layers.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}
