pub mod advice_service;
pub mod budget_service;
pub mod classification_service;
pub mod expense_service;
pub mod summary_service;

pub use advice_service::AdviceService;
pub use budget_service::BudgetService;
pub use classification_service::ClassificationService;
pub use expense_service::{ExpenseInput, ExpenseService};
pub use summary_service::SummaryService;

use crate::errors::ValidationError;

pub type ServiceResult<T> = Result<T, ValidationError>;
