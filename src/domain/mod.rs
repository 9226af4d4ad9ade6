//! Plain data types for expenses, the monthly budget and everything derived from them.
//! No I/O lives here.

pub mod budget;
pub mod category;
pub mod common;
pub mod expense;
pub mod state;
pub mod summary;

pub use budget::{Budget, BudgetDefaults, BudgetUpdate};
pub use category::{catalog, CategoryCatalog, CategoryDefinition, CategoryGroup, Presentation};
pub use common::{Amounted, Displayable, Identifiable};
pub use expense::{Expense, ExpenseType};
pub use state::{AppState, PersistedState};
pub use summary::{
    ActivityStats, Advice, AdviceKind, CategorySpending, DistributionSlice, FinancialSummary,
    ProgressStatus,
};
