pub mod controller;
pub mod dashboard;
pub mod notice;
pub mod services;
pub mod utils;

pub use controller::BudgetController;
pub use dashboard::{recompute, DashboardView};
pub use notice::{Notice, NoticeKind};
