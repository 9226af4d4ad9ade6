#![doc(test(attr(deny(warnings))))]

//! MoneyMind tracks expenses against a monthly budget split into needs and
//! wants, and derives the summary, chart data and advice a front-end shows.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{BudgetController, DashboardView};
pub use crate::errors::{BudgetError, Result, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_filter(None);
}

/// Same as [`init`], adding an extra `EnvFilter` directive such as `moneymind=debug`.
pub fn init_with_filter(directive: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("MoneyMind tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
