//! budget-cli - monthly spending budgets for the terminal
//!
//! Budgets are named spending limits. Each month, every budget is measured
//! against the expenses whose category equals its name.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budgets, expenses, money and month windows
//! - `services`: Budget manager and expense filters
//! - `display`: Terminal formatting and the presenter seam
//! - `audit`: Audit log of budget changes
//! - `cli`: clap commands and the line-oriented shell
//!
//! # Example
//!
//! ```
//! use budget_cli::display::{DisplayOptions, TerminalPresenter};
//! use budget_cli::models::Money;
//! use budget_cli::services::BudgetManager;
//!
//! let presenter = TerminalPresenter::new(Vec::new(), DisplayOptions::default());
//! let mut budgets = BudgetManager::new(presenter);
//! budgets.add_budget("Food", Money::from_cents(10000));
//!
//! let report = budgets.summarize(3, 2024, &[]).unwrap();
//! assert_eq!(report.lines.len(), 1);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Once;

pub use error::{BudgetError, BudgetResult};

static INIT_TRACING: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "budget_cli=warn";

/// Install the global tracing subscriber, writing to stderr
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
