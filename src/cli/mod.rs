//! CLI command handlers
//!
//! Bridges clap argument parsing with the budget manager and expense ledger.

pub mod budget;
pub mod expense;
pub mod shell;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use shell::{LoopControl, Session};
