//! Display formatting for terminal output
//!
//! `budget` turns budgets, expenses and month reports into text.
//! `presenter` is the seam the budget manager reports through.

pub mod budget;
pub mod presenter;

pub use budget::{
    format_budget_table, format_expense_added, format_expense_list, DisplayOptions, BUDGET_HELP,
};
pub use presenter::{BudgetPresenter, TerminalPresenter};
