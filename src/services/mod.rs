//! Service layer for budget-cli
//!
//! Business logic on top of the models: budget bookkeeping and the expense
//! filters used for month reports.

pub mod budget;
pub mod expense;

pub use budget::{BudgetLine, BudgetManager, BudgetReport};
pub use expense::{filter_by_category, filter_by_date, sum_amounts, ExpenseLedger};
