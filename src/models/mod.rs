//! Core data models for budget-cli
//!
//! Budgets, the expenses they are measured against, money amounts, and the
//! calendar month window used for reporting.

pub mod budget;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetValidationError};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use period::{is_valid_month_year, MonthWindow};
