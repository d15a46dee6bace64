//! Expense model
//!
//! Expenses belong to the ledger. Budgets only read them: the category string
//! is compared against budget names and the date against a month window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A dated, categorized spending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Category, matched exactly against budget names
    pub category: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.date, self.amount, self.category)?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}
