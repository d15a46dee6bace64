//! Budget model
//!
//! A budget is a named spending category with a monthly limit. The name is
//! the key that expenses are matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A named spending limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget name, also the expense category it tracks
    name: String,

    /// Spending limit for one month
    limit: Money,
}

impl Budget {
    /// Create a budget, checking the model invariants
    pub fn new(name: impl Into<String>, limit: Money) -> Result<Self, BudgetValidationError> {
        let budget = Self {
            name: name.into(),
            limit,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Replace the limit; the name never changes after creation
    pub fn set_limit(&mut self, limit: Money) -> Result<(), BudgetValidationError> {
        if limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        self.limit = limit;
        Ok(())
    }

    /// Validate the budget
    fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (limit: {})", self.name, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Budget name cannot be empty"),
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
