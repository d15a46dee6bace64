//! Custom error types for budget-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget-cli operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A budget with this name is already in the collection
    #[error("Budget name already used: {0}")]
    DuplicateName(String),

    /// Budget limits must be zero or more
    #[error("Budget limit cannot be negative: {name} ({limit})")]
    NegativeLimit { name: String, limit: Money },

    /// No budget with this name exists
    #[error("Budget does not exist: {0}")]
    NotFound(String),

    /// Month/year pair does not name a real calendar month
    #[error("Invalid month/year: {month}/{year}")]
    InvalidMonthYear { month: u32, year: i32 },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// User input that could not be parsed (amounts, dates)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BudgetError {
    /// Check if this error comes from month/year validation
    pub fn is_invalid_month_year(&self) -> bool {
        matches!(self, Self::InvalidMonthYear { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-cli operations
pub type BudgetResult<T> = Result<T, BudgetError>;
