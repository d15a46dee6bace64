//! Expense service
//!
//! Holds the in-memory expense ledger and the filters budgets use to pick
//! out the expenses that count against them.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};

/// Expenses whose category is exactly `category`
///
/// No case folding or trimming: "food" does not match a "Food" budget.
pub fn filter_by_category<'a, I>(expenses: I, category: &str) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.category == category)
        .collect()
}

/// Expenses dated within [start, end], both ends inclusive
pub fn filter_by_date<'a, I>(expenses: I, start: NaiveDate, end: NaiveDate) -> Vec<&'a Expense>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

/// Total amount of the given expenses
///
/// Fails with a validation error when the total does not fit in a `Money`.
pub fn sum_amounts<'a, I>(expenses: I) -> BudgetResult<Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .try_fold(Money::zero(), |total, e| total.checked_add(e.amount))
        .ok_or_else(|| BudgetError::Validation("Spending total is too large".into()))
}

/// Ordered in-memory list of expenses
#[derive(Debug, Default, Clone)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense
    pub fn add(&mut self, expense: Expense) -> BudgetResult<&Expense> {
        if expense.amount.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Expense amount cannot be negative: {}",
                expense.amount
            )));
        }
        if expense.category.is_empty() {
            return Err(BudgetError::Validation(
                "Expense category cannot be empty".into(),
            ));
        }

        tracing::debug!(category = %expense.category, amount = %expense.amount, "expense recorded");
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
