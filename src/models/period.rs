//! Calendar month windows
//!
//! Budgets are always reported for one calendar month. A `MonthWindow` is the
//! validated month/year pair together with its first and last day.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Inclusive [first day, last day] range of one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthWindow {
    /// Validate a month/year pair
    ///
    /// Month must be 1-12 and year 1-9999.
    pub fn new(month: u32, year: i32) -> BudgetResult<Self> {
        let invalid = || BudgetError::InvalidMonthYear { month, year };

        if !(1..=9999).contains(&year) {
            return Err(invalid());
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;

        Ok(Self {
            start,
            end: next_month - Duration::days(1),
        })
    }

    /// Window for the current local month
    pub fn current() -> BudgetResult<Self> {
        let today = chrono::Local::now().date_naive();
        Self::new(today.month(), today.year())
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        let name = MONTH_NAMES[(self.month() - 1) as usize];
        format!("{} {}", name, self.year())
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Validate a month/year pair and return the last day of that month
pub fn is_valid_month_year(month: u32, year: i32) -> BudgetResult<NaiveDate> {
    MonthWindow::new(month, year).map(|window| window.end_date())
}
