//! Budget service
//!
//! `BudgetManager` owns the budget list and reports every outcome through its
//! presenter. Month reports are built by `summarize`, which filters the
//! expense ledger by category and by the month window.

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::BudgetPresenter;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Budget, BudgetValidationError, Expense, Money, MonthWindow};
use crate::services::expense::{filter_by_category, filter_by_date, sum_amounts};

/// Spending against one budget for a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub name: String,
    pub limit: Money,
    pub spent: Money,
}

impl BudgetLine {
    /// Limit minus spending; negative when overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }

    pub fn percent_used(&self) -> f64 {
        self.spent.percent_of(self.limit)
    }
}

/// Month-to-date spending for every budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReport {
    pub window: MonthWindow,
    /// One line per budget, in collection order
    pub lines: Vec<BudgetLine>,
    /// Length of the longest budget name, for column alignment
    pub name_width: usize,
    /// Spending across all lines
    pub total_spent: Money,
}

impl BudgetReport {
    pub fn month(&self) -> u32 {
        self.window.month()
    }

    pub fn year(&self) -> i32 {
        self.window.year()
    }

    pub fn line(&self, name: &str) -> Option<&BudgetLine> {
        self.lines.iter().find(|line| line.name == name)
    }
}

/// Owns the budget list and the presenter that reports on it
pub struct BudgetManager<P: BudgetPresenter> {
    budgets: Vec<Budget>,
    presenter: P,
    audit: Option<AuditLogger>,
}

impl<P: BudgetPresenter> BudgetManager<P> {
    /// Create a manager with no budgets
    pub fn new(presenter: P) -> Self {
        Self {
            budgets: Vec::new(),
            presenter,
            audit: None,
        }
    }

    /// Record successful changes in an audit log
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Look up a budget by exact name
    pub fn get(&self, name: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Create a budget
    ///
    /// Reports a duplicate name first, then a negative limit. Nothing is
    /// added in either case.
    pub fn add_budget(&mut self, name: &str, limit: Money) {
        match self.try_add(name, limit) {
            Ok(index) => {
                let count = self.budgets.len();
                self.presenter.budget_added(&self.budgets[index], count);
            }
            Err(err) => self.report_failure(&err),
        }
    }

    /// Remove a budget by exact name
    ///
    /// Expenses recorded against the budget's category are left alone.
    pub fn delete_budget(&mut self, name: &str) {
        match self.try_delete(name) {
            Ok(removed) => {
                let count = self.budgets.len();
                self.presenter.budget_deleted(&removed, count);
            }
            Err(err) => self.report_failure(&err),
        }
    }

    /// Change a budget's limit in place
    pub fn set_budget(&mut self, name: &str, limit: Money) {
        match self.try_set(name, limit) {
            Ok(index) => {
                let count = self.budgets.len();
                self.presenter.budget_set(&self.budgets[index], count);
            }
            Err(err) => self.report_failure(&err),
        }
    }

    /// Budgets whose name contains `keyword` (case-sensitive)
    ///
    /// Only an empty result is reported; matches are returned to the caller
    /// without being shown.
    pub fn find_budget(&mut self, keyword: &str) -> Vec<Budget> {
        let found: Vec<Budget> = self
            .budgets
            .iter()
            .filter(|b| b.name().contains(keyword))
            .cloned()
            .collect();

        tracing::debug!(keyword, matches = found.len(), "budget search");

        if found.is_empty() {
            self.presenter.budget_not_found(keyword);
        }
        found
    }

    /// Build the month report without presenting it
    ///
    /// Fails on an invalid month/year, or when a month's spending does not
    /// fit in a `Money`.
    pub fn summarize(
        &self,
        month: u32,
        year: i32,
        expenses: &[Expense],
    ) -> BudgetResult<BudgetReport> {
        let window = MonthWindow::new(month, year)?;

        let mut name_width = 0;
        let mut total_spent = Money::zero();
        let mut lines = Vec::with_capacity(self.budgets.len());

        for budget in &self.budgets {
            name_width = name_width.max(budget.name().chars().count());

            let in_category = filter_by_category(expenses, budget.name());
            let in_month = filter_by_date(in_category, window.start_date(), window.end_date());

            let spent = sum_amounts(in_month)?;
            total_spent = total_spent
                .checked_add(spent)
                .ok_or_else(|| BudgetError::Validation("Spending total is too large".into()))?;

            lines.push(BudgetLine {
                name: budget.name().to_string(),
                limit: budget.limit(),
                spent,
            });
        }

        Ok(BudgetReport {
            window,
            lines,
            name_width,
            total_spent,
        })
    }

    /// Present every budget with its spending for the month
    ///
    /// An invalid month/year is returned to the caller and nothing is shown.
    pub fn print_budgets(
        &mut self,
        month: u32,
        year: i32,
        expenses: &[Expense],
    ) -> BudgetResult<()> {
        let report = self.summarize(month, year, expenses)?;
        self.presenter.budget_list(&report);
        Ok(())
    }

    /// Present the budget command help
    pub fn budget_help(&mut self) {
        self.presenter.budget_help();
    }

    fn try_add(&mut self, name: &str, limit: Money) -> BudgetResult<usize> {
        if self.get(name).is_some() {
            return Err(BudgetError::DuplicateName(name.to_string()));
        }
        if limit.is_negative() {
            return Err(BudgetError::NegativeLimit {
                name: name.to_string(),
                limit,
            });
        }

        let budget = Budget::new(name, limit).map_err(|e| validation_error(name, limit, e))?;
        self.record(AuditEntry::create(name, &budget));
        self.budgets.push(budget);

        tracing::info!(budget = name, %limit, count = self.budgets.len(), "budget added");
        Ok(self.budgets.len() - 1)
    }

    fn try_delete(&mut self, name: &str) -> BudgetResult<Budget> {
        let index = self.position(name)?;
        let removed = self.budgets.remove(index);
        self.record(AuditEntry::delete(name, &removed));

        tracing::info!(budget = name, count = self.budgets.len(), "budget deleted");
        Ok(removed)
    }

    fn try_set(&mut self, name: &str, limit: Money) -> BudgetResult<usize> {
        let index = self.position(name)?;
        let before = self.budgets[index].clone();

        self.budgets[index]
            .set_limit(limit)
            .map_err(|e| validation_error(name, limit, e))?;

        let after = &self.budgets[index];
        let entry = AuditEntry::update(
            name,
            &before,
            after,
            Some(format!("limit: {} -> {}", before.limit(), after.limit())),
        );
        self.record(entry);

        tracing::info!(budget = name, %limit, "budget limit set");
        Ok(index)
    }

    fn position(&self, name: &str) -> BudgetResult<usize> {
        self.budgets
            .iter()
            .position(|b| b.name() == name)
            .ok_or_else(|| BudgetError::NotFound(name.to_string()))
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(err) = audit.log(&entry) {
                tracing::warn!(error = %err, budget = %entry.budget, "failed to write audit entry");
            }
        }
    }

    fn report_failure(&mut self, err: &BudgetError) {
        tracing::debug!(error = %err, "budget operation rejected");
        match err {
            BudgetError::DuplicateName(name) => self.presenter.budget_name_used(name),
            BudgetError::NegativeLimit { .. } => self.presenter.budget_limit_negative(),
            BudgetError::NotFound(name) => self.presenter.budget_not_found(name),
            other => self.presenter.budget_invalid(&other.to_string()),
        }
    }
}

fn validation_error(name: &str, limit: Money, err: BudgetValidationError) -> BudgetError {
    match err {
        BudgetValidationError::NegativeLimit => BudgetError::NegativeLimit {
            name: name.to_string(),
            limit,
        },
        BudgetValidationError::EmptyName => BudgetError::Validation(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        NameUsed(String),
        LimitNegative,
        NotFound(String),
        Invalid(String),
        Added(String, usize),
        Deleted(String, usize),
        Set(String, usize),
        Listed(BudgetReport),
        Help,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl BudgetPresenter for Recorder {
        fn budget_name_used(&mut self, name: &str) {
            self.events.push(Event::NameUsed(name.to_string()));
        }
        fn budget_limit_negative(&mut self) {
            self.events.push(Event::LimitNegative);
        }
        fn budget_not_found(&mut self, name: &str) {
            self.events.push(Event::NotFound(name.to_string()));
        }
        fn budget_invalid(&mut self, reason: &str) {
            self.events.push(Event::Invalid(reason.to_string()));
        }
        fn budget_added(&mut self, budget: &Budget, count: usize) {
            self.events.push(Event::Added(budget.name().to_string(), count));
        }
        fn budget_deleted(&mut self, budget: &Budget, count: usize) {
            self.events.push(Event::Deleted(budget.name().to_string(), count));
        }
        fn budget_set(&mut self, budget: &Budget, count: usize) {
            self.events.push(Event::Set(budget.name().to_string(), count));
        }
        fn budget_list(&mut self, report: &BudgetReport) {
            self.events.push(Event::Listed(report.clone()));
        }
        fn budget_help(&mut self) {
            self.events.push(Event::Help);
        }
    }

    fn manager() -> BudgetManager<Recorder> {
        BudgetManager::new(Recorder::default())
    }

    fn dollars(amount: i64) -> Money {
        Money::from_cents(amount * 100)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn last_event(m: &BudgetManager<Recorder>) -> &Event {
        m.presenter().events.last().unwrap()
    }

    #[test]
    fn test_add_budget() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));

        assert_eq!(m.len(), 1);
        assert_eq!(m.get("Food").unwrap().limit(), dollars(100));
        assert_eq!(last_event(&m), &Event::Added("Food".into(), 1));
    }

    #[test]
    fn test_add_duplicate_keeps_original() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Food", dollars(50));

        assert_eq!(m.len(), 1);
        assert_eq!(m.get("Food").unwrap().limit(), dollars(100));
        assert_eq!(last_event(&m), &Event::NameUsed("Food".into()));
    }

    #[test]
    fn test_duplicate_checked_before_negative_limit() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Food", dollars(-5));
        assert_eq!(last_event(&m), &Event::NameUsed("Food".into()));
    }

    #[test]
    fn test_add_negative_limit() {
        let mut m = manager();
        m.add_budget("Food", Money::from_cents(-1));

        assert!(m.is_empty());
        assert_eq!(last_event(&m), &Event::LimitNegative);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut m = manager();
        m.add_budget("", dollars(10));

        assert!(m.is_empty());
        assert!(matches!(last_event(&m), Event::Invalid(_)));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("food", dollars(20));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_delete_budget() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Travel", dollars(300));
        m.delete_budget("Food");

        assert_eq!(m.len(), 1);
        assert!(m.get("Food").is_none());
        assert_eq!(last_event(&m), &Event::Deleted("Food".into(), 1));
    }

    #[test]
    fn test_delete_missing_on_empty() {
        let mut m = manager();
        m.delete_budget("Travel");

        assert!(m.is_empty());
        assert_eq!(last_event(&m), &Event::NotFound("Travel".into()));
    }

    #[test]
    fn test_set_budget_keeps_name_and_position() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Travel", dollars(300));
        m.add_budget("Rent", dollars(900));
        m.set_budget("Travel", dollars(450));

        let names: Vec<&str> = m.budgets().iter().map(|b| b.name()).collect();
        assert_eq!(names, ["Food", "Travel", "Rent"]);
        assert_eq!(m.budgets()[1].limit(), dollars(450));
        assert_eq!(last_event(&m), &Event::Set("Travel".into(), 3));
    }

    #[test]
    fn test_set_budget_failures() {
        let mut m = manager();
        m.set_budget("Food", dollars(10));
        assert_eq!(last_event(&m), &Event::NotFound("Food".into()));

        m.add_budget("Food", dollars(100));
        m.set_budget("Food", dollars(-10));
        assert_eq!(last_event(&m), &Event::LimitNegative);
        assert_eq!(m.get("Food").unwrap().limit(), dollars(100));
    }

    #[test]
    fn test_negative_limit_error_names_budget_and_amount() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        let negative = Money::from_cents(-500);

        for err in [
            m.try_add("Travel", negative).unwrap_err(),
            m.try_set("Food", negative).unwrap_err(),
        ] {
            match err {
                BudgetError::NegativeLimit { name, limit } => {
                    assert!(name == "Travel" || name == "Food");
                    assert_eq!(limit, negative);
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_find_budget() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Fast Food", dollars(40));
        m.add_budget("Travel", dollars(300));
        let events_before = m.presenter().events.len();

        let found = m.find_budget("Food");
        assert_eq!(found.len(), 2);
        // matches are not presented
        assert_eq!(m.presenter().events.len(), events_before);

        assert!(m.find_budget("food").is_empty());
        assert_eq!(last_event(&m), &Event::NotFound("food".into()));
    }

    #[test]
    fn test_summarize_filters_by_month() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        let expenses = vec![
            Expense::new(dollars(20), "Food", date(2024, 3, 5)),
            Expense::new(dollars(50), "Food", date(2024, 4, 1)),
        ];

        let report = m.summarize(3, 2024, &expenses).unwrap();
        assert_eq!(report.line("Food").unwrap().spent, dollars(20));
        assert_eq!(report.total_spent, dollars(20));
    }

    #[test]
    fn test_summarize_spending_too_large() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        let huge = Money::parse("92233720368547758").unwrap();
        let expenses = vec![
            Expense::new(huge, "Food", date(2024, 3, 5)),
            Expense::new(huge, "Food", date(2024, 3, 6)),
        ];

        let err = m.print_budgets(3, 2024, &expenses).unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        assert!(!matches!(last_event(&m), Event::Listed(_)));
    }

    #[test]
    fn test_summarize_window_edges_and_exact_category() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.add_budget("Groceries", dollars(200));
        let expenses = vec![
            Expense::new(dollars(1), "Food", date(2024, 2, 1)),
            Expense::new(dollars(2), "Food", date(2024, 2, 29)),
            Expense::new(dollars(4), "Food", date(2024, 1, 31)),
            Expense::new(dollars(8), "food", date(2024, 2, 10)),
            Expense::new(dollars(16), "Groceries", date(2024, 2, 10)),
        ];

        let report = m.summarize(2, 2024, &expenses).unwrap();
        assert_eq!(report.lines[0].spent, dollars(3));
        assert_eq!(report.lines[1].spent, dollars(16));
        assert_eq!(report.name_width, "Groceries".len());
    }

    #[test]
    fn test_print_budgets_presents_report() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        m.print_budgets(3, 2024, &[]).unwrap();

        match last_event(&m) {
            Event::Listed(report) => {
                assert_eq!(report.month(), 3);
                assert_eq!(report.year(), 2024);
                assert!(report.lines[0].spent.is_zero());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_print_budgets_invalid_month() {
        let mut m = manager();
        m.add_budget("Food", dollars(100));
        let events_before = m.presenter().events.len();

        let err = m.print_budgets(13, 2024, &[]).unwrap_err();
        assert!(err.is_invalid_month_year());
        assert_eq!(m.presenter().events.len(), events_before);
    }

    #[test]
    fn test_budget_help() {
        let mut m = manager();
        m.budget_help();
        assert_eq!(last_event(&m), &Event::Help);
    }

    #[test]
    fn test_audit_entries_written() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut m = manager().with_audit(logger.clone());

        m.add_budget("Food", dollars(100));
        m.add_budget("Food", dollars(100));
        m.set_budget("Food", dollars(120));
        m.delete_budget("Food");

        let entries = logger.read_all().unwrap();
        let ops: Vec<String> = entries.iter().map(|e| e.operation.to_string()).collect();
        assert_eq!(ops, ["CREATE", "UPDATE", "DELETE"]);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("limit: $100.00 -> $120.00")
        );
    }
}
