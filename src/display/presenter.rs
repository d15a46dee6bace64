//! Presenter seam between the budget manager and the terminal
//!
//! The manager never prints. Every outcome goes through a `BudgetPresenter`
//! that the manager owns for its whole lifetime.

use std::io::Write;

use super::budget::{
    format_budget_added, format_budget_deleted, format_budget_set, format_budget_table,
    format_limit_negative, format_name_used, format_not_found, DisplayOptions, BUDGET_HELP,
};
use crate::config::Settings;
use crate::models::Budget;
use crate::services::budget::BudgetReport;

/// Receives the outcome of every budget operation
pub trait BudgetPresenter {
    fn budget_name_used(&mut self, name: &str);
    fn budget_limit_negative(&mut self);
    fn budget_not_found(&mut self, name: &str);
    /// Any other rejected input, such as an empty name
    fn budget_invalid(&mut self, reason: &str);
    fn budget_added(&mut self, budget: &Budget, count: usize);
    fn budget_deleted(&mut self, budget: &Budget, count: usize);
    fn budget_set(&mut self, budget: &Budget, count: usize);
    fn budget_list(&mut self, report: &BudgetReport);
    fn budget_help(&mut self);
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            color: settings.color,
            date_format: settings.date_format.clone(),
        }
    }
}

/// Writes formatted outcomes to any writer (stdout, a buffer in tests)
pub struct TerminalPresenter<W: Write> {
    out: W,
    opts: DisplayOptions,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, opts: DisplayOptions) -> Self {
        Self { out, opts }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.opts
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one block of text followed by a newline
    ///
    /// Outcomes are side-channel only, so a failed write is logged and dropped.
    pub fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }

    /// Write a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) {
        if let Err(err) = write!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
        }
    }
}

impl<W: Write> BudgetPresenter for TerminalPresenter<W> {
    fn budget_name_used(&mut self, name: &str) {
        self.emit(&format_name_used(name));
    }

    fn budget_limit_negative(&mut self) {
        self.emit(&format_limit_negative());
    }

    fn budget_not_found(&mut self, name: &str) {
        self.emit(&format_not_found(name));
    }

    fn budget_invalid(&mut self, reason: &str) {
        self.emit(reason);
    }

    fn budget_added(&mut self, budget: &Budget, count: usize) {
        let text = format_budget_added(budget, count, &self.opts);
        self.emit(&text);
    }

    fn budget_deleted(&mut self, budget: &Budget, count: usize) {
        let text = format_budget_deleted(budget, count, &self.opts);
        self.emit(&text);
    }

    fn budget_set(&mut self, budget: &Budget, count: usize) {
        let text = format_budget_set(budget, count, &self.opts);
        self.emit(&text);
    }

    fn budget_list(&mut self, report: &BudgetReport) {
        let text = format_budget_table(report, &self.opts);
        self.emit(&text);
    }

    fn budget_help(&mut self) {
        self.emit(BUDGET_HELP);
    }
}
