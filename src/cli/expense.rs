//! Expense CLI commands
//!
//! Records expenses in the session ledger so budgets have something to be
//! measured against.

use chrono::NaiveDate;
use clap::Subcommand;
use std::io::Write;

use crate::display::{format_expense_added, format_expense_list, TerminalPresenter};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money};
use crate::services::ExpenseLedger;

/// Expense subcommands
#[derive(Subcommand, Debug)]
#[command(disable_help_subcommand = true)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category; must match a budget name exactly to count against it
        category: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// What the money was spent on
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List recorded expenses
    #[command(alias = "ls")]
    List,
}

fn parse_date(date: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| BudgetError::Parse(format!("Invalid date '{}': {}", date, e)))
}

/// Handle an expense command
pub fn handle_expense_command<W: Write>(
    ledger: &mut ExpenseLedger,
    presenter: &mut TerminalPresenter<W>,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| BudgetError::Parse(e.to_string()))?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = Expense::new(amount, category, date).with_description(description);
            ledger.add(expense)?;
            if let Some(added) = ledger.expenses().last() {
                let text = format_expense_added(added, ledger.len(), presenter.options());
                presenter.emit(&text);
            }
        }
        ExpenseCommands::List => {
            let text = format_expense_list(ledger.expenses(), presenter.options());
            presenter.emit(&text);
        }
    }

    Ok(())
}
