//! Budget CLI commands
//!
//! Implements the budget commands of the shell: create, delete, change limit,
//! search, and the month report.

use clap::Subcommand;

use crate::display::BudgetPresenter;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Money, MonthWindow};
use crate::services::BudgetManager;

/// Budget subcommands
#[derive(Subcommand, Debug)]
#[command(disable_help_subcommand = true)]
pub enum BudgetCommands {
    /// Create a budget
    Add {
        /// Budget name (also the expense category it tracks)
        name: String,
        /// Monthly limit (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Delete a budget
    #[command(alias = "del")]
    Delete {
        /// Budget name
        name: String,
    },

    /// Change the limit of a budget
    Set {
        /// Budget name
        name: String,
        /// New monthly limit
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Search budget names
    Find {
        /// Text to look for (case-sensitive)
        keyword: String,
    },

    /// Show spending against every budget for a month
    #[command(alias = "ls")]
    List {
        /// Month number (1-12); defaults to the current month
        #[arg(short, long, allow_hyphen_values = true)]
        month: Option<u32>,
        /// Year; defaults to the current year
        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<i32>,
    },

    /// Show budget command help
    Help,
}

fn parse_limit(limit: &str) -> BudgetResult<Money> {
    Money::parse(limit).map_err(|e| BudgetError::Parse(e.to_string()))
}

/// Handle a budget command
///
/// Rejected operations are reported by the manager's presenter. Only an
/// invalid month/year (or unparsable input) comes back as an error.
pub fn handle_budget_command<P: BudgetPresenter>(
    manager: &mut BudgetManager<P>,
    expenses: &[Expense],
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Add { name, limit } => {
            let limit = parse_limit(&limit)?;
            manager.add_budget(&name, limit);
        }
        BudgetCommands::Delete { name } => {
            manager.delete_budget(&name);
        }
        BudgetCommands::Set { name, limit } => {
            let limit = parse_limit(&limit)?;
            manager.set_budget(&name, limit);
        }
        BudgetCommands::Find { keyword } => {
            // matches are only logged; the terminal shows nothing on success
            let found = manager.find_budget(&keyword);
            tracing::info!(keyword = %keyword, matches = found.len(), "budget find");
        }
        BudgetCommands::List { month, year } => {
            let current = MonthWindow::current()?;
            let month = month.unwrap_or_else(|| current.month());
            let year = year.unwrap_or_else(|| current.year());
            manager.print_budgets(month, year, expenses)?;
        }
        BudgetCommands::Help => manager.budget_help(),
    }

    Ok(())
}
