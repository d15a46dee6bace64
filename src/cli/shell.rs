//! Line-oriented shell
//!
//! Reads one command per line, splits it with shell quoting rules and parses
//! it with clap. Budgets and expenses live for the length of the session.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use super::budget::{handle_budget_command, BudgetCommands};
use super::expense::{handle_expense_command, ExpenseCommands};
use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::{BudgetPresenter, DisplayOptions, TerminalPresenter};
use crate::error::{BudgetError, BudgetResult};
use crate::services::{BudgetManager, ExpenseLedger};

pub const PROMPT: &str = "budget> ";

/// One parsed shell line
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show all commands
    Help,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// An interactive or scripted budgeting session
pub struct Session<W: Write> {
    manager: BudgetManager<TerminalPresenter<W>>,
    ledger: ExpenseLedger,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self::with_options(out, DisplayOptions::from(settings))
    }

    pub fn with_options(out: W, opts: DisplayOptions) -> Self {
        Self {
            manager: BudgetManager::new(TerminalPresenter::new(out, opts)),
            ledger: ExpenseLedger::new(),
        }
    }

    /// Audit budget changes made during the session
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.manager = self.manager.with_audit(audit);
        self
    }

    pub fn manager(&self) -> &BudgetManager<TerminalPresenter<W>> {
        &self.manager
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn writer(&self) -> &W {
        self.manager.presenter().writer()
    }

    /// Run one line
    ///
    /// Every failure is written to the terminal; the session keeps going.
    pub fn execute(&mut self, line: &str) -> LoopControl {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return LoopControl::Continue;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(err) => {
                self.emit(&format!("Could not read command: {}", err));
                return LoopControl::Continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                let rendered = err.render().to_string();
                self.emit(rendered.trim_end());
                return LoopControl::Continue;
            }
        };

        tracing::debug!(command = ?parsed.command, "shell command");

        match self.dispatch(parsed.command) {
            Ok(control) => control,
            Err(err) => {
                self.emit(&format!("Error: {}", err));
                LoopControl::Continue
            }
        }
    }

    /// Read and run lines until end of input or `exit`
    pub fn run<R: BufRead>(&mut self, input: R, interactive: bool) -> BudgetResult<()> {
        let mut lines = input.lines();

        loop {
            if interactive {
                self.manager.presenter_mut().prompt(PROMPT);
            }

            let line = match lines.next() {
                Some(line) => {
                    line.map_err(|e| BudgetError::Io(format!("Failed to read input: {}", e)))?
                }
                None => break,
            };

            if self.execute(&line) == LoopControl::Exit {
                break;
            }
        }

        tracing::info!(
            budgets = self.manager.len(),
            expenses = self.ledger.len(),
            "session ended"
        );
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> BudgetResult<LoopControl> {
        match command {
            ShellCommand::Budget(cmd) => {
                handle_budget_command(&mut self.manager, self.ledger.expenses(), cmd)?;
            }
            ShellCommand::Expense(cmd) => {
                handle_expense_command(&mut self.ledger, self.manager.presenter_mut(), cmd)?;
            }
            ShellCommand::Help => self.manager.presenter_mut().budget_help(),
            ShellCommand::Exit => return Ok(LoopControl::Exit),
        }

        Ok(LoopControl::Continue)
    }

    fn emit(&mut self, text: &str) {
        self.manager.presenter_mut().emit(text);
    }
}
