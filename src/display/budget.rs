//! Budget display formatting
//!
//! Formats budget outcomes, the month table, and the expense list.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{Budget, Expense, Money};
use crate::services::budget::{BudgetLine, BudgetReport};

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Spending ratio at which a budget is flagged as nearly used up
const WARN_PERCENT: f64 = 75.0;

/// Static help text for the budget commands
pub const BUDGET_HELP: &str = "\
Budget commands:
  budget add <name> <limit>       Create a budget with a monthly limit
  budget delete <name>            Delete a budget (expenses are kept)
  budget set <name> <limit>       Change the limit of a budget
  budget find <keyword>           Search budget names (case-sensitive)
  budget list [-m MONTH] [-y YEAR]
                                  Show spending against every budget
  budget help                     Show this help

Expense commands:
  expense add <amount> <category> [-d YYYY-MM-DD] [--description TEXT]
  expense list

Names containing spaces must be quoted: budget add \"Eating Out\" 120";

/// Options shared by the formatting functions
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub color: bool,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            color: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl DisplayOptions {
    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Render a date, using ISO format if `date_format` cannot render it
    fn date(&self, date: NaiveDate) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", date.format(&self.date_format)).is_ok() {
            rendered
        } else {
            date.format("%Y-%m-%d").to_string()
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "budget"
    } else {
        "budgets"
    }
}

pub fn format_budget_added(budget: &Budget, count: usize, opts: &DisplayOptions) -> String {
    format!(
        "Budget added: {} (limit: {})\nYou now have {} {}.",
        budget.name(),
        opts.money(budget.limit()),
        count,
        plural(count)
    )
}

pub fn format_budget_deleted(budget: &Budget, count: usize, opts: &DisplayOptions) -> String {
    format!(
        "Budget deleted: {} (limit: {})\nYou now have {} {}.",
        budget.name(),
        opts.money(budget.limit()),
        count,
        plural(count)
    )
}

pub fn format_budget_set(budget: &Budget, count: usize, opts: &DisplayOptions) -> String {
    format!(
        "Budget updated: {} now has a limit of {}\nYou have {} {}.",
        budget.name(),
        opts.money(budget.limit()),
        count,
        plural(count)
    )
}

pub fn format_name_used(name: &str) -> String {
    format!("A budget named '{}' already exists. Pick another name.", name)
}

pub fn format_limit_negative() -> String {
    "The budget limit cannot be negative.".to_string()
}

pub fn format_not_found(name: &str) -> String {
    format!("Budget '{}' does not exist.", name)
}

pub fn format_expense_added(expense: &Expense, count: usize, opts: &DisplayOptions) -> String {
    format!(
        "Expense added: {} {} [{}]\nYou now have {} {}.",
        opts.date(expense.date),
        opts.money(expense.amount),
        expense.category,
        count,
        if count == 1 { "expense" } else { "expenses" }
    )
}

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

fn format_line(
    index: usize,
    line: &BudgetLine,
    name_width: usize,
    opts: &DisplayOptions,
) -> String {
    let spent = format!("{:>12}", opts.money(line.spent));
    let pct = line.percent_used();

    let spent = if line.is_over_limit() {
        opts.paint(&spent, RED)
    } else if pct >= WARN_PERCENT {
        opts.paint(&spent, YELLOW)
    } else {
        opts.paint(&spent, GREEN)
    };

    format!(
        "{:>3}. {:<width$}  {} / {:<12} {:>5}",
        index,
        line.name,
        spent,
        opts.money(line.limit),
        format_percentage(pct),
        width = name_width
    )
}

/// Format the month report, one row per budget
pub fn format_budget_table(report: &BudgetReport, opts: &DisplayOptions) -> String {
    let label = report.window.label();
    let mut output = format!("Budgets for {}\n", label);

    if report.lines.is_empty() {
        output.push_str("No budgets found.\n\nRun 'budget add <name> <limit>' to create one.");
        return output;
    }

    let name_width = report.name_width.max("Budget".len());
    output.push_str(&format!(
        "     {:<width$}  {:>12} / {:<12} {:>5}\n",
        "Budget",
        "Spent",
        "Limit",
        "Used",
        width = name_width
    ));
    output.push_str(&format!("{}\n", "─".repeat(name_width + 41)));

    for (i, line) in report.lines.iter().enumerate() {
        output.push_str(&format_line(i + 1, line, name_width, opts));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", "─".repeat(name_width + 41)));
    output.push_str(&format!(
        "Total spent in {}: {}",
        label,
        opts.money(report.total_spent)
    ));

    output
}

/// Format the expense ledger
pub fn format_expense_list(expenses: &[Expense], opts: &DisplayOptions) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max("Category".len());

    let mut output = format!(
        "{:>3}  {:<10}  {:<width$}  {:>12}  {}\n",
        "#",
        "Date",
        "Category",
        "Amount",
        "Description",
        width = category_width
    );

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<10}  {:<width$}  {:>12}  {}\n",
            i + 1,
            opts.date(expense.date),
            expense.category,
            opts.money(expense.amount),
            expense.description,
            width = category_width
        ));
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthWindow;
    use chrono::NaiveDate;

    fn report(lines: Vec<BudgetLine>) -> BudgetReport {
        let name_width = lines.iter().map(|l| l.name.len()).max().unwrap_or(0);
        let total_spent = Money::from_cents(lines.iter().map(|l| l.spent.cents()).sum());
        BudgetReport {
            window: MonthWindow::new(3, 2024).unwrap(),
            lines,
            name_width,
            total_spent,
        }
    }

    fn line(name: &str, limit: i64, spent: i64) -> BudgetLine {
        BudgetLine {
            name: name.to_string(),
            limit: Money::from_cents(limit),
            spent: Money::from_cents(spent),
        }
    }

    #[test]
    fn test_format_empty_table() {
        let output = format_budget_table(&report(vec![]), &DisplayOptions::default());
        assert!(output.starts_with("Budgets for March 2024"));
        assert!(output.contains("No budgets found."));
    }

    #[test]
    fn test_format_table_rows_aligned() {
        let output = format_budget_table(
            &report(vec![line("Food", 10000, 2000), line("Entertainment", 5000, 0)]),
            &DisplayOptions::default(),
        );

        assert!(output.contains("  1. Food           "));
        assert!(output.contains("  2. Entertainment  "));
        assert!(output.contains("$20.00 / $100.00"));
        assert!(output.contains("20%"));
        assert!(output.ends_with("Total spent in March 2024: $20.00"));
    }

    #[test]
    fn test_colors_follow_spending() {
        let opts = DisplayOptions {
            color: true,
            ..DisplayOptions::default()
        };
        let over = format_line(1, &line("Food", 100, 200), 4, &opts);
        let near = format_line(1, &line("Food", 100, 80), 4, &opts);
        let fine = format_line(1, &line("Food", 100, 10), 4, &opts);

        assert!(over.contains(RED));
        assert!(near.contains(YELLOW));
        assert!(fine.contains(GREEN));
        assert!(!format_line(1, &line("Food", 100, 200), 4, &DisplayOptions::default())
            .contains('\x1b'));
    }

    #[test]
    fn test_outcome_messages() {
        let opts = DisplayOptions::default();
        let budget = Budget::new("Food", Money::from_cents(10000)).unwrap();

        assert_eq!(
            format_budget_added(&budget, 1, &opts),
            "Budget added: Food (limit: $100.00)\nYou now have 1 budget."
        );
        assert!(format_budget_deleted(&budget, 0, &opts).ends_with("You now have 0 budgets."));
        assert_eq!(format_not_found("Travel"), "Budget 'Travel' does not exist.");
    }

    #[test]
    fn test_currency_symbol() {
        let opts = DisplayOptions {
            currency_symbol: "€".to_string(),
            ..DisplayOptions::default()
        };
        let budget = Budget::new("Food", Money::from_cents(500)).unwrap();
        assert!(format_budget_set(&budget, 1, &opts).contains("€5.00"));
    }

    #[test]
    fn test_format_expense_list() {
        let opts = DisplayOptions::default();
        assert_eq!(format_expense_list(&[], &opts), "No expenses recorded.");

        let expenses = vec![Expense::new(
            Money::from_cents(1250),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
        .with_description("lunch")];
        let output = format_expense_list(&expenses, &opts);
        assert!(output.contains("2024-03-05"));
        assert!(output.contains("$12.50"));
        assert!(output.ends_with("lunch"));
    }

    #[test]
    fn test_unusable_date_format_falls_back_to_iso() {
        let opts = DisplayOptions {
            date_format: "%Q".to_string(),
            ..DisplayOptions::default()
        };
        let expense = Expense::new(
            Money::from_cents(2000),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );

        assert!(format_expense_added(&expense, 1, &opts).contains("2024-03-05"));
        assert!(format_expense_list(&[expense], &opts).contains("2024-03-05"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(80.0), "80%");
    }
}
