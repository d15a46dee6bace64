use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_cli::audit::AuditLogger;
use budget_cli::cli::Session;
use budget_cli::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly spending budgets for the terminal",
    long_about = "Track named spending budgets and see how this month's expenses \
                  measure up against each limit. Commands are entered in a shell \
                  session; run 'help' inside the shell for the command list."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a budgeting shell (the default)
    Shell {
        /// Run commands from a file instead of standard input
        #[arg(short, long)]
        script: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default configuration file
    Init,
}

fn main() -> Result<()> {
    budget_cli::init_tracing();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell { script: None }) {
        Commands::Shell { script } => run_shell(&paths, &settings, script)?,
        Commands::Config => {
            println!("budget-cli Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Color:           {}", settings.color);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Configuration already exists at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote default configuration to: {}", paths.settings_file().display());
            }
        }
    }

    Ok(())
}

fn run_shell(paths: &BudgetPaths, settings: &Settings, script: Option<PathBuf>) -> Result<()> {
    let stdout = io::stdout();
    let mut settings = settings.clone();
    settings.color = settings.color && stdout.is_terminal();

    let mut session = Session::new(stdout.lock(), &settings);
    if settings.audit_enabled {
        session = session.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(stdin.lock(), interactive)?;
        }
    }

    Ok(())
}
