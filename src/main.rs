use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use homeledger::cli::{
    handle_category_command, handle_import, handle_income_command, handle_init,
    handle_investment_command, handle_loan_command, handle_report_command, handle_savings_rate,
    handle_transaction_command, CategoryCommands, IncomeCommands, InvestmentCommands,
    LoanCommands, ReportCommands, TransactionCommands,
};
use homeledger::config::LedgerPaths;
use homeledger::import::StatementSource;
use homeledger::models::Person;
use homeledger::storage::LedgerFile;
use homeledger::store::LedgerStore;

#[derive(Parser)]
#[command(
    name = "homeledger",
    version,
    about = "Household ledger: income/expense tracking, budgets, loans, investments, and statement import"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger with the default category set
    Init,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Loan management commands
    #[command(subcommand)]
    Loan(LoanCommands),

    /// Investment management commands
    #[command(subcommand)]
    Investment(InvestmentCommands),

    /// Import a credit-card statement export (XLSX)
    Import {
        /// Statement file
        file: PathBuf,
        /// Statement source format
        #[arg(long, default_value = "credit_card")]
        source: StatementSource,
        /// Household member the transactions belong to
        #[arg(long)]
        person: Person,
    },

    /// Aggregation reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Set the savings rate (percent of monthly income)
    SavingsRate { percentage: f64 },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let file = LedgerFile::new(paths.ledger_file());
    let mut store = LedgerStore::from_snapshot(file.load()?);

    match cli.command {
        Commands::Init => handle_init(&mut store),
        Commands::Transaction(command) => handle_transaction_command(&mut store, command)?,
        Commands::Category(command) => handle_category_command(&mut store, command)?,
        Commands::Income(command) => handle_income_command(&mut store, command)?,
        Commands::Loan(command) => handle_loan_command(&mut store, command)?,
        Commands::Investment(command) => handle_investment_command(&mut store, command)?,
        Commands::Import {
            file: statement,
            source,
            person,
        } => handle_import(&mut store, statement, source, person)?,
        Commands::Report(command) => handle_report_command(&store, command)?,
        Commands::SavingsRate { percentage } => handle_savings_rate(&mut store, percentage),
    }

    file.save(&store.snapshot())?;
    Ok(())
}
