//! Command handlers
//!
//! Thin driver layer over the store, reports, and importer: every handler
//! maps one subcommand onto one core operation and prints a plain-text
//! table. No interactive rendering lives here.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::LedgerResult;
use crate::import::statement::DEFAULT_CATEGORY;
use crate::import::{import_statement, StatementSource};
use crate::models::{
    default_categories, suggest_category, InvestmentType, LoanPaymentId, Money, MonthlyIncome,
    PaymentSource, Person, TransactionId,
};
use crate::store::{
    LedgerStore, NewCategory, NewInvestment, NewLoan, NewTransaction,
};

/// Transaction management commands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        date: NaiveDate,
        /// Signed amount; negative marks a refund/credit
        amount: Money,
        /// Merchant or description
        description: String,
        /// Which household member paid
        person: Person,
        /// Category name; omitted, it is inferred from the description's
        /// keywords (falling back to the generic category)
        #[arg(long)]
        category: Option<String>,
        /// Payment channel
        #[arg(long, default_value = "credit_card")]
        source: PaymentSource,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List transactions
    List {
        /// Only this person's transactions
        #[arg(long)]
        person: Option<Person>,
    },
    /// Delete a transaction by id
    Delete { id: TransactionId },
    /// Remove all transactions (undoable with undo-clear)
    Clear,
    /// Restore the transactions removed by the last clear
    UndoClear,
}

/// Category management commands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        name: String,
        /// Hex color token, e.g. #EF4444
        color: String,
        /// Merchant keywords for auto-categorization
        #[arg(long)]
        keyword: Vec<String>,
    },
    /// List categories
    List,
    /// Set (or clear, by omitting the amount) a category's monthly budget
    SetBudget {
        /// Category name
        name: String,
        /// Budget ceiling; omit to clear
        amount: Option<Money>,
    },
    /// Delete a category by name
    Delete { name: String },
}

/// Monthly income commands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record an income entry
    Add {
        person: Person,
        amount: Money,
        /// Income date (YYYY-MM-DD)
        date: NaiveDate,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List income entries, optionally for one month
    List {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Delete the entries matching a person and date
    Delete { person: Person, date: NaiveDate },
}

/// Loan management commands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Add a loan
    Add {
        /// Principal
        initial_amount: Money,
        /// Start date (YYYY-MM-DD)
        start_date: NaiveDate,
        /// Lender name
        lender: String,
    },
    /// List loans with balances and payments
    List,
    /// Record a payment against a loan
    Pay {
        /// Lender name of the loan
        lender: String,
        date: NaiveDate,
        amount: Money,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List one loan's payments with their ids
    Payments { lender: String },
    /// Delete a payment, restoring its amount to the loan balance
    DeletePayment {
        lender: String,
        payment_id: LoanPaymentId,
    },
    /// Withdraw (borrow again) against a loan's savings pool
    Withdraw { lender: String, amount: Money },
    /// Delete a loan by lender name
    Delete { lender: String },
}

/// Investment management commands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Add an investment
    Add {
        name: String,
        /// stocks|bonds|savings|pension|property|other
        kind: InvestmentType,
        initial_amount: Money,
        current_amount: Money,
        start_date: NaiveDate,
        #[arg(long)]
        monthly_contribution: Option<Money>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List investments
    List,
    /// Delete an investment by name
    Delete { name: String },
}

/// Aggregation reports
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Current-month income/expense/savings overview
    Monthly,
    /// Spending breakdown by category
    Categories,
    /// Spending split between the household members
    Persons,
    /// Categories at 80%+ of their monthly budget
    Alerts,
    /// Portfolio totals
    Investments,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn handle_init(store: &mut LedgerStore) {
    if !store.categories().is_empty() {
        println!("Ledger already initialized ({} categories)", store.categories().len());
        return;
    }
    for category in default_categories() {
        store.add_category(NewCategory {
            name: category.name,
            color: category.color,
            keywords: category.keywords,
        });
    }
    println!("Created {} default categories", store.categories().len());
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "date")]
    date: NaiveDate,
    #[tabled(rename = "amount")]
    amount: Money,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "category")]
    category: String,
    #[tabled(rename = "person")]
    person: Person,
    #[tabled(rename = "source")]
    source: PaymentSource,
}

pub fn handle_transaction_command(
    store: &mut LedgerStore,
    command: TransactionCommands,
) -> LedgerResult<()> {
    match command {
        TransactionCommands::Add {
            date,
            amount,
            description,
            person,
            category,
            source,
            notes,
        } => {
            let category = category.unwrap_or_else(|| {
                suggest_category(&description, store.categories())
                    .unwrap_or(DEFAULT_CATEGORY)
                    .to_string()
            });
            let id = store.add_transaction(NewTransaction {
                date,
                amount,
                description,
                category,
                person,
                source,
                notes,
            });
            println!("Added transaction {}", id.as_uuid());
        }
        TransactionCommands::List { person } => {
            let rows: Vec<TransactionRow> = store
                .transactions()
                .iter()
                .filter(|t| person.map_or(true, |p| t.person == p))
                .map(|t| TransactionRow {
                    id: t.id.as_uuid().to_string(),
                    date: t.date,
                    amount: t.amount,
                    description: t.description.clone(),
                    category: t.category.clone(),
                    person: t.person,
                    source: t.source,
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::sharp()));
        }
        TransactionCommands::Delete { id } => {
            store.delete_transaction(id);
            println!("Deleted (if present) {}", id.as_uuid());
        }
        TransactionCommands::Clear => {
            store.clear_transactions();
            println!("Cleared all transactions (undo with: transaction undo-clear)");
        }
        TransactionCommands::UndoClear => {
            if store.undo_last_clear() {
                println!("Restored {} transactions", store.transactions().len());
            } else {
                println!("Nothing to undo");
            }
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "color")]
    color: String,
    #[tabled(rename = "budget")]
    budget: String,
    #[tabled(rename = "keywords")]
    keywords: String,
}

pub fn handle_category_command(
    store: &mut LedgerStore,
    command: CategoryCommands,
) -> LedgerResult<()> {
    match command {
        CategoryCommands::Add {
            name,
            color,
            keyword,
        } => {
            store.add_category(NewCategory {
                name: name.clone(),
                color,
                keywords: keyword,
            });
            println!("Added category '{}'", name);
        }
        CategoryCommands::List => {
            let rows: Vec<CategoryRow> = store
                .categories()
                .iter()
                .map(|c| CategoryRow {
                    name: c.name.clone(),
                    color: c.color.clone(),
                    budget: c
                        .budget
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| "-".into()),
                    keywords: c.keywords.join(", "),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::sharp()));
        }
        CategoryCommands::SetBudget { name, amount } => {
            match store.category_by_name(&name).map(|c| c.id) {
                Some(id) => {
                    store.set_budget(id, amount);
                    println!("Budget for '{}' set", name);
                }
                None => println!("No category named '{}'", name),
            }
        }
        CategoryCommands::Delete { name } => {
            match store.category_by_name(&name).map(|c| c.id) {
                Some(id) => {
                    store.delete_category(id);
                    println!("Deleted category '{}'", name);
                }
                None => println!("No category named '{}'", name),
            }
        }
    }
    Ok(())
}

pub fn handle_income_command(
    store: &mut LedgerStore,
    command: IncomeCommands,
) -> LedgerResult<()> {
    match command {
        IncomeCommands::Add {
            person,
            amount,
            date,
            notes,
        } => {
            let mut income = MonthlyIncome::new(person, amount, date);
            income.notes = notes;
            store.add_monthly_income(income);
            println!("Recorded income for {}", person);
        }
        IncomeCommands::List { year, month } => {
            let entries: Vec<&MonthlyIncome> = match (year, month) {
                (Some(y), Some(m)) => store.monthly_incomes_for(y, m),
                _ => store.monthly_incomes().iter().collect(),
            };
            for income in entries {
                println!(
                    "{}  {}  {}  {}",
                    income.date,
                    income.person,
                    income.amount,
                    income.notes.as_deref().unwrap_or("")
                );
            }
        }
        IncomeCommands::Delete { person, date } => {
            store.delete_monthly_income(person, date);
            println!("Deleted income entries for {} on {}", person, date);
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct LoanRow {
    #[tabled(rename = "lender")]
    lender: String,
    #[tabled(rename = "initial")]
    initial: Money,
    #[tabled(rename = "remaining")]
    remaining: Money,
    #[tabled(rename = "payments")]
    payments: usize,
    #[tabled(rename = "start date")]
    start_date: NaiveDate,
}

pub fn handle_loan_command(store: &mut LedgerStore, command: LoanCommands) -> LedgerResult<()> {
    let loan_by_lender = |store: &LedgerStore, lender: &str| {
        store.loans().iter().find(|l| l.lender == lender).map(|l| l.id)
    };

    match command {
        LoanCommands::Add {
            initial_amount,
            start_date,
            lender,
        } => {
            store.add_loan(NewLoan {
                initial_amount,
                start_date,
                lender: lender.clone(),
            });
            println!("Added loan from '{}'", lender);
        }
        LoanCommands::List => {
            let rows: Vec<LoanRow> = store
                .loans()
                .iter()
                .map(|l| LoanRow {
                    lender: l.lender.clone(),
                    initial: l.initial_amount,
                    remaining: l.remaining_amount,
                    payments: l.payments.len(),
                    start_date: l.start_date,
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::sharp()));
        }
        LoanCommands::Pay {
            lender,
            date,
            amount,
            notes,
        } => match loan_by_lender(store, &lender) {
            Some(id) => {
                let _ = store.add_loan_payment(id, date, amount, notes);
                println!("Recorded payment of {} to '{}'", amount, lender);
            }
            None => println!("No loan from '{}'", lender),
        },
        LoanCommands::Payments { lender } => {
            match store.loans().iter().find(|l| l.lender == lender) {
                Some(loan) => {
                    for payment in &loan.payments {
                        println!(
                            "{}  {}  {}  {}",
                            payment.id.as_uuid(),
                            payment.date,
                            payment.amount,
                            payment.notes.as_deref().unwrap_or("")
                        );
                    }
                }
                None => println!("No loan from '{}'", lender),
            }
        }
        LoanCommands::DeletePayment { lender, payment_id } => {
            match loan_by_lender(store, &lender) {
                Some(id) => {
                    store.delete_loan_payment(id, payment_id);
                    println!("Deleted payment (if present) from '{}'", lender);
                }
                None => println!("No loan from '{}'", lender),
            }
        }
        LoanCommands::Withdraw { lender, amount } => match loan_by_lender(store, &lender) {
            Some(id) => {
                store.withdraw_from_loan(id, amount);
                println!("Withdrew {} against '{}'", amount, lender);
            }
            None => println!("No loan from '{}'", lender),
        },
        LoanCommands::Delete { lender } => match loan_by_lender(store, &lender) {
            Some(id) => {
                store.delete_loan(id);
                println!("Deleted loan from '{}'", lender);
            }
            None => println!("No loan from '{}'", lender),
        },
    }
    Ok(())
}

pub fn handle_investment_command(
    store: &mut LedgerStore,
    command: InvestmentCommands,
) -> LedgerResult<()> {
    match command {
        InvestmentCommands::Add {
            name,
            kind,
            initial_amount,
            current_amount,
            start_date,
            monthly_contribution,
            notes,
        } => {
            store.add_investment(NewInvestment {
                name: name.clone(),
                kind,
                initial_amount,
                current_amount,
                start_date,
                monthly_contribution,
                notes,
            });
            println!("Added investment '{}'", name);
        }
        InvestmentCommands::List => {
            for investment in store.investments() {
                println!(
                    "{}  {}  invested {}  now {}  ({})",
                    investment.name,
                    investment.kind,
                    investment.initial_amount,
                    investment.current_amount,
                    investment.gain()
                );
            }
        }
        InvestmentCommands::Delete { name } => {
            match store.investments().iter().find(|i| i.name == name).map(|i| i.id) {
                Some(id) => {
                    store.delete_investment(id);
                    println!("Deleted investment '{}'", name);
                }
                None => println!("No investment named '{}'", name),
            }
        }
    }
    Ok(())
}

pub fn handle_report_command(store: &LedgerStore, command: ReportCommands) -> LedgerResult<()> {
    match command {
        ReportCommands::Monthly => {
            let summary = store.monthly_summary(today());
            println!("Income:       {}", summary.income);
            println!("Expenses:     {}", summary.expenses);
            println!("Balance:      {}", summary.balance);
            println!("Savings goal: {}", summary.savings);
            if !summary.top_category.is_empty() {
                println!("Top category: {}", summary.top_category);
            }
        }
        ReportCommands::Categories => {
            #[derive(Tabled)]
            struct Row {
                #[tabled(rename = "category")]
                category: String,
                #[tabled(rename = "amount")]
                amount: Money,
                #[tabled(rename = "share")]
                share: String,
                #[tabled(rename = "budget")]
                budget: String,
                #[tabled(rename = "remaining")]
                remaining: String,
            }
            let rows: Vec<Row> = store
                .category_summary()
                .into_iter()
                .map(|s| Row {
                    category: s.category,
                    amount: s.amount,
                    share: percent(s.percentage),
                    budget: s.budget.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
                    remaining: s
                        .remaining_budget
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| "-".into()),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::sharp()));
        }
        ReportCommands::Persons => {
            for summary in store.person_summary() {
                println!(
                    "{:<6} {}  ({})",
                    summary.person.to_string(),
                    summary.amount,
                    percent(summary.percentage)
                );
            }
        }
        ReportCommands::Alerts => {
            let alerts = store.budget_alerts(today());
            if alerts.is_empty() {
                println!("No budget alerts");
            }
            for alert in alerts {
                println!(
                    "{}: spent {} of {} ({})",
                    alert.category,
                    alert.spent,
                    alert.budget,
                    percent(alert.percentage)
                );
            }
        }
        ReportCommands::Investments => {
            let summary = store.investment_summary();
            println!("Invested:              {}", summary.total_invested);
            println!("Current value:         {}", summary.total_value);
            println!(
                "Return:                {} ({})",
                summary.total_return,
                percent(summary.return_percentage)
            );
            println!("Monthly contributions: {}", summary.monthly_contributions);
        }
    }
    Ok(())
}

/// Import a statement file and append the batch, tagged with `person`
pub fn handle_import(
    store: &mut LedgerStore,
    file: PathBuf,
    source: StatementSource,
    person: Person,
) -> LedgerResult<()> {
    let batch = import_statement(&file, source)?;

    for error in &batch.errors {
        eprintln!("warning: {}", error);
    }

    if batch.success {
        store.import_transactions(person, batch.transactions);
        println!(
            "Imported {} transactions for {} ({} rows failed)",
            batch.records_processed,
            person,
            batch.errors.len()
        );
    } else {
        println!(
            "No rows imported ({} rows failed)",
            batch.errors.len()
        );
    }
    Ok(())
}

pub fn handle_savings_rate(store: &mut LedgerStore, percentage: f64) {
    store.set_savings_percentage(percentage);
    println!("Savings rate set to {:.1}%", percentage);
}
