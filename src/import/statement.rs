//! Credit-card statement parsing
//!
//! The pipeline runs in three phases over the first sheet of the workbook:
//! a header search (first row containing the transaction-date label), column
//! resolution (positions looked up by label within that row), and row
//! parsing (best-effort per row, errors accumulated). Rows only get a typed
//! shape once the columns are resolved; raw cell arrays never travel past
//! this module.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{Money, PaymentSource};

use super::{ImportBatch, ImportError, StatementSource, TransactionCandidate};

/// Transaction-date column label; also the header-row marker
pub const DATE_HEADER: &str = "תאריך עסקה";
/// Merchant name column label
pub const MERCHANT_HEADER: &str = "שם בית העסק";
/// Category column label
pub const CATEGORY_HEADER: &str = "קטגוריה";
/// Charge amount column label
pub const AMOUNT_HEADER: &str = "סכום חיוב";
/// Charge date column label (folded into notes when present)
pub const CHARGE_DATE_HEADER: &str = "תאריך חיוב";
/// Category assigned to rows whose category cell is empty or missing
pub const DEFAULT_CATEGORY: &str = "כללי";

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    date: usize,
    amount: usize,
    merchant: Option<usize>,
    category: Option<usize>,
    charge_date: Option<usize>,
}

impl ColumnLayout {
    /// Locate the columns by label containment within the header row
    ///
    /// Returns `None` when either required column (transaction date, charge
    /// amount) is missing.
    fn resolve(header: &[Data]) -> Option<Self> {
        let find = |label: &str| {
            header
                .iter()
                .position(|cell| cell_text(cell).contains(label))
        };

        Some(Self {
            date: find(DATE_HEADER)?,
            amount: find(AMOUNT_HEADER)?,
            merchant: find(MERCHANT_HEADER),
            category: find(CATEGORY_HEADER),
            charge_date: find(CHARGE_DATE_HEADER),
        })
    }
}

/// Import a statement file into a batch of transaction candidates
///
/// Reads the whole workbook into memory first; parsing itself never touches
/// the filesystem. Structural failures (unsupported source, unreadable
/// workbook, missing header or columns) abort the call; malformed rows do
/// not.
pub fn import_statement(
    path: &Path,
    source: StatementSource,
) -> Result<ImportBatch, ImportError> {
    match source {
        StatementSource::CreditCard => {}
        StatementSource::BankAccount => return Err(ImportError::UnsupportedSource),
    }

    info!(path = %path.display(), "importing credit card statement");
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ImportError::Workbook(e.to_string()))?;

    // First sheet only
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheet)?
        .map_err(|e| ImportError::Workbook(e.to_string()))?;
    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();

    parse_statement_rows(&rows)
}

/// Parse sheet rows that have already been read into memory
pub(crate) fn parse_statement_rows(rows: &[Vec<Data>]) -> Result<ImportBatch, ImportError> {
    let header_index = rows
        .iter()
        .position(|row| row.iter().any(|cell| cell_text(cell).contains(DATE_HEADER)))
        .ok_or(ImportError::HeaderRowNotFound)?;

    let layout =
        ColumnLayout::resolve(&rows[header_index]).ok_or(ImportError::RequiredColumnsMissing)?;
    debug!(header_index, ?layout, "resolved statement columns");

    let mut errors = Vec::new();
    let mut transactions = Vec::new();

    for (index, row) in rows.iter().enumerate().skip(header_index + 1) {
        // Rows missing a date or amount are padding, not errors
        if is_blank(row.get(layout.date)) || is_blank(row.get(layout.amount)) {
            continue;
        }

        match parse_row(row, &layout) {
            Ok(candidate) => transactions.push(candidate),
            Err(message) => errors.push(format!("row {}: {}", index + 1, message)),
        }
    }

    info!(
        accepted = transactions.len(),
        failed = errors.len(),
        "statement rows parsed"
    );

    Ok(ImportBatch {
        success: !transactions.is_empty(),
        records_processed: transactions.len(),
        errors,
        transactions,
    })
}

fn parse_row(row: &[Data], layout: &ColumnLayout) -> Result<TransactionCandidate, String> {
    // The blank check above guarantees both required cells exist
    let date = parse_date_cell(&row[layout.date])?;
    let amount = parse_amount_cell(&row[layout.amount])?;

    let description = layout
        .merchant
        .and_then(|i| row.get(i))
        .map(cell_text)
        .unwrap_or_default();

    let category = layout
        .category
        .and_then(|i| row.get(i))
        .map(cell_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let notes = layout
        .charge_date
        .and_then(|i| row.get(i))
        .map(cell_text)
        .filter(|s| !s.is_empty())
        .map(|value| format!("charge date: {}", value))
        .unwrap_or_default();

    Ok(TransactionCandidate {
        date,
        amount,
        description,
        category,
        source: PaymentSource::CreditCard,
        notes,
    })
}

/// Parse a date cell: `DD-MM-YYYY` / `DD/MM/YYYY` text, or a native
/// spreadsheet date (Excel serial)
fn parse_date_cell(cell: &Data) -> Result<NaiveDate, String> {
    match cell {
        Data::String(s) => parse_date_text(s.trim()),
        Data::DateTime(dt) => Ok(excel_serial_to_date(dt.as_f64())),
        Data::Float(f) => Ok(excel_serial_to_date(*f)),
        Data::Int(i) => Ok(excel_serial_to_date(*i as f64)),
        Data::DateTimeIso(s) => NaiveDate::parse_from_str(&s[..s.len().min(10)], "%Y-%m-%d")
            .map_err(|_| format!("invalid date: '{}'", s)),
        other => Err(format!("invalid date: '{}'", other)),
    }
}

fn parse_date_text(s: &str) -> Result<NaiveDate, String> {
    let separator = if s.contains('-') {
        '-'
    } else if s.contains('/') {
        '/'
    } else {
        return Err(format!("invalid date: '{}'", s));
    };

    let parts: Vec<&str> = s.split(separator).map(str::trim).collect();
    let &[day, month, year] = parts.as_slice() else {
        return Err(format!("invalid date: '{}'", s));
    };

    let day: u32 = day.parse().map_err(|_| format!("invalid date: '{}'", s))?;
    let month: u32 = month.parse().map_err(|_| format!("invalid date: '{}'", s))?;
    let year: i32 = year.parse().map_err(|_| format!("invalid date: '{}'", s))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| format!("invalid date: '{}'", s))
}

/// Convert an Excel serial day number to a calendar date
///
/// The epoch is 1899-12-30, accounting for the historical 1900 leap-year
/// bug.
fn excel_serial_to_date(serial: f64) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).expect("fixed epoch");
    base + chrono::Duration::days(serial as i64)
}

/// Parse an amount cell: numeric values pass through sign-preserved, strings
/// are stripped of currency symbol / separators / whitespace first
fn parse_amount_cell(cell: &Data) -> Result<Money, String> {
    match cell {
        Data::Float(f) => Ok(Money::from_float(*f)),
        Data::Int(i) => Ok(Money::from_float(*i as f64)),
        Data::String(s) => {
            Money::parse(s).map_err(|_| format!("invalid amount: '{}'", s.trim()))
        }
        other => Err(format!("invalid amount: '{}'", other)),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        other => other.to_string(),
    }
}

fn is_blank(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
