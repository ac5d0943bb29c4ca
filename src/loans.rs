//! Alerts for lent books that are due back soon or overdue.

use crate::common::{condition, record};

use aws_sdk_dynamodb::types;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Attribute naming who a book is lent to.
pub const BORROWER: &str = "prestado_a";

/// Attribute holding the agreed return date, `YYYY-MM-DD`.
pub const RETURN_DATE: &str = "retorno_fecha";

/// Loans due within this many days are reported.
pub const ALERT_WINDOW_DAYS: i64 = 3;

const RETURN_DATE_FORMAT: &str = "%Y-%m-%d";
const RULE: &str = "================================";

/// Scan filter selecting books that are currently lent out.
pub fn lent_filter() -> condition::ConditionMap {
    condition::ConditionMap::Leaves(
        condition::LogicalOperator::And,
        vec![
            condition::KeyCondition::exists(BORROWER),
            condition::KeyCondition::exists(RETURN_DATE),
        ],
    )
}

/// How pressing a due loan is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Urgency {
    /// The return date has passed.
    Overdue,
    /// The book is due back today.
    DueToday,
    /// The book is due back within the alert window.
    DueSoon,
}

/// A lent book whose return date falls inside the alert window.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueLoan {
    /// Identity of the book.
    pub id: Option<String>,
    /// Title of the book.
    pub title: Option<String>,
    /// Who has the book.
    #[serde(rename = "prestado_a")]
    pub borrower: Option<String>,
    /// Agreed return date as stored.
    #[serde(rename = "retorno_fecha")]
    pub return_date: String,
    /// Whole days until the return date; negative once overdue.
    pub days_remaining: i64,
}

impl DueLoan {
    fn from_item(item: &record::Item, today: NaiveDate) -> Option<Self> {
        let return_date = text(item, RETURN_DATE)?;
        let due = NaiveDate::parse_from_str(&return_date, RETURN_DATE_FORMAT).ok()?;
        Some(Self {
            id: text(item, record::ID),
            title: text(item, "title"),
            borrower: text(item, BORROWER),
            return_date,
            days_remaining: due.signed_duration_since(today).num_days(),
        })
    }

    /// Classify the loan by days remaining.
    pub fn urgency(&self) -> Urgency {
        match self.days_remaining {
            days if days < 0 => Urgency::Overdue,
            0 => Urgency::DueToday,
            _ => Urgency::DueSoon,
        }
    }
}

/// String attribute `name`; any other type reads as absent.
fn text(item: &record::Item, name: &str) -> Option<String> {
    match item.get(name) {
        Some(types::AttributeValue::S(value)) => Some(value.clone()),
        _ => None,
    }
}

/// Lent books due back within [`ALERT_WINDOW_DAYS`] of `today`, overdue ones included.
///
/// Items without a readable return date are skipped.
pub fn due_loans(items: &[record::Item], today: NaiveDate) -> Vec<DueLoan> {
    items
        .iter()
        .filter_map(|item| DueLoan::from_item(item, today))
        .filter(|loan| loan.days_remaining <= ALERT_WINDOW_DAYS)
        .collect()
}

/// Human readable alert for a set of due loans.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    /// One line summary.
    pub subject: String,
    /// Full text grouped by urgency.
    pub message: String,
}

impl Notification {
    /// Render the alert for `loans`, stamped with `checked_at`.
    pub fn new(loans: &[DueLoan], checked_at: DateTime<Utc>) -> Self {
        let plural = if loans.len() == 1 { "" } else { "s" };
        let subject = format!("Alert: {} book{plural} due", loans.len());

        let mut message = format!("BORROWED BOOKS ALERT\n{RULE}\n\n");
        message.push_str(&section("OVERDUE", loans, Urgency::Overdue, |loan| {
            format!("Overdue by {} days ({})", -loan.days_remaining, loan.return_date)
        }));
        message.push_str(&section("DUE TODAY", loans, Urgency::DueToday, |loan| {
            format!("Must be returned TODAY ({})", loan.return_date)
        }));
        message.push_str(&section("DUE SOON", loans, Urgency::DueSoon, |loan| {
            let plural = if loan.days_remaining > 1 { "s" } else { "" };
            format!(
                "Due in {} day{plural} ({})",
                loan.days_remaining, loan.return_date
            )
        }));
        message.push_str(&format!(
            "{RULE}\nTotal books on alert: {}\nChecked at: {}",
            loans.len(),
            checked_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        Self { subject, message }
    }
}

/// Heading plus one entry per loan of `urgency`; empty when there are none.
fn section(
    heading: &str,
    loans: &[DueLoan],
    urgency: Urgency,
    detail: impl Fn(&DueLoan) -> String,
) -> String {
    let entries: Vec<String> = loans
        .iter()
        .filter(|loan| loan.urgency() == urgency)
        .map(|loan| {
            format!(
                "• \"{}\" - Lent to: {}\n  {}\n\n",
                loan.title.as_deref().unwrap_or("untitled"),
                loan.borrower.as_deref().unwrap_or("unknown"),
                detail(loan),
            )
        })
        .collect();
    if entries.is_empty() {
        return String::new();
    }
    format!("{heading}:\n{}", entries.concat())
}
