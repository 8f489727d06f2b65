//! Form validation — required fields plus the betting-content parse.
//!
//! Issues are reported in a fixed order: station, region, date,
//! customer 1, betting content, then one issue per rejected line.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::engine::aggregator::EntryTotals;
use crate::parser::{parse_content, LineError};
use crate::types::{BettingEntry, EntryForm};

/// Required form fields, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormField {
    Station,
    Region,
    Date,
    Customer1,
    BettingContent,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Station => "Station-Number-Type",
            FormField::Region => "Region",
            FormField::Date => "Date",
            FormField::Customer1 => "Customer 1",
            FormField::BettingContent => "Betting content",
        }
    }
}

/// One reason a submission cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIssue {
    MissingField(FormField),
    Line(LineError),
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::MissingField(field) => write!(f, "{} is required", field.label()),
            EntryIssue::Line(err) => write!(f, "{err}"),
        }
    }
}

/// Issues go over the wire as their user-facing message.
impl Serialize for EntryIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<LineError> for EntryIssue {
    fn from(err: LineError) -> Self {
        EntryIssue::Line(err)
    }
}

/// Outcome of checking a form: what parsed, what is wrong, and totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntryCheck {
    pub entries: Vec<BettingEntry>,
    pub issues: Vec<EntryIssue>,
    pub totals: EntryTotals,
}

impl EntryCheck {
    /// No issues at all: the form may be saved.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues rendered as user-facing strings.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Fields that are missing from `form`, in reporting order.
pub fn missing_fields(form: &EntryForm) -> Vec<FormField> {
    let mut missing = Vec::new();
    if form.station.trim().is_empty() {
        missing.push(FormField::Station);
    }
    if form.region.is_none() {
        missing.push(FormField::Region);
    }
    if form.date.is_none() {
        missing.push(FormField::Date);
    }
    if form.customer1.trim().is_empty() {
        missing.push(FormField::Customer1);
    }
    if form.betting_content.trim().is_empty() {
        missing.push(FormField::BettingContent);
    }
    missing
}

/// Validate required fields and parse the betting content.
pub fn check_form(form: &EntryForm) -> EntryCheck {
    let mut issues: Vec<EntryIssue> = missing_fields(form)
        .into_iter()
        .map(EntryIssue::MissingField)
        .collect();

    let mut entries = Vec::new();
    if !form.betting_content.trim().is_empty() {
        let outcome = parse_content(&form.betting_content, &form.station);
        issues.extend(outcome.errors.into_iter().map(EntryIssue::from));
        entries = outcome.entries;
    }

    let totals = EntryTotals::from_entries(&entries);
    EntryCheck {
        entries,
        issues,
        totals,
    }
}
