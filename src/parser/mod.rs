//! Betting-content parser.
//!
//! Turns a block of free text (one bet per line) into `BettingEntry`
//! records and per-line errors. A bad line never stops the parse; every
//! non-empty line yields exactly one entry or one error.

pub mod line;
pub mod scanner;

use serde::Serialize;
use tracing::debug;

use crate::types::BettingEntry;
pub use line::{match_line, parse_line, LineError, LineErrorKind, LineMatch};

/// Result of parsing a whole block of betting content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub entries: Vec<BettingEntry>,
    pub errors: Vec<LineError>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of non-empty lines seen.
    pub fn lines(&self) -> usize {
        self.entries.len() + self.errors.len()
    }
}

/// Iterate over the trimmed, non-empty lines of `text`, numbered from 1.
pub fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(i, l)| (i + 1, l))
}

/// Parse every line of `text`. `station` supplies the default bet type
/// for lines that do not name one.
pub fn parse_content(text: &str, station: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (line_no, line) in content_lines(text) {
        match parse_line(line, line_no, station) {
            Ok(entry) => outcome.entries.push(entry),
            Err(err) => outcome.errors.push(err),
        }
    }

    debug!(
        station,
        lines = outcome.lines(),
        entries = outcome.entries.len(),
        errors = outcome.errors.len(),
        "Betting content parsed"
    );

    outcome
}
