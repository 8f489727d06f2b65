//! Line grammar for betting content.
//!
//! ```text
//! line    := numbers ws+ amount ws* type? <anything>
//! numbers := digits ("," ws* digits)*
//! amount  := digits ("," digits)*
//! type    := "2D" | "3D"          (any case)
//! ```
//!
//! Text after the grammar is ignored. Commas in the amount are thousands
//! separators.

use serde::Serialize;
use std::fmt;

use super::scanner::Scanner;
use crate::types::{BetType, BettingEntry};

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineErrorKind {
    InvalidFormat,
    InvalidAmount,
}

/// A rejected line, numbered among the non-empty lines (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub kind: LineErrorKind,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineErrorKind::InvalidFormat => write!(
                f,
                "Line {}: Invalid format. Use \"numbers amount type\"",
                self.line
            ),
            LineErrorKind::InvalidAmount => write!(f, "Line {}: Invalid amount", self.line),
        }
    }
}

impl std::error::Error for LineError {}

/// The raw pieces of a line that fits the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub numbers: &'a str,
    pub amount: &'a str,
    pub bet_type: Option<BetType>,
}

impl LineMatch<'_> {
    /// The amount with thousands separators removed. `None` when it is
    /// zero or does not fit in a `u64`.
    pub fn amount_value(&self) -> Option<u64> {
        let digits: String = self.amount.chars().filter(|c| *c != ',').collect();
        digits.parse::<u64>().ok().filter(|v| *v > 0)
    }
}

/// Match a trimmed line against the grammar.
pub fn match_line(line: &str) -> Option<LineMatch<'_>> {
    let mut s = Scanner::new(line);

    let start = s.position();
    s.digits()?;
    while s.comma_then_digit(true) {
        s.eat(',');
        s.whitespace();
        s.digits();
    }
    let numbers = s.slice(start, s.position());

    if s.whitespace() == 0 {
        return None;
    }

    let start = s.position();
    s.digits()?;
    while s.comma_then_digit(false) {
        s.eat(',');
        s.digits();
    }
    let amount = s.slice(start, s.position());

    s.whitespace();
    let bet_type = if s.eat_keyword("2D") {
        Some(BetType::TwoDigit)
    } else if s.eat_keyword("3D") {
        Some(BetType::ThreeDigit)
    } else {
        None
    };

    Some(LineMatch {
        numbers,
        amount,
        bet_type,
    })
}

/// Parse one trimmed, non-empty line into an entry.
///
/// An explicit `2D`/`3D` on the line wins; otherwise the type comes from
/// the station label.
pub fn parse_line(line: &str, line_no: usize, station: &str) -> Result<BettingEntry, LineError> {
    let m = match_line(line).ok_or(LineError {
        line: line_no,
        kind: LineErrorKind::InvalidFormat,
    })?;

    let amount = m.amount_value().ok_or(LineError {
        line: line_no,
        kind: LineErrorKind::InvalidAmount,
    })?;

    let bet_type = match m.bet_type {
        Some(explicit) => explicit,
        None => BetType::from_station(station),
    };

    Ok(BettingEntry {
        id: format!("entry-{line_no}"),
        numbers: m.numbers.to_string(),
        amount,
        bet_type,
    })
}
