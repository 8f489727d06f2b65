//! Shared types for BETBOOK.
//!
//! These types form the data model used across the parser, the engine,
//! the ledger and the API. Amounts are whole VND (the dong has no minor
//! unit in practice), so they are plain integers throughout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lottery bet category, by number of digits wagered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum BetType {
    #[serde(rename = "2D")]
    TwoDigit,
    #[serde(rename = "3D")]
    ThreeDigit,
}

impl BetType {
    /// Default bet type encoded in a station label such as `Station-001-2D`.
    ///
    /// Labels mentioning `2D` default to two digits; everything else,
    /// including an empty label, defaults to three.
    pub fn from_station(station: &str) -> Self {
        if station.contains("2D") {
            BetType::TwoDigit
        } else {
            BetType::ThreeDigit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BetType::TwoDigit => "2D",
            BetType::ThreeDigit => "3D",
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `2d`, `2D`, `3d`, `3D`.
impl std::str::FromStr for BetType {
    type Err = BetbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2D" => Ok(BetType::TwoDigit),
            "3D" => Ok(BetType::ThreeDigit),
            _ => Err(BetbookError::UnknownValue {
                kind: "bet type",
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Geographic partition used for filtering customers and bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    North,
    Central,
    South,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::North => write!(f, "North"),
            Region::Central => write!(f, "Central"),
            Region::South => write!(f, "South"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = BetbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Region::North),
            "central" => Ok(Region::Central),
            "south" => Ok(Region::South),
            _ => Err(BetbookError::UnknownValue {
                kind: "region",
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Lifecycle of a recorded bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "Active"),
            RecordStatus::Completed => write!(f, "Completed"),
            RecordStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CustomerType {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
    New,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Vip => write!(f, "VIP"),
            CustomerType::Regular => write!(f, "Regular"),
            CustomerType::New => write!(f, "New"),
        }
    }
}

impl std::str::FromStr for CustomerType {
    type Err = BetbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vip" => Ok(CustomerType::Vip),
            "regular" => Ok(CustomerType::Regular),
            "new" => Ok(CustomerType::New),
            _ => Err(BetbookError::UnknownValue {
                kind: "customer type",
                value: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerStatus::Active => write!(f, "Active"),
            CustomerStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

// Deserialization goes through `FromStr`, so JSON bodies and query
// strings accept any case and surrounding whitespace.

impl TryFrom<String> for BetType {
    type Error = BetbookError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Region {
    type Error = BetbookError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for CustomerType {
    type Error = BetbookError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Betting entry (parsed from one line of free text)
// ---------------------------------------------------------------------------

/// A single bet extracted from one line of betting content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingEntry {
    /// Synthetic id `entry-<n>`, `n` being the 1-based non-empty line index.
    pub id: String,
    /// Comma-separated digit groups exactly as typed, e.g. `"12, 45"`.
    pub numbers: String,
    /// Stake in VND, always > 0.
    pub amount: u64,
    #[serde(rename = "type")]
    pub bet_type: BetType,
}

impl BettingEntry {
    /// The individual digit groups in `numbers`, whitespace stripped.
    pub fn number_groups(&self) -> Vec<&str> {
        self.numbers.split(',').map(str::trim).collect()
    }
}

impl fmt::Display for BettingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.id, self.numbers, self.amount, self.bet_type
        )
    }
}

// ---------------------------------------------------------------------------
// Ledger records
// ---------------------------------------------------------------------------

/// A bet as shown in the betting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRecord {
    pub id: String,
    pub customer: String,
    pub region: Region,
    pub bet_type: BetType,
    pub amount: u64,
    pub date: NaiveDate,
    pub status: RecordStatus,
    pub numbers: String,
    pub has_incorrect_info: bool,
}

/// A customer directory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub customer_type: CustomerType,
    pub created_date: NaiveDate,
    pub total_bets: u32,
    pub total_amount: u64,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Aggregated per-customer report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub customer: String,
    pub region: Region,
    pub game_type: BetType,
    pub total_amount: u64,
    pub total_bets: u32,
    pub win_amount: u64,
    /// Percentage of bets won, 0–100.
    pub win_rate: f64,
    pub date: NaiveDate,
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) bets={} total={} won={} rate={:.0}%",
            self.customer,
            self.region,
            self.game_type,
            self.total_bets,
            self.total_amount,
            self.win_amount,
            self.win_rate,
        )
    }
}

// ---------------------------------------------------------------------------
// Entry form
// ---------------------------------------------------------------------------

/// The add-entry form as submitted by a user.
///
/// Blank strings and `None` mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryForm {
    /// Station label, e.g. `Station-001-2D`.
    pub station: String,
    pub region: Option<Region>,
    pub date: Option<NaiveDate>,
    pub customer1: String,
    pub customer1_type: Option<CustomerType>,
    pub customer2: String,
    pub customer2_type: Option<CustomerType>,
    pub betting_content: String,
}

impl EntryForm {
    /// Sample form used to demo the entry screen.
    pub fn sample(date: NaiveDate) -> Self {
        Self {
            station: "Station-001-2D".into(),
            region: Some(Region::North),
            date: Some(date),
            customer1: "John Doe".into(),
            customer1_type: Some(CustomerType::Vip),
            customer2: "Jane Smith".into(),
            customer2_type: Some(CustomerType::Regular),
            betting_content: [
                "12, 45 500000 2D",
                "123, 456 750000 3D",
                "89, 90 300000 2D",
                "234, 567 1000000 3D",
                "78, 91 450000 2D",
                "555, 666 800000 3D",
                "11, 22 600000 2D",
                "777, 888 950000 3D",
            ]
            .join("\n"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for BETBOOK.
///
/// Validation problems with user input are not errors; they are reported
/// as `EntryIssue` values alongside the parsed entries.
#[derive(Debug, thiserror::Error)]
pub enum BetbookError {
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Settlement error ({source_name}): {message}")]
    Settlement { source_name: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- BetType tests --

    #[test]
    fn test_bet_type_display() {
        assert_eq!(format!("{}", BetType::TwoDigit), "2D");
        assert_eq!(format!("{}", BetType::ThreeDigit), "3D");
    }

    #[test]
    fn test_bet_type_from_str_case_insensitive() {
        assert_eq!("2d".parse::<BetType>().unwrap(), BetType::TwoDigit);
        assert_eq!("3D".parse::<BetType>().unwrap(), BetType::ThreeDigit);
        assert!("4D".parse::<BetType>().is_err());
    }

    #[test]
    fn test_bet_type_serializes_as_label() {
        assert_eq!(serde_json::to_string(&BetType::TwoDigit).unwrap(), "\"2D\"");
        let parsed: BetType = serde_json::from_str("\"3D\"").unwrap();
        assert_eq!(parsed, BetType::ThreeDigit);
    }

    #[test]
    fn test_bet_type_from_station() {
        assert_eq!(BetType::from_station("Station-001-2D"), BetType::TwoDigit);
        assert_eq!(BetType::from_station("Station-002-3D"), BetType::ThreeDigit);
        assert_eq!(BetType::from_station(""), BetType::ThreeDigit);
        // Substring match is case-sensitive, like the label convention.
        assert_eq!(BetType::from_station("station-2d"), BetType::ThreeDigit);
    }

    // -- Region / CustomerType tests --

    #[test]
    fn test_region_from_str() {
        assert_eq!("north".parse::<Region>().unwrap(), Region::North);
        assert_eq!("CENTRAL".parse::<Region>().unwrap(), Region::Central);
        let err = "west".parse::<Region>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown region: west");
    }

    #[test]
    fn test_enum_parsing_trims_consistently() {
        assert_eq!(" 3d ".parse::<BetType>().unwrap(), BetType::ThreeDigit);
        assert_eq!(" South\t".parse::<Region>().unwrap(), Region::South);
        assert_eq!(" vip ".parse::<CustomerType>().unwrap(), CustomerType::Vip);
        let err = " west ".parse::<Region>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown region: west");
    }

    #[test]
    fn test_enums_deserialize_through_from_str() {
        let region: Region = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(region, Region::North);
        let kind: CustomerType = serde_json::from_str("\" VIP\"").unwrap();
        assert_eq!(kind, CustomerType::Vip);
        let err = serde_json::from_str::<BetType>("\"4D\"").unwrap_err();
        assert!(err.to_string().contains("Unknown bet type: 4D"));
        // Serialization keeps the canonical labels.
        assert_eq!(serde_json::to_string(&Region::North).unwrap(), "\"North\"");
    }

    #[test]
    fn test_customer_type_serde_uses_vip_label() {
        assert_eq!(serde_json::to_string(&CustomerType::Vip).unwrap(), "\"VIP\"");
        assert_eq!("vip".parse::<CustomerType>().unwrap(), CustomerType::Vip);
        assert_eq!(format!("{}", CustomerType::New), "New");
    }

    // -- BettingEntry tests --

    #[test]
    fn test_entry_number_groups() {
        let entry = BettingEntry {
            id: "entry-1".into(),
            numbers: "12, 45,78".into(),
            amount: 500_000,
            bet_type: BetType::TwoDigit,
        };
        assert_eq!(entry.number_groups(), vec!["12", "45", "78"]);
    }

    #[test]
    fn test_entry_serializes_type_field() {
        let entry = BettingEntry {
            id: "entry-1".into(),
            numbers: "12".into(),
            amount: 1,
            bet_type: BetType::ThreeDigit,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "3D");
        assert_eq!(json["amount"], 1);
    }

    // -- EntryForm tests --

    #[test]
    fn test_entry_form_default_is_blank() {
        let form = EntryForm::default();
        assert!(form.station.is_empty());
        assert!(form.region.is_none());
        assert!(form.date.is_none());
    }

    #[test]
    fn test_entry_form_deserializes_partial_json() {
        let form: EntryForm =
            serde_json::from_str(r#"{"station":"Station-002-3D","region":"South"}"#).unwrap();
        assert_eq!(form.region, Some(Region::South));
        assert!(form.betting_content.is_empty());
    }

    #[test]
    fn test_sample_form_has_eight_lines() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let form = EntryForm::sample(date);
        assert_eq!(form.betting_content.lines().count(), 8);
        assert_eq!(form.date, Some(date));
    }

    #[test]
    fn test_report_record_display() {
        let report = ReportRecord {
            id: "1".into(),
            customer: "John Doe".into(),
            region: Region::North,
            game_type: BetType::TwoDigit,
            total_amount: 2_500_000,
            total_bets: 5,
            win_amount: 500_000,
            win_rate: 20.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let s = format!("{report}");
        assert!(s.contains("John Doe"));
        assert!(s.contains("rate=20%"));
    }

    #[test]
    fn test_error_display() {
        let err = BetbookError::Settlement {
            source_name: "draw-feed".into(),
            message: "timeout".into(),
        };
        assert_eq!(err.to_string(), "Settlement error (draw-feed): timeout");
    }
}
