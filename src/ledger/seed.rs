//! Fixed demo datasets the ledger starts from.

use chrono::NaiveDate;

use crate::types::{
    BetType, BettingRecord, Customer, CustomerStatus, CustomerType, RecordStatus, Region,
    ReportRecord,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn bet(
    id: &str,
    customer: &str,
    region: Region,
    bet_type: BetType,
    amount: u64,
    date: u32,
    status: RecordStatus,
    numbers: &str,
    has_incorrect_info: bool,
) -> BettingRecord {
    BettingRecord {
        id: id.into(),
        customer: customer.into(),
        region,
        bet_type,
        amount,
        date: day(date),
        status,
        numbers: numbers.into(),
        has_incorrect_info,
    }
}

pub fn bets() -> Vec<BettingRecord> {
    use BetType::*;
    use RecordStatus::*;
    vec![
        bet("1", "John Doe", Region::North, TwoDigit, 500_000, 15, Active, "12, 45", false),
        bet("2", "Jane Smith", Region::Central, ThreeDigit, 750_000, 15, Active, "123, 456", true),
        bet("3", "Mike Johnson", Region::South, TwoDigit, 300_000, 14, Completed, "89, 90", false),
        bet("4", "Sarah Wilson", Region::North, ThreeDigit, 1_000_000, 14, Active, "234, 567", false),
        bet("5", "David Brown", Region::Central, TwoDigit, 450_000, 13, Cancelled, "78, 91", true),
    ]
}

pub fn reports() -> Vec<ReportRecord> {
    let report = |id: &str,
                  customer: &str,
                  region: Region,
                  game_type: BetType,
                  total_amount: u64,
                  total_bets: u32,
                  win_amount: u64,
                  date: u32,
                  win_rate: f64| {
        ReportRecord {
            id: id.to_string(),
            customer: customer.to_string(),
            region,
            game_type,
            total_amount,
            total_bets,
            win_amount,
            win_rate,
            date: day(date),
        }
    };
    vec![
        report("1", "John Doe", Region::North, BetType::TwoDigit, 2_500_000, 5, 500_000, 15, 20.0),
        report("2", "Jane Smith", Region::Central, BetType::ThreeDigit, 1_500_000, 2, 750_000, 15, 50.0),
        report("3", "Mike Johnson", Region::South, BetType::TwoDigit, 900_000, 3, 0, 14, 0.0),
        report("4", "Sarah Wilson", Region::North, BetType::ThreeDigit, 3_000_000, 3, 1_200_000, 14, 40.0),
    ]
}

pub fn customers() -> Vec<Customer> {
    let customer = |id: &str,
                    name: &str,
                    region: Region,
                    customer_type: CustomerType,
                    created: u32,
                    total_bets: u32,
                    total_amount: u64,
                    status: CustomerStatus,
                    phone: &str| Customer {
        id: id.to_string(),
        name: name.to_string(),
        region,
        customer_type,
        created_date: day(created),
        total_bets,
        total_amount,
        status,
        phone: Some(phone.to_string()),
    };
    vec![
        customer("1", "John Doe", Region::North, CustomerType::Vip, 10, 25, 5_000_000, CustomerStatus::Active, "+84 123 456 789"),
        customer("2", "Jane Smith", Region::Central, CustomerType::Regular, 12, 15, 3_200_000, CustomerStatus::Active, "+84 987 654 321"),
        customer("3", "Mike Johnson", Region::South, CustomerType::New, 15, 3, 800_000, CustomerStatus::Active, "+84 555 123 456"),
        customer("4", "Sarah Wilson", Region::North, CustomerType::Vip, 8, 45, 8_500_000, CustomerStatus::Inactive, "+84 333 777 888"),
        customer("5", "David Brown", Region::Central, CustomerType::Regular, 14, 8, 1_200_000, CustomerStatus::Active, "+84 222 333 444"),
    ]
}
