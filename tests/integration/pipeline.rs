//! Entry pipeline: form → check → totals → settlement → ledger.

use chrono::NaiveDate;
use std::sync::Arc;

use betbook::api::routes::{save_entries, summarize_entries, ApiError};
use betbook::api::ApiState;
use betbook::engine::aggregator::EntryTotals;
use betbook::engine::session::{reduce, EntryAction, EntrySession};
use betbook::engine::settlement::{summarize, PendingSettlement};
use betbook::engine::validator::check_form;
use betbook::ledger::filter::{BetFilter, CustomerFilter, Predicate};
use betbook::ledger::MockLedger;
use betbook::parser::parse_content;
use betbook::types::{BetType, CustomerType, EntryForm, Region};

use crate::mock_settlement::MockSettlement;

use axum::extract::State;
use axum::Json;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn form(content: &str) -> EntryForm {
    EntryForm {
        station: "Station-001-2D".into(),
        region: Some(Region::North),
        date: Some(day()),
        customer1: "John Doe".into(),
        betting_content: content.into(),
        ..EntryForm::default()
    }
}

#[test]
fn two_line_submission_totals() {
    let check = check_form(&form("12, 45 500000 2D\n123, 456 750000 3D"));
    assert!(check.is_clean());
    assert_eq!(check.entries.len(), 2);
    assert_eq!(check.totals.total, 1_250_000);
    assert_eq!(check.totals.by_2d, 1);
    assert_eq!(check.totals.by_3d, 1);
}

#[test]
fn bad_second_line() {
    let check = check_form(&form("12 500000 2D\nbadline"));
    assert_eq!(check.entries.len(), 1);
    assert_eq!(check.issues.len(), 1);
    assert!(check.messages()[0].starts_with("Line 2:"));
}

#[test]
fn zero_amount_only_error() {
    let out = parse_content("12 0", "Station-001-2D");
    assert!(out.entries.is_empty());
    let messages: Vec<_> = out.errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages, vec!["Line 1: Invalid amount"]);
}

#[test]
fn totals_match_sum_of_amounts() {
    let text = (1..=50)
        .map(|i| format!("{i}, {} {},{:03} {}", i + 1, i, i * 7 % 1000, if i % 2 == 0 { "2D" } else { "3d" }))
        .collect::<Vec<_>>()
        .join("\n");
    let out = parse_content(&text, "");
    assert!(out.is_clean());
    let totals = EntryTotals::from_entries(&out.entries);
    let sum: u128 = out.entries.iter().map(|e| u128::from(e.amount)).sum();
    assert_eq!(totals.total, sum);
    assert_eq!(totals.by_2d, 25);
    assert_eq!(totals.by_3d, 25);
    assert_eq!(out.entries[0].amount, 1_007);
}

#[test]
fn explicit_type_is_never_overridden_by_station() {
    let out = parse_content("123 1000 3D\n45 1000", "Station-001-2D");
    assert_eq!(out.entries[0].bet_type, BetType::ThreeDigit);
    assert_eq!(out.entries[1].bet_type, BetType::TwoDigit);
}

#[test]
fn customers_north_vip() {
    let ledger = MockLedger::seeded();
    let filter = CustomerFilter {
        region: Some(Region::North),
        customer_type: Some(CustomerType::Vip),
        ..Default::default()
    };
    let found = ledger.customers(&filter);
    let all = ledger.customers(&CustomerFilter::default());
    let expected: Vec<_> = all.iter().copied().filter(|c| filter.matches(c)).collect();
    assert_eq!(found, expected);
    assert_eq!(found.len(), 2);
}

#[test]
fn session_flow_check_edit_save() {
    let s = reduce(EntrySession::new(), EntryAction::LoadSample(day()));
    let s = reduce(s, EntryAction::Check);
    assert!(s.can_save());
    let s = reduce(s, EntryAction::SetContent("12 500 2D\n??".into()));
    assert!(!s.can_save());
    let s = reduce(s, EntryAction::Save);
    assert!(!s.saved);
    assert_eq!(s.issues.len(), 1);
    let s = reduce(s, EntryAction::SetContent("12 500 2D".into()));
    let s = reduce(s, EntryAction::Save);
    assert!(s.saved);
}

#[tokio::test]
async fn settlement_summary_from_mock_source() {
    let source = MockSettlement::new(&["45", "777"], 70);
    let check = check_form(&EntryForm::sample(day()));
    let summary = summarize(&check.entries, &source).await.unwrap();

    // "12, 45" at 500,000 and "777, 888" at 950,000 hit.
    assert_eq!(summary.winning_entries, 2);
    assert_eq!(summary.winnings, (500_000 + 950_000) * 70);
    assert_eq!(summary.total_spent, 5_350_000);
    assert_eq!(
        summary.profit_loss,
        i128::from(summary.winnings) - summary.total_spent as i128
    );
    assert_eq!(source.calls(), vec![8]);
}

#[tokio::test]
async fn max_amount_lines_check_and_settle() {
    let check = check_form(&form("12 18446744073709551615\n34 18446744073709551615"));
    assert!(check.is_clean());
    let exact = 2 * u128::from(u64::MAX);
    assert_eq!(check.totals.total, exact);

    let summary = summarize(&check.entries, &PendingSettlement).await.unwrap();
    assert_eq!(summary.total_spent, exact);
    assert_eq!(summary.profit_loss, -(exact as i128));
    assert_eq!(summary.win_percentage, 0.0);
}

#[tokio::test]
async fn settlement_failure_surfaces() {
    let source = MockSettlement::new(&[], 70);
    source.set_error("draw feed offline");
    let check = check_form(&form("12 100"));
    let err = summarize(&check.entries, &source).await.unwrap_err();
    assert!(err.to_string().contains("draw feed offline"));
}

#[tokio::test]
async fn api_save_then_list() {
    let state = Arc::new(ApiState::new(MockLedger::seeded(), vec!["Station-001-2D".into()]));

    let mut f = form("12, 45 500000 2D\n123, 456 750000 3D");
    f.customer1 = "Lisa Chen".into();
    let (_, Json(saved)) = save_entries(State(state.clone()), Json(f)).await.unwrap();
    assert_eq!(saved.saved, 2);

    let ledger = state.ledger.read().await;
    let rows = ledger.bets(&BetFilter {
        customer: Some("Lisa Chen".into()),
        ..Default::default()
    });
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].bet_type, BetType::ThreeDigit);
    assert_eq!(ledger.customer_names().last(), Some(&"Lisa Chen"));
}

#[tokio::test]
async fn api_summary_rejects_invalid_form() {
    let source = Arc::new(MockSettlement::new(&["12"], 70));
    let state = Arc::new(
        ApiState::new(MockLedger::new(), vec![]).with_settlement(source.clone()),
    );
    let result = summarize_entries(State(state), Json(form("nope"))).await;
    assert!(matches!(result, Err(ApiError::Invalid(_))));
    // Invalid forms never reach the settlement source.
    assert!(source.calls().is_empty());
}
