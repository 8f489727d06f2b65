//! API route handlers.
//!
//! All endpoints speak JSON. State is shared via `Arc<ApiState>`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::engine::aggregator::EntryTotals;
use crate::engine::settlement::{summarize, FinancialSummary, PendingSettlement, SettlementSource};
use crate::engine::validator::{check_form, EntryCheck};
use crate::format::{format_vnd, format_vnd_compact};
use crate::ledger::filter::{BetFilter, CustomerFilter, ReportFilter};
use crate::ledger::MockLedger;
use crate::types::{BetbookError, BettingEntry, BettingRecord, Customer, EntryForm, ReportRecord};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct ApiState {
    pub ledger: RwLock<MockLedger>,
    pub stations: Vec<String>,
    pub settlement: Arc<dyn SettlementSource>,
}

impl ApiState {
    pub fn new(ledger: MockLedger, stations: Vec<String>) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            stations,
            settlement: Arc::new(PendingSettlement),
        }
    }

    pub fn with_settlement(mut self, settlement: Arc<dyn SettlementSource>) -> Self {
        self.settlement = settlement;
        self
    }
}

pub type AppState = Arc<ApiState>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub entries: Vec<BettingEntry>,
    pub errors: Vec<String>,
    pub totals: EntryTotals,
    pub total_display: String,
}

impl From<EntryCheck> for CheckResponse {
    fn from(check: EntryCheck) -> Self {
        let errors = check.messages();
        let total_display = format_vnd(display_amount(check.totals.total));
        Self {
            entries: check.entries,
            errors,
            totals: check.totals,
            total_display,
        }
    }
}

/// A customer row plus its compact total, as the directory shows it.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    #[serde(flatten)]
    pub customer: Customer,
    pub total_amount_display: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            total_amount_display: format_vnd_compact(i128::from(customer.total_amount)),
            customer: customer.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub saved: usize,
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub removed: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: String,
}

/// Failures a handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// The submission has validation issues; nothing was saved.
    Invalid(CheckResponse),
    Settlement(BetbookError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(check) => (StatusCode::UNPROCESSABLE_ENTITY, Json(check)).into_response(),
            ApiError::Settlement(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

fn display_amount(total: u128) -> i128 {
    i128::try_from(total).unwrap_or(i128::MAX)
}

/// Check a form, turning issues into a 422.
fn checked(form: &EntryForm) -> Result<EntryCheck, ApiError> {
    let check = check_form(form);
    if check.is_clean() {
        Ok(check)
    } else {
        warn!(
            station = %form.station,
            issues = check.issues.len(),
            "Submission rejected"
        );
        Err(ApiError::Invalid(check.into()))
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /api/entries/check
pub async fn check_entries(Json(form): Json<EntryForm>) -> Json<CheckResponse> {
    Json(check_form(&form).into())
}

/// POST /api/entries
pub async fn save_entries(
    State(state): State<AppState>,
    Json(form): Json<EntryForm>,
) -> Result<(StatusCode, Json<SaveResponse>), ApiError> {
    let check = checked(&form)?;
    let today = chrono::Local::now().date_naive();

    let ids = state
        .ledger
        .write()
        .await
        .record_batch(&form, &check.entries, today);

    info!(
        customer = %form.customer1,
        entries = ids.len(),
        total = %format_vnd(display_amount(check.totals.total)),
        "Entries saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            saved: ids.len(),
            ids,
        }),
    ))
}

/// POST /api/entries/summary
pub async fn summarize_entries(
    State(state): State<AppState>,
    Json(form): Json<EntryForm>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let check = checked(&form)?;
    let summary = summarize(&check.entries, state.settlement.as_ref())
        .await
        .map_err(ApiError::Settlement)?;
    Ok(Json(summary))
}

/// GET /api/stations
pub async fn get_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.stations.clone())
}

/// GET /api/bets
pub async fn list_bets(
    State(state): State<AppState>,
    Query(filter): Query<BetFilter>,
) -> Json<Vec<BettingRecord>> {
    let ledger = state.ledger.read().await;
    Json(ledger.bets(&filter).into_iter().cloned().collect())
}

/// DELETE /api/bets
pub async fn delete_bets(
    State(state): State<AppState>,
    Json(req): Json<DeleteRequest>,
) -> Json<DeleteResponse> {
    let removed = state.ledger.write().await.remove_bets(&req.ids);
    Json(DeleteResponse { removed })
}

/// GET /api/bets/customers
pub async fn list_bet_customers(State(state): State<AppState>) -> Json<Vec<String>> {
    let ledger = state.ledger.read().await;
    Json(ledger.customer_names().into_iter().map(String::from).collect())
}

/// GET /api/reports
pub async fn list_reports(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> Json<Vec<ReportRecord>> {
    let ledger = state.ledger.read().await;
    Json(ledger.reports(&filter).into_iter().cloned().collect())
}

/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
    Query(filter): Query<CustomerFilter>,
) -> Json<Vec<CustomerView>> {
    let ledger = state.ledger.read().await;
    Json(ledger.customers(&filter).into_iter().map(CustomerView::from).collect())
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
