//! In-memory ledger standing in for a data store.
//!
//! Holds the betting list, per-customer reports and the customer
//! directory. Queries are linear scans through `Predicate` filters.
//! Nothing is written to disk.

pub mod filter;
pub mod seed;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::types::{
    BettingEntry, BettingRecord, Customer, EntryForm, RecordStatus, Region, ReportRecord,
};
use filter::{BetFilter, CustomerFilter, Predicate, ReportFilter};

#[derive(Debug, Clone, Default)]
pub struct MockLedger {
    bets: Vec<BettingRecord>,
    reports: Vec<ReportRecord>,
    customers: Vec<Customer>,
}

impl MockLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed demo datasets.
    pub fn seeded() -> Self {
        Self {
            bets: seed::bets(),
            reports: seed::reports(),
            customers: seed::customers(),
        }
    }

    pub fn bets(&self, filter: &BetFilter) -> Vec<&BettingRecord> {
        filter.apply(&self.bets)
    }

    pub fn reports(&self, filter: &ReportFilter) -> Vec<&ReportRecord> {
        filter.apply(&self.reports)
    }

    pub fn customers(&self, filter: &CustomerFilter) -> Vec<&Customer> {
        filter.apply(&self.customers)
    }

    pub fn bet_count(&self) -> usize {
        self.bets.len()
    }

    /// Distinct customer names across all bets, in first-seen order.
    pub fn customer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for bet in &self.bets {
            if !names.contains(&bet.customer.as_str()) {
                names.push(&bet.customer);
            }
        }
        names
    }

    /// Delete bets by id. Unknown ids are ignored. Returns how many
    /// records were removed.
    pub fn remove_bets(&mut self, ids: &[String]) -> usize {
        let before = self.bets.len();
        self.bets.retain(|b| !ids.contains(&b.id));
        let removed = before - self.bets.len();
        if removed > 0 {
            info!(removed, remaining = self.bets.len(), "Bets deleted");
        }
        removed
    }

    /// Append a saved batch as active bets for the form's first customer.
    ///
    /// The caller is expected to have checked the form; a form without a
    /// region or date is recorded under `North` / the given fallback day.
    pub fn record_batch(
        &mut self,
        form: &EntryForm,
        entries: &[BettingEntry],
        today: NaiveDate,
    ) -> Vec<String> {
        let region = form.region.unwrap_or(Region::North);
        let date = form.date.unwrap_or(today);
        let customer = form.customer1.trim().to_string();

        let ids: Vec<String> = entries
            .iter()
            .map(|entry| {
                let id = Uuid::new_v4().to_string();
                self.bets.push(BettingRecord {
                    id: id.clone(),
                    customer: customer.clone(),
                    region,
                    bet_type: entry.bet_type,
                    amount: entry.amount,
                    date,
                    status: RecordStatus::Active,
                    numbers: entry.numbers.clone(),
                    has_incorrect_info: false,
                });
                id
            })
            .collect();

        info!(
            customer = %customer,
            station = %form.station,
            saved = ids.len(),
            "Entry batch recorded"
        );
        ids
    }
}
