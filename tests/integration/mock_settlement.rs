//! Mock settlement source for integration testing.
//!
//! Pays out on entries whose number groups include a drawn number, at a
//! fixed multiple of the stake. Deterministic and in-memory; it also
//! records every batch it was asked to settle.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use betbook::engine::settlement::{Settlement, SettlementSource};
use betbook::types::{BetbookError, BettingEntry};

pub struct MockSettlement {
    drawn: Vec<String>,
    multiplier: u64,
    calls: Arc<Mutex<Vec<usize>>>,
    /// If set, all settlements fail with this message.
    force_error: Arc<Mutex<Option<String>>>,
}

impl MockSettlement {
    pub fn new(drawn: &[&str], multiplier: u64) -> Self {
        Self {
            drawn: drawn.iter().map(|s| s.to_string()).collect(),
            multiplier,
            calls: Arc::new(Mutex::new(Vec::new())),
            force_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    /// Batch sizes settled so far.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettlementSource for MockSettlement {
    async fn settle(&self, entries: &[BettingEntry]) -> Result<Settlement, BetbookError> {
        self.calls.lock().unwrap().push(entries.len());

        if let Some(msg) = self.force_error.lock().unwrap().clone() {
            return Err(BetbookError::Settlement {
                source_name: self.name().to_string(),
                message: msg,
            });
        }

        let mut settlement = Settlement::default();
        for entry in entries {
            let hit = entry
                .number_groups()
                .iter()
                .any(|n| self.drawn.iter().any(|d| d == n));
            if hit {
                settlement.winnings += entry.amount * self.multiplier;
                settlement.winning_entries += 1;
            }
        }
        Ok(settlement)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
