//! Settlement — where winnings come from.
//!
//! The engine never computes lottery results itself. It asks a
//! `SettlementSource` what a batch of entries won and derives the
//! financial summary from that answer.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::engine::aggregator::stake_total;
use crate::types::{BetbookError, BettingEntry};

/// What a settlement source reports for a batch of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settlement {
    /// Total paid out in VND.
    pub winnings: u64,
    pub winning_entries: usize,
    /// True when no draw results were available yet.
    pub pending: bool,
}

/// Abstraction over the authority that knows draw results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettlementSource: Send + Sync {
    /// Settle a batch of entries.
    async fn settle(&self, entries: &[BettingEntry]) -> Result<Settlement, BetbookError>;

    /// Source name for logging and errors.
    fn name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// No results published yet: nothing has won.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingSettlement;

#[async_trait]
impl SettlementSource for PendingSettlement {
    async fn settle(&self, _entries: &[BettingEntry]) -> Result<Settlement, BetbookError> {
        Ok(Settlement {
            pending: true,
            ..Settlement::default()
        })
    }

    fn name(&self) -> &'static str {
        "pending"
    }
}

/// Payouts per entry id, supplied by whoever settled the draw.
#[derive(Debug, Clone, Default)]
pub struct FixedPayouts {
    payouts: HashMap<String, u64>,
}

impl FixedPayouts {
    pub fn new(payouts: HashMap<String, u64>) -> Self {
        Self { payouts }
    }

    pub fn insert(&mut self, entry_id: impl Into<String>, payout: u64) {
        self.payouts.insert(entry_id.into(), payout);
    }
}

#[async_trait]
impl SettlementSource for FixedPayouts {
    async fn settle(&self, entries: &[BettingEntry]) -> Result<Settlement, BetbookError> {
        let mut settlement = Settlement::default();
        for entry in entries {
            match self.payouts.get(&entry.id) {
                Some(&payout) if payout > 0 => {
                    settlement.winnings = settlement.winnings.saturating_add(payout);
                    settlement.winning_entries += 1;
                }
                _ => {}
            }
        }
        Ok(settlement)
    }

    fn name(&self) -> &'static str {
        "fixed-payouts"
    }
}

// ---------------------------------------------------------------------------
// Financial summary
// ---------------------------------------------------------------------------

/// Spend versus winnings for a batch of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// Exact stake total; see `aggregator::stake_total`.
    pub total_spent: u128,
    pub winnings: u64,
    /// `winnings - total_spent`; negative is a loss.
    pub profit_loss: i128,
    /// `winnings / total_spent * 100`, or 0 when nothing was spent.
    pub win_percentage: f64,
    pub entries: usize,
    pub winning_entries: usize,
    pub pending: bool,
}

impl FinancialSummary {
    pub fn from_settlement(entries: &[BettingEntry], settlement: &Settlement) -> Self {
        let total_spent = stake_total(entries);
        let win_percentage = if total_spent > 0 {
            settlement.winnings as f64 / total_spent as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_spent,
            winnings: settlement.winnings,
            profit_loss: i128::from(settlement.winnings)
                - i128::try_from(total_spent).unwrap_or(i128::MAX),
            win_percentage,
            entries: entries.len(),
            winning_entries: settlement.winning_entries,
            pending: settlement.pending,
        }
    }

    pub fn is_profit(&self) -> bool {
        self.profit_loss > 0
    }
}

/// Ask `source` to settle `entries` and summarise the result.
pub async fn summarize(
    entries: &[BettingEntry],
    source: &dyn SettlementSource,
) -> Result<FinancialSummary, BetbookError> {
    let settlement = source.settle(entries).await.map_err(|e| {
        warn!(source = source.name(), error = %e, "Settlement failed");
        e
    })?;

    if settlement.winning_entries > entries.len() {
        return Err(BetbookError::Settlement {
            source_name: source.name().to_string(),
            message: format!(
                "reported {} winning entries for a batch of {}",
                settlement.winning_entries,
                entries.len()
            ),
        });
    }

    let summary = FinancialSummary::from_settlement(entries, &settlement);
    debug!(
        source = source.name(),
        spent = %summary.total_spent,
        winnings = summary.winnings,
        profit = summary.is_profit(),
        pending = summary.pending,
        "Entries settled"
    );
    Ok(summary)
}
