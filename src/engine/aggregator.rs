//! Aggregator — summary numbers over parsed entries.
//!
//! Totals are recomputed from scratch on every call; nothing is cached.
//! Stake sums are `u128`: every accepted line fits in a `u64`, so the
//! batch total is exact for any number of lines.

use serde::Serialize;

use crate::types::{BetType, BettingEntry};

/// Count, stake total and per-type breakdown of a batch of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryTotals {
    pub count: usize,
    /// Sum of all amounts in VND.
    pub total: u128,
    pub by_2d: usize,
    pub by_3d: usize,
    /// Stake on 2D entries.
    pub amount_2d: u128,
    /// Stake on 3D entries.
    pub amount_3d: u128,
}

impl EntryTotals {
    pub fn from_entries(entries: &[BettingEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            let amount = u128::from(e.amount);
            acc.count += 1;
            acc.total += amount;
            match e.bet_type {
                BetType::TwoDigit => {
                    acc.by_2d += 1;
                    acc.amount_2d += amount;
                }
                BetType::ThreeDigit => {
                    acc.by_3d += 1;
                    acc.amount_3d += amount;
                }
            }
            acc
        })
    }
}

/// Exact stake total of a batch.
pub fn stake_total(entries: &[BettingEntry]) -> u128 {
    entries.iter().map(|e| u128::from(e.amount)).sum()
}
