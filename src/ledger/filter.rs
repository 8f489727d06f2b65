//! Filter predicates for the list views.
//!
//! Every filter is a conjunction of independent optional predicates;
//! an unset field matches everything.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::{BetType, BettingRecord, Customer, CustomerType, Region, ReportRecord};

/// A yes/no test over one row.
pub trait Predicate<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching rows in their original order.
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Case-insensitive substring test. An empty needle matches.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Betting list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BetFilter {
    /// Exact customer name.
    pub customer: Option<String>,
    pub region: Option<Region>,
    pub date: Option<NaiveDate>,
    /// Only records flagged as having incorrect info.
    pub incorrect_only: bool,
}

impl Predicate<BettingRecord> for BetFilter {
    fn matches(&self, r: &BettingRecord) -> bool {
        self.customer.as_ref().map_or(true, |c| r.customer == *c)
            && self.region.map_or(true, |reg| r.region == reg)
            && self.date.map_or(true, |d| r.date == d)
            && (!self.incorrect_only || r.has_incorrect_info)
    }
}

/// Reports filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportFilter {
    pub region: Option<Region>,
    pub game_type: Option<BetType>,
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring of the customer name.
    pub search: Option<String>,
}

impl Predicate<ReportRecord> for ReportFilter {
    fn matches(&self, r: &ReportRecord) -> bool {
        self.region.map_or(true, |reg| r.region == reg)
            && self.game_type.map_or(true, |t| r.game_type == t)
            && self.date.map_or(true, |d| r.date == d)
            && self.search.as_deref().map_or(true, |q| contains_ci(&r.customer, q))
    }
}

/// Customer directory filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomerFilter {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    pub region: Option<Region>,
    pub customer_type: Option<CustomerType>,
}

impl Predicate<Customer> for CustomerFilter {
    fn matches(&self, c: &Customer) -> bool {
        self.search.as_deref().map_or(true, |q| contains_ci(&c.name, q))
            && self.region.map_or(true, |reg| c.region == reg)
            && self.customer_type.map_or(true, |t| c.customer_type == t)
    }
}
