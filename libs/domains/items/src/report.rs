//! Aggregate reports over the item collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;
use utoipa::ToSchema;

use crate::models::Item;
use crate::stats::{self, MinMax};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Per-category breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub count: usize,
    pub total_value: f64,
    pub average_price: f64,
}

/// Full statistics report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Number of items, priced or not
    pub total: usize,
    pub average_price: f64,
    pub total_value: f64,
    pub price_range: MinMax,
    pub categories: BTreeMap<String, CategoryStats>,
    pub generated_at: DateTime<Utc>,
}

/// Quick summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_items: usize,
    pub total_value: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsReportResponse {
    pub success: bool,
    pub data: StatsReport,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub success: bool,
    pub data: SummaryReport,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the statistics report for `items` as of `now`.
///
/// An empty collection, or one without a single numeric price, yields a
/// zeroed report whose `total` is still the item count.
pub fn build_report(items: &[Item], now: DateTime<Utc>) -> StatsReport {
    let prices: Vec<f64> = items.iter().filter_map(Item::amount).collect();

    if prices.is_empty() {
        return StatsReport {
            total: items.len(),
            average_price: 0.0,
            total_value: 0.0,
            price_range: MinMax::default(),
            categories: BTreeMap::new(),
            generated_at: now,
        };
    }

    let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
    for item in items {
        let key = item
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);

        let entry = categories.entry(key.to_string()).or_default();
        entry.count += 1;
        if let Some(amount) = item.amount() {
            entry.total_value += amount;
        }
    }
    for entry in categories.values_mut() {
        entry.average_price = entry.total_value / entry.count as f64;
    }

    StatsReport {
        total: items.len(),
        average_price: round2(stats::mean(&prices)),
        total_value: round2(prices.iter().sum()),
        price_range: stats::min_max(&prices),
        categories,
        generated_at: now,
    }
}

/// Build the quick summary for `items` as of `now`.
///
/// Missing prices count as zero. A price that is present but not a number
/// also counts as zero and is logged.
pub fn build_summary(items: &[Item], now: DateTime<Utc>) -> SummaryReport {
    let total: f64 = items
        .iter()
        .map(|item| match (&item.price, item.amount()) {
            (_, Some(amount)) => amount,
            (None, None) => 0.0,
            (Some(_), None) => {
                warn!(item_id = item.id, "Ignoring non-numeric price in summary");
                0.0
            }
        })
        .sum();

    SummaryReport {
        total_items: items.len(),
        total_value: round2(total),
        timestamp: now,
    }
}
