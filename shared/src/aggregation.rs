//! Category breakdown for the spend chart.
//!
//! Turns an unordered set of transaction records into per-category buckets
//! with percentages and stable chart colors. The result is ordered by total
//! (descending) with ties broken by category name, so the same records always
//! produce the same chart no matter how the data source ordered them.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Category, CategoryCatalog, Flow, Period, TransactionRecord};

/// Named chart colors; tokens not listed here are hashed into this palette
const PALETTE: [(&str, &str); 10] = [
    ("blue", "#0088FE"),
    ("teal", "#00C49F"),
    ("yellow", "#FFBB28"),
    ("orange", "#FF8042"),
    ("purple", "#8884D8"),
    ("red", "#E5484D"),
    ("green", "#30A46C"),
    ("pink", "#D6409F"),
    ("brown", "#A18072"),
    ("gray", "#8F8F8F"),
];

/// Aggregated per-category summary driving the spend-breakdown chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub total_abs_cents: u64,
    pub percentage: f64,
    /// Hex color, e.g. `#FF8042`
    pub color: String,
}

/// Groups the records inside `period` by category.
///
/// Records whose category is not in `catalog` land in a single
/// "Uncategorized" bucket. An empty result means there is nothing to chart.
pub fn aggregate(records: &[TransactionRecord], period: &Period, catalog: &CategoryCatalog) -> Vec<CategoryBucket> {
    aggregate_flow(records, period, catalog, Flow::All)
}

/// Same as [`aggregate`], restricted to expenses or income
pub fn aggregate_flow(
    records: &[TransactionRecord],
    period: &Period,
    catalog: &CategoryCatalog,
    flow: Flow,
) -> Vec<CategoryBucket> {
    let mut totals: HashMap<Category, u64> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| period.contains(&record.timestamp_utc) && flow.matches(record))
    {
        let category = catalog
            .get(&record.category_id)
            .cloned()
            .unwrap_or_else(Category::uncategorized);
        let bucket_total = totals.entry(category).or_insert(0);
        *bucket_total = bucket_total.saturating_add(record.amount_cents.unsigned_abs());
    }

    // Widened so several near-`i64::MIN` buckets cannot overflow the sum
    let total: u128 = totals.values().map(|&cents| u128::from(cents)).sum();

    let mut buckets: Vec<CategoryBucket> = totals
        .into_iter()
        .map(|(category, total_abs_cents)| {
            let percentage = if total > 0 {
                total_abs_cents as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            let color = color_for(&category).to_string();
            CategoryBucket {
                category,
                total_abs_cents,
                percentage,
                color,
            }
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.total_abs_cents
            .cmp(&a.total_abs_cents)
            .then_with(|| a.category.name.cmp(&b.category.name))
            .then_with(|| a.category.id.cmp(&b.category.id))
    });

    debug!(
        target: "aggregation",
        "aggregated {} records into {} buckets (total {} cents)",
        records.len(),
        buckets.len(),
        total
    );

    buckets
}

/// Chart color for a category; depends only on the category itself
pub fn color_for(category: &Category) -> &'static str {
    if let Some((_, hex)) = PALETTE.iter().find(|(token, _)| *token == category.color_token) {
        return hex;
    }
    let key = if category.color_token.is_empty() {
        &category.id
    } else {
        &category.color_token
    };
    PALETTE[(fnv1a(key.as_bytes()) % PALETTE.len() as u64) as usize].1
}

// FNV-1a keeps the mapping identical across builds and sessions
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}
