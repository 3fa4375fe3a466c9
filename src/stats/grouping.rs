//! Grouped rollups: keyed aggregates and per-date field sums.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{GroupKey, NumericField, SalesRecord};
use crate::stats::describe::{mean, sample_std};

/// Aggregates for one group of records sharing a key value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Rendered key value (item label or `YYYY-MM-DD` date).
    pub key: String,
    pub count: usize,
    pub quantity_mean: f64,
    pub quantity_std: f64,
    pub revenue_sum: f64,
    pub revenue_mean: f64,
    pub temperature_mean: f64,
    pub humidity_mean: f64,
}

/// Group the dataset by the chosen key, in first-seen order.
///
/// An empty dataset yields an empty vec (not an error).
pub fn group_by_key(records: &[SalesRecord], key: GroupKey) -> Vec<GroupStats> {
    let mut order: Vec<String> = Vec::new();
    for r in records {
        let label = key.label(r);
        if !order.contains(&label) {
            order.push(label);
        }
    }

    order
        .into_iter()
        .map(|label| {
            let members: Vec<&SalesRecord> = records
                .iter()
                .filter(|r| key.label(r) == label)
                .collect();
            aggregate(label, &members)
        })
        .collect()
}

/// Convenience form of [`group_by_key`] for the menu-item axis.
pub fn group_by_item(records: &[SalesRecord]) -> Vec<GroupStats> {
    group_by_key(records, GroupKey::ItemType)
}

fn aggregate(key: String, members: &[&SalesRecord]) -> GroupStats {
    let quantities: Vec<f64> = members.iter().map(|r| r.quantity_sold as f64).collect();
    let revenues: Vec<f64> = members.iter().map(|r| r.revenue).collect();
    let temps: Vec<f64> = members.iter().map(|r| r.temperature).collect();
    let hums: Vec<f64> = members.iter().map(|r| r.humidity).collect();

    GroupStats {
        key,
        count: members.len(),
        quantity_mean: mean(&quantities),
        quantity_std: sample_std(&quantities),
        revenue_sum: revenues.iter().sum(),
        revenue_mean: mean(&revenues),
        temperature_mean: mean(&temps),
        humidity_mean: mean(&hums),
    }
}

/// Sum one field per date, ascending by date.
///
/// Feeds trend output: each entry is (date, sum of the field across all item
/// records on that date).
pub fn daily_rollup(records: &[SalesRecord], field: NumericField) -> Vec<(NaiveDate, f64)> {
    let mut sums: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for r in records {
        *sums.entry(r.date).or_insert(0.0) += field.value(r);
    }
    sums.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generate_sales;
    use crate::domain::ItemType;

    #[test]
    fn group_by_item_first_seen_order() {
        let records = generate_sales(10, 42).unwrap();
        let groups = group_by_item(&records);

        // Generation iterates the fixed menu order, so first-seen order is
        // exactly ItemType::ALL.
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        let expected: Vec<&str> = ItemType::ALL.iter().map(|i| i.display_name()).collect();
        assert_eq!(keys, expected);

        for g in &groups {
            assert_eq!(g.count, 10);
            assert!(g.quantity_mean >= 0.0);
            assert!((g.revenue_mean * g.count as f64 - g.revenue_sum).abs() < 1e-9);
        }
    }

    #[test]
    fn group_by_date_spans_every_day() {
        let records = generate_sales(6, 42).unwrap();
        let groups = group_by_key(&records, GroupKey::Date);

        // One group per date, each holding the full menu; first-seen order
        // is generation order, i.e. ascending dates.
        assert_eq!(groups.len(), 6);
        for g in &groups {
            assert_eq!(g.count, ItemType::ALL.len());
        }
        for w in groups.windows(2) {
            assert!(w[0].key < w[1].key);
        }

        // Date groups share one weather draw, so the group means equal it.
        let first_day = &records[0];
        assert!((groups[0].temperature_mean - first_day.temperature).abs() < 1e-12);
        assert!((groups[0].humidity_mean - first_day.humidity).abs() < 1e-12);
    }

    #[test]
    fn group_keys_partition_the_records() {
        let records = generate_sales(9, 42).unwrap();
        for key in [GroupKey::ItemType, GroupKey::Date] {
            let total: usize = group_by_key(&records, key).iter().map(|g| g.count).sum();
            assert_eq!(total, records.len());
        }
    }

    #[test]
    fn group_by_empty_is_empty() {
        assert!(group_by_item(&[]).is_empty());
        assert!(group_by_key(&[], GroupKey::Date).is_empty());
    }

    #[test]
    fn item_groups_see_the_same_weather() {
        // Every item appears once per date, so per-item temperature means
        // are all equal (same shared draws).
        let records = generate_sales(25, 42).unwrap();
        let groups = group_by_item(&records);
        let first = groups[0].temperature_mean;
        for g in &groups {
            assert!((g.temperature_mean - first).abs() < 1e-9);
            assert!((g.humidity_mean - groups[0].humidity_mean).abs() < 1e-9);
        }
    }

    #[test]
    fn daily_rollup_sums_revenue_per_date() {
        let records = generate_sales(12, 42).unwrap();
        let rollup = daily_rollup(&records, NumericField::Revenue);

        assert_eq!(rollup.len(), 12);
        for w in rollup.windows(2) {
            assert!(w[0].0 < w[1].0);
        }

        for (date, total) in &rollup {
            let expected: f64 = records
                .iter()
                .filter(|r| r.date == *date)
                .map(|r| r.revenue)
                .sum();
            assert!((total - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn daily_rollup_empty_is_empty() {
        assert!(daily_rollup(&[], NumericField::Revenue).is_empty());
    }
}
