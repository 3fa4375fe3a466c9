//! Predicate-based dataset subsets.
//!
//! Filters never mutate the source: they return fresh vectors preserving the
//! original relative order. A predicate matching nothing yields an empty
//! vector, which downstream views treat as "no data", not as an error.

use chrono::NaiveDate;

use crate::domain::{Category, DailyRecord, ItemType, SalesRecord};

/// Composable predicate: item equality and inclusive date-range membership.
///
/// Unset parts match everything; the default filter passes all records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    pub item_type: Option<ItemType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn matches(&self, record: &SalesRecord) -> bool {
        if let Some(item) = self.item_type {
            if record.item_type != item {
                return false;
            }
        }
        if let Some(from) = self.from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.date > to {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.item_type.is_none() && self.from.is_none() && self.to.is_none()
    }
}

/// Keep the records matching the filter, in original order.
pub fn filter_records(records: &[SalesRecord], filter: &RecordFilter) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Convenience equality filter on item type.
pub fn filter_by_item(records: &[SalesRecord], item: ItemType) -> Vec<SalesRecord> {
    filter_records(
        records,
        &RecordFilter {
            item_type: Some(item),
            ..RecordFilter::default()
        },
    )
}

/// Simple-variant analog: keep the daily records of one category.
pub fn filter_daily_by_category(records: &[DailyRecord], category: Category) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_daily, generate_sales};

    #[test]
    fn item_filter_partitions_the_dataset() {
        let records = generate_sales(15, 42).unwrap();
        let coffee = filter_by_item(&records, ItemType::Coffee);

        assert!(coffee.iter().all(|r| r.item_type == ItemType::Coffee));
        assert_eq!(coffee.len(), 15);

        let complement: Vec<_> = records
            .iter()
            .filter(|r| r.item_type != ItemType::Coffee)
            .collect();
        assert_eq!(coffee.len() + complement.len(), records.len());
    }

    #[test]
    fn date_range_is_inclusive() {
        let records = generate_sales(10, 42).unwrap();
        let from = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let to = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();

        let filter = RecordFilter {
            item_type: None,
            from: Some(from),
            to: Some(to),
        };
        let subset = filter_records(&records, &filter);

        // 3 days x 8 items, endpoints included.
        assert_eq!(subset.len(), 24);
        assert!(subset.iter().all(|r| r.date >= from && r.date <= to));
    }

    #[test]
    fn combined_predicate_preserves_order() {
        let records = generate_sales(20, 42).unwrap();
        let filter = RecordFilter {
            item_type: Some(ItemType::Tea),
            from: NaiveDate::from_ymd_opt(2023, 1, 5),
            to: NaiveDate::from_ymd_opt(2023, 1, 15),
        };
        let subset = filter_records(&records, &filter);

        assert!(!subset.is_empty());
        for w in subset.windows(2) {
            assert!(w[0].date < w[1].date);
        }
    }

    #[test]
    fn no_match_yields_empty_vec() {
        let records = generate_sales(5, 42).unwrap();
        let filter = RecordFilter {
            item_type: Some(ItemType::Cake),
            from: NaiveDate::from_ymd_opt(2024, 1, 1),
            to: None,
        };
        let subset = filter_records(&records, &filter);
        assert!(subset.is_empty());
    }

    #[test]
    fn default_filter_passes_everything() {
        let records = generate_sales(5, 42).unwrap();
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter_records(&records, &filter), records);
    }

    #[test]
    fn daily_category_filter_partitions() {
        let records = generate_daily(80, 42).unwrap();
        let total: usize = Category::ALL
            .into_iter()
            .map(|c| filter_daily_by_category(&records, c).len())
            .sum();
        assert_eq!(total, records.len());
    }
}
