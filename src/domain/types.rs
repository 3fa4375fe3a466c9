//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during generation and aggregation
//! - exported to JSON/CSV
//! - reloaded later for comparisons across runs

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Menu item for the multi-item generator.
///
/// The set is closed: adding an item means adding a variant plus one row in
/// the demand/price tables, not new sampling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Coffee,
    Tea,
    Pastry,
    Sandwich,
    Juice,
    Salad,
    Smoothie,
    Cake,
}

/// Direction of the temperature coupling in an item's demand formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempLean {
    /// Expected demand rises as temperature drops below the threshold.
    Cold,
    /// Expected demand rises as temperature climbs above the threshold.
    Warm,
    /// No temperature coupling; the base rate is used as-is.
    Flat,
}

/// Static demand parameters for one item or category.
///
/// The Poisson mean is a piecewise-linear function of the day's temperature:
///
/// `λ = base + sensitivity * max(0, threshold - temp)`   (Cold)
/// `λ = base + sensitivity * max(0, temp - threshold)`   (Warm)
/// `λ = base`                                            (Flat)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandProfile {
    pub base: f64,
    pub sensitivity: f64,
    pub threshold: f64,
    pub lean: TempLean,
}

impl ItemType {
    /// All menu items, in the fixed generation order (item-minor loop).
    pub const ALL: [ItemType; 8] = [
        ItemType::Coffee,
        ItemType::Tea,
        ItemType::Pastry,
        ItemType::Sandwich,
        ItemType::Juice,
        ItemType::Salad,
        ItemType::Smoothie,
        ItemType::Cake,
    ];

    /// Human-readable label for terminal output and CSV.
    pub fn display_name(self) -> &'static str {
        match self {
            ItemType::Coffee => "Coffee",
            ItemType::Tea => "Tea",
            ItemType::Pastry => "Pastry",
            ItemType::Sandwich => "Sandwich",
            ItemType::Juice => "Juice",
            ItemType::Salad => "Salad",
            ItemType::Smoothie => "Smoothie",
            ItemType::Cake => "Cake",
        }
    }

    /// Parse the CSV/display label back into an item.
    pub fn from_label(label: &str) -> Option<ItemType> {
        ItemType::ALL
            .into_iter()
            .find(|i| i.display_name().eq_ignore_ascii_case(label))
    }

    /// Fixed unit price (currency units), one constant per item.
    pub fn price(self) -> f64 {
        match self {
            ItemType::Coffee => 3.0,
            ItemType::Tea => 2.5,
            ItemType::Pastry => 2.0,
            ItemType::Sandwich => 5.0,
            ItemType::Juice => 3.5,
            ItemType::Salad => 4.5,
            ItemType::Smoothie => 4.0,
            ItemType::Cake => 3.5,
        }
    }

    /// Static demand table row for this item.
    ///
    /// Hot drinks and baked goods lean cold, fresh/cold items lean warm.
    pub fn demand(self) -> DemandProfile {
        let (base, sensitivity, threshold, lean) = match self {
            ItemType::Coffee => (80.0, 3.0, 15.0, TempLean::Cold),
            ItemType::Tea => (80.0, 2.0, 10.0, TempLean::Cold),
            ItemType::Pastry => (30.0, 2.0, 15.0, TempLean::Cold),
            ItemType::Sandwich => (35.0, 1.0, 10.0, TempLean::Warm),
            ItemType::Juice => (25.0, 2.0, 15.0, TempLean::Warm),
            ItemType::Salad => (20.0, 2.0, 20.0, TempLean::Warm),
            ItemType::Smoothie => (30.0, 3.0, 18.0, TempLean::Warm),
            ItemType::Cake => (20.0, 1.0, 12.0, TempLean::Cold),
        };
        DemandProfile {
            base,
            sensitivity,
            threshold,
            lean,
        }
    }
}

/// Category label for the simple one-record-per-day generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }

    /// Flat demand rates; the simple variant has no temperature coupling.
    pub fn demand(self) -> DemandProfile {
        let base = match self {
            Category::A => 100.0,
            Category::B => 80.0,
            Category::C => 60.0,
            Category::D => 40.0,
        };
        DemandProfile {
            base,
            sensitivity: 0.0,
            threshold: 0.0,
            lean: TempLean::Flat,
        }
    }
}

/// One synthetic observation: what one item sold on one day.
///
/// `temperature`/`humidity` are ambient and shared by every record of the
/// same date. `revenue` is derived (`quantity_sold * price`) and never set
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub item_type: ItemType,
    pub quantity_sold: u64,
    pub temperature: f64,
    pub humidity: f64,
    pub price: f64,
    pub revenue: f64,
}

/// One observation of the simple per-day variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub sales: u64,
    pub temperature: f64,
    pub humidity: f64,
}

/// Numeric field selector used by summary/rollup/correlation.
///
/// Keeping field access behind one enum means every aggregate works on any
/// field without per-field code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    QuantitySold,
    Temperature,
    Humidity,
    Price,
    Revenue,
}

impl NumericField {
    /// All numeric fields, in the fixed reporting/CSV order.
    pub const ALL: [NumericField; 5] = [
        NumericField::QuantitySold,
        NumericField::Temperature,
        NumericField::Humidity,
        NumericField::Price,
        NumericField::Revenue,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            NumericField::QuantitySold => "quantity_sold",
            NumericField::Temperature => "temperature",
            NumericField::Humidity => "humidity",
            NumericField::Price => "price",
            NumericField::Revenue => "revenue",
        }
    }

    /// Extract this field from a record as `f64`.
    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            NumericField::QuantitySold => record.quantity_sold as f64,
            NumericField::Temperature => record.temperature,
            NumericField::Humidity => record.humidity,
            NumericField::Price => record.price,
            NumericField::Revenue => record.revenue,
        }
    }
}

/// Categorical key selector for grouped aggregates.
///
/// The same aggregation runs against any key; today's records carry two
/// categorical axes, the menu item and the calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    ItemType,
    Date,
}

impl GroupKey {
    pub fn display_name(self) -> &'static str {
        match self {
            GroupKey::ItemType => "item_type",
            GroupKey::Date => "date",
        }
    }

    /// Render a record's key value as a group label.
    pub fn label(self, record: &SalesRecord) -> String {
        match self {
            GroupKey::ItemType => record.item_type.display_name().to_string(),
            GroupKey::Date => record.date.to_string(),
        }
    }
}

/// Basic shape of a generated dataset (for report headers and JSON export).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_records: usize,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub n_items: usize,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Number of calendar days to simulate.
    pub days: usize,
    /// Deterministic seed; same (days, seed) reproduces the dataset exactly.
    pub seed: u64,

    pub filter_item: Option<ItemType>,
    pub filter_from: Option<NaiveDate>,
    pub filter_to: Option<NaiveDate>,

    /// Key for the grouped-aggregates view.
    pub group_by: GroupKey,

    /// Rollup rows shown in terminal output.
    pub top_n: usize,

    pub export_csv: Option<PathBuf>,
    pub export_summary: Option<PathBuf>,
}
