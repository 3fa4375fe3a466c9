//! Weather-correlated synthetic sales generation.
//!
//! The generator is deterministic by contract: one `StdRng` is seeded per
//! call and threaded through every draw, in a fixed order (date loop outer;
//! temperature, then humidity, then one Poisson draw per item). Re-running
//! with the same `(days, seed)` reproduces the dataset bit-for-bit.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Normal, Poisson};

use crate::domain::{Category, DailyRecord, DatasetStats, DemandProfile, ItemType, SalesRecord, TempLean};
use crate::error::AppError;

/// First simulated calendar day; dates advance one day per step from here.
const EPOCH: (i32, u32, u32) = (2023, 1, 1);

/// Ambient temperature ~ Normal(20, 10), in °C.
const TEMP_MEAN: f64 = 20.0;
const TEMP_STD: f64 = 10.0;

/// Relative humidity ~ Uniform[30, 80), in %.
const HUMIDITY_MIN: f64 = 30.0;
const HUMIDITY_MAX: f64 = 80.0;

/// Evaluate the demand table: Poisson mean for one profile at one temperature.
///
/// The result is clamped at zero; the `max(0, …)` inside the coupling term
/// already keeps each branch non-negative for positive base rates.
pub fn demand_rate(profile: &DemandProfile, temperature: f64) -> f64 {
    let coupling = match profile.lean {
        TempLean::Cold => profile.sensitivity * (profile.threshold - temperature).max(0.0),
        TempLean::Warm => profile.sensitivity * (temperature - profile.threshold).max(0.0),
        TempLean::Flat => 0.0,
    };
    (profile.base + coupling).max(0.0)
}

/// Generate the multi-item dataset: one record per (date, item) pair.
///
/// Output order is date-major, item-minor (`ItemType::ALL` order), so the
/// length is `days * ItemType::ALL.len()`.
pub fn generate_sales(days: usize, seed: u64) -> Result<Vec<SalesRecord>, AppError> {
    if days == 0 {
        return Err(AppError::invalid_input("Day count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let temp_dist = Normal::new(TEMP_MEAN, TEMP_STD)
        .map_err(|e| AppError::new(4, format!("Temperature distribution error: {e}")))?;

    let mut records = Vec::with_capacity(days * ItemType::ALL.len());

    for day in 0..days {
        let date = nth_date(day);
        // One weather draw per day, shared by every item record below.
        let temperature = temp_dist.sample(&mut rng);
        let humidity = rng.gen_range(HUMIDITY_MIN..HUMIDITY_MAX);

        for item in ItemType::ALL {
            let lambda = demand_rate(&item.demand(), temperature);
            let quantity_sold = sample_poisson(&mut rng, lambda)?;
            let price = item.price();
            let revenue = quantity_sold as f64 * price;

            records.push(SalesRecord {
                date,
                item_type: item,
                quantity_sold,
                temperature,
                humidity,
                price,
                revenue,
            });
        }
    }

    Ok(records)
}

/// Generate the simple per-day dataset: one record per date, with a
/// uniformly chosen category and a flat-rate Poisson sales draw.
pub fn generate_daily(days: usize, seed: u64) -> Result<Vec<DailyRecord>, AppError> {
    if days == 0 {
        return Err(AppError::invalid_input("Day count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let temp_dist = Normal::new(TEMP_MEAN, TEMP_STD)
        .map_err(|e| AppError::new(4, format!("Temperature distribution error: {e}")))?;

    let mut records = Vec::with_capacity(days);

    for day in 0..days {
        let date = nth_date(day);
        let temperature = temp_dist.sample(&mut rng);
        let humidity = rng.gen_range(HUMIDITY_MIN..HUMIDITY_MAX);
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let sales = sample_poisson(&mut rng, demand_rate(&category.demand(), temperature))?;

        records.push(DailyRecord {
            date,
            category,
            sales,
            temperature,
            humidity,
        });
    }

    Ok(records)
}

/// Basic dataset shape, or `None` for an empty dataset.
pub fn compute_stats(records: &[SalesRecord]) -> Option<DatasetStats> {
    let first = records.first()?;

    let mut date_min = first.date;
    let mut date_max = first.date;
    let mut items: HashSet<ItemType> = HashSet::new();

    for r in records {
        date_min = date_min.min(r.date);
        date_max = date_max.max(r.date);
        items.insert(r.item_type);
    }

    Some(DatasetStats {
        n_records: records.len(),
        date_min,
        date_max,
        n_items: items.len(),
    })
}

fn nth_date(day: usize) -> NaiveDate {
    let (y, m, d) = EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    epoch
        .checked_add_signed(Duration::days(day as i64))
        .unwrap_or(epoch)
}

fn sample_poisson(rng: &mut StdRng, lambda: f64) -> Result<u64, AppError> {
    // Poisson means must be strictly positive; the demand table only yields
    // zero if an item's base rate is zero.
    let poisson = Poisson::new(lambda.max(1e-9))
        .map_err(|e| AppError::new(4, format!("Demand distribution error: {e}")))?;
    let draw: f64 = poisson.sample(rng);
    Ok(draw.round() as u64)
}
