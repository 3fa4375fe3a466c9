//! Synthetic dataset generation.

pub mod generate;

pub use generate::{compute_stats, demand_rate, generate_daily, generate_sales};
