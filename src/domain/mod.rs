//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed menu/category sets (`ItemType`, `Category`)
//! - the static demand and price tables (`DemandProfile`, `TempLean`)
//! - generated observation records (`SalesRecord`, `DailyRecord`)
//! - run configuration (`ReportConfig`) and dataset stats

pub mod types;

pub use types::*;
