//! Dataset serialization: CSV for tabular consumers, JSON for run summaries.

pub mod export;
pub mod summary;
