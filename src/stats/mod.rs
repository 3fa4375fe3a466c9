//! Stateless aggregation and filtering views over a generated dataset.
//!
//! Every function here is pure: it borrows a record slice, computes, and
//! returns a fresh value. Calling any of them repeatedly on the same slice
//! yields the same result.

pub mod corr;
pub mod describe;
pub mod filter;
pub mod grouping;

pub use corr::correlation_matrix;
pub use describe::{FieldSummary, summary_stats};
pub use filter::{RecordFilter, filter_by_item, filter_daily_by_category, filter_records};
pub use grouping::{GroupStats, daily_rollup, group_by_item, group_by_key};
