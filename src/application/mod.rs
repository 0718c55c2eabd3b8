//! Application layer: the amortization engine and what is built on top of it.
//!
//! `engine` holds the pure schedule computation. `comparison` runs it twice,
//! with and without extra payments, and `report` folds a schedule into
//! per-year subtotals.

pub mod comparison;
pub mod engine;
pub mod report;
