//! Read-only analytics client for the buyer/seller match service.
//!
//! The service pre-computes everything; this crate fetches row
//! collections, filters and sorts them in memory (`table`), derives
//! headline roll-ups (`summary`), and drills down into the records behind
//! a grade-count cell (`lookup`).

pub mod config;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod source;
pub mod summary;
pub mod table;
