//! gradebook-report — export artifact writers.
//!
//! Serializes the record store into files the core never touches: the CSV
//! roster export and a markdown class summary.

pub mod csv;
pub mod summary;
