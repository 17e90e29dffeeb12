//! gradebook-core — Student records, grading policy, and statistics.
//!
//! This crate defines the data model, the grade conversion policy, and the
//! record store that the rest of the gradebook system builds on. It performs
//! no I/O and emits no logs; every failure is surfaced as a typed result.

pub mod error;
pub mod grading;
pub mod model;
pub mod statistics;
pub mod store;
