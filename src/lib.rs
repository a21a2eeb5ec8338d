//! # Claims Triangle
//!
//! Aggregates tabular insurance claim payment records into cumulative
//! claims development triangles: for each product line, the running total
//! of incremental payments over successive development periods, indexed by
//! origin period.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: payment sums use `rust_decimal` via [`Amount`]
//! - **Degrade gracefully**: malformed input rows are skipped, never fatal
//! - **Absent is not zero**: blank fields stay absent until summation
//! - **Deterministic output**: products in first-seen order, periods ascending
//!
//! ## Example
//!
//! ```
//! use claims_triangle::{cumulative_triangle, parse_records};
//! use std::io::Cursor;
//!
//! let records = parse_records(Cursor::new("Comp,1992,1992,110.0\n"));
//! let lines = cumulative_triangle(&records).unwrap();
//! assert_eq!(lines, vec!["1992, 1", "Comp, 110"]);
//! ```

pub mod amount;
pub mod error;
pub mod parser;
pub mod record;
pub mod store;
pub mod triangle;

pub use amount::Amount;
pub use error::{Result, TriangleError};
pub use parser::parse_records;
pub use record::PaymentRecord;
pub use triangle::cumulative_triangle;
