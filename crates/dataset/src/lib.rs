//! # Salescast Dataset
//!
//! The data-reading collaborator of the feature pipeline. Reads a raw CSV
//! source, parses the `Date` column, casts the four feature columns to 32-bit
//! floats, and hands the rest of the pipeline either typed [`SalesRecord`]s
//! or the canonical positional matrix.
//!
//! Columns outside the fixed schema (store ids, holiday flags, and the like)
//! are read and ignored. Any schema problem surfaces immediately as a
//! [`DatasetError`] naming the offending source and column; there are no
//! retries and no partial results.
//!
//! [`SalesRecord`]: core_types::SalesRecord

pub mod error;
pub mod reader;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use reader::{read_raw, read_records};
