pub mod columns;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use columns::{FeatureColumn, DATE_COLUMN};
pub use structs::SalesRecord;
