//! # Salescast Scaling
//!
//! Min-max normalization for the raw sales matrices. A [`MinMaxScaler`] is
//! fitted once, offline, over one or more concatenated data sources and is
//! immutable afterwards; the same fitted instance is shared by the feature
//! loader (forward transform) and by prediction post-processing (inverse
//! transform of the sales column).
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** no I/O. Callers hand in `ndarray` matrices and get
//!   matrices back, so the transform is trivially testable and safe to call
//!   from multiple threads.
//! - **Fit once, then read-only:** there is no partial-fit or refit; a new
//!   dataset means a new scaler.

pub mod error;
pub mod min_max;

// Re-export the key components to create a clean, public-facing API.
pub use error::ScalingError;
pub use min_max::{ColumnParams, MinMaxScaler};
