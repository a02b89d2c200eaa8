//! # Salescast Feature Generation
//!
//! Turns normalized sales history into supervised training pairs for the
//! next-step sales model. This crate owns the two halves of that job:
//!
//! - [`create_windows`]: slides a fixed look-back window over a normalized
//!   matrix and emits one `(feature vector, target)` pair per valid start
//!   index. Pure and stateless; safe to call from multiple threads.
//! - [`load_features`] / [`build_scaler`]: the orchestration layer that reads
//!   raw sources through the `dataset` crate, applies the fitted
//!   [`MinMaxScaler`], and invokes the window generator.
//!
//! The look-back lengths are not process-wide constants; they travel in a
//! [`WindowConfig`] so tests and experiments can vary them per call.
//!
//! [`MinMaxScaler`]: scaling::MinMaxScaler

pub mod error;
pub mod loader;
pub mod windows;

// Re-export the key components to create a clean, public-facing API.
pub use error::LoadError;
pub use loader::{build_scaler, load_features};
pub use windows::{create_windows, feature_names, WindowConfig, TARGET_NAME};
