//! # Salescast Model Description
//!
//! The regression model itself is deliberately small: three dense layers with
//! fixed sizes, mean-squared-error loss, and the Adam optimizer. Nothing here
//! trains anything; this crate describes that network as plain serializable
//! configuration and bundles it, together with the window configuration and
//! the fitted scaler, into the [`ForecastArtifact`] handed to the external
//! training engine.

pub mod artifact;
pub mod network;

// Re-export the key components to create a clean, public-facing API.
pub use artifact::ForecastArtifact;
pub use network::{Activation, LayerConfig, Loss, Metric, ModelConfig, Optimizer};
