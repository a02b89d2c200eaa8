use crate::network::ModelConfig;
use ml_features::{feature_names, WindowConfig};
use scaling::MinMaxScaler;
use serde::{Deserialize, Serialize};

/// Everything the external training engine needs to train and serve the
/// sales model: the network description, the windowing that produced the
/// dataset, the labels of the feature columns, and the fitted scaler so
/// predictions can be mapped back to raw sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastArtifact {
    pub model: ModelConfig,
    pub window: WindowConfig,
    pub feature_names: Vec<String>,
    pub scaler: MinMaxScaler,
}

impl ForecastArtifact {
    /// Assembles the artifact for one windowing configuration and fitted
    /// scaler. The network input width is derived from the configuration, so
    /// the two cannot drift apart.
    pub fn new(window: WindowConfig, scaler: MinMaxScaler) -> Self {
        let names = feature_names(&window);
        Self {
            model: ModelConfig::sales_forecast(names.len()),
            window,
            feature_names: names,
            scaler,
        }
    }
}
