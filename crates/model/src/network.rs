use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loss {
    MeanSquaredError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Optimizer {
    Adam,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MeanAbsoluteError,
}

/// One fully-connected layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub units: usize,
    pub activation: Activation,
}

/// The compiled shape of the forecasting network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Width of the input feature vectors.
    pub input_size: usize,
    pub layers: Vec<LayerConfig>,
    pub loss: Loss,
    pub optimizer: Optimizer,
    pub metrics: Vec<Metric>,
}

impl ModelConfig {
    /// The fixed next-step sales network: two hidden relu layers of three
    /// units each and a single linear output.
    pub fn sales_forecast(input_size: usize) -> Self {
        Self {
            input_size,
            layers: vec![
                LayerConfig {
                    units: 3,
                    activation: Activation::Relu,
                },
                LayerConfig {
                    units: 3,
                    activation: Activation::Relu,
                },
                LayerConfig {
                    units: 1,
                    activation: Activation::Linear,
                },
            ],
            loss: Loss::MeanSquaredError,
            optimizer: Optimizer::Adam,
            metrics: vec![Metric::MeanAbsoluteError],
        }
    }

    /// Width of the network's output, one scalar per predicted step.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(self.input_size, |layer| layer.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_forecast_network_has_the_fixed_shape() {
        let config = ModelConfig::sales_forecast(29);

        assert_eq!(config.input_size, 29);
        assert_eq!(config.layers.len(), 3);
        assert_eq!(config.layers[0].units, 3);
        assert_eq!(config.layers[0].activation, Activation::Relu);
        assert_eq!(config.layers[2].units, 1);
        assert_eq!(config.layers[2].activation, Activation::Linear);
        assert_eq!(config.output_size(), 1);
        assert_eq!(config.loss, Loss::MeanSquaredError);
        assert_eq!(config.optimizer, Optimizer::Adam);
        assert_eq!(config.metrics, vec![Metric::MeanAbsoluteError]);
    }
}
