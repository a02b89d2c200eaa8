use core_types::FeatureColumn;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Column name used for the prediction target in generated datasets.
pub const TARGET_NAME: &str = "sales";

/// Look-back lengths for one windowing pass.
///
/// Each sub-window is measured in time steps and anchored to the end of the
/// sales window. A sub-window longer than `look_back` clamps to the window
/// start, so its effective length is `min(length, look_back)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of trailing sales values fed to the model verbatim.
    pub look_back: usize,
    /// Length of the customers sub-window that is averaged into one scalar.
    pub look_back_customers: usize,
    /// Length of the open sub-window whose values are fed individually.
    pub look_back_open: usize,
}

impl WindowConfig {
    /// The canonical configuration of the production sales model.
    pub const fn sales_forecast() -> Self {
        Self {
            look_back: 20,
            look_back_customers: 20,
            look_back_open: 6,
        }
    }

    /// Effective customers sub-window length after clamping.
    pub const fn effective_customers(&self) -> usize {
        if self.look_back_customers < self.look_back {
            self.look_back_customers
        } else {
            self.look_back
        }
    }

    /// Effective open sub-window length after clamping.
    pub const fn effective_open(&self) -> usize {
        if self.look_back_open < self.look_back {
            self.look_back_open
        } else {
            self.look_back
        }
    }

    /// Length of every feature vector this configuration produces: the sales
    /// window, the customers mean, the open sub-window, and the two
    /// continuous features at the target step.
    pub const fn feature_len(&self) -> usize {
        self.look_back + 1 + self.effective_open() + FeatureColumn::CONTINUOUS.len()
    }
}

/// Slides the look-back window over a normalized matrix and produces one
/// supervised `(features, target)` pair per valid start index.
///
/// For each start `i` the feature vector is, in order: the sales values of
/// rows `[i, i + look_back)`, the mean of the trailing customers sub-window
/// (zero when the configured length is zero), the trailing open sub-window
/// values in chronological order, and the open and promo values at the target
/// step `i + look_back`. The target is the sales value at that step.
///
/// A dataset with `look_back` rows or fewer yields zero samples; that is a
/// valid, empty result rather than an error.
pub fn create_windows(data: &Array2<f32>, config: &WindowConfig) -> (Array2<f32>, Array1<f32>) {
    debug_assert!(data.ncols() >= FeatureColumn::COUNT);

    let feature_len = config.feature_len();
    let n_rows = data.nrows();
    if n_rows <= config.look_back {
        return (Array2::zeros((0, feature_len)), Array1::zeros(0));
    }

    let sales = FeatureColumn::Sales.index();
    let customers = FeatureColumn::Customers.index();
    let open = FeatureColumn::Open.index();

    let customers_len = config.effective_customers();
    let open_len = config.effective_open();

    let n_windows = n_rows - config.look_back;
    let mut x = Array2::zeros((n_windows, feature_len));
    let mut y = Array1::zeros(n_windows);

    for i in 0..n_windows {
        let target_step = i + config.look_back;
        let mut k = 0;

        for t in i..target_step {
            x[[i, k]] = data[[t, sales]];
            k += 1;
        }

        x[[i, k]] = if customers_len == 0 {
            0.0
        } else {
            let mut sum = 0.0;
            for t in (target_step - customers_len)..target_step {
                sum += data[[t, customers]];
            }
            sum / customers_len as f32
        };
        k += 1;

        for t in (target_step - open_len)..target_step {
            x[[i, k]] = data[[t, open]];
            k += 1;
        }

        for column in FeatureColumn::CONTINUOUS {
            x[[i, k]] = data[[target_step, column.index()]];
            k += 1;
        }
        debug_assert_eq!(k, feature_len);

        y[i] = data[[target_step, sales]];
    }

    (x, y)
}

/// Stable column labels for the feature vectors of `config`, used when a
/// generated dataset or model artifact needs named columns.
///
/// Lags count backwards from the target step, so `sales_lag_1` is the most
/// recent in-window sales value.
pub fn feature_names(config: &WindowConfig) -> Vec<String> {
    let mut names = Vec::with_capacity(config.feature_len());

    for lag in (1..=config.look_back).rev() {
        names.push(format!("sales_lag_{lag}"));
    }
    names.push("customers_mean".to_string());
    for lag in (1..=config.effective_open()).rev() {
        names.push(format!("open_lag_{lag}"));
    }
    for column in FeatureColumn::CONTINUOUS {
        names.push(column.name().to_ascii_lowercase());
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    /// Builds a matrix from rows of `[sales, customers, open, promo]`.
    fn matrix(rows: &[[f32; 4]]) -> Array2<f32> {
        let mut data = Array2::zeros((rows.len(), 4));
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                data[[i, j]] = value;
            }
        }
        data
    }

    /// 25 days of steadily growing sales with constant covariates.
    fn ramp() -> Array2<f32> {
        let rows: Vec<[f32; 4]> = (0..25).map(|i| [i as f32, 10.0, 1.0, 0.0]).collect();
        matrix(&rows)
    }

    #[test]
    fn produces_one_sample_per_valid_start_index() {
        let config = WindowConfig {
            look_back: 20,
            look_back_customers: 20,
            look_back_open: 6,
        };
        let (x, y) = create_windows(&ramp(), &config);

        assert_eq!(x.nrows(), 5);
        assert_eq!(y.len(), 5);
    }

    #[test]
    fn first_sample_of_the_ramp_dataset() {
        let config = WindowConfig {
            look_back: 20,
            look_back_customers: 20,
            look_back_open: 6,
        };
        let (x, y) = create_windows(&ramp(), &config);

        // Sales window is the first twenty steps.
        for t in 0..20 {
            assert!((x[[0, t]] - t as f32).abs() < TOLERANCE);
        }
        // Customers are constant, so their mean is that constant.
        assert!((x[[0, 20]] - 10.0).abs() < TOLERANCE);
        // Six open values, all 1.
        for k in 21..27 {
            assert!((x[[0, k]] - 1.0).abs() < TOLERANCE);
        }
        // Continuous features at the target step: open, then promo.
        assert!((x[[0, 27]] - 1.0).abs() < TOLERANCE);
        assert!((x[[0, 28]] - 0.0).abs() < TOLERANCE);

        assert!((y[0] - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn feature_vector_length_is_constant() {
        let config = WindowConfig {
            look_back: 20,
            look_back_customers: 20,
            look_back_open: 6,
        };
        assert_eq!(config.feature_len(), 20 + 6 + 1 + 2);

        let (x, _) = create_windows(&ramp(), &config);
        assert_eq!(x.ncols(), config.feature_len());
    }

    #[test]
    fn zero_customer_window_substitutes_a_zero_mean() {
        let config = WindowConfig {
            look_back: 3,
            look_back_customers: 0,
            look_back_open: 2,
        };
        let data = matrix(&[
            [1.0, 5.0, 1.0, 0.0],
            [2.0, 5.0, 1.0, 0.0],
            [3.0, 5.0, 1.0, 0.0],
            [4.0, 5.0, 1.0, 1.0],
        ]);
        let (x, _) = create_windows(&data, &config);

        // Feature layout: 3 sales, customers mean, 2 open, 2 continuous.
        assert_eq!(x[[0, 3]], 0.0);
    }

    #[test]
    fn dataset_no_longer_than_the_window_yields_nothing() {
        let config = WindowConfig {
            look_back: 20,
            look_back_customers: 20,
            look_back_open: 6,
        };
        let rows: Vec<[f32; 4]> = (0..20).map(|i| [i as f32, 1.0, 1.0, 0.0]).collect();
        let (x, y) = create_windows(&matrix(&rows), &config);

        assert_eq!(x.nrows(), 0);
        assert_eq!(x.ncols(), config.feature_len());
        assert_eq!(y.len(), 0);
    }

    #[test]
    fn oversized_sub_windows_clamp_to_the_window_start() {
        let config = WindowConfig {
            look_back: 5,
            look_back_customers: 30,
            look_back_open: 10,
        };
        assert_eq!(config.effective_customers(), 5);
        assert_eq!(config.effective_open(), 5);
        assert_eq!(config.feature_len(), 5 + 1 + 5 + 2);

        let rows: Vec<[f32; 4]> = (0..8)
            .map(|i| [i as f32, (i * 10) as f32, i as f32, 0.0])
            .collect();
        let (x, _) = create_windows(&matrix(&rows), &config);

        // Customers mean over exactly the five in-window steps 0..5.
        assert!((x[[0, 5]] - 20.0).abs() < TOLERANCE);
        // Open values are the same five steps, chronologically.
        for t in 0..5 {
            assert!((x[[0, 6 + t]] - t as f32).abs() < TOLERANCE);
        }
    }

    #[test]
    fn feature_names_match_the_vector_layout() {
        let config = WindowConfig {
            look_back: 3,
            look_back_customers: 2,
            look_back_open: 2,
        };
        let names = feature_names(&config);

        assert_eq!(names.len(), config.feature_len());
        assert_eq!(
            names,
            vec![
                "sales_lag_3",
                "sales_lag_2",
                "sales_lag_1",
                "customers_mean",
                "open_lag_2",
                "open_lag_1",
                "open",
                "promo",
            ]
        );
    }
}
