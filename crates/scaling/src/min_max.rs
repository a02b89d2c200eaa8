use crate::error::ScalingError;
use core_types::FeatureColumn;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fitted parameters for a single column.
///
/// `scaled = (raw - data_min) * scale`, with `scale = 1 / (data_max - data_min)`.
/// A constant column is stored with `scale = 0.0`: the forward transform maps
/// it to zero, and the inverse transform refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnParams {
    pub data_min: f32,
    pub scale: f32,
}

impl ColumnParams {
    fn from_range(data_min: f32, data_max: f32) -> Self {
        let range = data_max - data_min;
        let scale = if range == 0.0 { 0.0 } else { 1.0 / range };
        Self { data_min, scale }
    }
}

/// A min-max transform mapping each column's observed range to [0, 1].
///
/// Fitted once over the row-wise concatenation of one or more raw matrices
/// and immutable afterwards. The parameter vector is ordered by the canonical
/// column layout, so `columns()[FeatureColumn::Sales.index()]` is the sales
/// column's fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    columns: Vec<ColumnParams>,
}

impl MinMaxScaler {
    /// Fits a scaler over the row-wise concatenation of the given matrices.
    ///
    /// # Errors
    ///
    /// - [`ScalingError::EmptyInput`] when the matrices contain no rows (or
    ///   no matrices were supplied at all).
    /// - [`ScalingError::InconsistentShape`] when the matrices disagree on
    ///   column count.
    pub fn fit(matrices: &[Array2<f32>]) -> Result<Self, ScalingError> {
        let n_columns = match matrices.first() {
            Some(first) => first.ncols(),
            None => return Err(ScalingError::EmptyInput),
        };
        for matrix in matrices {
            if matrix.ncols() != n_columns {
                return Err(ScalingError::InconsistentShape {
                    expected: n_columns,
                    found: matrix.ncols(),
                });
            }
        }

        let n_rows: usize = matrices.iter().map(|m| m.nrows()).sum();
        if n_rows == 0 || n_columns == 0 {
            return Err(ScalingError::EmptyInput);
        }

        let mut mins = vec![f32::INFINITY; n_columns];
        let mut maxs = vec![f32::NEG_INFINITY; n_columns];
        for matrix in matrices {
            for row in matrix.rows() {
                for (j, &value) in row.iter().enumerate() {
                    if value < mins[j] {
                        mins[j] = value;
                    }
                    if value > maxs[j] {
                        maxs[j] = value;
                    }
                }
            }
        }

        let columns: Vec<ColumnParams> = mins
            .into_iter()
            .zip(maxs)
            .map(|(min, max)| ColumnParams::from_range(min, max))
            .collect();

        tracing::debug!(rows = n_rows, columns = n_columns, "fitted min-max scaler");

        Ok(Self { columns })
    }

    /// Number of columns this scaler was fitted on.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// The fitted per-column parameters, in canonical column order.
    pub fn columns(&self) -> &[ColumnParams] {
        &self.columns
    }

    /// Applies the forward transform to every cell of `data`.
    ///
    /// # Errors
    ///
    /// [`ScalingError::InconsistentShape`] when `data` does not have the same
    /// column count the scaler was fitted on.
    pub fn transform(&self, data: &Array2<f32>) -> Result<Array2<f32>, ScalingError> {
        if data.ncols() != self.columns.len() {
            return Err(ScalingError::InconsistentShape {
                expected: self.columns.len(),
                found: data.ncols(),
            });
        }

        let mut scaled = Array2::zeros(data.dim());
        for (i, row) in data.rows().into_iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                let params = &self.columns[j];
                scaled[[i, j]] = (value - params.data_min) * params.scale;
            }
        }

        Ok(scaled)
    }

    /// Maps scaled sales predictions back to their original scale.
    ///
    /// The model predicts in scaled space; this undoes the sales column's
    /// transform: `raw = scaled / scale + data_min`.
    ///
    /// # Errors
    ///
    /// [`ScalingError::DegenerateScale`] when the sales column was constant at
    /// fit time, so its scale is zero and the inverse is undefined.
    pub fn invert_sales(&self, scaled: &Array1<f32>) -> Result<Array1<f32>, ScalingError> {
        let params = self.columns[FeatureColumn::Sales.index()];
        if params.scale == 0.0 {
            return Err(ScalingError::DegenerateScale {
                column: FeatureColumn::Sales.name(),
            });
        }

        Ok(scaled.mapv(|value| value / params.scale + params.data_min))
    }
}
