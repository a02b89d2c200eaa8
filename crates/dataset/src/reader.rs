use crate::error::DatasetError;
use core_types::{FeatureColumn, SalesRecord, DATE_COLUMN};
use ndarray::Array2;
use polars::prelude::*;
use std::path::Path;

/// Reads a raw CSV source into typed records, in file order.
///
/// The `Date` column is parsed as a date and every feature column is cast to
/// `f32`. Extra columns are ignored.
pub fn read_records(path: &Path) -> Result<Vec<SalesRecord>, DatasetError> {
    let df = CsvReader::from_path(path)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .has_header(true)
        .with_try_parse_dates(true)
        .finish()
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let dates = date_column(&df, path)?;
    let sales = feature_column(&df, FeatureColumn::Sales, path)?;
    let customers = feature_column(&df, FeatureColumn::Customers, path)?;
    let open = feature_column(&df, FeatureColumn::Open, path)?;
    let promo = feature_column(&df, FeatureColumn::Promo, path)?;

    let records: Vec<SalesRecord> = dates
        .into_iter()
        .zip(sales)
        .zip(customers)
        .zip(open.into_iter().zip(promo))
        .map(|(((date, sales), customers), (open, promo))| SalesRecord {
            date,
            sales,
            customers,
            open,
            promo,
        })
        .collect();

    tracing::info!(rows = records.len(), source = %path.display(), "read raw data source");

    Ok(records)
}

/// Reads a raw CSV source straight into the canonical positional matrix
/// (rows = time steps, columns in canonical order).
pub fn read_raw(path: &Path) -> Result<Array2<f32>, DatasetError> {
    let records = read_records(path)?;

    let mut matrix = Array2::zeros((records.len(), FeatureColumn::COUNT));
    for (i, record) in records.iter().enumerate() {
        let row = record.to_row();
        for (j, value) in row.into_iter().enumerate() {
            matrix[[i, j]] = value;
        }
    }

    Ok(matrix)
}

/// Extracts the parsed dates, failing if the column is absent or not a date.
fn date_column(df: &DataFrame, path: &Path) -> Result<Vec<chrono::NaiveDate>, DatasetError> {
    let series = df.column(DATE_COLUMN).map_err(|_| DatasetError::MissingColumn {
        path: path.to_path_buf(),
        column: DATE_COLUMN,
    })?;

    let dates = series.date().map_err(|_| DatasetError::MalformedDate {
        path: path.to_path_buf(),
    })?;

    dates
        .as_date_iter()
        .map(|date| {
            date.ok_or_else(|| DatasetError::MalformedDate {
                path: path.to_path_buf(),
            })
        })
        .collect()
}

/// Extracts one feature column cast to `f32`.
///
/// A missing value or a value that does not cast to a number is a hard error;
/// upstream cleaning is expected to have removed both.
fn feature_column(
    df: &DataFrame,
    column: FeatureColumn,
    path: &Path,
) -> Result<Vec<f32>, DatasetError> {
    let series = df.column(column.name()).map_err(|_| DatasetError::MissingColumn {
        path: path.to_path_buf(),
        column: column.name(),
    })?;

    let casted = series
        .cast(&DataType::Float32)
        .map_err(|_| DatasetError::MalformedColumn {
            path: path.to_path_buf(),
            column: column.name(),
        })?;

    if casted.null_count() > 0 {
        return Err(DatasetError::MalformedColumn {
            path: path.to_path_buf(),
            column: column.name(),
        });
    }

    let values = casted.f32().map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(values.into_no_null_iter().collect())
}
