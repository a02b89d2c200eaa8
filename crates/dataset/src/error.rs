use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read data source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Data source {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Column '{column}' in {path} contains missing or non-numeric values")]
    MalformedColumn { path: PathBuf, column: &'static str },

    #[error("Column 'Date' in {path} could not be parsed as dates")]
    MalformedDate { path: PathBuf },
}
