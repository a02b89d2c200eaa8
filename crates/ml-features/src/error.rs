use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No data sources were supplied")]
    NoSources,

    #[error("Failed to read a data source: {0}")]
    Dataset(#[from] dataset::DatasetError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] scaling::ScalingError),
}
