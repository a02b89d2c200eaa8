use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScalingError {
    #[error("Cannot fit a scaler: no rows were supplied")]
    EmptyInput,

    #[error("Inconsistent input shapes: expected {expected} columns, found {found}")]
    InconsistentShape { expected: usize, found: usize },

    #[error("The '{column}' column was constant when the scaler was fitted; its scale is degenerate and cannot be inverted")]
    DegenerateScale { column: &'static str },
}
