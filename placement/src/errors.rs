use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScalerError {
    #[error("Input data is empty")]
    EmptyInput,

    #[error("Input data has no feature columns")]
    NoFeatures,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Scaler has not been fitted")]
    NotFitted,
}

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Scaler error: {0}")]
    Scaler(#[from] ScalerError),

    #[error("Invalid number of neighbors: k = {k}, must be between 1 and {n_samples}")]
    InvalidK { k: usize, n_samples: usize },

    #[error("Invalid class label {label}: expected 0 or 1")]
    InvalidLabel { label: f64 },
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset must contain at least one row")]
    EmptyDataset,

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid k = {k}: must be an odd number between {min} and {max}")]
    InvalidK { k: usize, min: usize, max: usize },

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}
