use thiserror::Error;

/// Top-level error type for brush generation.
#[derive(Debug, Error)]
pub enum BrushError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while reading or writing brush parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("unknown parameter `{0}`")]
    Unknown(String),

    #[error("parameter `{key}` expects a {expected} value")]
    KindMismatch {
        key: &'static str,
        expected: &'static str,
    },

    #[error("parameter `{key}` = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter `{key}` is not a finite number")]
    NotFinite { key: &'static str },
}

/// Errors related to brush operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`BrushError`].
pub type Result<T> = std::result::Result<T, BrushError>;
