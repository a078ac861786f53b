use thiserror::Error;

/// Error type for aggregation and chart rendering
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Length mismatch between two parallel arrays
    pub(crate) fn length_mismatch(labels: usize, values: usize) -> Self {
        Error::InvalidArgument(format!(
            "labels and values must have the same length (labels {}, values {})",
            labels, values
        ))
    }
}
