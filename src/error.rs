//! Error types for the hit score core engine

use thiserror::Error;

/// Main error type for the hit score core engine
#[derive(Error, Debug)]
pub enum HitScoreError {
    #[error("Invalid config format: {0}")]
    ConfigFormat(String),

    #[error("Config not found: {0}")]
    ConfigMissing(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HitScoreError {
    fn from(err: serde_json::Error) -> Self {
        HitScoreError::ConfigFormat(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<HitScoreError> for pyo3::PyErr {
    fn from(err: HitScoreError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyFileNotFoundError, PyOSError, PyRuntimeError, PyValueError};

        match err {
            HitScoreError::ConfigFormat(msg) => {
                PyValueError::new_err(format!("Invalid config format: {}", msg))
            }
            HitScoreError::ConfigMissing(msg) => {
                PyFileNotFoundError::new_err(format!("Config not found: {}", msg))
            }
            HitScoreError::Storage(e) => PyOSError::new_err(format!("Storage error: {}", e)),
            HitScoreError::Serialization(msg) => {
                PyRuntimeError::new_err(format!("Serialization error: {}", msg))
            }
        }
    }
}

/// Result type alias for the hit score core engine
pub type Result<T> = std::result::Result<T, HitScoreError>;
