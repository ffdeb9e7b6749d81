use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Cannot compute bottleneck probability over an empty forecast window")]
    EmptyForecast,

    #[error("Non-finite density value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid config value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing config field: {field}")]
    MissingConfig { field: String },

    #[error("Alert storage failed: {message}")]
    AlertStorage { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ForecastError {
    /// True for failures of the alert persistence boundary, as opposed to
    /// deterministic computation or validation failures. Callers use this to
    /// tell "could not compute risk" apart from "computed risk but could not
    /// persist the alert".
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ForecastError::AlertStorage { .. } | ForecastError::IoError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let error = ForecastError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_storage_errors_are_distinguishable() {
        let storage = ForecastError::AlertStorage {
            message: "disk full".to_string(),
        };
        let compute = ForecastError::EmptyForecast;
        assert!(storage.is_storage());
        assert!(!compute.is_storage());
    }
}
