//! Error types for preprocessing operations.

use std::fmt;

/// Error type for preprocessing operations.
#[derive(Debug)]
pub enum PreprocessingError {
    /// Construction arguments violate the scaler's contract.
    InvalidArgument(String),
    /// Fit input contains values that cannot be scaled (NaN).
    InvalidData {
        /// 1-based position of the offending array among the fit inputs.
        position: usize,
        reason: String,
    },
    /// The operation needs state that is only present after fitting.
    NotFitted(String),
    /// Empty data provided where non-empty was required.
    EmptyData(String),
    /// Serialization or deserialization error.
    SerializationError(String),
    /// I/O error during file operations.
    IoError(String),
}

impl fmt::Display for PreprocessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessingError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {}", msg)
            }
            PreprocessingError::InvalidData { position, reason } => {
                write!(f, "Invalid data: array {} {}", position, reason)
            }
            PreprocessingError::NotFitted(msg) => {
                write!(f, "Not fitted: {}", msg)
            }
            PreprocessingError::EmptyData(msg) => {
                write!(f, "Empty data: {}", msg)
            }
            PreprocessingError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            PreprocessingError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for PreprocessingError {}

impl From<std::io::Error> for PreprocessingError {
    fn from(err: std::io::Error) -> Self {
        PreprocessingError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for PreprocessingError {
    fn from(err: bincode::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for PreprocessingError {
    fn from(err: serde_json::Error) -> Self {
        PreprocessingError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_argument() {
        let err = PreprocessingError::InvalidArgument("both given".to_string());
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn test_error_display_invalid_data_names_position() {
        let err = PreprocessingError::InvalidData {
            position: 2,
            reason: "contains NaN(s)".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid data: array 2 contains NaN(s)");
    }

    #[test]
    fn test_error_display_not_fitted() {
        let err = PreprocessingError::NotFitted("transform".to_string());
        assert!(err.to_string().contains("Not fitted"));
    }

    #[test]
    fn test_error_display_empty_data() {
        let err = PreprocessingError::EmptyData("no arrays".to_string());
        assert!(err.to_string().contains("Empty data"));
    }

    #[test]
    fn test_error_display_serialization_error() {
        let err = PreprocessingError::SerializationError("failed".to_string());
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PreprocessingError = io_err.into();
        assert!(matches!(err, PreprocessingError::IoError(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PreprocessingError::InvalidArgument("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_truncated_scaler_values_are_serialization_error() {
        use crate::preprocessing::ScalerValues;
        use crate::serialization::SerializableParams;

        let bytes = ScalerValues::new((0.0f64, 1.0), -0.2, 0.2).to_bytes().unwrap();
        let err: PreprocessingError = ScalerValues::<f64>::from_bytes(&bytes[..12])
            .unwrap_err()
            .into();
        assert!(matches!(err, PreprocessingError::SerializationError(_)));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let err: PreprocessingError = json_err.into();
        assert!(matches!(err, PreprocessingError::SerializationError(_)));
    }
}
