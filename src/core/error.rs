//! Engine error type.
//!
//! Every fallible operation in the engine reports one of these variants
//! synchronously. Nothing is retried internally and nothing panics, so a
//! caller can always recover locally.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A configuration field (or board dimension) is outside its domain.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field, as it appears in the config record.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// A neighbourhood code other than `NM` or `NN`.
    #[error("unknown neighbourhood code {code:?}, expected \"NM\" or \"NN\"")]
    Parse {
        /// The code that failed to parse.
        code: String,
    },

    /// A coordinate outside the board.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A cell state the configuration cannot represent.
    #[error("cell state {state} is outside 0..={max}")]
    InvalidState { state: u8, max: u8 },
}

impl EngineError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = EngineError::validation("radius", "must be in 1..=10, got 0");
        assert_eq!(err.to_string(), "invalid radius: must be in 1..=10, got 0");
    }

    #[test]
    fn test_parse_message() {
        let err = EngineError::Parse {
            code: "XX".to_string(),
        };
        assert!(err.to_string().contains("\"XX\""));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = EngineError::OutOfBounds {
            x: 5,
            y: 1,
            width: 3,
            height: 3,
        };
        assert_eq!(err.to_string(), "cell (5, 1) is outside the 3x3 board");
    }
}
