use thiserror::Error;

/// Top-level error type for isocast.
///
/// Rendering itself never fails; only configuration and terminal I/O do.
#[derive(Debug, Error)]
pub enum IsocastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised while validating viewer or solver configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("screen dimensions must be non-zero, got {height}x{width}")]
    ZeroDimension { height: usize, width: usize },

    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("invalid search bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },
}

impl ConfigError {
    /// Checks that `value` is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] or [`ConfigError::NonPositive`].
    pub fn require_positive(parameter: &'static str, value: f64) -> std::result::Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NonFinite { parameter, value });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { parameter, value });
        }
        Ok(value)
    }
}

/// Convenience type alias for results using [`IsocastError`].
pub type Result<T> = std::result::Result<T, IsocastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_positive_accepts_positive() {
        assert_eq!(ConfigError::require_positive("radius", 3.0), Ok(3.0));
    }

    #[test]
    fn require_positive_rejects_zero_and_nan() {
        assert_eq!(
            ConfigError::require_positive("radius", 0.0),
            Err(ConfigError::NonPositive {
                parameter: "radius",
                value: 0.0
            })
        );
        assert!(matches!(
            ConfigError::require_positive("radius", f64::NAN),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn config_error_converts_into_top_level() {
        let err: IsocastError = ConfigError::ZeroDimension {
            height: 0,
            width: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "screen dimensions must be non-zero, got 0x4"
        );
    }
}
