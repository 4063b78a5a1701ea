//! Error types shared across the diffbot crates

use thiserror::Error;

/// Errors raised while configuring or persisting a simulation
///
/// Every error is a configuration-time condition. Once a control loop has
/// been built, ticking it cannot fail.
#[derive(Debug, Error)]
pub enum DiffbotError {
    #[error("Invalid configuration: `{parameter}` {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl DiffbotError {
    /// Build an [`DiffbotError::InvalidConfiguration`] for `parameter`
    pub fn invalid_config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if this is a configuration error
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { parameter, .. } => Some(parameter),
            _ => None,
        }
    }
}

/// Result type for diffbot operations
pub type DiffbotResult<T> = Result<T, DiffbotError>;

/// Reject a real-valued parameter that is not strictly positive
pub fn ensure_positive(parameter: &'static str, value: f64) -> DiffbotResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DiffbotError::invalid_config(
            parameter,
            format!("must be a finite value > 0 (got {})", value),
        ))
    }
}

/// Reject a real-valued parameter that is negative or not finite
pub fn ensure_non_negative(parameter: &'static str, value: f64) -> DiffbotResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DiffbotError::invalid_config(
            parameter,
            format!("must be a finite value >= 0 (got {})", value),
        ))
    }
}

/// Reject a real-valued parameter that is NaN or infinite
pub fn ensure_finite(parameter: &'static str, value: f64) -> DiffbotResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DiffbotError::invalid_config(
            parameter,
            format!("must be finite (got {})", value),
        ))
    }
}

/// Reject a capacity below one sample
pub fn ensure_capacity(parameter: &'static str, value: usize) -> DiffbotResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(DiffbotError::invalid_config(parameter, "must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = DiffbotError::invalid_config("dt", "must be > 0");
        assert_eq!(err.to_string(), "Invalid configuration: `dt` must be > 0");
        assert_eq!(err.parameter(), Some("dt"));
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("dt", 0.1).is_ok());
        assert!(ensure_positive("dt", 0.0).is_err());
        assert!(ensure_positive("dt", -1.0).is_err());
        assert!(ensure_positive("dt", f64::NAN).is_err());
        assert!(ensure_positive("dt", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("max_output", 0.0).is_ok());
        assert!(ensure_non_negative("max_output", 100.0).is_ok());
        assert!(ensure_non_negative("max_output", -0.5).is_err());
    }

    #[test]
    fn test_ensure_capacity() {
        assert!(ensure_capacity("window_size", 1).is_ok());
        let err = ensure_capacity("window_size", 0).unwrap_err();
        assert_eq!(err.parameter(), Some("window_size"));
    }

    #[test]
    fn test_io_error_is_not_configuration() {
        let err: DiffbotError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.parameter(), None);
    }
}
