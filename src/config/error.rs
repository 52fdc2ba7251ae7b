//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Scholarship weight '{0}' cannot be negative")]
    NegativeWeight(&'static str),

    #[error("Scholarship steam multiplier cannot be negative")]
    NegativeMultiplier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weight_displays_field_name() {
        let err = ValidationError::NegativeWeight("enterprise_base");
        assert_eq!(
            format!("{}", err),
            "Scholarship weight 'enterprise_base' cannot be negative"
        );
    }
}
