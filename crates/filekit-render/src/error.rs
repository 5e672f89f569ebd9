//! Error types for block and table rendering.
//!
//! Renderers report bad input as [`RenderError::InvalidArgument`]: a parameter
//! of the wrong shape, an empty structure, or a width the content cannot fit
//! in. Errors are raised before any output is produced. Style documents that
//! fail to parse surface as [`RenderError::Config`].

use thiserror::Error;

/// Error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A parameter was of the wrong type, empty, or violated a constraint.
    #[error("Parameter {param} must be of type {expected}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: String,
        /// Description of what was expected instead.
        expected: String,
    },

    /// A style or override document could not be parsed.
    #[error("invalid style configuration: {0}")]
    Config(String),
}

impl RenderError {
    /// Create an invalid argument error.
    pub fn invalid_argument(param: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            expected: expected.into(),
        }
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Config(err.to_string())
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = RenderError::invalid_argument("data", "a non-empty sequence of rows");
        assert_eq!(
            err.to_string(),
            "Parameter data must be of type a non-empty sequence of rows"
        );
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: RenderError = yaml_err.into();
        assert!(matches!(err, RenderError::Config(_)));
        assert!(err.to_string().starts_with("invalid style configuration"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err: RenderError = json_err.into();
        assert!(matches!(err, RenderError::Config(_)));
    }
}
