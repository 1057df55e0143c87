//! Error types for the plate checker

use thiserror::Error;

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering plates or looking up vehicles
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or incomplete configuration (e.g. missing access token)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A required static asset is missing or unreadable
    #[error("Asset unavailable: {0}")]
    AssetError(String),

    /// Failed to produce the plate image
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Transport-level failure talking to the registry
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The registry answered 200 with a body we could not parse
    #[error("Invalid registry response: {0}")]
    DecodeError(String),

    /// The display server could not be started
    #[error("Server error: {0}")]
    ServerError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error stops the app before any search can run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ConfigError(_) | Error::AssetError(_))
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::RenderError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_are_config_and_assets() {
        assert!(Error::ConfigError("token".into()).is_fatal());
        assert!(Error::AssetError("template".into()).is_fatal());
        assert!(!Error::NetworkError("refused".into()).is_fatal());
        assert!(!Error::DecodeError("eof".into()).is_fatal());
    }

    #[test]
    fn error_messages_carry_context() {
        let e = Error::NetworkError("connection refused".into());
        assert_eq!(e.to_string(), "Network error: connection refused");
    }
}
