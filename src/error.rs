// src/error.rs

//! Unified error handling for the harvester.

use thiserror::Error;

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// The `Unreachable` and `Blocked` variants are the run-level errors
/// returned to callers of the pipeline; their `Display` output is the
/// short message a front-end shows directly.
#[derive(Error, Debug)]
pub enum AppError {
    /// Target page could not be fetched at the transport level
    #[error("Website not reachable: {0}")]
    Unreachable(String),

    /// Target page answered 401/403, likely bot protection
    #[error("Access blocked (HTTP {0})")]
    Blocked(u16),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a transport-level error for the target page.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_message_names_the_status() {
        let error = AppError::Blocked(403);
        assert_eq!(error.to_string(), "Access blocked (HTTP 403)");
    }

    #[test]
    fn unreachable_message_carries_the_cause() {
        let error = AppError::unreachable("connection refused");
        assert_eq!(
            error.to_string(),
            "Website not reachable: connection refused"
        );
    }
}
