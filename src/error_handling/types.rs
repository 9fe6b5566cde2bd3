//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A required setting is missing or empty.
    #[error("Missing configuration: {0}")]
    MissingConfigError(&'static str),
}

/// Error types for ads archive retrieval.
///
/// These are the only errors the pipeline does not recover from: they abort
/// the mapping or analysis run for the current client.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the API
        message: String,
    },

    /// The scraper run ended in a terminal non-success state.
    #[error("Scraper run {run_id} ended with status {status}")]
    RunFailed {
        /// Apify run identifier
        run_id: String,
        /// Terminal status (FAILED, ABORTED, TIMED-OUT)
        status: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CollectorError {
    /// Whether repeating the same request could succeed.
    ///
    /// Timeouts, connection failures, 429 and 5xx responses are transient;
    /// everything else (4xx, decode errors, failed runs) is permanent.
    pub fn is_retriable(&self) -> bool {
        match self {
            CollectorError::Http(e) => {
                if let Some(status) = e.status() {
                    return is_retriable_status(status.as_u16());
                }
                e.is_timeout() || e.is_connect() || e.is_request()
            }
            CollectorError::Api { status, .. } => is_retriable_status(*status),
            CollectorError::RunFailed { .. } | CollectorError::Decode(_) => false,
        }
    }

    /// Whether a non-idempotent request (one that creates a resource) can be
    /// sent again without risking a duplicate.
    ///
    /// Only failures where the server cannot have acted qualify: a refused
    /// connection or a 429 rejection. A timeout or 5xx may follow a request
    /// that was already applied.
    pub fn is_safe_to_resend(&self) -> bool {
        match self {
            CollectorError::Http(e) => e.status().is_none() && e.is_connect(),
            CollectorError::Api { status, .. } => {
                *status == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS
            }
            CollectorError::RunFailed { .. } | CollectorError::Decode(_) => false,
        }
    }
}

fn is_retriable_status(status: u16) -> bool {
    status == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> CollectorError {
        CollectorError::Api {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_rate_limited_is_retriable() {
        assert!(api_error(429).is_retriable());
    }

    #[test]
    fn test_server_errors_are_retriable() {
        assert!(api_error(500).is_retriable());
        assert!(api_error(502).is_retriable());
        assert!(api_error(503).is_retriable());
    }

    #[test]
    fn test_client_errors_are_not_retriable() {
        assert!(!api_error(400).is_retriable());
        assert!(!api_error(401).is_retriable());
        assert!(!api_error(404).is_retriable());
    }

    #[test]
    fn test_failed_run_is_not_retriable() {
        let err = CollectorError::RunFailed {
            run_id: "abc".into(),
            status: "FAILED".into(),
        };
        assert!(!err.is_retriable());
        assert_eq!(err.to_string(), "Scraper run abc ended with status FAILED");
    }

    #[test]
    fn test_decode_error_is_not_retriable() {
        let err: CollectorError = serde_json::from_str::<Vec<u8>>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_retriable());
    }

    #[test]
    fn test_only_rate_limit_is_safe_to_resend() {
        assert!(api_error(429).is_safe_to_resend());
        assert!(!api_error(500).is_safe_to_resend());
        assert!(!api_error(503).is_safe_to_resend());
        assert!(!api_error(401).is_safe_to_resend());
        let err = CollectorError::RunFailed {
            run_id: "abc".into(),
            status: "FAILED".into(),
        };
        assert!(!err.is_safe_to_resend());
    }

    #[test]
    fn test_api_error_display() {
        let err = CollectorError::Api {
            status: 401,
            message: "invalid token".into(),
        };
        assert_eq!(err.to_string(), "API error (status 401): invalid token");
    }
}
