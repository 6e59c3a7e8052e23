//! Upstream error definitions.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while fetching a batch from the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, DNS, timeout, body read).
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Upstream answered with something other than 200.
    #[error("upstream rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// A response line is not an integer.
    #[error("malformed upstream line '{line}': {source}")]
    Malformed {
        line: String,
        #[source]
        source: ParseIntError,
    },

    /// A response carried no integers at all.
    #[error("upstream returned an empty batch")]
    EmptyBatch,

    /// The client could not be built from its configuration.
    #[error("invalid upstream configuration: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Unavailable(_) => "unavailable",
            UpstreamError::Rejected { .. } => "rejected",
            UpstreamError::Malformed { .. } => "malformed",
            UpstreamError::EmptyBatch => "empty",
            UpstreamError::Config(_) => "config",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Unavailable(e.to_string())
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Rejected {
            status: 503,
            body: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "upstream rejected request with status 503: Service Unavailable"
        );
        assert_eq!(err.kind(), "rejected");

        let source = "x1".parse::<i64>().unwrap_err();
        let err = UpstreamError::Malformed {
            line: "x1".into(),
            source,
        };
        assert!(err.to_string().starts_with("malformed upstream line 'x1'"));
    }
}
