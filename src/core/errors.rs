//! Custom error types for dictionary lookup operations

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// Error conditions the service reports through documented HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// 401: the API key is malformed or unrecognized
    KeyInvalid,
    /// 402: the API key has been blocked by the service
    KeyBlocked,
    /// 403: the daily request quota for this key is exhausted
    DailyLimitExceeded,
    /// 413: the submitted text exceeds the service's size limit
    TextTooLong,
    /// 501: the requested translation direction is not supported
    LangNotSupported,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::KeyInvalid => write!(f, "API key is invalid"),
            ServiceErrorKind::KeyBlocked => write!(f, "API key has been blocked"),
            ServiceErrorKind::DailyLimitExceeded => write!(f, "daily request limit exceeded"),
            ServiceErrorKind::TextTooLong => write!(f, "text exceeds the maximum size"),
            ServiceErrorKind::LangNotSupported => {
                write!(f, "translation direction is not supported")
            }
        }
    }
}

/// Status-to-error table. A status absent from this table is success.
const STATUS_TABLE: &[(u16, ServiceErrorKind)] = &[
    (401, ServiceErrorKind::KeyInvalid),
    (402, ServiceErrorKind::KeyBlocked),
    (403, ServiceErrorKind::DailyLimitExceeded),
    (413, ServiceErrorKind::TextTooLong),
    (501, ServiceErrorKind::LangNotSupported),
];

/// Look up the service error kind for an HTTP status code.
pub fn classify_status(status: u16) -> Option<ServiceErrorKind> {
    STATUS_TABLE
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, kind)| *kind)
}

/// Errors returned by dictionary operations
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The service rejected the request with one of its documented statuses.
    /// The response body is kept because the service may attach a diagnostic
    /// payload to error responses.
    #[error("{kind}")]
    Service {
        /// Classified error condition
        kind: ServiceErrorKind,
        /// Raw response body, possibly empty
        body: Bytes,
    },

    /// A 4xx/5xx status outside the documented table, reported only when
    /// strict status checking is enabled in the configuration.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// The offending status code
        status: u16,
        /// Raw response body, possibly empty
        body: Bytes,
    },

    /// Network-level failure (DNS, connection, timeout, TLS) before any
    /// HTTP status was obtained. No response body exists in this case.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DictionaryError {
    /// Classified service error kind, if this error came from the status table.
    pub fn kind(&self) -> Option<ServiceErrorKind> {
        match self {
            DictionaryError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Response body attached to a status-classified error, if any.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            DictionaryError::Service { body, .. }
            | DictionaryError::UnexpectedStatus { body, .. } => Some(body),
            DictionaryError::Transport(_) => None,
        }
    }
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictionaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_statuses_classify() {
        assert_eq!(classify_status(401), Some(ServiceErrorKind::KeyInvalid));
        assert_eq!(classify_status(402), Some(ServiceErrorKind::KeyBlocked));
        assert_eq!(
            classify_status(403),
            Some(ServiceErrorKind::DailyLimitExceeded)
        );
        assert_eq!(classify_status(413), Some(ServiceErrorKind::TextTooLong));
        assert_eq!(
            classify_status(501),
            Some(ServiceErrorKind::LangNotSupported)
        );
    }

    #[test]
    fn test_unlisted_statuses_are_success() {
        // 4xx/5xx codes outside the table intentionally do not classify.
        for status in [200, 201, 204, 301, 400, 404, 429, 500, 502, 503] {
            assert_eq!(classify_status(status), None);
        }
    }

    #[test]
    fn test_service_error_exposes_kind_and_body() {
        let err = DictionaryError::Service {
            kind: ServiceErrorKind::DailyLimitExceeded,
            body: Bytes::from_static(b"{\"message\":\"quota\"}"),
        };
        assert_eq!(err.kind(), Some(ServiceErrorKind::DailyLimitExceeded));
        assert_eq!(err.body().unwrap().as_ref(), b"{\"message\":\"quota\"}");
        assert_eq!(err.to_string(), "daily request limit exceeded");
    }

    #[test]
    fn test_unexpected_status_has_body_but_no_kind() {
        let err = DictionaryError::UnexpectedStatus {
            status: 500,
            body: Bytes::new(),
        };
        assert_eq!(err.kind(), None);
        assert!(err.body().is_some());
        assert_eq!(err.to_string(), "unexpected HTTP status 500");
    }
}
