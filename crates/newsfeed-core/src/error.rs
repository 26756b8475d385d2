use thiserror::Error;

use crate::http_client::HttpError;

/// Pre-flight validation failures raised before any network I/O.
///
/// Only the first failing check is reported by
/// [`RequestBuilder::build`](crate::RequestBuilder::build); the check order is
/// API key, page size presence, page size bounds, `to`, then `from`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("API_KEY MISSING")]
    ApiKeyMissing,
    #[error("pageSize undefined")]
    PageSizeUndefined,
    #[error("pageSize out of bounds: {page_size} (expected 1..=100)")]
    PageSizeOutOfBounds { page_size: i64 },
    #[error(
        "Invalid Date format provided for '{field}': '{value}'. Please make sure it uses the \
         ISO 8601 format (e.g. 2021-07-20 or 2021-07-20T15:40:24)"
    )]
    InvalidDateFormat { field: &'static str, value: String },
}

impl RequestError {
    /// Stable sentinel label for the failure.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ApiKeyMissing => "API_KEY_MISSING",
            Self::PageSizeUndefined => "PAGE_SIZE_UNDEFINED",
            Self::PageSizeOutOfBounds { .. } => "PAGE_SIZE_OUT_OF_BOUNDS",
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
        }
    }
}

/// Failure to parse one of the closed enumerations from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid endpoint '{value}', expected one of everything, top-headlines")]
    InvalidEndpoint { value: String },
    #[error(
        "invalid language '{value}', expected one of ar, de, en, es, fr, he, it, nl, no, pt, ru, se, ud, zh"
    )]
    InvalidLanguage { value: String },
    #[error("invalid sort order '{value}', expected one of relevancy, popularity, publishedAt")]
    InvalidSortBy { value: String },
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("failed to decode news response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NewsError {
    /// The validation sentinel, when the failure happened before dispatch.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            Self::Request(error) => Some(error),
            _ => None,
        }
    }
}
