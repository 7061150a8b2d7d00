use reqwest::header::InvalidHeaderValue;
use thiserror::Error;
use url::Url;

use super::transport::TransportError;
use crate::{context::ContextError, errors::ApiError};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E001] Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("[E002] {0} cannot be a base, provide a valid HTTP or HTTPS URL")]
    CannotBeBase(Url),

    #[error("[E003] creating request: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("[E004] encoding request body: {0}")]
    EncodeBody(#[source] serde_json::Error),

    #[error("[E005] building HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("[E006] sending request: {0}")]
    Send(#[source] TransportError),

    #[error("[E007] decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("[E008] decoding error response: {0}")]
    DecodeErrorResponse(#[source] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBaseUrl(_) => "E001",
            Self::CannotBeBase(_) => "E002",
            Self::InvalidHeader(_) => "E003",
            Self::EncodeBody(_) => "E004",
            Self::HttpClient(_) => "E005",
            Self::Send(_) => "E006",
            Self::Decode(_) => "E007",
            Self::DecodeErrorResponse(_) => "E008",
            Self::Context(ContextError::Cancelled) => "E009",
            Self::Context(ContextError::DeadlineExceeded) => "E010",
            Self::Api(_) => "E100",
        }
    }

    /// Error reported by the API, as opposed to a local or network failure.
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Context(_))
    }
}
