use std::fmt::{self, Formatter};
use thiserror::Error;

use crate::api::ErrorCode;

/// Error reported by the EasySlip API itself: a non-200 response with a
/// well-formed `{status, message}` body.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Maps an error body onto the predefined error for its token.
    ///
    /// Known tokens take the catalog status, whatever the server put in
    /// the body. Unknown tokens are kept verbatim with the given status.
    #[must_use]
    pub fn from_message(status: u16, message: &str) -> Self {
        ErrorCode::from_token(message).map_or_else(|| Self::new(status, message), Self::from)
    }

    /// Catalog entry for this error, if the token is a known one.
    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::from_token(&self.message)
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code() == Some(code)
    }
}

impl From<ErrorCode> for ApiError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code.status(), code.as_str())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "easyslip: {} (status: {})",
            self.message, self.status
        )
    }
}
