use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Canonical error tokens returned by the EasySlip API.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidImage,
    ImageSizeTooLarge,
    InvalidTransactionId,
    InvalidAmount,
    InvalidSenderName,
    InvalidReceiverName,
    InvalidReceiverPhone,
    InvalidPayload,
    Unauthorized,
    AccessDenied,
    AccountNotVerified,
    ApplicationExpired,
    ApplicationDeactivated,
    QuotaExceeded,
    SlipNotFound,
    #[serde(rename = "qrcode_not_found")]
    QrCodeNotFound,
    ServerError,
    ApiServerError,
}

impl ErrorCode {
    pub const ALL: [Self; 18] = [
        Self::InvalidImage,
        Self::ImageSizeTooLarge,
        Self::InvalidTransactionId,
        Self::InvalidAmount,
        Self::InvalidSenderName,
        Self::InvalidReceiverName,
        Self::InvalidReceiverPhone,
        Self::InvalidPayload,
        Self::Unauthorized,
        Self::AccessDenied,
        Self::AccountNotVerified,
        Self::ApplicationExpired,
        Self::ApplicationDeactivated,
        Self::QuotaExceeded,
        Self::SlipNotFound,
        Self::QrCodeNotFound,
        Self::ServerError,
        Self::ApiServerError,
    ];

    /// Wire token, as found in the `message` field of an error body.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidImage => "invalid_image",
            Self::ImageSizeTooLarge => "image_size_too_large",
            Self::InvalidTransactionId => "invalid_transaction_id",
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidSenderName => "invalid_sender_name",
            Self::InvalidReceiverName => "invalid_receiver_name",
            Self::InvalidReceiverPhone => "invalid_receiver_phone",
            Self::InvalidPayload => "invalid_payload",
            Self::Unauthorized => "unauthorized",
            Self::AccessDenied => "access_denied",
            Self::AccountNotVerified => "account_not_verified",
            Self::ApplicationExpired => "application_expired",
            Self::ApplicationDeactivated => "application_deactivated",
            Self::QuotaExceeded => "quota_exceeded",
            Self::SlipNotFound => "slip_not_found",
            Self::QrCodeNotFound => "qrcode_not_found",
            Self::ServerError => "server_error",
            Self::ApiServerError => "api_server_error",
        }
    }

    /// HTTP status the API documents for this token.
    pub const fn status(self) -> u16 {
        match self {
            Self::InvalidImage
            | Self::ImageSizeTooLarge
            | Self::InvalidTransactionId
            | Self::InvalidAmount
            | Self::InvalidSenderName
            | Self::InvalidReceiverName
            | Self::InvalidReceiverPhone
            | Self::InvalidPayload => 400,
            Self::Unauthorized => 401,
            Self::AccessDenied
            | Self::AccountNotVerified
            | Self::ApplicationExpired
            | Self::ApplicationDeactivated
            | Self::QuotaExceeded => 403,
            Self::SlipNotFound | Self::QrCodeNotFound => 404,
            Self::ServerError | Self::ApiServerError => 500,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == token)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
