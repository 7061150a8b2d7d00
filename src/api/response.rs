use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{errors::ApiClientError, models::ErrorEnvelope, transport::TransportResponse};
use crate::errors::ApiError;

/// Turns a finished exchange into either the success payload or an error.
///
/// # Errors
///
/// Non-200 responses become [`ApiClientError::Api`]; bodies that are not
/// the expected JSON become one of the decode errors.
pub fn decode_response<T: DeserializeOwned>(
    response: &TransportResponse,
) -> Result<T, ApiClientError> {
    log::trace!(
        "Raw API response ({}): {}",
        response.status,
        String::from_utf8_lossy(&response.body)
    );

    if response.status != StatusCode::OK {
        let envelope: ErrorEnvelope = serde_json::from_slice(&response.body).map_err(|e| {
            log::error!("Failed to parse error response ({}): {e}", response.status);
            ApiClientError::DecodeErrorResponse(e)
        })?;
        return Err(ApiError::from_message(envelope.status, &envelope.message).into());
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        log::error!("Failed to parse JSON response: {e}");
        ApiClientError::Decode(e)
    })
}
