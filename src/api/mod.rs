// Re-export the API module components
pub use self::{
    client::ApiClient,
    config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    errors::ApiClientError,
    models::{
        Account, AccountName, Amount, Bank, BankAccount, ErrorEnvelope, LocalAmount, PartyInfo,
        ProxyAccount, TrueWalletData, TrueWalletReceiver, TrueWalletSender,
        TrueWalletVerificationResponse, VerificationData, VerificationResponse,
    },
    multipart::{MultipartUpload, FIELD_NAME},
    response::decode_response,
    transport::{
        BodyStream, HttpRequest, RequestBody, ReqwestTransport, Transport, TransportError,
        TransportResponse,
    },
    types::ErrorCode,
};

// Module declarations
mod client;
mod config;
mod errors;
mod models;
mod multipart;
mod response;
mod transport;
mod types;
