//! # EasySlip
//!
//! A Rust client for the [EasySlip](https://developer.easyslip.com) slip
//! verification API. It checks Thai bank transfer slips and TrueMoney Wallet
//! slips against the issuing bank and returns the transaction details.
//!
//! ## Features
//!
//! - **Four verification calls**: slip image, TrueMoney Wallet image, QR code
//!   payload and base64 encoded image
//! - **Streaming uploads**: images are sent as `multipart/form-data` straight
//!   from any `AsyncRead`, without buffering the whole file
//! - **Cancellation**: every call takes a [`Context`] carrying a cancellation
//!   token and an optional deadline
//! - **Typed errors**: API error tokens map onto [`ErrorCode`](api::ErrorCode)
//! - **Pluggable transport**: swap the `reqwest` backend through
//!   [`Transport`](api::Transport)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use easyslip::{api::{ApiClient, ApiClientError}, Context};
//!
//! # async fn run() -> Result<(), ApiClientError> {
//! let client = ApiClient::new("YOUR_TOKEN")?;
//! let ctx = Context::with_timeout(Duration::from_secs(10));
//!
//! let file = tokio::fs::File::open("slip.jpg").await.expect("slip.jpg");
//! match client.verify_slip(&ctx, file, "slip.jpg").await {
//!     Ok(slip) => println!("{} {}", slip.data.trans_ref, slip.data.amount.amount),
//!     Err(ApiClientError::Api(err)) => println!("API error: {} ({})", err.message, err.status),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

/// API client, request/response types and transports
pub mod api;

/// Cancellation and deadline handling for API calls
pub mod context;

/// Errors reported by the EasySlip API
pub mod errors;

pub use context::{Context, ContextError};
pub use errors::ApiError;
