use std::sync::Arc;

use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Method,
};
use serde::de::DeserializeOwned;
use tokio::io::AsyncRead;
use url::Url;

use crate::context::Context;

use super::config::ClientConfig;
use super::errors::ApiClientError;
use super::models::{Base64Image, TrueWalletVerificationResponse, VerificationResponse};
use super::multipart::MultipartUpload;
use super::response::decode_response;
use super::transport::{HttpRequest, RequestBody, ReqwestTransport, Transport};

/// EasySlip API client.
///
/// Cheap to clone and safe to share between tasks: it holds no per-call
/// state. Every operation performs exactly one HTTP exchange.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    token: String,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Client with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails if the default HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiClientError> {
        Self::with_config(token, ClientConfig::default())
    }

    /// # Errors
    ///
    /// Fails if `config.base_url` is not a valid URL or cannot be a
    /// base. We rely on that invariant in the `*_url` methods.
    pub fn with_config(
        token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ApiClientError> {
        let base = Url::parse(&config.base_url)?;
        // Test here so that we are sure path_segments_mut succeeds
        if base.cannot_be_a_base() {
            return Err(ApiClientError::CannotBeBase(base));
        }

        let transport = match config.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout)?),
        };

        Ok(Self {
            base,
            token: token.into(),
            user_agent: config.user_agent,
            transport,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiClientError::CannotBeBase(self.base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn verify_url(&self) -> Result<Url, ApiClientError> {
        self.endpoint(&["verify"])
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn truewallet_url(&self) -> Result<Url, ApiClientError> {
        self.endpoint(&["verify", "truewallet"])
    }

    /// # Errors
    ///
    /// Will return `Err` if the URL cannot be a base.
    pub fn payload_url(&self, payload: &str) -> Result<Url, ApiClientError> {
        let mut url = self.verify_url()?;
        url.query_pairs_mut().append_pair("payload", payload);
        Ok(url)
    }

    /// Builds a request carrying the authorization and user agent headers.
    ///
    /// # Errors
    ///
    /// Fails if `ctx` is already done or a header value is not valid.
    pub fn new_request(
        &self,
        ctx: &Context,
        method: Method,
        url: Url,
        body: RequestBody,
    ) -> Result<HttpRequest, ApiClientError> {
        ctx.check()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<T, ApiClientError> {
        log::debug!("{} {}", request.method, request.url);

        let response = ctx
            .run(self.transport.execute(request))
            .await?
            .map_err(|e| {
                log::debug!("Request failed: {e}");
                ApiClientError::Send(e)
            })?;

        log::debug!("Response status: {}", response.status);
        decode_response(&response)
    }

    async fn upload<T, R>(
        &self,
        ctx: &Context,
        url: Url,
        image: R,
        filename: &str,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        R: AsyncRead + Send + Unpin + 'static,
    {
        ctx.check()?;

        let upload = MultipartUpload::spawn(ctx, image, filename);
        let content_type = HeaderValue::from_str(&upload.content_type())?;

        let mut request = self.new_request(
            ctx,
            Method::POST,
            url,
            RequestBody::Stream(upload.into_body()),
        )?;
        request.headers.insert(CONTENT_TYPE, content_type);

        self.execute(ctx, request).await
    }

    /// Verifies a bank slip image, streamed from `image` as a multipart
    /// upload.
    ///
    /// # Errors
    ///
    /// Will return `Err` on network failure, cancellation, an unexpected
    /// response body or an error reported by the API.
    pub async fn verify_slip<R>(
        &self,
        ctx: &Context,
        image: R,
        filename: &str,
    ) -> Result<VerificationResponse, ApiClientError>
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let url = self.verify_url()?;
        self.upload(ctx, url, image, filename).await
    }

    /// Verifies a TrueMoney Wallet slip image.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::verify_slip`].
    pub async fn verify_truewallet_slip<R>(
        &self,
        ctx: &Context,
        image: R,
        filename: &str,
    ) -> Result<TrueWalletVerificationResponse, ApiClientError>
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let url = self.truewallet_url()?;
        self.upload(ctx, url, image, filename).await
    }

    /// Verifies a bank slip from the payload of its QR code.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::verify_slip`].
    pub async fn verify_slip_by_payload(
        &self,
        ctx: &Context,
        payload: &str,
    ) -> Result<VerificationResponse, ApiClientError> {
        let url = self.payload_url(payload)?;
        let request = self.new_request(ctx, Method::GET, url, RequestBody::Empty)?;
        self.execute(ctx, request).await
    }

    /// Verifies a bank slip image already encoded as base64.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::verify_slip`].
    pub async fn verify_slip_by_base64(
        &self,
        ctx: &Context,
        image: &str,
    ) -> Result<VerificationResponse, ApiClientError> {
        let body = serde_json::to_vec(&Base64Image { image }).map_err(ApiClientError::EncodeBody)?;

        let url = self.verify_url()?;
        let mut request =
            self.new_request(ctx, Method::POST, url, RequestBody::Bytes(Bytes::from(body)))?;
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.execute(ctx, request).await
    }
}
