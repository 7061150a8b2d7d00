#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use bytes::Bytes;
use easyslip::api::{
    ApiClient, ClientConfig, HttpRequest, RequestBody, Transport, TransportError,
    TransportResponse,
};
use futures::StreamExt;
use reqwest::{header::HeaderMap, Method, StatusCode};
use url::Url;

pub const SLIP_JSON: &str = r#"{
    "status": 200,
    "data": {
        "payload": "0041000600000101030040220014242082547BPM049885102TH9104CF62",
        "transRef": "68370160657749I376388B35",
        "date": "2023-01-01T00:00:00+07:00",
        "countryCode": "TH",
        "amount": { "amount": 1000.25, "local": { "amount": 0, "currency": "" } },
        "fee": 0,
        "ref1": "",
        "ref2": "",
        "ref3": "",
        "sender": {
            "bank": { "id": "004", "name": "กสิกรไทย", "short": "KBANK" },
            "account": {
                "name": { "th": "นาย ธันวา ม", "en": "THANWA M" },
                "bank": { "type": "BANKAC", "account": "1234xxxx5678" }
            }
        },
        "receiver": {
            "bank": { "id": "030", "name": "ธนาคารออมสิน", "short": "GSB" },
            "account": {
                "name": { "th": "นาย อีซี่ สลิป" },
                "proxy": { "type": "EWALLETID", "account": "123xxxxxxxx4567" }
            },
            "merchantId": "4193"
        }
    }
}"#;

pub const TRUEWALLET_JSON: &str = r#"{
    "status": 200,
    "data": {
        "transactionId": "50021234567890",
        "date": "2024-03-01T10:15:30+07:00",
        "amount": 150.5,
        "sender": { "name": "SOMCHAI J***" },
        "receiver": { "name": "SOMSRI R***", "phone": "081-xxx-1234" }
    }
}"#;

#[derive(Debug)]
pub struct Recorded {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// In-process transport answering every request with one canned response.
#[derive(Clone)]
pub struct MockTransport {
    status: u16,
    body: String,
    delay: Option<Duration>,
    pub started: Arc<AtomicUsize>,
    pub calls: Arc<Mutex<Vec<Recorded>>>,
}

impl MockTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
            delay: None,
            started: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn single_call(&self) -> Recorded {
        let mut calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one request");
        calls.remove(0)
    }

    pub fn client(&self) -> ApiClient {
        init_logger();
        ApiClient::with_config(
            "test-token",
            ClientConfig::default()
                .with_base_url("https://developer.easyslip.com/api/v1")
                .with_user_agent("easyslip-tests/1.0")
                .with_transport(self.clone()),
        )
        .unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<TransportResponse, TransportError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let body = match body {
            RequestBody::Empty => Vec::new(),
            RequestBody::Bytes(bytes) => bytes.to_vec(),
            RequestBody::Stream(mut stream) => {
                let mut out = Vec::new();
                while let Some(chunk) = stream.next().await {
                    out.extend_from_slice(&chunk?);
                }
                out
            }
        };

        self.calls.lock().unwrap().push(Recorded {
            method,
            url,
            headers,
            body,
        });

        Ok(TransportResponse {
            status: StatusCode::from_u16(self.status)?,
            body: Bytes::from(self.body.clone()),
        })
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Content of the single file part of a multipart body.
pub fn file_part(body: &[u8], boundary: &str) -> Vec<u8> {
    let closing = format!("\r\n--{boundary}--\r\n");
    assert!(body.starts_with(format!("--{boundary}\r\n").as_bytes()));
    assert!(body.ends_with(closing.as_bytes()));

    let header_end = body
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("part header terminator")
        + 4;
    body[header_end..body.len() - closing.len()].to_vec()
}

pub fn boundary_of(headers: &HeaderMap) -> String {
    let content_type = headers
        .get(reqwest::header::CONTENT_TYPE)
        .expect("content type")
        .to_str()
        .unwrap();
    content_type
        .strip_prefix("multipart/form-data; boundary=")
        .expect("multipart content type")
        .to_owned()
}
