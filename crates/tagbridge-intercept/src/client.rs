//! The injected network-client seams the interceptors decorate.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::HttpResult;

/// An outbound request as the host hands it to the client.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub body: Option<Bytes>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A completed response; the body has not been read by anyone yet.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200-class success.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The generic request-fetch primitive of the host environment.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> HttpResult<Response>;
}

/// The legacy blocking request primitive.
pub trait LegacyTransport: Send + Sync {
    fn send(&self, request: Request) -> HttpResult<Response>;
}
