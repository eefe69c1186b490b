//! HTTP transport seam.
//!
//! The client's retry and renewal logic is written against this trait so it
//! can be driven by a scripted fake in tests; `ReqwestTransport` is the real
//! implementation with a browser-like cookie store for the refresh cookie.

use async_trait::async_trait;
use reqwest::{Method, Url};

use crate::error::ClientError;

/// A request as the interceptor sees it
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/auth/login`
    pub path: String,
    /// Bearer credential to attach, if the session holds one
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response reduced to what the interceptor needs
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server's error message, falling back to a generic one
    pub fn error_message(&self) -> String {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("Request failed")
            .to_string()
    }
}

/// Network seam used by the API client
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform the request; `Err` means no response was produced at all
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Reqwest-backed transport
///
/// Cookies are stored and replayed automatically, so the httpOnly refresh
/// cookie set by login/signup/refresh rides on subsequent requests exactly
/// as it does in a browser.
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Build a transport for an API base like `http://localhost:8080/api`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::transport(format!("invalid base url: {}", e)))?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::transport(format!("failed to build client: {}", e)))?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self
            .base_url
            .join(&format!(
                "{}{}",
                self.base_url.path().trim_end_matches('/'),
                request.path
            ))
            .map_err(|e| ClientError::transport(format!("invalid path: {}", e)))?;

        let mut builder = self.http.request(request.method, url);
        if let Some(bearer) = &request.bearer {
            builder = builder.bearer_auth(bearer);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        Ok(ApiResponse { status, body })
    }
}
