//! The API client and its request interceptor.

use reqwest::Method;
use std::sync::Arc;

use crate::coordinator::{RefreshCoordinator, RefreshSlot};
use crate::error::ClientError;
use crate::session::SessionStore;
use crate::transport::{ApiRequest, ApiResponse, ApiTransport, ReqwestTransport};

/// Hook invoked when session renewal fails and a fresh login is required;
/// the stand-in for the browser's redirect to the login page.
pub type SessionExpiredHook = Box<dyn Fn() + Send + Sync>;

/// Typed AdminHub API client
///
/// Every request goes through one interceptor path: attach the current
/// access token, and on an authorization failure coordinate a single
/// renewal and retry once with the new token. The auth lifecycle endpoints
/// themselves are excluded from the renewal trigger — a 401 from login is a
/// wrong password, not an expired session, and renewing on a 401 from
/// refresh would loop forever.
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    session: SessionStore,
    coordinator: RefreshCoordinator,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClient {
    /// Client over HTTP for an API base like `http://localhost:8080/api`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new(
            base_url,
        )?)))
    }

    /// Client over a custom transport (tests, instrumentation)
    pub fn with_transport(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            session: SessionStore::new(),
            coordinator: RefreshCoordinator::new(),
            on_session_expired: None,
        }
    }

    /// Register the renewal-failure hook
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Box::new(hook));
        self
    }

    /// The session store (current user, access token, expired flag)
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Run a request through the interceptor
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ClientError> {
        let mut request = ApiRequest::new(method, path).with_bearer(self.session.access_token());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.transport.send(request.clone()).await?;

        // One retry, and only for requests that are not themselves part of
        // the auth lifecycle.
        if response.status == 401 && !is_auth_endpoint(path) {
            let access_token = self.renew_access_token().await?;
            let retry = request.with_bearer(Some(access_token));
            let response = self.transport.send(retry).await?;
            return Self::into_result(response);
        }

        Self::into_result(response)
    }

    /// Obtain a fresh access token, leading or joining the single renewal
    /// in flight.
    async fn renew_access_token(&self) -> Result<String, ClientError> {
        match self.coordinator.acquire_refresh_slot() {
            RefreshSlot::Follower(receiver) => receiver
                .await
                .map_err(|_| ClientError::transport("session renewal was abandoned"))?,
            RefreshSlot::Leader => {
                let result = self.call_refresh_endpoint().await;

                match &result {
                    Ok(access_token) => {
                        self.session.set_access_token(access_token.clone());
                    }
                    Err(error) => {
                        // Unrecoverable: drop every trace of the session and
                        // tell the app to send the user back to login.
                        tracing::warn!(error = %error, "session renewal failed");
                        self.session.clear();
                        self.session.mark_expired();
                        if let Some(hook) = &self.on_session_expired {
                            hook();
                        }
                    }
                }

                self.coordinator.release_refresh_slot(result.clone());
                result
            }
        }
    }

    /// POST /auth/refresh: cookie-bearing, no body, no bearer
    async fn call_refresh_endpoint(&self) -> Result<String, ClientError> {
        let request = ApiRequest::new(Method::POST, "/auth/refresh");
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ClientError::SessionExpired {
                message: response.error_message(),
            });
        }

        response
            .body
            .get("accessToken")
            .and_then(|v| v.as_str())
            .map(|token| token.to_string())
            .ok_or_else(|| ClientError::transport("refresh response had no accessToken"))
    }

    fn into_result(response: ApiResponse) -> Result<serde_json::Value, ClientError> {
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::Api {
                status: response.status,
                message: response.error_message(),
            })
        }
    }
}

/// Auth lifecycle endpoints never trigger a renewal: their 401s are genuine
/// credential failures (or a dead refresh token) and must propagate.
fn is_auth_endpoint(path: &str) -> bool {
    matches!(
        path,
        "/auth/login" | "/auth/signup" | "/auth/refresh" | "/auth/logout"
    )
}
