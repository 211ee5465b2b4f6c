//! PortalOps API client implementation
//!
//! Every request resolves its credential from the store at send time: an
//! impersonation token always wins over the stored access token, and an
//! expired or malformed stored token reads as absent. A 401 triggers at most
//! one refresh followed by one replay of the original request; refresh
//! failure ends the session.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::cookie::{CookieStore as _, Jar};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::creds::{AccessTokenRecord, CredentialStore};
use crate::error::{ApiError, ConfigError, Result};

/// Marker header the portal expects on every API call
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Token refresh endpoint; the refresh credential rides the session cookie
const TOKEN_REFRESH_PATH: &str = "/auth/token/refresh/";

/// Request timeout, shorter in development builds
fn request_timeout() -> Duration {
    if cfg!(debug_assertions) {
        Duration::from_secs(5)
    } else {
        Duration::from_secs(10)
    }
}

/// PortalOps API client
pub struct PortalClient {
    http: HttpClient,
    base_url: String,
    cookies: Arc<Jar>,
    store: Arc<dyn CredentialStore>,
    /// Serializes token refreshes so N concurrent 401s produce one refresh
    refresh_gate: Mutex<()>,
}

/// A single outgoing request together with its one-shot replay state.
///
/// The flag travels with the attempt instead of living on shared state, so a
/// replayed request can never trigger a second refresh.
#[derive(Debug, Clone)]
pub(crate) struct RequestAttempt {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    retried: bool,
}

impl RequestAttempt {
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
            retried: false,
        }
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: None,
            retried: false,
        }
    }

    pub(crate) fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
            retried: false,
        }
    }

    /// The same attempt, marked as already replayed
    fn retried(self) -> Self {
        Self {
            retried: true,
            ..self
        }
    }
}

/// Credential resolved for one attempt
#[derive(Debug, Clone)]
enum Credential {
    Impersonation(String),
    Access(String),
}

impl Credential {
    fn token(&self) -> &str {
        match self {
            Credential::Impersonation(token) | Credential::Access(token) => token,
        }
    }

    fn is_impersonation(&self) -> bool {
        matches!(self, Credential::Impersonation(_))
    }
}

impl PortalClient {
    /// Create a client for the given portal base URL.
    ///
    /// The store is consulted on every request; the session cookie slot is
    /// used to seed the cookie jar so the refresh credential from a previous
    /// run is available immediately.
    pub fn new(base_url: &str, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url is not a valid URL: {}", e)))?;

        let cookies = Arc::new(Jar::default());
        if let Some(line) = store.session_cookie() {
            for pair in line.split("; ") {
                if !pair.is_empty() {
                    cookies.add_cookie_str(pair, &origin);
                }
            }
        }

        let http = HttpClient::builder()
            .timeout(request_timeout())
            .cookie_provider(cookies.clone())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            cookies,
            store,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Pick the credential for one attempt: a non-empty impersonation token
    /// always wins; otherwise the stored access token, if still valid.
    fn resolve_credential(&self) -> Option<Credential> {
        if let Some(token) = self.store.impersonation_token() {
            if !token.is_empty() {
                return Some(Credential::Impersonation(token));
            }
        }
        self.store.access_token().map(Credential::Access)
    }

    /// Make a portal API request with the full credential lifecycle applied
    pub(crate) fn send<'a, T: for<'de> Deserialize<'de> + 'a>(
        &'a self,
        attempt: RequestAttempt,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<T>> + Send + 'a>> {
        Box::pin(async move { self.send_inner(attempt).await })
    }

    /// Internal request implementation
    async fn send_inner<T: for<'de> Deserialize<'de>>(&self, attempt: RequestAttempt) -> Result<T> {
        let credential = self.resolve_credential();
        let url = format!("{}{}", self.base_url, attempt.path);
        debug!("{} {}", attempt.method, attempt.path);

        let mut request = self
            .http
            .request(attempt.method.clone(), &url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE);

        if let Some(credential) = &credential {
            request = request.header("Authorization", format!("Bearer {}", credential.token()));
        }

        if let Some(body) = &attempt.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        // Handle response status
        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NO_CONTENT => serde_json::from_str::<T>("{}")
                .or_else(|_| serde_json::from_str::<T>("null"))
                .map_err(|_| {
                    ApiError::InvalidResponse("Empty response where data was expected".to_string())
                        .into()
                }),
            StatusCode::UNAUTHORIZED => {
                let impersonating = credential
                    .as_ref()
                    .map(Credential::is_impersonation)
                    .unwrap_or(false);

                // Impersonation sessions are never renewed, and a replayed
                // request gets no second refresh.
                if attempt.retried || impersonating {
                    return Err(ApiError::Unauthorized.into());
                }

                let observed = match credential {
                    Some(Credential::Access(token)) => Some(token),
                    _ => None,
                };
                self.refresh_access(observed.as_deref()).await?;

                self.send(attempt.retried()).await
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(extract_error(&error_msg).unwrap_or(error_msg)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(extract_error(&error_msg).unwrap_or(error_msg)).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(extract_error(&error_msg).unwrap_or(error_msg)).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }

    /// One refresh against the token endpoint.
    ///
    /// Callers race here after concurrent 401s; whoever acquires the gate
    /// after a refresh already landed finds a token in the store different
    /// from the one it observed, and reuses it instead of refreshing again.
    async fn refresh_access(&self, observed: Option<&str>) -> Result<()> {
        let _gate = self.refresh_gate.lock().await;

        if let Some(current) = self.store.access_token() {
            if observed != Some(current.as_str()) {
                debug!("access token already renewed by a concurrent request");
                return Ok(());
            }
        }

        debug!("access token rejected, refreshing");
        let url = format!("{}{}", self.base_url, TOKEN_REFRESH_PATH);

        let outcome: std::result::Result<String, ApiError> = async {
            let response = self.http.post(&url).send().await.map_err(ApiError::from)?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::ServerError(format!(
                    "Refresh endpoint returned {}",
                    status
                )));
            }

            #[derive(Deserialize)]
            struct RefreshResponse {
                access: String,
            }

            let body: RefreshResponse = response.json().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse refresh response: {}", e))
            })?;
            Ok(body.access)
        }
        .await;

        match outcome {
            Ok(access) => {
                let record = AccessTokenRecord::issued_now(access);
                self.store.store_access(&record)?;
                self.persist_session_cookie();
                Ok(())
            }
            Err(err) => {
                warn!("token refresh failed: {}", err);
                // Refresh failure ends the session: drop the stale credential
                self.store.clear_access();
                Err(ApiError::SessionExpired.into())
            }
        }
    }

    /// Write the cookie jar's current state for the base URL back to the
    /// store, keeping the refresh credential across CLI invocations
    pub(crate) fn persist_session_cookie(&self) {
        let url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(_) => return,
        };
        let header = match self.cookies.cookies(&url) {
            Some(header) => header,
            None => return,
        };
        if let Ok(line) = header.to_str() {
            if let Err(err) = self.store.store_session_cookie(line) {
                warn!("could not persist session cookie: {}", err);
            }
        }
    }

    /// Store a freshly issued access token with the portal's fixed TTL
    pub(crate) fn store_issued_token(&self, access: String) -> Result<()> {
        let record = AccessTokenRecord::issued_now(access);
        self.store.store_access(&record)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn credential_store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }
}

/// Pull a human-readable message out of a portal error body
fn extract_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail", "message"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }
    None
}
