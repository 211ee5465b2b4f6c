//! Session, impersonation, and two-factor API

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::client::models::{ImpersonationGrant, ProjectScope, StatusMessage, TwoFactorEnrollment};
use crate::client::portal::{PortalClient, RequestAttempt};
use crate::error::{ApiError, Result};

/// Session and identity operations for the portal API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// List the projects a user may sign in to
    async fn project_scopes(&self, username: &str, password: &str) -> Result<Vec<ProjectScope>>;

    /// Sign in scoped to one project. Persists the issued access token and
    /// the refresh session cookie, and returns the access token.
    async fn login(&self, username: &str, password: &str, project_id: i64) -> Result<String>;

    /// Re-scope the current session to another project
    async fn switch_project(&self, project_id: i64) -> Result<String>;

    /// Start impersonating a user (admin only). The returned token is stored
    /// in the impersonation slot and wins over the access token until
    /// [`unimpersonate`](Self::unimpersonate) or logout.
    async fn impersonate(&self, user_id: i64, project_id: Option<i64>)
    -> Result<ImpersonationGrant>;

    /// End impersonation and restore the admin session
    async fn unimpersonate(&self) -> Result<()>;

    /// Begin two-factor enrollment; returns the QR code to scan
    async fn two_factor_generate(&self) -> Result<TwoFactorEnrollment>;

    /// Confirm two-factor enrollment with a code from the authenticator
    async fn two_factor_verify(&self, code: &str) -> Result<StatusMessage>;
}

#[async_trait]
impl AuthApi for PortalClient {
    async fn project_scopes(&self, username: &str, password: &str) -> Result<Vec<ProjectScope>> {
        #[derive(Deserialize)]
        struct ProjectsResponse {
            projects: Vec<ProjectScope>,
        }

        let response = self
            .login_call(
                "/auth/projects/",
                &json!({ "username": username, "password": password }),
            )
            .await?;
        let body: ProjectsResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse projects response: {}", e))
        })?;
        Ok(body.projects)
    }

    async fn login(&self, username: &str, password: &str, project_id: i64) -> Result<String> {
        #[derive(Deserialize)]
        struct LoginResponse {
            access: String,
        }

        let response = self
            .login_call(
                "/auth/login/",
                &json!({
                    "username": username,
                    "password": password,
                    "project_id": project_id,
                }),
            )
            .await?;
        let body: LoginResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        // The refresh credential arrived as a session cookie alongside the
        // body; keep both for later runs.
        self.store_issued_token(body.access.clone())?;
        self.persist_session_cookie();
        Ok(body.access)
    }

    async fn switch_project(&self, project_id: i64) -> Result<String> {
        #[derive(Deserialize)]
        struct SwitchResponse {
            access: String,
        }

        let body: SwitchResponse = self
            .send(RequestAttempt::post_json(
                "/auth/switch-project/",
                json!({ "project_id": project_id }),
            ))
            .await?;
        self.store_issued_token(body.access.clone())?;
        self.persist_session_cookie();
        Ok(body.access)
    }

    async fn impersonate(
        &self,
        user_id: i64,
        project_id: Option<i64>,
    ) -> Result<ImpersonationGrant> {
        let mut body = json!({ "user_id": user_id });
        if let Some(project_id) = project_id {
            body["project_id"] = json!(project_id);
        }

        let grant: ImpersonationGrant = self
            .send(RequestAttempt::post_json("/auth/impersonate-usertoken/", body))
            .await?;
        self.credential_store()
            .store_impersonation(&grant.access_token)?;
        Ok(grant)
    }

    async fn unimpersonate(&self) -> Result<()> {
        #[derive(Deserialize)]
        struct UnimpersonateResponse {
            token: String,
        }

        // The request itself still rides the impersonation token; the
        // response hands the admin session back.
        let body: UnimpersonateResponse = self
            .send(RequestAttempt::post("/auth/unimpersonate/"))
            .await?;
        self.store_issued_token(body.token)?;
        self.credential_store().clear_impersonation();
        Ok(())
    }

    async fn two_factor_generate(&self) -> Result<TwoFactorEnrollment> {
        self.send(RequestAttempt::get("/auth/2fa/generate/")).await
    }

    async fn two_factor_verify(&self, code: &str) -> Result<StatusMessage> {
        self.send(RequestAttempt::post_json(
            "/auth/2fa/verify/",
            json!({ "code": code }),
        ))
        .await
    }
}

impl PortalClient {
    /// POST to a pre-session endpoint, outside the credential lifecycle.
    ///
    /// A 401 here means wrong credentials, not a stale token, so the
    /// refresh-and-replay path must never run.
    async fn login_call(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url(), path);
        let response = self
            .http()
            .post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status.as_u16() {
            200 | 201 => Ok(response),
            400 | 401 | 403 => Err(ApiError::InvalidCredentials.into()),
            _ => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Login endpoint returned {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
        }
    }
}
