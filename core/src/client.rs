use reqwest::Client;
use serde_json::Value;

use crate::config::BasixConfig;
use crate::errors::{BasixError, BasixResult};
use crate::types::*;

/// Client for the BASIX identity API
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
}

impl IdentityClient {
    /// Create a new identity API client from the configured origin
    pub fn new(config: &BasixConfig) -> Self {
        Self::with_base_url(config.api_base_url())
    }

    /// Create a client against an explicit origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Exchange credentials for a session via `POST /api/login`
    pub async fn login(&self, request: &LoginRequest) -> BasixResult<LoginResponse> {
        let response = self
            .client
            .post(self.endpoint("login"))
            .json(request)
            .send()
            .await
            .map_err(|e| BasixError::RequestError(format!("Failed to send login request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::failure_message(response, "Login failed").await;
            return Err(BasixError::AuthFailed(message));
        }

        let response_body = response.json::<LoginResponse>().await.map_err(|e| {
            BasixError::ResponseError(format!("Failed to parse login response: {}", e))
        })?;

        Ok(response_body)
    }

    /// Create an account via `POST /api/register`.
    ///
    /// The success body shape is unconstrained by any consumer, so it is
    /// returned as raw JSON.
    pub async fn register(&self, request: &RegisterRequest) -> BasixResult<Value> {
        let response = self
            .client
            .post(self.endpoint("register"))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                BasixError::RequestError(format!("Failed to send register request: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::failure_message(response, "Registration failed").await;
            return Err(BasixError::AuthFailed(message));
        }

        let response_body = response.json::<Value>().await.map_err(|e| {
            BasixError::ResponseError(format!("Failed to parse register response: {}", e))
        })?;

        Ok(response_body)
    }

    /// Invalidate the session server-side via `POST /api/logout`.
    ///
    /// Response status and body are ignored; only a transport failure is
    /// reported, and the session manager swallows even that.
    pub async fn logout(&self, token: Option<&str>) -> BasixResult<()> {
        let mut request = self.client.post(self.endpoint("logout"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request.send().await.map_err(|e| {
            BasixError::RequestError(format!("Failed to send logout request: {}", e))
        })?;

        Ok(())
    }

    /// Extract the server-provided error message, falling back to a generic
    /// one when the body is missing, empty, or not the expected shape.
    async fn failure_message(response: reqwest::Response, fallback: &str) -> String {
        match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message.unwrap_or_else(|| fallback.to_string()),
            Err(_) => fallback.to_string(),
        }
    }
}
