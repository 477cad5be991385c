use std::sync::RwLock;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::ApiError;
use crate::config::API;
use crate::models::{BankDetails, ProfileUpdate, Trade, TradeCredentials, UserProfile};

/// Payload for `POST /user/register`. One canonical contract: the backend
/// wants all four fields and answers with `{token}`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Thin wrapper over `reqwest` that knows the backend base URL and holds the
/// session token. The token slot is written only at the application boundary
/// (login/signup/logout); every request picks it up from here.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(API.timeout_ms))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    /// The `Authorization` header value for the current session, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap()
            .as_deref()
            .map(|t| format!("Bearer {t}"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(value) => req.header(reqwest::header::AUTHORIZATION, value),
            None => req,
        }
    }

    /// Fires the request and normalizes non-2xx responses into `ApiError`,
    /// preferring the server-provided message over `fallback`.
    async fn send(
        &self,
        req: RequestBuilder,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = self.with_auth(req).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response_parts(status, &body, fallback))
    }

    /// `POST /user/login`. The backend answers with the bare token string.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let req = self
            .http
            .post(self.url("/user/login"))
            .json(&json!({ "username": username, "password": password }));
        let resp = self.send(req, "Login failed").await?;
        let body = resp.text().await?;
        let token = body.trim().trim_matches('"').to_string();
        if token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".into()));
        }
        Ok(token)
    }

    /// `POST /user/register` → `{token}`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let req = self.http.post(self.url("/user/register")).json(request);
        let resp = self.send(req, "Signup failed").await?;
        let token: TokenResponse = resp.json().await?;
        Ok(token.token)
    }

    /// `GET /trade-details`. A 404 means the user never stored credentials;
    /// that resolves to empty credentials, not an error.
    pub async fn trade_details(&self) -> Result<TradeCredentials, ApiError> {
        let req = self.http.get(self.url("/trade-details"));
        match self.send(req, "Failed to load trade details").await {
            Ok(resp) => Ok(resp.json().await?),
            Err(err) if err.is_not_found() => Ok(TradeCredentials::default()),
            Err(err) => Err(err),
        }
    }

    /// `POST /trade-details`, a full replace.
    pub async fn save_trade_details(&self, creds: &TradeCredentials) -> Result<(), ApiError> {
        let req = self.http.post(self.url("/trade-details")).json(creds);
        self.send(req, "Failed to save trade details").await?;
        Ok(())
    }

    /// `GET /profile`.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let req = self.http.get(self.url("/profile"));
        let resp = self.send(req, "Failed to fetch profile").await?;
        Ok(resp.json().await?)
    }

    /// `PUT /profile`. Only username and email are updatable.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let req = self.http.put(self.url("/profile")).json(update);
        let resp = self.send(req, "Failed to update profile").await?;
        Ok(resp.json().await?)
    }

    /// `POST /profile/change-password`.
    pub async fn change_password(&self, new_password: &str) -> Result<(), ApiError> {
        let req = self
            .http
            .post(self.url("/profile/change-password"))
            .json(&json!({ "newPassword": new_password }));
        self.send(req, "Failed to change password").await?;
        Ok(())
    }

    /// `GET /trades`, the server-owned trade history.
    pub async fn trades(&self) -> Result<Vec<Trade>, ApiError> {
        let req = self.http.get(self.url("/trades"));
        let resp = self.send(req, "Failed to fetch trades").await?;
        Ok(resp.json().await?)
    }

    /// `GET /bank-details`. The singleton may not be configured yet; a 404
    /// resolves to `None`.
    pub async fn bank_details(&self) -> Result<Option<BankDetails>, ApiError> {
        let req = self.http.get(self.url("/bank-details"));
        match self.send(req, "Failed to fetch bank details").await {
            Ok(resp) => Ok(Some(resp.json().await?)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_follows_token_lifecycle() {
        let client = ApiClient::new("http://localhost:8097").unwrap();
        assert!(client.bearer().is_none());

        client.set_token("abc123");
        assert_eq!(client.bearer().as_deref(), Some("Bearer abc123"));

        client.clear_token();
        assert!(client.bearer().is_none());
    }

    #[test]
    fn urls_join_without_double_slash() {
        let client = ApiClient::new("http://localhost:8097/").unwrap();
        assert_eq!(client.url("/trades"), "http://localhost:8097/trades");
        assert_eq!(
            client.url("/profile/change-password"),
            "http://localhost:8097/profile/change-password"
        );
    }
}
