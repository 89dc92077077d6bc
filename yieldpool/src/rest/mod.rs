pub mod endpoints;

use std::sync::{Arc, RwLock};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};

/// HTTP client wrapper for the yieldpool backend REST API.
///
/// Holds the bearer token obtained at login; once set it is attached to
/// every subsequent request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn from_config(config: &crate::config::ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install the bearer token used for authenticated calls.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("token lock poisoned") = token;
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.authorize(self.client.get(&url).query(query));
        let resp = req.send().await?;
        Self::decode(resp).await
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.authorize(self.client.post(&url).json(body));
        let resp = req.send().await?;
        Self::decode(resp).await
    }

    /// POST with an empty body and an explicit `Authorization` header value.
    ///
    /// Used by the login exchange, which authenticates with
    /// `Authorization: tma <telegram-init-data>` instead of a bearer token.
    pub async fn post_with_auth_header<T: DeserializeOwned>(
        &self,
        path: &str,
        auth_value: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", auth_value)
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status,
                message: detail_message(&body),
            });
        }
        resp.json::<T>().await.map_err(ApiError::Request)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Pull the backend's `detail` field out of an error body, falling back to
/// the raw body text.
fn detail_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_extracts_detail() {
        assert_eq!(
            detail_message(r#"{"detail": "User not found"}"#),
            "User not found"
        );
    }

    #[test]
    fn test_detail_message_falls_back_to_body() {
        assert_eq!(detail_message("bad gateway"), "bad gateway");
        assert_eq!(detail_message(r#"{"error": "x"}"#), r#"{"error": "x"}"#);
    }
}
