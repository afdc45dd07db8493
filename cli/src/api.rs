//! Async HTTP client for the fleet backend.
//!
//! Every call goes through [`ApiClient::call`], which resolves the URL from
//! the shared [`Endpoint`] table and decodes with the same rules the browser
//! client uses.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::AUTHORIZATION;
use records::endpoint::{Endpoint, Method};
use records::error::{ApiError, decode_response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Send `body` to `endpoint` and decode the response as `T`.
    ///
    /// # Errors
    ///
    /// `MissingToken` when the endpoint is protected and no token was given,
    /// `Http` when the request could not be sent, `Api` for server failures.
    pub async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint, body: Option<Value>) -> Result<T, CliError> {
        let url = endpoint.url(&self.base_url);
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut request = self.http.request(method, &url);
        if endpoint.requires_auth() {
            let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(json) = body {
            request = request.json(&json);
        }

        tracing::debug!(method = endpoint.method().as_str(), %url, "sending request");
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        decode_response(&endpoint, status, &text).map_err(|error: ApiError| {
            tracing::warn!(
                method = endpoint.method().as_str(),
                path = %endpoint.path(),
                status = ?error.status(),
                %error,
                "request failed"
            );
            CliError::Api(error)
        })
    }
}
