// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared HTTP client for the site API.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{message_from_body, ApiError, Result};
use crate::storage::{PreferenceStore, TOKEN_KEY};
use crate::types::Envelope;

/// User-Agent sent with every request: `tamil-site/{version}`.
pub fn user_agent() -> String {
    format!("tamil-site/{}", env!("CARGO_PKG_VERSION"))
}

/// Thin wrapper over `reqwest` bound to one API origin.
///
/// No retries, no deduplication, no cancellation: each call maps to exactly
/// one request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: reqwest::Url,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            base: parsed,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Attach the admin token saved in preference storage, if any.
    pub fn with_stored_token(self, storage: &dyn PreferenceStore) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "admin token unreadable, continuing unauthenticated");
                None
            }
        };
        self.with_token(token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder carrying `Authorization: Bearer` when a token is set.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorized(self.http.request(method, self.url(path)))
    }

    /// Like [`request`](Self::request), but each segment is appended
    /// percent-encoded, so ids cannot add path parts or a query.
    pub(crate) fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.authorized(self.http.request(method, url)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "api request");

        let response = self.http.execute(request).await.map_err(|err| {
            tracing::warn!(%method, %url, error = %err, "api request failed");
            ApiError::Transport(err)
        })?;

        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "api response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: message_from_body(&body),
        })
    }

    async fn envelope<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Envelope<T>> {
        let response = self.execute(builder).await?;
        let body = response.text().await.map_err(ApiError::Transport)?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope.message,
            });
        }
        Ok(envelope)
    }

    /// Send and return the envelope's `data`, which must be present.
    pub(crate) async fn send_data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        self.envelope(builder).await?.data.ok_or(ApiError::MissingData)
    }

    /// Send where `data` is optional (create/update echo the entity, some
    /// servers do not).
    pub(crate) async fn send_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>> {
        Ok(self.envelope(builder).await?.data)
    }

    /// Send and keep only the envelope's message.
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<Option<String>> {
        let response = self.execute(builder).await?;
        let body = response.text().await.map_err(ApiError::Transport)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope.message,
            });
        }
        Ok(envelope.message)
    }

    /// Send and return the raw body.
    pub(crate) async fn send_bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        Ok(bytes.to_vec())
    }
}
