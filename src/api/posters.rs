// SPDX-License-Identifier: PMPL-1.0-or-later

//! Poster admin endpoints.

use reqwest::{Method, RequestBuilder};

use super::client::ApiClient;
use super::error::Result;
use crate::admin::form::PosterForm;
use crate::types::{Poster, PosterStats};

const POSTERS_PATH: &str = "/api/posters";

impl ApiClient {
    /// `/api/posters/{id}` plus an optional action, with `id` escaped.
    fn poster_request(
        &self,
        method: Method,
        id: &str,
        action: Option<&str>,
    ) -> Result<RequestBuilder> {
        let mut segments = vec!["api", "posters", id];
        segments.extend(action);
        self.request_segments(method, &segments)
    }

    pub async fn list_posters(&self) -> Result<Vec<Poster>> {
        self.send_data(self.request(Method::GET, POSTERS_PATH)).await
    }

    pub async fn poster(&self, id: &str) -> Result<Poster> {
        self.send_data(self.poster_request(Method::GET, id, None)?).await
    }

    pub async fn poster_stats(&self) -> Result<PosterStats> {
        let path = format!("{POSTERS_PATH}/stats");
        self.send_data(self.request(Method::GET, &path)).await
    }

    /// Multipart POST. The form is not validated here.
    pub async fn create_poster(&self, form: &PosterForm) -> Result<Option<Poster>> {
        let request = self
            .request(Method::POST, POSTERS_PATH)
            .multipart(form.to_multipart()?);
        self.send_optional(request).await
    }

    /// Multipart PUT to `/{id}`.
    pub async fn update_poster(&self, id: &str, form: &PosterForm) -> Result<Option<Poster>> {
        let request = self
            .poster_request(Method::PUT, id, None)?
            .multipart(form.to_multipart()?);
        self.send_optional(request).await
    }

    /// Flip the active flag server-side.
    pub async fn toggle_poster(&self, id: &str) -> Result<Option<String>> {
        self.send_ack(self.poster_request(Method::PATCH, id, Some("toggle"))?)
            .await
    }

    pub async fn delete_poster(&self, id: &str) -> Result<Option<String>> {
        self.send_ack(self.poster_request(Method::DELETE, id, None)?)
            .await
    }

    /// CSV export as served.
    pub async fn export_posters(&self) -> Result<Vec<u8>> {
        let path = format!("{POSTERS_PATH}/export");
        self.send_bytes(self.request(Method::GET, &path)).await
    }
}
