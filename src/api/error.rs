// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors from the site API wrappers.

use thiserror::Error;

use crate::i18n::{t, Lang};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response.
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose envelope says `success: false`.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("response carried no data")]
    MissingData,

    /// Client-side validation failed; nothing was sent.
    #[error("invalid {field}")]
    Invalid {
        field: &'static str,
        message_key: &'static str,
    },

    #[error("building request: {0}")]
    Request(String),
}

impl ApiError {
    /// Toast text for this failure: the server's own message when it sent
    /// one, otherwise a catalog message.
    pub fn user_message(&self, lang: Lang) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            }
            | ApiError::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Status { status: 401, .. } => t(lang, "error.unauthorized").to_string(),
            ApiError::Transport(_) => t(lang, "error.network").to_string(),
            ApiError::Invalid { message_key, .. } => t(lang, message_key).to_string(),
            _ => t(lang, "error.generic").to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pull a human message out of an error body: `{ "message": .. }` or
/// `{ "error": .. }`, else the raw text if it is short and not HTML.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|field| value.get(field).and_then(|v| v.as_str()))
            .map(str::to_string);
    }
    if trimmed.starts_with('<') || trimmed.len() > 200 {
        return None;
    }
    Some(trimmed.to_string())
}

pub type Result<T> = std::result::Result<T, ApiError>;
