// SPDX-License-Identifier: PMPL-1.0-or-later

//! REST wrappers for the site backend.
//!
//! Endpoints are grouped by area as `impl ApiClient` blocks; every call
//! returns [`ApiError`] and never retries.

mod client;
mod content;
mod error;
mod posters;

pub use client::{user_agent, ApiClient};
pub use content::is_valid_email;
pub use error::{ApiError, Result};
