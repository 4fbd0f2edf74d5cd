// SPDX-License-Identifier: PMPL-1.0-or-later

//! tamil-site: client core for the bilingual (English/Tamil) community site.
//!
//! The pieces a front end needs and nothing about how it draws pixels:
//!
//! 1. **i18n**: the static UI catalog, server-managed content dictionaries
//!    and the fallback rules between the two.
//! 2. **language / theme**: persisted reader preferences. Theme changes run
//!    as a short guarded transition so rapid toggles collapse into one.
//! 3. **api**: the REST client (bearer token, `{success, data, message}`
//!    envelopes) for content, team, ebooks, newsletter and posters.
//! 4. **admin**: poster management state (filters, pagination, the
//!    create/edit form, toasts, CSV export).

pub mod admin;
pub mod api;
pub mod config;
pub mod diagnostics;
pub mod i18n;
pub mod language;
pub mod listing;
pub mod report;
pub mod storage;
pub mod theme;
pub mod types;
