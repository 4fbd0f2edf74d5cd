// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bilingual text for the site.
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ta   | Tamil    | தமிழ்        |
//!
//! Two sources of text exist:
//!
//! - the [`ContentDictionary`] the server hands out for site copy, resolved
//!   with [`resolve`], and
//! - the fixed message [`catalog`](t) for toasts, validation errors and page
//!   fallbacks.
//!
//! Both fall back to English when the Tamil variant is missing, and neither
//! ever fails: a missing key ends at the caller's fallback (or an empty
//! string for the catalog).

mod catalog;
mod content;
mod iso639;

pub use catalog::{t, t_or_key, Lang, LangError};
pub use content::{resolve, ContentDictionary, LocalizedString, SiteContent};
pub use iso639::{language_name, native_name};
