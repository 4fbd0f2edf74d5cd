// SPDX-License-Identifier: PMPL-1.0-or-later

//! The reader's selected language.

use std::sync::Arc;
use tokio::sync::watch;

use crate::i18n::Lang;
use crate::storage::{PreferenceStore, LANGUAGE_KEY};

/// Current language plus its persistence.
///
/// Every change is written through to the preference store. Storage
/// problems are logged and otherwise ignored: the in-memory language is
/// always authoritative for the running process.
pub struct LanguageStore {
    storage: Arc<dyn PreferenceStore>,
    current: watch::Sender<Lang>,
}

impl LanguageStore {
    /// Restore the last selection, defaulting to English.
    pub fn new(storage: Arc<dyn PreferenceStore>) -> Self {
        let initial = match storage.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Lang::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(value = %code, "ignoring unknown persisted language");
                Lang::En
            }),
            Ok(None) => Lang::En,
            Err(err) => {
                tracing::warn!(error = %err, "language preference unreadable, using English");
                Lang::En
            }
        };
        let (current, _) = watch::channel(initial);
        Self { storage, current }
    }

    pub fn language(&self) -> Lang {
        *self.current.borrow()
    }

    /// Flip between English and Tamil; returns the new language.
    pub fn toggle(&self) -> Lang {
        let next = self.language().toggled();
        self.set_language(next);
        next
    }

    pub fn set_language(&self, lang: Lang) {
        self.current.send_replace(lang);
        tracing::debug!(lang = %lang, "language changed");
        if let Err(err) = self.storage.set(LANGUAGE_KEY, lang.code()) {
            tracing::warn!(error = %err, "could not persist language preference");
        }
    }

    /// Observe language changes.
    pub fn subscribe(&self) -> watch::Receiver<Lang> {
        self.current.subscribe()
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("language", &self.language())
            .finish()
    }
}
