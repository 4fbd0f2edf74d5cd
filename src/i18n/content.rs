// SPDX-License-Identifier: PMPL-1.0-or-later

//! Server-supplied bilingual content and its resolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Lang;

/// A display string in both site languages.
///
/// English is required; Tamil may be missing, in which case readers get
/// the English text. Empty strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocalizedRepr")]
pub struct LocalizedString {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ta: Option<String>,
}

/// Wire shapes accepted for a localized value. Endpoints that take a
/// `language` parameter sometimes answer with plain, already-resolved text.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedRepr {
    Plain(String),
    Pair {
        #[serde(default)]
        en: Option<String>,
        #[serde(default)]
        ta: Option<String>,
    },
}

impl From<LocalizedRepr> for LocalizedString {
    fn from(repr: LocalizedRepr) -> Self {
        match repr {
            LocalizedRepr::Plain(text) => LocalizedString { en: text, ta: None },
            LocalizedRepr::Pair { en, ta } => LocalizedString {
                en: en.unwrap_or_default(),
                ta,
            },
        }
    }
}

impl LocalizedString {
    pub fn new(en: impl Into<String>, ta: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ta: Some(ta.into()),
        }
    }

    pub fn english(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ta: None,
        }
    }

    /// The exact variant for `lang`, if present and non-empty.
    pub fn variant(&self, lang: Lang) -> Option<&str> {
        let value = match lang {
            Lang::En => Some(self.en.as_str()),
            Lang::Ta => self.ta.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// `lang` variant, else English, else `None`.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        self.variant(lang).or_else(|| self.variant(Lang::En))
    }

    /// Case-insensitive substring match over both variants.
    pub fn contains_ci(&self, needle_lower: &str) -> bool {
        self.en.to_lowercase().contains(needle_lower)
            || self
                .ta
                .as_deref()
                .is_some_and(|ta| ta.to_lowercase().contains(needle_lower))
    }
}

/// Content key to localized text, as served by the content endpoint.
pub type ContentDictionary = BTreeMap<String, LocalizedString>;

/// Resolve `key` in `lang`, falling back to English and then to `fallback`.
///
/// Total over its inputs: a missing dictionary, a missing key and missing
/// variants all end at `fallback`.
pub fn resolve<'a>(
    dictionary: Option<&'a ContentDictionary>,
    key: &str,
    lang: Lang,
    fallback: &'a str,
) -> &'a str {
    dictionary
        .and_then(|dict| dict.get(key))
        .and_then(|entry| entry.get(lang))
        .unwrap_or(fallback)
}

/// The dictionary currently shown to the reader.
///
/// Replaced wholesale whenever the locale changes; never edited in place.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    lang: Lang,
    dictionary: Option<ContentDictionary>,
}

impl SiteContent {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            dictionary: None,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn dictionary(&self) -> Option<&ContentDictionary> {
        self.dictionary.as_ref()
    }

    pub fn replace(&mut self, lang: Lang, dictionary: ContentDictionary) {
        tracing::debug!(lang = %lang, keys = dictionary.len(), "content dictionary replaced");
        self.lang = lang;
        self.dictionary = Some(dictionary);
    }

    pub fn text<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        resolve(self.dictionary.as_ref(), key, self.lang, fallback)
    }
}
