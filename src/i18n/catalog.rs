// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed bilingual message catalog.
//!
//! Holds every message the client produces itself: toast outcomes, form
//! validation errors and page fallbacks. Site copy lives in the
//! [`ContentDictionary`](super::ContentDictionary) fetched from the server;
//! this table only covers strings the server never sends.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Tamil entry to `TA` (missing keys fall back to English)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::iso639;

/// Languages the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ta,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ta => "ta",
        }
    }

    /// Parse an ISO 639-1 code. Case-sensitive, surrounding whitespace ignored.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim() {
            "en" => Some(Lang::En),
            "ta" => Some(Lang::Ta),
            _ => None,
        }
    }

    /// The other published language.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Ta,
            Lang::Ta => Lang::En,
        }
    }

    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ta]
    }

    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        iso639::native_name(self.code()).unwrap_or(self.code())
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rejected language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LangError {
    #[error("{name} ({code}) is not published on this site; use 'en' or 'ta'")]
    Unpublished { code: String, name: &'static str },
    #[error("'{0}' is not an ISO 639-1 language code")]
    Unknown(String),
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Some(lang) = Lang::from_code(value) {
            return Ok(lang);
        }
        let code = value.trim().to_string();
        match iso639::language_name(&code) {
            Some(name) => Err(LangError::Unpublished { code, name }),
            None => Err(LangError::Unknown(code)),
        }
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a catalog message in the given language.
///
/// Falls back to English when the Tamil entry is missing. Unknown keys
/// return an empty string; use [`t_or_key`] when the key itself is a
/// better placeholder.
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Like [`t`], but returns the key for unknown messages.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ta => TA,
    }
}

// ─── English (every key is defined here) ──────────────────────────

const EN: &[(&str, &str)] = &[
    // Poster admin outcomes
    ("poster.created", "Poster created successfully"),
    ("poster.updated", "Poster updated successfully"),
    ("poster.deleted", "Poster deleted successfully"),
    ("poster.toggled", "Poster status updated"),
    ("poster.exported", "Poster export downloaded"),
    ("poster.confirm_delete", "Are you sure you want to delete this poster?"),
    ("poster.not_found", "Poster not found"),
    ("poster.load_failed", "Could not load posters"),
    ("poster.stats_failed", "Could not load poster statistics"),
    // Newsletter
    ("newsletter.subscribed", "Thank you for subscribing to our newsletter"),
    // Generic failures
    ("error.generic", "Something went wrong. Please try again."),
    ("error.network", "Network error. Please check your connection."),
    ("error.unauthorized", "Your session has expired. Please sign in again."),
    // Form validation
    ("validation.title_en_required", "English title is required"),
    ("validation.title_ta_required", "Tamil title is required"),
    ("validation.priority_range", "Priority must be between 0 and 100"),
    ("validation.date_order", "End date cannot be before the start date"),
    ("validation.image_type", "Image must be a JPEG, PNG, WebP or GIF file"),
    ("validation.image_size", "Image must be 5 MB or smaller"),
    ("validation.email", "Please enter a valid email address"),
    // Page fallbacks
    ("page.not_found", "Page not found"),
    ("page.error", "We could not load this page"),
    ("page.loading", "Loading..."),
    ("page.empty", "Nothing to show yet"),
    // Labels
    ("label.active", "Active"),
    ("label.inactive", "Inactive"),
    ("label.page", "Page"),
    ("label.of", "of"),
];

// ─── Tamil ──────────────────────────────────────────────────────────

const TA: &[(&str, &str)] = &[
    ("poster.created", "போஸ்டர் வெற்றிகரமாக உருவாக்கப்பட்டது"),
    ("poster.updated", "போஸ்டர் வெற்றிகரமாக புதுப்பிக்கப்பட்டது"),
    ("poster.deleted", "போஸ்டர் வெற்றிகரமாக நீக்கப்பட்டது"),
    ("poster.toggled", "போஸ்டர் நிலை புதுப்பிக்கப்பட்டது"),
    ("poster.exported", "போஸ்டர் ஏற்றுமதி பதிவிறக்கப்பட்டது"),
    ("poster.confirm_delete", "இந்த போஸ்டரை நீக்க விரும்புகிறீர்களா?"),
    ("poster.not_found", "போஸ்டர் கிடைக்கவில்லை"),
    ("poster.load_failed", "போஸ்டர்களை ஏற்ற முடியவில்லை"),
    ("poster.stats_failed", "போஸ்டர் புள்ளிவிவரங்களை ஏற்ற முடியவில்லை"),
    ("newsletter.subscribed", "எங்கள் செய்திமடலுக்கு பதிவு செய்ததற்கு நன்றி"),
    ("error.generic", "ஏதோ தவறு நடந்துவிட்டது. மீண்டும் முயற்சிக்கவும்."),
    ("error.network", "பிணையப் பிழை. உங்கள் இணைப்பைச் சரிபார்க்கவும்."),
    ("error.unauthorized", "உங்கள் அமர்வு காலாவதியானது. மீண்டும் உள்நுழையவும்."),
    ("validation.title_en_required", "ஆங்கிலத் தலைப்பு தேவை"),
    ("validation.title_ta_required", "தமிழ்த் தலைப்பு தேவை"),
    ("validation.priority_range", "முன்னுரிமை 0 முதல் 100 வரை இருக்க வேண்டும்"),
    ("validation.date_order", "முடிவு தேதி தொடக்க தேதிக்கு முன் இருக்கக்கூடாது"),
    ("validation.image_type", "படம் JPEG, PNG, WebP அல்லது GIF கோப்பாக இருக்க வேண்டும்"),
    ("validation.image_size", "படம் 5 MB அல்லது அதற்குக் குறைவாக இருக்க வேண்டும்"),
    ("validation.email", "சரியான மின்னஞ்சல் முகவரியை உள்ளிடவும்"),
    ("page.not_found", "பக்கம் கிடைக்கவில்லை"),
    ("page.error", "இந்தப் பக்கத்தை ஏற்ற முடியவில்லை"),
    ("page.loading", "ஏற்றுகிறது..."),
    ("page.empty", "காட்டுவதற்கு இன்னும் எதுவும் இல்லை"),
    ("label.active", "செயலில்"),
    ("label.inactive", "செயலற்றது"),
    ("label.page", "பக்கம்"),
    ("label.of", "/"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            assert!(!t(Lang::En, key).is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn tamil_keys_exist_in_english() {
        for &(key, _) in TA {
            assert!(lookup(EN, key).is_some(), "TA key '{}' has no English source", key);
        }
    }

    #[test]
    fn tamil_lookup() {
        assert_eq!(t(Lang::Ta, "page.not_found"), "பக்கம் கிடைக்கவில்லை");
        assert_eq!(t(Lang::En, "page.not_found"), "Page not found");
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::Ta, "nonexistent.key"), "");
        assert_eq!(t_or_key(Lang::Ta, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn lang_roundtrip_and_toggle() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
            assert_eq!(lang.toggled().toggled(), *lang);
        }
    }

    #[test]
    fn parse_distinguishes_unpublished_from_unknown() {
        assert_eq!("ta".parse::<Lang>(), Ok(Lang::Ta));
        assert!(matches!(
            "hi".parse::<Lang>(),
            Err(LangError::Unpublished { name: "Hindi", .. })
        ));
        assert_eq!("xx".parse::<Lang>(), Err(LangError::Unknown("xx".into())));
    }
}
