// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 names for the languages visitors most often ask for.
//!
//! Only used to turn a rejected `--lang` value into a helpful message, so
//! the table covers the site's audience (South Asian and diaspora
//! languages) rather than the full standard.

const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("ta", "Tamil", "தமிழ்"),
    ("si", "Sinhala", "සිංහල"),
    ("ml", "Malayalam", "മലയാളം"),
    ("te", "Telugu", "తెలుగు"),
    ("kn", "Kannada", "ಕನ್ನಡ"),
    ("hi", "Hindi", "हिन्दी"),
    ("bn", "Bengali", "বাংলা"),
    ("ur", "Urdu", "اردو"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("fr", "French", "Français"),
    ("de", "German", "Deutsch"),
    ("nl", "Dutch", "Nederlands"),
    ("no", "Norwegian", "Norsk"),
    ("sv", "Swedish", "Svenska"),
    ("da", "Danish", "Dansk"),
    ("it", "Italian", "Italiano"),
    ("es", "Spanish", "Español"),
    ("zh", "Chinese", "中文"),
    ("ja", "Japanese", "日本語"),
];

/// English name of an ISO 639-1 code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, name, _)| name)
}

/// Name of the language written in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, _, native)| native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(language_name("si"), Some("Sinhala"));
        assert_eq!(language_name("TA"), None);
        assert_eq!(language_name("tam"), None);
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("ta"), Some("Tamil"));
        assert_eq!(native_name("ta"), Some("தமிழ்"));
        assert_eq!(native_name("xx"), None);
    }
}
