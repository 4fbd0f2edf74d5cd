// SPDX-License-Identifier: PMPL-1.0-or-later

//! `tamil-site doctor`: checks the local setup before anyone files a bug.

use anyhow::{anyhow, Result};
use std::path::Path;

use crate::api::ApiClient;
use crate::config::SiteConfig;
use crate::i18n::Lang;
use crate::storage::{FileStore, PreferenceStore, LANGUAGE_KEY, THEME_KEY, TOKEN_KEY};

pub async fn run_self_diagnostics(
    config: &SiteConfig,
    config_path: Option<&Path>,
    online: bool,
) -> Result<()> {
    println!("tamil-site self-diagnostics");

    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("tamil-site {}", env!("CARGO_PKG_VERSION")),
    )];

    checks.push(match config_path {
        Some(path) if path.is_file() => Diagnostic::ok("config file", format!("{} loaded", path.display())),
        Some(path) => Diagnostic::warning(
            "config file",
            format!("{} missing, using defaults", path.display()),
        ),
        None => Diagnostic::warning("config file", "no config directory, using defaults".to_string()),
    });

    let store = FileStore::new(config.resolved_storage_path());
    checks.push(check_preferences(&store));
    checks.push(check_token(&store));
    checks.push(check_css_output(config.css_output.as_deref()));

    let client = ApiClient::new(&config.api_base_url, config.request_timeout());
    checks.push(match &client {
        Ok(client) => Diagnostic::ok("API base URL", client.base_url().to_string()),
        Err(err) => Diagnostic::error("API base URL", err.to_string()),
    });
    if online {
        if let Ok(client) = &client {
            checks.push(check_content_endpoint(client).await);
        }
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_preferences(store: &FileStore) -> Diagnostic {
    let label = "preference file";
    if !store.path().exists() {
        return Diagnostic::warning(
            label,
            format!("{} not created yet (set a language or theme)", store.path().display()),
        );
    }
    let read = store
        .get(LANGUAGE_KEY)
        .and_then(|lang| store.get(THEME_KEY).map(|theme| (lang, theme)));
    match read {
        Ok((lang, theme)) => Diagnostic::ok(
            label,
            format!(
                "{} (language: {}, theme: {})",
                store.path().display(),
                lang.as_deref().unwrap_or("unset"),
                theme.as_deref().unwrap_or("unset")
            ),
        ),
        Err(err) => Diagnostic::error(label, err.to_string()),
    }
}

fn check_token(store: &FileStore) -> Diagnostic {
    match store.get(TOKEN_KEY) {
        Ok(Some(token)) if !token.trim().is_empty() => {
            Diagnostic::ok("admin token", "configured".to_string())
        }
        Ok(_) => Diagnostic::warning(
            "admin token",
            "not set (run `tamil-site auth set-token`)".to_string(),
        ),
        Err(err) => Diagnostic::warning("admin token", format!("unreadable: {err}")),
    }
}

fn check_css_output(path: Option<&Path>) -> Diagnostic {
    let label = "theme stylesheet";
    let Some(path) = path else {
        return Diagnostic::warning(label, "css_output not configured".to_string());
    };
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) if !parent.is_dir() => {
            Diagnostic::error(label, format!("{} does not exist", parent.display()))
        }
        _ => Diagnostic::ok(label, path.display().to_string()),
    }
}

async fn check_content_endpoint(client: &ApiClient) -> Diagnostic {
    match client.global_content(Lang::En).await {
        Ok(dictionary) => Diagnostic::ok(
            "content endpoint",
            format!("{} keys", dictionary.len()),
        ),
        Err(err) => Diagnostic::error("content endpoint", err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn css_output_parent_must_exist() {
        let dir = TempDir::new().unwrap();
        let ok = check_css_output(Some(&dir.path().join("theme.css")));
        assert_eq!(ok.level, Level::Ok);
        let missing = check_css_output(Some(&dir.path().join("nope/theme.css")));
        assert_eq!(missing.level, Level::Error);
        assert_eq!(check_css_output(None).level, Level::Warn);
    }

    #[test]
    fn token_check_reads_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(check_token(&store).level, Level::Warn);
        store.set(TOKEN_KEY, "secret").unwrap();
        assert_eq!(check_token(&store).level, Level::Ok);
    }
}
