// SPDX-License-Identifier: PMPL-1.0-or-later

//! The two static site palettes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeName::Light),
            "dark" => Some(ThemeName::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn palette(self) -> &'static ThemePalette {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ThemeName::parse(value).ok_or_else(|| format!("unknown theme '{value}' (light, dark)"))
    }
}

/// Named color, gradient and shadow tokens for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub name: ThemeName,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub gradient_primary: &'static str,
    pub gradient_hero: &'static str,
}

impl ThemePalette {
    /// CSS custom properties in declaration order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 16] {
        [
            ("--color-primary", self.primary),
            ("--color-primary-hover", self.primary_hover),
            ("--color-secondary", self.secondary),
            ("--color-accent", self.accent),
            ("--color-background", self.background),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-text-muted", self.text_muted),
            ("--color-border", self.border),
            ("--shadow", self.shadow),
            ("--color-success", self.success),
            ("--color-warning", self.warning),
            ("--color-error", self.error),
            ("--color-info", self.info),
            ("--gradient-primary", self.gradient_primary),
            ("--gradient-hero", self.gradient_hero),
        ]
    }

    /// `:root` block setting every token, tagged with the theme name.
    pub fn to_css(&self) -> String {
        let mut css = format!(":root {{\n  color-scheme: {};\n", self.name);
        for (name, value) in self.tokens() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

pub const LIGHT: ThemePalette = ThemePalette {
    name: ThemeName::Light,
    primary: "#8b1e3f",
    primary_hover: "#6f1832",
    secondary: "#d4a017",
    accent: "#c0561b",
    background: "#fffaf2",
    surface: "#ffffff",
    text: "#2b1d14",
    text_muted: "#6b5a4e",
    border: "#e8dccb",
    shadow: "0 4px 16px rgba(43, 29, 20, 0.08)",
    success: "#2e7d32",
    warning: "#ed8b00",
    error: "#c62828",
    info: "#1565c0",
    gradient_primary: "linear-gradient(135deg, #8b1e3f 0%, #c0561b 100%)",
    gradient_hero: "linear-gradient(180deg, #fff3d6 0%, #fffaf2 100%)",
};

pub const DARK: ThemePalette = ThemePalette {
    name: ThemeName::Dark,
    primary: "#e0607e",
    primary_hover: "#ec8299",
    secondary: "#f2c14e",
    accent: "#f08a4b",
    background: "#16110d",
    surface: "#221a14",
    text: "#f5ebe0",
    text_muted: "#bba999",
    border: "#3a2e25",
    shadow: "0 4px 16px rgba(0, 0, 0, 0.45)",
    success: "#66bb6a",
    warning: "#ffb74d",
    error: "#ef5350",
    info: "#64b5f6",
    gradient_primary: "linear-gradient(135deg, #e0607e 0%, #f08a4b 100%)",
    gradient_hero: "linear-gradient(180deg, #2a1f17 0%, #16110d 100%)",
};
