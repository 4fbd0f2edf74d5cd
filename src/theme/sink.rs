// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where palette tokens get applied.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::palette::{ThemeName, ThemePalette};

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no style scope attached")]
    NoStyleScope,
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The global style scope a palette is applied to.
pub trait StyleSink: Send + Sync {
    fn apply(&self, palette: &ThemePalette) -> Result<(), ThemeError>;

    /// `false` when nothing renders the theme; the store then skips applying.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Writes the palette as a CSS custom-property stylesheet.
#[derive(Debug, Clone)]
pub struct CssFileSink {
    path: PathBuf,
}

impl CssFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleSink for CssFileSink {
    fn apply(&self, palette: &ThemePalette) -> Result<(), ThemeError> {
        fs::write(&self.path, palette.to_css()).map_err(|source| ThemeError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), theme = %palette.name, "theme stylesheet written");
        Ok(())
    }
}

/// Records applied themes without touching anything.
#[derive(Debug, Default)]
pub struct RecordingSink {
    applied: Mutex<Vec<ThemeName>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<ThemeName> {
        self.applied
            .lock()
            .map(|applied| applied.clone())
            .unwrap_or_default()
    }
}

impl StyleSink for RecordingSink {
    fn apply(&self, palette: &ThemePalette) -> Result<(), ThemeError> {
        if let Ok(mut applied) = self.applied.lock() {
            applied.push(palette.name);
        }
        Ok(())
    }
}

/// Stand-in when nothing renders the theme. Every apply fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSink;

impl StyleSink for DetachedSink {
    fn apply(&self, _palette: &ThemePalette) -> Result<(), ThemeError> {
        Err(ThemeError::NoStyleScope)
    }

    fn is_attached(&self) -> bool {
        false
    }
}
