// SPDX-License-Identifier: PMPL-1.0-or-later

//! Theme selection with debounced transitions.
//!
//! A change flips the in-memory theme at once, then a background task
//! applies the palette after `apply_delay` and clears the transition flag
//! after a further `settle_delay`. Changes requested while the flag is set
//! are dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::palette::{ThemeName, ThemePalette};
use super::sink::StyleSink;
use crate::storage::{PreferenceStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub apply_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            apply_delay: Duration::from_millis(150),
            settle_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Debug)]
struct ThemeState {
    current: ThemeName,
    transitioning: bool,
}

/// An in-flight theme transition.
#[derive(Debug)]
pub struct Transition {
    to: ThemeName,
    handle: JoinHandle<()>,
}

impl Transition {
    pub fn target(&self) -> ThemeName {
        self.to
    }

    /// Wait until the palette is applied and the transition flag is clear.
    pub async fn finished(self) {
        if let Err(err) = self.handle.await {
            tracing::warn!(error = %err, theme = %self.to, "theme transition task failed");
        }
    }
}

pub struct ThemeStore {
    state: Arc<Mutex<ThemeState>>,
    current: Arc<watch::Sender<ThemeName>>,
    storage: Arc<dyn PreferenceStore>,
    sink: Arc<dyn StyleSink>,
    timing: TransitionTiming,
}

impl ThemeStore {
    /// Restore the theme and apply its palette immediately.
    ///
    /// Order: persisted name, then `platform_hint`, then light.
    pub fn new(
        storage: Arc<dyn PreferenceStore>,
        sink: Arc<dyn StyleSink>,
        platform_hint: Option<ThemeName>,
        timing: TransitionTiming,
    ) -> Self {
        let persisted = match storage.get(THEME_KEY) {
            Ok(value) => value.and_then(|v| ThemeName::parse(&v)),
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unreadable");
                None
            }
        };
        let initial = persisted.or(platform_hint).unwrap_or_default();
        apply_palette(sink.as_ref(), initial.palette());

        let (current, _) = watch::channel(initial);
        Self {
            state: Arc::new(Mutex::new(ThemeState {
                current: initial,
                transitioning: false,
            })),
            current: Arc::new(current),
            storage,
            sink,
            timing,
        }
    }

    pub fn theme(&self) -> ThemeName {
        lock(&self.state).current
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.theme().palette()
    }

    pub fn is_transitioning(&self) -> bool {
        lock(&self.state).transitioning
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeName> {
        self.current.subscribe()
    }

    pub fn toggle(&self) -> Option<Transition> {
        let next = self.theme().toggled();
        self.set_theme(next)
    }

    /// Start a transition to `name`.
    ///
    /// Returns `None` when a transition is already running, `name` is
    /// already current, or there is no tokio runtime to run it on.
    pub fn set_theme(&self, name: ThemeName) -> Option<Transition> {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::warn!(error = %err, requested = %name, "theme change needs a tokio runtime");
                return None;
            }
        };
        {
            let mut state = lock(&self.state);
            if state.transitioning {
                tracing::debug!(requested = %name, "theme change ignored, transition in flight");
                return None;
            }
            if state.current == name {
                return None;
            }
            state.transitioning = true;
            state.current = name;
        }
        self.current.send_replace(name);
        tracing::debug!(theme = %name, "theme transition started");

        let state = Arc::clone(&self.state);
        let storage = Arc::clone(&self.storage);
        let sink = Arc::clone(&self.sink);
        let timing = self.timing;
        let handle = runtime.spawn(async move {
            tokio::time::sleep(timing.apply_delay).await;
            apply_palette(sink.as_ref(), name.palette());
            if let Err(err) = storage.set(THEME_KEY, name.as_str()) {
                tracing::warn!(error = %err, "could not persist theme preference");
            }
            tokio::time::sleep(timing.settle_delay).await;
            lock(&state).transitioning = false;
            tracing::debug!(theme = %name, "theme transition settled");
        });
        Some(Transition { to: name, handle })
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &*lock(&self.state))
            .field("timing", &self.timing)
            .finish()
    }
}

fn lock(state: &Mutex<ThemeState>) -> MutexGuard<'_, ThemeState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply_palette(sink: &dyn StyleSink, palette: &ThemePalette) {
    if !sink.is_attached() {
        tracing::debug!(theme = %palette.name, "no style scope attached, tokens not applied");
        return;
    }
    if let Err(err) = sink.apply(palette) {
        tracing::warn!(error = %err, theme = %palette.name, "could not apply theme tokens");
    }
}

/// Preferred color scheme from the terminal's `COLORFGBG` setting.
pub fn platform_preference() -> Option<ThemeName> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
}

/// `COLORFGBG` is `fg;bg` or `fg;default;bg`; a background index of 0-6 or
/// 8 is a dark terminal.
pub fn parse_colorfgbg(value: &str) -> Option<ThemeName> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(ThemeName::Dark),
        _ => Some(ThemeName::Light),
    }
}
