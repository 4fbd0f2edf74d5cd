// SPDX-License-Identifier: PMPL-1.0-or-later

//! Light/dark theming: static palettes, the sinks that apply them, and the
//! store that switches between them.

pub mod palette;
pub mod sink;
pub mod store;

pub use palette::{ThemeName, ThemePalette, DARK, LIGHT};
pub use sink::{CssFileSink, DetachedSink, RecordingSink, StyleSink, ThemeError};
pub use store::{platform_preference, ThemeStore, Transition, TransitionTiming};
