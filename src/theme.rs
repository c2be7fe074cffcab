//! Light/dark theme preference.
//!
//! Dark is the default and is represented by the *absence* of the
//! `data-theme` attribute on the document element; light sets
//! `data-theme="light"`. The toggle's label always names the theme a click
//! would switch to.
//!
//! Persistence is best-effort: a failed write is logged and the page still
//! switches theme for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{THEME_ATTR, THEME_KEY};
use crate::dom::Node;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything but `"light"` is dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable name, as shown on the toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

pub struct ThemeManager<S, E> {
    store: S,
    root: E,
    toggle: Option<E>,
}

impl<S: KeyValueStore, E: Node> ThemeManager<S, E> {
    /// `root` is the document element; `toggle` is the optional switch control.
    #[must_use]
    pub fn new(store: S, root: E, toggle: Option<E>) -> Self {
        Self { store, root, toggle }
    }

    /// Apply the persisted preference and label the toggle.
    pub fn init(&self) -> Theme {
        let stored = match self.store.get(THEME_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        self.apply(theme);
        theme
    }

    /// The theme currently applied to the document.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_stored(self.root.attribute(THEME_ATTR).as_deref())
    }

    /// Switch to the other theme, persist it, and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().other();
        self.apply(next);
        if let Err(err) = self.store.set(THEME_KEY, next.as_str()) {
            log::warn!("failed to persist theme {}: {err}", next.as_str());
        }
        next
    }

    fn apply(&self, theme: Theme) {
        match theme {
            Theme::Light => self.root.set_attribute(THEME_ATTR, Theme::Light.as_str()),
            Theme::Dark => self.root.remove_attribute(THEME_ATTR),
        }
        if let Some(toggle) = &self.toggle {
            toggle.set_text(theme.other().label());
        }
    }
}
