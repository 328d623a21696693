//! Light/dark theme initialization and toggle.
//!
//! The active theme lives in the `data-theme` attribute of the document root,
//! which the stylesheet keys off. The user's choice is persisted under
//! [`THEME_STORAGE_KEY`]; with no stored choice the OS colour-scheme
//! preference decides, and light is the final fallback.
//!
//! TRADE-OFFS
//! ==========
//! The toggle button is optional. Pages without one still get the stored or
//! preferred theme applied; only the click binding and icon sync are skipped.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::dom::{Element, KeyValueStore};
use crate::selectors::{ARIA_PRESSED, ICON_DARK, ICON_LIGHT, THEME_ATTR, THEME_STORAGE_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Pick the starting theme: a valid stored choice wins, then the OS
/// preference, then light. Unrecognised stored values are ignored.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => log::warn!("ignoring stored theme: {err}"),
        }
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// The toggle button and the icon inside it.
pub struct ThemeToggle<E> {
    pub button: E,
    pub icon: Option<E>,
}

pub struct ThemeController<E, S> {
    root: E,
    toggle: Option<ThemeToggle<E>>,
    store: S,
    prefers_dark: bool,
    initialized: Cell<bool>,
}

impl<E: Element, S: KeyValueStore> ThemeController<E, S> {
    #[must_use]
    pub fn new(root: E, store: S) -> Self {
        Self { root, toggle: None, store, prefers_dark: false, initialized: Cell::new(false) }
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: Option<ThemeToggle<E>>) -> Self {
        self.toggle = toggle;
        self
    }

    /// Record the OS `prefers-color-scheme: dark` match.
    #[must_use]
    pub fn prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    /// Apply the starting theme and sync the toggle. Repeat calls return the
    /// current theme without re-reading storage.
    pub fn init(&self) -> Theme {
        if self.initialized.replace(true) {
            return self.current();
        }
        let stored = self.store.get(THEME_STORAGE_KEY);
        let theme = resolve_initial(stored.as_deref(), self.prefers_dark);
        self.apply(theme);
        log::debug!("theme initialized: {theme}");
        theme
    }

    /// Theme currently applied to the root; light when unset or unknown.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.root
            .attr(THEME_ATTR)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Switch to the opposite theme, persist it, and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().opposite();
        self.apply(next);
        self.store.set(THEME_STORAGE_KEY, next.as_str());
        next
    }

    fn apply(&self, theme: Theme) {
        self.root.set_attr(THEME_ATTR, theme.as_str());
        self.sync_toggle(theme);
    }

    fn sync_toggle(&self, theme: Theme) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        if let Some(icon) = &toggle.icon {
            if theme.is_dark() {
                icon.replace_class(ICON_LIGHT, ICON_DARK);
            } else {
                icon.replace_class(ICON_DARK, ICON_LIGHT);
            }
        }
        toggle
            .button
            .set_attr(ARIA_PRESSED, if theme.is_dark() { "true" } else { "false" });
    }
}

/// Build the controller for the live document, apply the starting theme and
/// bind the toggle button if the page has one.
#[cfg(feature = "browser")]
pub fn mount(window: &web_sys::Window, document: &web_sys::Document) -> Option<Theme> {
    use std::rc::Rc;

    use crate::dom::web::{listen, select};
    use crate::selectors::{THEME_TOGGLE, THEME_TOGGLE_ICON};

    let root = document.document_element()?;
    let store = window.local_storage().unwrap_or(None);
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    let toggle = select(document, THEME_TOGGLE).map(|button| {
        let icon = button.query_selector(THEME_TOGGLE_ICON).unwrap_or(None);
        ThemeToggle { button, icon }
    });

    let controller = Rc::new(
        ThemeController::new(root, store)
            .with_toggle(toggle)
            .prefers_dark(prefers_dark),
    );
    let theme = controller.init();

    if let Some(toggle) = &controller.toggle {
        let button = toggle.button.clone();
        let controller = Rc::clone(&controller);
        listen(&button, "click", move |_| {
            let next = controller.toggle();
            log::info!("theme switched to {next}");
        });
    } else {
        log::debug!("no {THEME_TOGGLE} on this page; theme toggle disabled");
    }
    Some(theme)
}
