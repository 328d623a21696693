//! Document lifecycle as reported by `document.readyState`.
//!
//! The WASM start function runs only after the module has been fetched and
//! instantiated, which can be after `DOMContentLoaded` or even window `load`
//! has fired. Startup checks the current state and runs work immediately
//! for events already past.

/// Parsed `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse the DOM string. Unknown values count as `Complete` so startup
    /// never waits on an event that may not come.
    #[must_use]
    pub fn from_dom(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// `DOMContentLoaded` has already fired.
    #[must_use]
    pub fn is_parsed(self) -> bool {
        self != Self::Loading
    }

    /// Window `load` has already fired.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        self == Self::Complete
    }
}
