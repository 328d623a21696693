//! Selectors, storage keys and tuning constants shared by the page controllers.

// ── Selectors ───────────────────────────────────────────────────

pub const THEME_TOGGLE: &str = "#theme-toggle";
pub const THEME_TOGGLE_ICON: &str = "i";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const SITE_NAV: &str = ".site-nav";
pub const NAV_LINKS: &str = ".nav-list a";
pub const FADE_IN: &str = ".fade-in";
pub const YEAR: &str = "#year";
pub const CONTACT_FORM: &str = ".contact-form";
pub const FORM_STATUS: &str = ".form-status";

/// Canvas element ids that receive a particle backdrop, in paint order.
pub const CANVAS_IDS: [&str; 3] = ["bg-canvas", "hero-canvas", "about-canvas"];

// ── Attributes & classes ────────────────────────────────────────

pub const THEME_ATTR: &str = "data-theme";
pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_INVALID: &str = "aria-invalid";
pub const NAV_OPEN_CLASS: &str = "open";
pub const VISIBLE_CLASS: &str = "visible";
pub const ICON_LIGHT: &str = "fa-moon";
pub const ICON_DARK: &str = "fa-sun";

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Tuning ──────────────────────────────────────────────────────

/// Fixed header height subtracted from smooth-scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// Fraction of a `.fade-in` element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Quiet window before a burst of resize events triggers a relayout.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

/// Path of the offline/update worker registered after `load`.
pub const SERVICE_WORKER_PATH: &str = "/sw.js";
