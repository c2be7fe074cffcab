//! Shared string constants: storage keys, DOM attribute names, vendor URLs.

// ── Storage keys ────────────────────────────────────────────────

/// Persisted theme preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";

/// Persisted analytics consent (`"granted"` or `"denied"`).
pub const CONSENT_KEY: &str = "analyticsConsent";

/// JSON array of newsletter subscribers.
pub const SUBSCRIBERS_KEY: &str = "subscribers";

/// JSON array of contact messages.
pub const CONTACT_MESSAGES_KEY: &str = "contactMessages";

// ── DOM ─────────────────────────────────────────────────────────

/// Attribute on the document element carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

/// Class on the navigation panel while the menu is open.
pub const NAV_OPEN_CLASS: &str = "open";

pub const ARIA_EXPANDED: &str = "aria-expanded";

pub const ESCAPE_KEY: &str = "Escape";

/// Links handled by smooth scrolling.
pub const SAME_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

// ── Status messages ─────────────────────────────────────────────

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing! A confirmation email may be sent if you opted in.";

pub const MESSAGE_SENT: &str = "Message sent. We will get back to you shortly.";

// ── Analytics ───────────────────────────────────────────────────

/// Placeholder GA4 measurement id used when no config is supplied.
pub const DEFAULT_MEASUREMENT_ID: &str = "G-EXAMPLE123";

/// Tag script base URL; the measurement id is appended as the `id` query value.
pub const GTAG_SCRIPT_BASE: &str = "https://www.googletagmanager.com/gtag/js?id=";
