//! Timestamp source for stored records.

/// Produces ISO-8601 UTC timestamps (`YYYY-MM-DDTHH:MM:SS.sssZ`).
pub trait Clock {
    fn now_iso(&self) -> String;
}

/// The browser's clock, formatted by `Date.prototype.toISOString`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl Clock for BrowserClock {
    fn now_iso(&self) -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
}
