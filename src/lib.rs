//! Page behaviours for a static marketing site, compiled to WebAssembly.
//!
//! The crate attaches six independent behaviours to existing markup: a
//! navigation toggle, a persisted light/dark theme, smooth same-page
//! scrolling, newsletter and contact forms that record submissions in
//! `localStorage`, and a consent banner that gates the analytics tag.
//!
//! Behaviour logic is written against small traits ([`dom`], [`store`],
//! [`clock`], [`analytics::TagLoader`]) and is tested natively. Browser glue
//! is compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Menu open/close and Escape handling |
//! | [`theme`] | Theme preference and document attribute |
//! | [`scroll`] | Smooth scrolling for `#fragment` links |
//! | [`newsletter`] | Newsletter signup handler |
//! | [`contact`] | Contact message handler |
//! | [`consent`] | Consent banner state machine |
//! | [`analytics`] | Tag loader trait and load completion signal |
//! | [`validate`] | Field validation and user-facing messages |
//! | [`records`] | Stored record types |
//! | [`store`] | Key/value storage and record lists |
//! | [`dom`] | DOM traits and their `web-sys` implementations |
//! | [`config`] | Page configuration |
//! | [`consts`] | Storage keys, attribute names, page copy |
//! | `gtag`, `mount` | Browser-only tag injection and event wiring (`hydrate`) |

pub mod analytics;
pub mod clock;
pub mod config;
pub mod consent;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod forms;
#[cfg(feature = "hydrate")]
pub mod gtag;
#[cfg(feature = "hydrate")]
pub mod mount;
pub mod nav;
pub mod newsletter;
pub mod records;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::SiteConfig;

/// Mount every behaviour using the default element ids and measurement id.
///
/// # Errors
///
/// Returns a JS error when the page cannot be wired (see [`mount::mount`]).
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() -> Result<(), JsValue> {
    boot(&SiteConfig::default())
}

/// Mount every behaviour using a JSON [`SiteConfig`].
///
/// # Errors
///
/// Returns a JS error string when the config is invalid or the page cannot be wired.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = initPageWithConfig)]
pub fn init_page_with_config(config: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    boot(&config)
}

#[cfg(feature = "hydrate")]
fn boot(config: &SiteConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = config.level().map_err(|err| JsValue::from_str(&err.to_string()))?;
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
    mount::mount(config)
}
