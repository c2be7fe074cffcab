//! Page configuration.
//!
//! The host page may pass a JSON object to `initPageWithConfig`; every field is
//! optional and falls back to the defaults below, which match the stock page
//! markup.
//!
//! ```json
//! { "measurementId": "G-ABC123", "logLevel": "debug", "ids": { "nav": "site-nav" } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::DEFAULT_MEASUREMENT_ID;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid measurement id {0:?}: expected ASCII letters, digits, and '-'")]
    InvalidMeasurementId(String),
    #[error("element id for {0} is empty")]
    EmptyElementId(&'static str),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// GA4 measurement id embedded in the tag URL.
    pub measurement_id: String,
    /// Minimum console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub ids: ElementIds,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { measurement_id: DEFAULT_MEASUREMENT_ID.to_owned(), log_level: "info".to_owned(), ids: ElementIds::default() }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or any invalid field.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let id = &self.measurement_id;
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ConfigError::InvalidMeasurementId(id.clone()));
        }
        self.level()?;
        for (field, value) in self.ids.fields() {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyElementId(field));
            }
        }
        Ok(())
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] when `log_level` is not a level name.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// DOM ids of every element the behaviours attach to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub menu_toggle: String,
    pub nav: String,
    pub theme_toggle: String,
    pub newsletter_form: String,
    pub name: String,
    pub email: String,
    pub consent: String,
    pub name_error: String,
    pub email_error: String,
    pub consent_error: String,
    pub newsletter_status: String,
    pub contact_form: String,
    pub subject: String,
    pub message: String,
    pub subject_error: String,
    pub message_error: String,
    pub contact_status: String,
    pub consent_banner: String,
    pub accept: String,
    pub decline: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_toggle: "menuToggle".into(),
            nav: "primary-nav".into(),
            theme_toggle: "themeToggle".into(),
            newsletter_form: "newsletterForm".into(),
            name: "name".into(),
            email: "email".into(),
            consent: "consent".into(),
            name_error: "nameError".into(),
            email_error: "emailError".into(),
            consent_error: "consentError".into(),
            newsletter_status: "newsletterStatus".into(),
            contact_form: "contactForm".into(),
            subject: "subject".into(),
            message: "message".into(),
            subject_error: "subjectError".into(),
            message_error: "messageError".into(),
            contact_status: "contactStatus".into(),
            consent_banner: "consentBanner".into(),
            accept: "acceptGA".into(),
            decline: "declineGA".into(),
        }
    }
}

impl ElementIds {
    /// Every `(field name, id)` pair, for validation.
    fn fields(&self) -> [(&'static str, &str); 20] {
        [
            ("menuToggle", self.menu_toggle.as_str()),
            ("nav", self.nav.as_str()),
            ("themeToggle", self.theme_toggle.as_str()),
            ("newsletterForm", self.newsletter_form.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("consent", self.consent.as_str()),
            ("nameError", self.name_error.as_str()),
            ("emailError", self.email_error.as_str()),
            ("consentError", self.consent_error.as_str()),
            ("newsletterStatus", self.newsletter_status.as_str()),
            ("contactForm", self.contact_form.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            ("subjectError", self.subject_error.as_str()),
            ("messageError", self.message_error.as_str()),
            ("contactStatus", self.contact_status.as_str()),
            ("consentBanner", self.consent_banner.as_str()),
            ("accept", self.accept.as_str()),
            ("decline", self.decline.as_str()),
        ]
    }
}
