//! Analytics consent banner.
//!
//! STATE MACHINE
//! =============
//! `unset` shows the banner. `granted` hides it and loads the tag.
//! `denied` hides it and never loads the tag. Accept and decline are the only
//! transitions; both persist their result and hide the banner.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use crate::analytics::{Analytics, LoadSignal, TagLoader};
use crate::consts::CONSENT_KEY;
use crate::dom::{Display, Node};
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsentState {
    Granted,
    Denied,
    #[default]
    Unset,
}

impl ConsentState {
    /// Parse a stored value. Unknown values count as unset.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("granted") => Self::Granted,
            Some("denied") => Self::Denied,
            _ => Self::Unset,
        }
    }

    /// The stored form, `None` for unset.
    #[must_use]
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Granted => Some("granted"),
            Self::Denied => Some("denied"),
            Self::Unset => None,
        }
    }
}

/// Read the persisted consent, treating an unreadable store as unset.
pub fn stored_consent(store: &impl KeyValueStore) -> ConsentState {
    match store.get(CONSENT_KEY) {
        Ok(raw) => ConsentState::from_stored(raw.as_deref()),
        Err(err) => {
            log::warn!("consent unreadable, treating as unset: {err}");
            ConsentState::Unset
        }
    }
}

/// Load the tag when consent was granted earlier. Idempotent.
pub fn load_if_granted<S: KeyValueStore, L: TagLoader>(store: &S, analytics: &Analytics<L>) -> Option<LoadSignal> {
    match stored_consent(store) {
        ConsentState::Granted => analytics.ensure_loaded(),
        ConsentState::Denied | ConsentState::Unset => None,
    }
}

pub struct ConsentBanner<S, E, L> {
    store: S,
    banner: E,
    analytics: Analytics<L>,
}

impl<S, E, L> ConsentBanner<S, E, L>
where
    S: KeyValueStore,
    E: Node,
    L: TagLoader,
{
    #[must_use]
    pub fn new(store: S, banner: E, analytics: Analytics<L>) -> Self {
        Self { store, banner, analytics }
    }

    #[must_use]
    pub fn state(&self) -> ConsentState {
        stored_consent(&self.store)
    }

    /// Bring the banner in line with the persisted state at page load.
    pub fn init(&self) -> Option<LoadSignal> {
        match self.state() {
            ConsentState::Unset => {
                self.banner.set_display(Display::Flex);
                None
            }
            ConsentState::Granted => {
                self.banner.set_display(Display::None);
                self.analytics.ensure_loaded()
            }
            ConsentState::Denied => {
                self.banner.set_display(Display::None);
                None
            }
        }
    }

    pub fn accept(&self) -> Option<LoadSignal> {
        self.record(ConsentState::Granted);
        self.analytics.ensure_loaded()
    }

    pub fn decline(&self) {
        self.record(ConsentState::Denied);
    }

    fn record(&self, state: ConsentState) {
        if let Some(value) = state.as_stored() {
            if let Err(err) = self.store.set(CONSENT_KEY, value) {
                log::warn!("failed to persist consent {value}: {err}");
            }
        }
        self.banner.set_display(Display::None);
    }
}
