//! Third-party analytics tag loading.
//!
//! Loading is modelled as an explicit asynchronous operation: a
//! [`TagLoader`] injects the vendor script and hands back a [`LoadSignal`]
//! that resolves once the script has loaded or failed. Nothing retries or
//! times out; the outcome is only logged.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use futures::channel::oneshot;

use crate::consts::GTAG_SCRIPT_BASE;

/// How a tag script load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The script loaded and the measurement id was configured.
    Loaded,
    /// The browser reported a load error.
    Failed,
    /// The loader went away without reporting either.
    Abandoned,
}

/// Sending half of a load signal, held by the loader's callbacks.
#[derive(Debug)]
pub struct LoadReporter(oneshot::Sender<LoadOutcome>);

impl LoadReporter {
    pub fn report(self, outcome: LoadOutcome) {
        if self.0.send(outcome).is_err() {
            log::debug!("analytics load outcome {outcome:?} had no listener");
        }
    }
}

/// Completion signal for one tag injection.
#[derive(Debug)]
pub struct LoadSignal(oneshot::Receiver<LoadOutcome>);

impl LoadSignal {
    /// Wait for the load to finish.
    pub async fn outcome(self) -> LoadOutcome {
        self.0.await.unwrap_or(LoadOutcome::Abandoned)
    }
}

#[must_use]
pub fn load_channel() -> (LoadReporter, LoadSignal) {
    let (tx, rx) = oneshot::channel();
    (LoadReporter(tx), LoadSignal(rx))
}

/// Injects the vendor tag into the page.
pub trait TagLoader {
    /// Whether the global analytics handle already exists.
    fn is_active(&self) -> bool;

    /// Install the global handle and start fetching the script.
    fn inject(&self, measurement_id: &str) -> LoadSignal;
}

/// Script URL for `measurement_id`.
#[must_use]
pub fn tag_url(measurement_id: &str) -> String {
    format!("{GTAG_SCRIPT_BASE}{measurement_id}")
}

/// A loader bound to one measurement id.
#[derive(Debug, Clone)]
pub struct Analytics<L> {
    loader: L,
    measurement_id: String,
}

impl<L: TagLoader> Analytics<L> {
    #[must_use]
    pub fn new(loader: L, measurement_id: impl Into<String>) -> Self {
        Self { loader, measurement_id: measurement_id.into() }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.loader.is_active()
    }

    /// Load the tag unless it is already active.
    ///
    /// Returns the completion signal of a fresh injection, `None` when the
    /// tag was already present.
    pub fn ensure_loaded(&self) -> Option<LoadSignal> {
        if self.loader.is_active() {
            log::debug!("analytics already active");
            return None;
        }
        log::info!("loading analytics tag {}", self.measurement_id);
        Some(self.loader.inject(&self.measurement_id))
    }
}

/// Await `signal` and log how the load ended.
pub async fn watch(signal: LoadSignal) -> LoadOutcome {
    let outcome = signal.outcome().await;
    match outcome {
        LoadOutcome::Loaded => log::info!("analytics tag loaded"),
        LoadOutcome::Failed | LoadOutcome::Abandoned => log::warn!("analytics tag did not load: {outcome:?}"),
    }
    outcome
}
