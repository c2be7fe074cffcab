//! Pieces shared by the newsletter and contact form handlers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dom::{Display, Form, Node};
use crate::store::{KeyValueStore, append_record};

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// At least one field failed validation; `failures` messages are shown.
    Rejected { failures: usize },
    /// The record was appended; the list now holds `total` entries.
    Saved { total: usize },
    /// Input was valid but the record could not be stored.
    StoreFailed,
}

/// Empty every error slot before validation repopulates them.
pub(crate) fn clear_errors<E: Node>(slots: &[&E]) {
    for slot in slots {
        slot.set_text("");
    }
}

/// Append `record` under `key`; on success reset `form` and show `message`.
pub(crate) fn commit<S, E, T>(store: &S, key: &str, record: T, form: &E, status: Option<&E>, message: &str) -> Submission
where
    S: KeyValueStore,
    E: Node + Form,
    T: Serialize + DeserializeOwned,
{
    match append_record(store, key, record) {
        Ok(total) => {
            log::info!("appended record to {key} ({total} total)");
            form.reset();
            if let Some(status) = status {
                status.set_text(message);
                status.set_display(Display::Block);
            }
            Submission::Saved { total }
        }
        Err(err) => {
            log::warn!("failed to store record under {key}: {err}");
            Submission::StoreFailed
        }
    }
}
