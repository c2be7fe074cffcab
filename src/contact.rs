//! Contact message form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::clock::Clock;
use crate::consts::{CONTACT_MESSAGES_KEY, MESSAGE_SENT};
use crate::dom::{Field, Form, Node};
use crate::forms::{Submission, clear_errors, commit};
use crate::records::ContactMessage;
use crate::store::KeyValueStore;
use crate::validate::{ContactError, validate_contact};

pub struct ContactElements<E> {
    pub form: E,
    pub subject: E,
    pub message: E,
    pub subject_error: E,
    pub message_error: E,
    pub status: Option<E>,
}

pub struct ContactForm<S, C, E> {
    store: S,
    clock: C,
    el: ContactElements<E>,
}

impl<S, C, E> ContactForm<S, C, E>
where
    S: KeyValueStore,
    C: Clock,
    E: Node + Field + Form,
{
    #[must_use]
    pub fn new(store: S, clock: C, elements: ContactElements<E>) -> Self {
        Self { store, clock, el: elements }
    }

    pub fn submit(&self) -> Submission {
        let el = &self.el;
        clear_errors(&[&el.subject_error, &el.message_error]);

        let contact = match validate_contact(&el.subject.value(), &el.message.value()) {
            Ok(contact) => contact,
            Err(errors) => {
                for error in &errors {
                    let slot = match error {
                        ContactError::MissingSubject => &el.subject_error,
                        ContactError::MissingMessage => &el.message_error,
                    };
                    slot.set_text(&error.to_string());
                }
                return Submission::Rejected { failures: errors.len() };
            }
        };

        let record = ContactMessage { subject: contact.subject, message: contact.message, ts: self.clock.now_iso() };
        commit(&self.store, CONTACT_MESSAGES_KEY, record, &el.form, el.status.as_ref(), MESSAGE_SENT)
    }
}
