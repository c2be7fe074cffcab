//! Newsletter signup form.
//!
//! Validates name, email, and consent together, then appends a
//! [`Subscriber`] to the local subscriber list.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::clock::Clock;
use crate::consts::{SUBSCRIBED_MESSAGE, SUBSCRIBERS_KEY};
use crate::dom::{Field, Form, Node};
use crate::forms::{Submission, clear_errors, commit};
use crate::records::Subscriber;
use crate::store::KeyValueStore;
use crate::validate::{SignupError, validate_signup};

/// The elements the newsletter form handler reads and writes.
pub struct NewsletterElements<E> {
    pub form: E,
    pub name: E,
    pub email: E,
    pub consent: E,
    pub name_error: E,
    pub email_error: E,
    pub consent_error: E,
    pub status: Option<E>,
}

pub struct NewsletterForm<S, C, E> {
    store: S,
    clock: C,
    el: NewsletterElements<E>,
}

impl<S, C, E> NewsletterForm<S, C, E>
where
    S: KeyValueStore,
    C: Clock,
    E: Node + Field + Form,
{
    #[must_use]
    pub fn new(store: S, clock: C, elements: NewsletterElements<E>) -> Self {
        Self { store, clock, el: elements }
    }

    /// Handle one submit. The caller has already cancelled the browser's
    /// own submission.
    pub fn submit(&self) -> Submission {
        let el = &self.el;
        clear_errors(&[&el.name_error, &el.email_error, &el.consent_error]);

        let signup = match validate_signup(&el.name.value(), &el.email.value(), el.consent.is_checked()) {
            Ok(signup) => signup,
            Err(errors) => {
                for error in &errors {
                    self.slot(*error).set_text(&error.to_string());
                }
                return Submission::Rejected { failures: errors.len() };
            }
        };

        let record = Subscriber { name: signup.name, email: signup.email, ts: self.clock.now_iso() };
        commit(&self.store, SUBSCRIBERS_KEY, record, &el.form, el.status.as_ref(), SUBSCRIBED_MESSAGE)
    }

    fn slot(&self, error: SignupError) -> &E {
        match error {
            SignupError::MissingName => &self.el.name_error,
            SignupError::InvalidEmail => &self.el.email_error,
            SignupError::ConsentRequired => &self.el.consent_error,
        }
    }
}
