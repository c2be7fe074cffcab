use std::rc::Rc;

use super::*;
use crate::dom::Display;
use crate::store::{MemoryStore, load_records};
use crate::testing::{FIXED_TS, FakeElement, FixedClock, ReadOnlyStore};

struct Page {
    name: FakeElement,
    email: FakeElement,
    consent: FakeElement,
    name_error: FakeElement,
    email_error: FakeElement,
    consent_error: FakeElement,
    status: FakeElement,
}

impl Page {
    fn new() -> Self {
        Self {
            name: FakeElement::new(),
            email: FakeElement::new(),
            consent: FakeElement::new(),
            name_error: FakeElement::new(),
            email_error: FakeElement::new(),
            consent_error: FakeElement::new(),
            status: FakeElement::new(),
        }
    }

    fn elements(&self) -> NewsletterElements<FakeElement> {
        NewsletterElements {
            form: FakeElement::form(&[&self.name, &self.email, &self.consent]),
            name: self.name.clone(),
            email: self.email.clone(),
            consent: self.consent.clone(),
            name_error: self.name_error.clone(),
            email_error: self.email_error.clone(),
            consent_error: self.consent_error.clone(),
            status: Some(self.status.clone()),
        }
    }

    fn fill(&self, name: &str, email: &str, consent: bool) {
        self.name.input(name);
        self.email.input(email);
        self.consent.check(consent);
    }
}

fn subscribers(store: &MemoryStore) -> Vec<Subscriber> {
    load_records(store, "subscribers").expect("subscriber list")
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn whitespace_name_is_rejected_without_a_record() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());

    for name in ["", "   ", "\t\n"] {
        page.fill(name, "ada@example.com", true);
        assert_eq!(form.submit(), Submission::Rejected { failures: 1 });
        assert_eq!(page.name_error.text(), "Please enter your full name.");
    }
    assert!(store.is_empty());
    assert_eq!(page.status.display(), None);
}

#[test]
fn all_failures_are_reported_together() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());
    page.fill("", "a@b", false);

    assert_eq!(form.submit(), Submission::Rejected { failures: 3 });
    assert_eq!(page.name_error.text(), "Please enter your full name.");
    assert_eq!(page.email_error.text(), "Please enter a valid email address.");
    assert_eq!(page.consent_error.text(), "You must agree to receive emails to subscribe.");
    assert!(store.is_empty());
}

#[test]
fn rejected_input_is_kept_for_correction() {
    let page = Page::new();
    let form = NewsletterForm::new(MemoryStore::new(), FixedClock, page.elements());
    page.fill("Ada", "not-an-email", true);

    form.submit();
    assert_eq!(page.name.current_value(), "Ada");
    assert_eq!(page.email.current_value(), "not-an-email");
}

#[test]
fn resubmission_clears_fixed_errors() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());

    page.fill("", "ada@example.com", false);
    form.submit();
    assert!(!page.name_error.text().is_empty());

    page.fill("Ada", "ada@example.com", false);
    assert_eq!(form.submit(), Submission::Rejected { failures: 1 });
    assert_eq!(page.name_error.text(), "");
    assert_eq!(page.email_error.text(), "");
    assert_eq!(page.consent_error.text(), "You must agree to receive emails to subscribe.");
}

// =============================================================
// Success
// =============================================================

#[test]
fn valid_submission_appends_exactly_one_subscriber() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());
    page.fill("  Ada Lovelace ", " ada@example.com ", true);

    assert_eq!(form.submit(), Submission::Saved { total: 1 });

    let list = subscribers(&store);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Ada Lovelace");
    assert_eq!(list[0].email, "ada@example.com");
    assert_eq!(list[0].ts, FIXED_TS);
    assert!(chrono::DateTime::parse_from_rfc3339(&list[0].ts).is_ok());
}

#[test]
fn success_resets_form_and_shows_status() {
    let page = Page::new();
    let form = NewsletterForm::new(MemoryStore::new(), FixedClock, page.elements());
    page.fill("Ada", "ada@example.com", true);

    form.submit();
    assert_eq!(page.name.current_value(), "");
    assert_eq!(page.email.current_value(), "");
    assert!(!page.consent.checked());
    assert_eq!(page.status.text(), "Thank you for subscribing! A confirmation email may be sent if you opted in.");
    assert_eq!(page.status.display(), Some(Display::Block));
}

#[test]
fn duplicate_signups_are_all_recorded() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());

    page.fill("Ada", "ada@example.com", true);
    form.submit();
    page.fill("Ada", "ada@example.com", true);
    assert_eq!(form.submit(), Submission::Saved { total: 2 });
    assert_eq!(subscribers(&store).len(), 2);
}

#[test]
fn missing_status_slot_is_tolerated() {
    let page = Page::new();
    let mut elements = page.elements();
    elements.status = None;
    let form = NewsletterForm::new(MemoryStore::new(), FixedClock, elements);
    page.fill("Ada", "ada@example.com", true);

    assert_eq!(form.submit(), Submission::Saved { total: 1 });
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn storage_failure_keeps_input_and_shows_no_success() {
    let page = Page::new();
    let form = NewsletterForm::new(ReadOnlyStore::default(), FixedClock, page.elements());
    page.fill("Ada", "ada@example.com", true);

    assert_eq!(form.submit(), Submission::StoreFailed);
    assert_eq!(page.name.current_value(), "Ada");
    assert_eq!(page.status.text(), "");
    assert_eq!(page.status.display(), None);
}

#[test]
fn corrupt_list_is_not_overwritten() {
    let page = Page::new();
    let store = Rc::new(MemoryStore::new());
    store.set("subscribers", "oops").expect("set");
    let form = NewsletterForm::new(Rc::clone(&store), FixedClock, page.elements());
    page.fill("Ada", "ada@example.com", true);

    assert_eq!(form.submit(), Submission::StoreFailed);
    assert_eq!(store.get("subscribers").expect("get").as_deref(), Some("oops"));
}
