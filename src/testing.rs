//! In-memory stand-ins for the DOM, storage, clock, and tag loader.
//!
//! Fakes share their state through `Rc<RefCell<..>>`, so a test keeps a
//! clone of each handle it passes into a component and inspects it afterwards.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::analytics::{LoadOutcome, LoadSignal, TagLoader, load_channel};
use crate::clock::Clock;
use crate::dom::{AnchorResolver, Display, Field, Focusable, Form, Node};
use crate::store::{KeyValueStore, StoreError};

pub const FIXED_TS: &str = "2026-10-19T08:30:00.000Z";

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    attrs: HashMap<String, String>,
    text: String,
    display: Option<Display>,
    value: String,
    checked: bool,
    children: Vec<FakeElement>,
    scrolls: usize,
    focuses: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form whose `reset` clears the given controls.
    pub fn form(controls: &[&FakeElement]) -> Self {
        let form = Self::new();
        form.0.borrow_mut().children = controls.iter().map(|c| (*c).clone()).collect();
        form
    }

    pub fn input(&self, value: &str) {
        self.0.borrow_mut().value = value.to_owned();
    }

    pub fn check(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn display(&self) -> Option<Display> {
        self.0.borrow().display
    }

    pub fn current_value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn checked(&self) -> bool {
        self.0.borrow().checked
    }

    pub fn scrolls(&self) -> usize {
        self.0.borrow().scrolls
    }

    pub fn focuses(&self) -> usize {
        self.0.borrow().focuses
    }
}

impl Node for FakeElement {
    fn toggle_class(&self, class: &str) -> bool {
        let mut state = self.0.borrow_mut();
        if state.classes.remove(class) {
            false
        } else {
            state.classes.insert(class.to_owned());
            true
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn set_display(&self, display: Display) {
        self.0.borrow_mut().display = Some(display);
    }
}

impl Field for FakeElement {
    fn value(&self) -> String {
        self.current_value()
    }

    fn is_checked(&self) -> bool {
        self.checked()
    }
}

impl Form for FakeElement {
    fn reset(&self) {
        let children = self.0.borrow().children.clone();
        for child in children {
            let mut state = child.0.borrow_mut();
            state.value.clear();
            state.checked = false;
        }
    }
}

impl Focusable for FakeElement {
    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolls += 1;
    }

    fn focus_without_scroll(&self) {
        self.0.borrow_mut().focuses += 1;
    }
}

/// Resolves `#id` selectors against a fixed set of elements.
#[derive(Debug, Default)]
pub struct FakeResolver {
    targets: HashMap<String, FakeElement>,
}

impl FakeResolver {
    pub fn with(mut self, selector: &str, target: &FakeElement) -> Self {
        self.targets.insert(selector.to_owned(), target.clone());
        self
    }
}

impl AnchorResolver for FakeResolver {
    type Target = FakeElement;

    fn resolve(&self, selector: &str) -> Option<FakeElement> {
        self.targets.get(selector).cloned()
    }
}

/// Store that reads normally from `inner` but rejects every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    pub inner: crate::store::MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("QuotaExceededError".to_owned()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now_iso(&self) -> String {
        FIXED_TS.to_owned()
    }
}

/// Records injections and installs its "global handle" synchronously,
/// like the vendor snippet does. Resolves each signal with `outcome`.
#[derive(Debug, Clone)]
pub struct FakeLoader {
    active: Rc<Cell<bool>>,
    injected: Rc<RefCell<Vec<String>>>,
    outcome: LoadOutcome,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::resolving(LoadOutcome::Loaded)
    }

    pub fn resolving(outcome: LoadOutcome) -> Self {
        Self { active: Rc::new(Cell::new(false)), injected: Rc::new(RefCell::new(Vec::new())), outcome }
    }

    pub fn injections(&self) -> Vec<String> {
        self.injected.borrow().clone()
    }
}

impl TagLoader for FakeLoader {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn inject(&self, measurement_id: &str) -> LoadSignal {
        self.active.set(true);
        self.injected.borrow_mut().push(measurement_id.to_owned());
        let (reporter, signal) = load_channel();
        reporter.report(self.outcome);
        signal
    }
}
