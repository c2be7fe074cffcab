//! Navigation menu toggle.
//!
//! The panel's `open` class is the source of truth; the toggle's
//! `aria-expanded` attribute mirrors it after every change.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ARIA_EXPANDED, ESCAPE_KEY, NAV_OPEN_CLASS};
use crate::dom::Node;

pub struct NavToggle<E> {
    toggle: E,
    panel: E,
}

impl<E: Node> NavToggle<E> {
    #[must_use]
    pub fn new(toggle: E, panel: E) -> Self {
        Self { toggle, panel }
    }

    /// Flip the menu and return whether it is now open.
    pub fn on_toggle_click(&self) -> bool {
        let open = self.panel.toggle_class(NAV_OPEN_CLASS);
        self.toggle.set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" });
        open
    }

    /// Close the menu when `key` is Escape. Other keys are ignored.
    pub fn on_key_down(&self, key: &str) {
        if key == ESCAPE_KEY {
            self.close();
        }
    }

    pub fn close(&self) {
        self.panel.remove_class(NAV_OPEN_CLASS);
        self.toggle.set_attribute(ARIA_EXPANDED, "false");
    }
}
