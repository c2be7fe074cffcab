//! Smooth scrolling for same-page anchors.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::dom::{AnchorResolver, Focusable};

/// What the click handler should do with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorClick {
    /// The target was scrolled to and focused; cancel the default jump.
    Handled,
    /// Nothing to scroll to; let the browser follow the link.
    Default,
}

/// The `href` as a fragment selector (`#section`), `None` for bare `#` or
/// anything that is not a fragment.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub struct SmoothScroll<R> {
    resolver: R,
}

impl<R: AnchorResolver> SmoothScroll<R> {
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// React to a click on an anchor whose `href` attribute is `href`.
    ///
    /// The attribute is read at click time, so links edited after startup
    /// follow their current target.
    pub fn on_anchor_click(&self, href: Option<&str>) -> AnchorClick {
        let Some(selector) = href.and_then(fragment_selector) else {
            return AnchorClick::Default;
        };
        let Some(target) = self.resolver.resolve(selector) else {
            log::debug!("no element for anchor {selector}");
            return AnchorClick::Default;
        };
        target.scroll_into_view();
        target.focus_without_scroll();
        AnchorClick::Handled
    }
}
