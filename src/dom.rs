//! The slice of the DOM the page behaviours touch.
//!
//! Each component is generic over these traits and receives the exact
//! elements it needs at construction, so the same logic runs against
//! `web_sys::Element` in the browser and against in-memory fakes in tests.
//!
//! DOM mutations are infallible from the caller's point of view; the browser
//! implementations log a rejected mutation and carry on.

/// CSS `display` values the components switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }
}

/// Class, attribute, text, and visibility mutation on an element.
pub trait Node {
    /// Toggle `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
    fn remove_class(&self, class: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    /// Replace the element's text content.
    fn set_text(&self, text: &str);
    fn set_display(&self, display: Display);
}

/// A form control with a user-entered value.
pub trait Field {
    /// Current value, empty for elements that carry none.
    fn value(&self) -> String;
    /// Checkbox state, `false` for non-checkable controls.
    fn is_checked(&self) -> bool;
}

/// A form that can be restored to its initial values.
pub trait Form {
    fn reset(&self);
}

/// An element that can be scrolled to and focused.
pub trait Focusable {
    /// Smoothly scroll so the element's top edge aligns with the viewport top.
    fn scroll_into_view(&self);
    /// Move keyboard focus here without triggering another scroll.
    fn focus_without_scroll(&self);
}

/// Resolves an anchor's fragment selector to the element it targets.
pub trait AnchorResolver {
    type Target: Focusable;

    /// `None` when nothing matches or the selector is not valid.
    fn resolve(&self, selector: &str) -> Option<Self::Target>;
}

#[cfg(feature = "hydrate")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, FocusOptions, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
        ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{AnchorResolver, Display, Field, Focusable, Form, Node};

    fn report(op: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::warn!("dom {op} failed: {err:?}");
        }
    }

    impl Node for Element {
        fn toggle_class(&self, class: &str) -> bool {
            match self.class_list().toggle(class) {
                Ok(present) => present,
                Err(err) => {
                    log::warn!("dom toggle_class failed: {err:?}");
                    self.class_list().contains(class)
                }
            }
        }

        fn remove_class(&self, class: &str) {
            report("remove_class", self.class_list().remove_1(class));
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.get_attribute(name)
        }

        fn set_attribute(&self, name: &str, value: &str) {
            report("set_attribute", Element::set_attribute(self, name, value));
        }

        fn remove_attribute(&self, name: &str) {
            report("remove_attribute", Element::remove_attribute(self, name));
        }

        fn set_text(&self, text: &str) {
            self.set_text_content(Some(text));
        }

        fn set_display(&self, display: Display) {
            if let Some(el) = self.dyn_ref::<HtmlElement>() {
                report("set_display", el.style().set_property("display", display.as_css()));
            }
        }
    }

    impl Field for Element {
        fn value(&self) -> String {
            if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
                area.value()
            } else {
                String::new()
            }
        }

        fn is_checked(&self) -> bool {
            self.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)
        }
    }

    impl Form for Element {
        fn reset(&self) {
            if let Some(form) = self.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
        }
    }

    impl Focusable for Element {
        fn scroll_into_view(&self) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            self.scroll_into_view_with_scroll_into_view_options(&opts);
        }

        fn focus_without_scroll(&self) {
            if let Some(el) = self.dyn_ref::<HtmlElement>() {
                let opts = FocusOptions::new();
                opts.set_prevent_scroll(true);
                report("focus", el.focus_with_options(&opts));
            }
        }
    }

    impl AnchorResolver for Document {
        type Target = Element;

        fn resolve(&self, selector: &str) -> Option<Element> {
            match self.query_selector(selector) {
                Ok(found) => found,
                Err(err) => {
                    log::debug!("anchor selector {selector:?} rejected: {err:?}");
                    None
                }
            }
        }
    }
}
