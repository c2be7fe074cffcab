//! Attaches every page behaviour to the live document.
//!
//! Each behaviour looks up its own elements and is skipped when they are
//! absent, so one page can carry any subset of the components. Listeners are
//! registered once and live for the lifetime of the page.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

use crate::analytics::{self, Analytics, LoadSignal};
use crate::clock::BrowserClock;
use crate::config::{ElementIds, SiteConfig};
use crate::consent::{ConsentBanner, load_if_granted};
use crate::consts::SAME_PAGE_ANCHORS;
use crate::contact::{ContactElements, ContactForm};
use crate::gtag::GtagLoader;
use crate::nav::NavToggle;
use crate::newsletter::{NewsletterElements, NewsletterForm};
use crate::scroll::{AnchorClick, SmoothScroll};
use crate::store::{KeyValueStore, LocalStore, MemoryStore};
use crate::theme::ThemeManager;

type SharedStore = Rc<dyn KeyValueStore>;

struct Page<'a> {
    document: Document,
    ids: &'a ElementIds,
}

impl Page<'_> {
    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Wire all behaviours into the current document.
///
/// # Errors
///
/// Returns `Err` when there is no window or document, or when the browser
/// rejects a listener registration.
pub fn mount(config: &SiteConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let store: SharedStore = if let Some(local) = LocalStore::open() {
        Rc::new(local)
    } else {
        log::warn!("localStorage unavailable; state will not survive a reload");
        Rc::new(MemoryStore::new())
    };
    let analytics = Analytics::new(GtagLoader::new(window), config.measurement_id.clone());
    let page = Page { document, ids: &config.ids };

    mount_nav(&page)?;
    mount_theme(&page, Rc::clone(&store));
    mount_scroll(&page.document)?;
    mount_newsletter(&page, Rc::clone(&store))?;
    mount_contact(&page, Rc::clone(&store))?;
    mount_consent(&page, Rc::clone(&store), analytics.clone())?;
    spawn_watch(load_if_granted(&store, &analytics));
    log::debug!("page behaviours mounted");
    Ok(())
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn spawn_watch(signal: Option<LoadSignal>) {
    if let Some(signal) = signal {
        wasm_bindgen_futures::spawn_local(async move {
            analytics::watch(signal).await;
        });
    }
}

fn mount_nav(page: &Page) -> Result<(), JsValue> {
    let (Some(toggle), Some(panel)) = (page.by_id(&page.ids.menu_toggle), page.by_id(&page.ids.nav)) else {
        log::debug!("no navigation toggle on this page");
        return Ok(());
    };
    let nav = Rc::new(NavToggle::new(toggle.clone(), panel));

    let on_click = Rc::clone(&nav);
    listen(&toggle, "click", move |_| {
        on_click.on_toggle_click();
    })?;
    listen(&page.document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            nav.on_key_down(&key.key());
        }
    })
}

fn mount_theme(page: &Page, store: SharedStore) {
    let Some(root) = page.document.document_element() else {
        log::warn!("document has no root element; theme not applied");
        return;
    };
    let toggle = page.by_id(&page.ids.theme_toggle);
    let themes = ThemeManager::new(store, root, toggle.clone());
    let theme = themes.init();
    log::debug!("applied {} theme", theme.as_str());

    if let Some(toggle) = toggle {
        if let Err(err) = listen(&toggle, "click", move |_| {
            themes.toggle();
        }) {
            log::warn!("theme toggle listener rejected: {err:?}");
        }
    }
}

fn mount_scroll(document: &Document) -> Result<(), JsValue> {
    let scroll = Rc::new(SmoothScroll::new(document.clone()));
    let anchors = document.query_selector_all(SAME_PAGE_ANCHORS)?;
    for index in 0..anchors.length() {
        let Some(node) = anchors.item(index) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };
        let scroll = Rc::clone(&scroll);
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            if scroll.on_anchor_click(link.get_attribute("href").as_deref()) == AnchorClick::Handled {
                event.prevent_default();
            }
        })?;
    }
    log::debug!("smooth scrolling attached to {} anchors", anchors.length());
    Ok(())
}

fn newsletter_elements(page: &Page, form: &Element) -> Option<NewsletterElements<Element>> {
    let ids = page.ids;
    Some(NewsletterElements {
        form: form.clone(),
        name: page.by_id(&ids.name)?,
        email: page.by_id(&ids.email)?,
        consent: page.by_id(&ids.consent)?,
        name_error: page.by_id(&ids.name_error)?,
        email_error: page.by_id(&ids.email_error)?,
        consent_error: page.by_id(&ids.consent_error)?,
        status: page.by_id(&ids.newsletter_status),
    })
}

fn mount_newsletter(page: &Page, store: SharedStore) -> Result<(), JsValue> {
    let Some(form) = page.by_id(&page.ids.newsletter_form) else {
        log::debug!("no newsletter form on this page");
        return Ok(());
    };
    let Some(elements) = newsletter_elements(page, &form) else {
        log::warn!("newsletter form is missing fields; not attached");
        return Ok(());
    };
    let handler = NewsletterForm::new(store, BrowserClock, elements);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let outcome = handler.submit();
        log::debug!("newsletter submit: {outcome:?}");
    })
}

fn contact_elements(page: &Page, form: &Element) -> Option<ContactElements<Element>> {
    let ids = page.ids;
    Some(ContactElements {
        form: form.clone(),
        subject: page.by_id(&ids.subject)?,
        message: page.by_id(&ids.message)?,
        subject_error: page.by_id(&ids.subject_error)?,
        message_error: page.by_id(&ids.message_error)?,
        status: page.by_id(&ids.contact_status),
    })
}

fn mount_contact(page: &Page, store: SharedStore) -> Result<(), JsValue> {
    let Some(form) = page.by_id(&page.ids.contact_form) else {
        log::debug!("no contact form on this page");
        return Ok(());
    };
    let Some(elements) = contact_elements(page, &form) else {
        log::warn!("contact form is missing fields; not attached");
        return Ok(());
    };
    let handler = ContactForm::new(store, BrowserClock, elements);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let outcome = handler.submit();
        log::debug!("contact submit: {outcome:?}");
    })
}

fn mount_consent(page: &Page, store: SharedStore, analytics: Analytics<GtagLoader>) -> Result<(), JsValue> {
    let ids = page.ids;
    let (Some(banner), Some(accept), Some(decline)) =
        (page.by_id(&ids.consent_banner), page.by_id(&ids.accept), page.by_id(&ids.decline))
    else {
        log::debug!("no consent banner on this page");
        return Ok(());
    };
    let consent = Rc::new(ConsentBanner::new(store, banner, analytics));
    spawn_watch(consent.init());

    let on_accept = Rc::clone(&consent);
    listen(&accept, "click", move |_| spawn_watch(on_accept.accept()))?;
    listen(&decline, "click", move |_| consent.decline())
}
