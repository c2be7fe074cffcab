//! Google tag (`gtag.js`) loader.
//!
//! This module is the only place that touches the vendor's globals. It
//! mirrors the vendor snippet: a `window.dataLayer` queue, a `window.gtag`
//! function that pushes its `arguments` onto it, and an async `<script>`
//! whose load completes the configuration.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlScriptElement, Window};

use crate::analytics::{LoadOutcome, LoadReporter, LoadSignal, TagLoader, load_channel, tag_url};

const DATA_LAYER: &str = "dataLayer";
const GTAG: &str = "gtag";

/// gtag.js only accepts real `arguments` objects on the queue, so the queuing
/// function is defined in JS rather than as a Rust closure.
const GTAG_BODY: &str = "window.dataLayer.push(arguments);";

#[derive(Clone)]
pub struct GtagLoader {
    window: Window,
}

type SharedReporter = Rc<RefCell<Option<LoadReporter>>>;

impl GtagLoader {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn global(&self, name: &str) -> JsValue {
        match Reflect::get(&self.window, &JsValue::from_str(name)) {
            Ok(value) => value,
            Err(_) => JsValue::UNDEFINED,
        }
    }

    /// Create the queue and `gtag`, then record the `js` start event.
    fn install(&self) -> Result<Function, JsValue> {
        if !self.global(DATA_LAYER).is_truthy() {
            Reflect::set(&self.window, &JsValue::from_str(DATA_LAYER), &Array::new())?;
        }
        let gtag = Function::new_no_args(GTAG_BODY);
        Reflect::set(&self.window, &JsValue::from_str(GTAG), &gtag)?;
        gtag.call2(&JsValue::NULL, &JsValue::from_str("js"), &js_sys::Date::new_0())?;
        Ok(gtag)
    }

    fn try_inject(&self, measurement_id: &str, reporter: LoadReporter) -> Result<(), JsValue> {
        let gtag = self.install()?;
        let document = self.window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let head = document.head().ok_or_else(|| JsValue::from_str("no <head>"))?;
        let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_async(true);
        script.set_src(&tag_url(measurement_id));

        // Whichever callback fires first reports; the other finds nothing to take.
        let reporter: SharedReporter = Rc::new(RefCell::new(Some(reporter)));

        let on_load = {
            let reporter = Rc::clone(&reporter);
            let window = self.window.clone();
            let measurement_id = measurement_id.to_owned();
            Closure::once_into_js(move || {
                let outcome = match configure(&gtag, &window, &measurement_id) {
                    Ok(()) => LoadOutcome::Loaded,
                    Err(err) => {
                        log::warn!("gtag config call failed: {err:?}");
                        LoadOutcome::Failed
                    }
                };
                finish(&reporter, outcome);
            })
        };
        let on_error = Closure::once_into_js(move || finish(&reporter, LoadOutcome::Failed));

        script.set_onload(Some(on_load.unchecked_ref()));
        script.set_onerror(Some(on_error.unchecked_ref()));
        head.append_child(&script)?;
        Ok(())
    }
}

/// `gtag('config', id, { page_path: location.pathname })`.
fn configure(gtag: &Function, window: &Window, measurement_id: &str) -> Result<(), JsValue> {
    let params = Object::new();
    let path = window.location().pathname()?;
    Reflect::set(&params, &JsValue::from_str("page_path"), &JsValue::from_str(&path))?;
    gtag.call3(&JsValue::NULL, &JsValue::from_str("config"), &JsValue::from_str(measurement_id), &params)?;
    Ok(())
}

fn finish(reporter: &SharedReporter, outcome: LoadOutcome) {
    if let Some(reporter) = reporter.borrow_mut().take() {
        reporter.report(outcome);
    }
}

impl TagLoader for GtagLoader {
    fn is_active(&self) -> bool {
        self.global(GTAG).is_truthy()
    }

    fn inject(&self, measurement_id: &str) -> LoadSignal {
        let (reporter, signal) = load_channel();
        if let Err(err) = self.try_inject(measurement_id, reporter) {
            log::warn!("failed to inject analytics tag: {err:?}");
        }
        signal
    }
}
