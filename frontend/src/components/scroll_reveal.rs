use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{error, info};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_SELECTOR: &str = ".animate-on-scroll";
const REVEALED_CLASS: &str = "animate";
const START_DELAY_MS: u32 = 100;
/// Longest reveal animation; `will-change` is released after it.
const WILL_CHANGE_RESET_MS: u32 = 1500;

/// Owns one IntersectionObserver. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new() -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(REVEALED_CLASS);
                // Each element only animates in once
                observer.unobserve(&target);

                if let Ok(element) = target.dyn_into::<HtmlElement>() {
                    Timeout::new(WILL_CHANGE_RESET_MS, move || {
                        let _ = element.style().set_property("will-change", "auto");
                    })
                    .forget();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -5% 0px");

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self { observer, _callback: callback })
    }

    /// Starts watching every element matching `selector`. Returns how many were found.
    pub fn observe_all(&self, selector: &str) -> u32 {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return 0;
        };
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.observer.observe(&element);
                observed += 1;
            }
        }
        observed
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveals `.animate-on-scroll` elements of the page it is mounted in.
#[function_component(ScrollReveal)]
pub fn scroll_reveal() -> Html {
    use_effect_with_deps(move |_| {
        let reveal: Rc<RefCell<Option<RevealObserver>>> = Rc::new(RefCell::new(None));
        let reveal_clone = reveal.clone();

        // Give the page a moment to render before querying it
        let start = Timeout::new(START_DELAY_MS, move || match RevealObserver::new() {
            Ok(observer) => {
                let count = observer.observe_all(REVEAL_SELECTOR);
                info!("Watching {} elements for scroll reveal", count);
                *reveal_clone.borrow_mut() = Some(observer);
            }
            Err(e) => error!("Failed to create reveal observer: {:?}", e),
        });

        move || {
            drop(start);
            reveal.borrow_mut().take();
        }
    }, ());

    html! {}
}
