//! Count-up figure that starts animating once it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use globalex_content::counter::{
    sample_count, CounterLatch, DEFAULT_DURATION_MS, FRAME_MS, VISIBILITY_THRESHOLD,
};

// Keeps the JS callback alive for as long as the observer is attached.
struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

#[component]
pub fn AnimatedCounter(
    end: u32,
    #[props(default = DEFAULT_DURATION_MS)] duration_ms: u32,
    #[props(default = "")] suffix: &'static str,
) -> Element {
    let mut count = use_signal(|| 0u32);
    let visible = use_signal(|| false);
    let mut latch = use_signal(CounterLatch::default);

    let handle = use_hook(|| Rc::new(RefCell::new(None::<ObserverHandle>)));

    use_drop({
        let handle = handle.clone();
        move || {
            if let Some(handle) = handle.borrow_mut().take() {
                handle.observer.disconnect();
            }
        }
    });

    use_effect(move || {
        let is_visible = visible();
        if latch.write().arm(is_visible) {
            spawn(async move {
                let started = js_sys::Date::now();
                loop {
                    TimeoutFuture::new(FRAME_MS).await;
                    let elapsed = js_sys::Date::now() - started;
                    count.set(sample_count(end, duration_ms, elapsed));
                    if elapsed >= f64::from(duration_ms) {
                        break;
                    }
                }
            });
        }
    });

    let observe = {
        let handle = handle.clone();
        move |event: Event<MountedData>| {
            let Some(element) = event.data().downcast::<web_sys::Element>().cloned() else {
                return;
            };
            let mut visible = visible;
            let callback =
                Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            visible.set(true);
                        }
                    }
                });
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
            let Ok(observer) =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            else {
                return;
            };
            observer.observe(&element);
            *handle.borrow_mut() = Some(ObserverHandle {
                observer,
                _callback: callback,
            });
        }
    };

    rsx! {
        span { onmounted: observe, "{count}{suffix}" }
    }
}
