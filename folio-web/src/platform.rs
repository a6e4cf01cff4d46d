//! Bindings to the two browser facilities the page consumes: the
//! viewport-intersection observer and window scroll events.
//!
//! Both are wrapped as subscription values with an idempotent `cancel` that
//! also runs on drop, so a component teardown can race a pending
//! notification without double-disconnecting or leaking the callback.

use std::cell::RefCell;
use std::rc::Rc;

use folio_view::visibility::{IntersectionSample, IntersectionThreshold};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Looks up a section's region element by its anchor id.
pub fn region_by_anchor(anchor: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(anchor)
}

/// Current vertical scroll offset of the page, if the facility is available.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Registered interest in one region's intersection with the viewport.
pub struct IntersectionSubscription {
    observer: Rc<RefCell<Option<IntersectionObserver>>>,
    _callback: ObserverCallback,
}

impl IntersectionSubscription {
    /// Starts observing `region` with the given visibility threshold.
    ///
    /// `on_sample` runs once per delivered entry; returning `true` stops
    /// observation immediately, so nothing is delivered after the sample
    /// that satisfied the caller.
    pub fn observe(
        region: &Element,
        threshold: IntersectionThreshold,
        mut on_sample: impl FnMut(IntersectionSample) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));

        let callback: ObserverCallback = Closure::new({
            let slot = Rc::clone(&slot);
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample::new(
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    );
                    if on_sample(sample) {
                        // Disconnect only. The closure itself must stay alive
                        // while it is executing; it is freed when the
                        // subscription value drops.
                        if let Some(observer) = slot.borrow_mut().take() {
                            observer.disconnect();
                        }
                        break;
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.fraction()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(region);
        *slot.borrow_mut() = Some(observer);

        Ok(IntersectionSubscription {
            observer: slot,
            _callback: callback,
        })
    }

    /// Stops observing. Safe to call any number of times.
    pub fn cancel(&self) {
        if let Some(observer) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

type ScrollCallback = Closure<dyn FnMut()>;

/// Registered interest in window scroll notifications.
pub struct ScrollSubscription {
    callback: Option<ScrollCallback>,
}

impl ScrollSubscription {
    /// Registers a window `scroll` listener. Each notification reads the
    /// current offset and hands it to `on_scroll`; notifications carry no
    /// payload of their own.
    pub fn listen(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback: ScrollCallback = Closure::new(move || {
            if let Some(offset) = scroll_offset() {
                on_scroll(offset);
            }
        });
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(ScrollSubscription {
            callback: Some(callback),
        })
    }

    /// Removes the listener. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(callback) = self.callback.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
