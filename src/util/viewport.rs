//! Viewport intersection watching.
//!
//! ARCHITECTURE
//! ============
//! `ViewportWatcher` owns one browser `IntersectionObserver` and the closure
//! it calls back into. Each callback delivers a batch of `Observation`s in
//! the browser's delivery order together with the observer itself, so the
//! handler can unobserve targets it is done with. Dropping the watcher
//! disconnects it.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::error::SiteError;

/// Intersection parameters for one watcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the target that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: &'static str,
}

/// Reveal animations: 15% visible, and at least 50px above the bottom edge.
pub const REVEAL_WATCH: WatchOptions = WatchOptions { threshold: 0.15, root_margin: "0px 0px -50px 0px" };

/// Scroll-spy: any overlap with the central 20% band of the viewport.
pub const SPY_WATCH: WatchOptions = WatchOptions { threshold: 0.0, root_margin: "-40% 0px -40% 0px" };

/// One entry of an intersection batch.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct Observation {
    pub target: web_sys::Element,
    pub intersecting: bool,
}

#[cfg(feature = "hydrate")]
type BatchCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Owned intersection observer.
#[cfg(feature = "hydrate")]
pub struct ViewportWatcher {
    observer: web_sys::IntersectionObserver,
    _callback: BatchCallback,
}

#[cfg(feature = "hydrate")]
impl ViewportWatcher {
    /// Create a watcher that hands every batch to `on_batch`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Watcher`] if the browser rejects the options.
    pub fn new<F>(options: WatchOptions, mut on_batch: F) -> Result<Self, SiteError>
    where
        F: FnMut(&[Observation], &web_sys::IntersectionObserver) + 'static,
    {
        let callback: BatchCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let batch: Vec<Observation> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| Observation { target: entry.target(), intersecting: entry.is_intersecting() })
                    .collect();
                on_batch(&batch, &observer);
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| SiteError::Watcher(format!("{e:?}")))?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, target: &web_sys::Element) {
        self.observer.observe(target);
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
