//! One-shot reveal animation on first sight.
//!
//! ARCHITECTURE
//! ============
//! `RevealRegistry` is provided once by the root component. Each `Reveal`
//! wrapper registers a key plus a marker signal, stamps the key on its element
//! as `data-reveal`, and asks the shared watcher to observe it once mounted.
//! The watcher callback feeds `RevealTracker`, flips the marker signal of
//! every newly revealed key, and unobserves those elements.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::state::reveal::{RevealKey, RevealTracker, reveal_class};
#[cfg(feature = "hydrate")]
use crate::state::reveal::parse_key;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{Observation, REVEAL_WATCH, ViewportWatcher};

/// Shared reveal bookkeeping and the watcher behind it.
#[derive(Clone, Copy)]
pub struct RevealRegistry {
    tracker: StoredValue<RevealTracker>,
    markers: StoredValue<HashMap<RevealKey, RwSignal<bool>>>,
    #[cfg(feature = "hydrate")]
    watcher: StoredValue<Option<ViewportWatcher>, LocalStorage>,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self {
            tracker: StoredValue::new(RevealTracker::default()),
            markers: StoredValue::new(HashMap::new()),
            #[cfg(feature = "hydrate")]
            watcher: StoredValue::new_local(None),
        }
    }

    /// Allocate a key and the marker signal that flips when it reveals.
    pub fn register(&self) -> (RevealKey, RwSignal<bool>) {
        let key = self.tracker.try_update_value(RevealTracker::register).unwrap_or_default();
        let marker = RwSignal::new(false);
        self.markers.update_value(|m| {
            m.insert(key, marker);
        });
        (key, marker)
    }

    /// Create the browser watcher. Failures leave elements unrevealed.
    #[cfg(feature = "hydrate")]
    pub fn connect(self) {
        match ViewportWatcher::new(REVEAL_WATCH, move |batch, observer| self.on_batch(batch, observer)) {
            Ok(watcher) => self.watcher.set_value(Some(watcher)),
            Err(e) => log::warn!("reveal animations disabled: {e}"),
        }
    }

    #[cfg(feature = "hydrate")]
    fn observe(&self, target: &web_sys::Element) {
        self.watcher.with_value(|w| {
            if let Some(w) = w {
                w.observe(target);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    fn on_batch(&self, batch: &[Observation], observer: &web_sys::IntersectionObserver) {
        let keyed: Vec<(RevealKey, &Observation)> = batch
            .iter()
            .filter_map(|o| {
                let key = o.target.get_attribute("data-reveal").as_deref().and_then(parse_key)?;
                Some((key, o))
            })
            .collect();

        let newly = self
            .tracker
            .try_update_value(|t| t.apply_batch(keyed.iter().map(|(key, o)| (*key, o.intersecting))))
            .unwrap_or_default();

        for (key, o) in &keyed {
            if newly.contains(key) {
                observer.unobserve(&o.target);
            }
        }
        self.markers.with_value(|markers| {
            for key in &newly {
                if let Some(marker) = markers.get(key) {
                    marker.set(true);
                }
            }
        });
    }
}

/// Wrapper that fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let registry = expect_context::<RevealRegistry>();
    let (key, revealed) = registry.register();
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            registry.observe(&el);
        }
    });

    view! {
        <div class=move || reveal_class(&class, revealed.get()) data-reveal=key.to_string() node_ref=node_ref>
            {children()}
        </div>
    }
}
