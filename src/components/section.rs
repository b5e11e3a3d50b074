//! Page sections tracked by the scroll-spy.

use leptos::prelude::*;

use crate::state::nav::NavState;
#[cfg(feature = "hydrate")]
use crate::util::viewport::{SPY_WATCH, ViewportWatcher};

/// Scroll-spy watcher shared by every `Section`.
#[derive(Clone, Copy)]
pub struct SectionSpy {
    #[cfg(feature = "hydrate")]
    nav: RwSignal<NavState>,
    #[cfg(feature = "hydrate")]
    watcher: StoredValue<Option<ViewportWatcher>, LocalStorage>,
}

impl SectionSpy {
    pub fn new(nav: RwSignal<NavState>) -> Self {
        #[cfg(not(feature = "hydrate"))]
        let _ = nav;
        Self {
            #[cfg(feature = "hydrate")]
            nav,
            #[cfg(feature = "hydrate")]
            watcher: StoredValue::new_local(None),
        }
    }

    /// Create the browser watcher. Failures leave every link inactive.
    #[cfg(feature = "hydrate")]
    pub fn connect(self) {
        let nav = self.nav;
        let watcher = ViewportWatcher::new(SPY_WATCH, move |batch, _observer| {
            let ids: Vec<(String, bool)> = batch.iter().map(|o| (o.target.id(), o.intersecting)).collect();
            nav.maybe_update(|n| n.apply_spy_batch(ids.iter().map(|(id, hit)| (id.as_str(), *hit))));
        });
        match watcher {
            Ok(watcher) => self.watcher.set_value(Some(watcher)),
            Err(e) => log::warn!("scroll-spy disabled: {e}"),
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
}

/// A top-level page section with an anchor id.
#[component]
pub fn Section(id: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let spy = expect_context::<SectionSpy>();
    let node_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            spy.observe(&el);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = spy;

    view! {
        <section id=id class=class node_ref=node_ref>
            {children()}
        </section>
    }
}
