//! Root application component and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything components share is created here once and handed down through
//! Leptos context: the parsed site configuration, navbar and theme state, the
//! reveal registry, and the scroll-spy. There is no module-level state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::reveal::RevealRegistry;
use crate::components::section::SectionSpy;
use crate::components::theme_toggle::init_theme;
use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the site configuration and provides all shared state before any
/// section renders. A broken configuration renders an error notice instead
/// of a half-working page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match SiteConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("site configuration rejected: {e}");
            return view! { <p class="site-error">{format!("Site unavailable: {e}")}</p> }.into_any();
        }
    };

    let nav = RwSignal::new(NavState::default());
    let theme = RwSignal::new(ThemeState::default());
    let reveal = RevealRegistry::new();
    let spy = SectionSpy::new(nav);

    #[cfg(feature = "hydrate")]
    {
        reveal.connect();
        spy.connect();
    }
    init_theme(theme);

    provide_context(StoredValue::new(config));
    provide_context(nav);
    provide_context(theme);
    provide_context(reveal);
    provide_context(spy);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Adarsh A | Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
    .into_any()
}
