//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::preference::BrowserStorage;
use crate::util::theme;

/// Load the persisted theme once the page has hydrated.
///
/// With no stored preference the stylesheet default stays in effect.
pub fn init_theme(state: RwSignal<ThemeState>) {
    Effect::new(move || match theme::read_preference(&BrowserStorage) {
        Ok(Some(stored)) => {
            theme::apply(stored);
            state.set(ThemeState { theme: stored });
        }
        Ok(None) => {}
        Err(e) => log::warn!("theme preference unreadable: {e}"),
    });
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<ThemeState>>();

    let on_toggle = move |_| {
        let current = state.get_untracked().theme;
        let next = match theme::toggle(current, &BrowserStorage) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("theme preference not saved: {e}");
                current.toggled()
            }
        };
        state.set(ThemeState { theme: next });
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" aria-label="Toggle theme" on:click=on_toggle>
            <i class=move || format!("fas {}", state.get().icon_class())></i>
        </button>
    }
}
