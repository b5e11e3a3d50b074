//! Sticky navigation bar, mobile menu, and scroll-to-top button.
//!
//! DESIGN
//! ======
//! Scroll position only feeds `NavState::on_scroll`, which reports whether a
//! flag actually changed, so continuous scrolling does not re-render the bar.
//! Link highlighting reads the scroll-spy's `active_section`.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::NavState;

/// A navbar entry pointing at a page section.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#certifications", label: "Certifications" },
    NavLink { href: "#contact", label: "Contact" },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            let offset_y = window().scroll_y().unwrap_or(0.0);
            nav.maybe_update(|n| n.on_scroll(offset_y));
        });
    }

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a
                        href=link.href
                        class="nav-link"
                        class:active=move || nav.with(|n| n.is_link_active(link.href))
                        on:click=move |_| nav.update(NavState::close_menu)
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || nav.with(|n| n.scroll.scrolled)>
            <div class="nav-container">
                <a href="#home" class="nav-logo">"Adarsh A"</a>
                <ul id="nav-menu" class="nav-menu" class:active=move || nav.with(|n| n.menu_open)>
                    {links}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle/>
                    <button
                        id="nav-toggle"
                        class="nav-toggle"
                        aria-label="Toggle navigation"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        <i class=move || format!("fas {}", nav.with(NavState::menu_icon))></i>
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Floating "back to top" button, shown once the page is scrolled far enough.
#[component]
pub fn ScrollTop() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <a
            href="#home"
            class="scroll-top"
            class:scroll-top-active=move || nav.with(|n| n.scroll.scroll_top_visible)
            aria-label="Back to top"
        >
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}
