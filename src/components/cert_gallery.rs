//! Certificate gallery with category tabs.
//!
//! The grid is rebuilt from the catalog on every tab change; nothing from the
//! previous selection is kept.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::certs::{CATEGORY_TABS, Certificate, GalleryState};

#[component]
pub fn CertificateGallery() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();
    let gallery = RwSignal::new(GalleryState::new(config.with_value(|c| c.default_category.clone())));

    let tabs = CATEGORY_TABS
        .iter()
        .map(|tab| {
            view! {
                <button
                    class="cert-tab-btn"
                    class:active=move || gallery.with(|g| g.is_active(tab.category))
                    data-category=tab.category
                    on:click=move |_| gallery.update(|g| g.select(tab.category))
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        gallery
            .with(|g| config.with_value(|c| g.visible(&c.catalog)))
            .into_iter()
            .map(|cert| view! { <CertificateCard cert=cert/> })
            .collect_view()
    };

    view! {
        <div class="cert-tabs" role="tablist">{tabs}</div>
        <div id="cert-grid" class="cert-grid">{cards}</div>
    }
}

#[component]
fn CertificateCard(cert: Certificate) -> impl IntoView {
    let Certificate { title, org, year, image, icon, .. } = cert;
    view! {
        <div class="cert-card glass">
            <div class="cert-icon">
                <i class=icon></i>
            </div>
            <div class="cert-content">
                <h3 class="cert-org">{org}</h3>
                <h3>{title}</h3>
                <p class="cert-year">{year}</p>
            </div>
            <a href=image target="_blank" rel="noopener noreferrer" class="btn btn-secondary cert-view-btn">
                "View Certificate"
            </a>
        </div>
    }
}
