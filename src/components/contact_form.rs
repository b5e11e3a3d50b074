//! Contact form with a `mailto:` handoff.
//!
//! ARCHITECTURE
//! ============
//! Validation and phase transitions live in `state::contact`. This component
//! binds the inputs, shows validation failures as a blocking alert, and runs
//! the timed handoff as a local task with two suspension points:
//! `PREPARE_DELAY`, then opening the mail client, then `RESET_DELAY`.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::ContactState;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match contact.try_update(ContactState::submit) {
            Some(Ok(Some(message))) => {
                let mailto_url = config.with_value(|c| message.mailto(&c.contact_recipient));
                start_handoff(contact, mailto_url);
            }
            Some(Err(err)) => show_alert(&err.to_string()),
            Some(Ok(None)) | None => {}
        }
    };

    let busy = move || contact.with(|c| c.phase.is_busy());

    view! {
        <form id="contact-form" class="contact-form glass" on:submit=on_submit novalidate=true>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || contact.with(|c| c.fields.name.clone())
                    on:input=move |ev| contact.update(|c| c.fields.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || contact.with(|c| c.fields.email.clone())
                    on:input=move |ev| contact.update(|c| c.fields.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="How can I help?"
                    prop:value=move || contact.with(|c| c.fields.message.clone())
                    on:input=move |ev| contact.update(|c| c.fields.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=busy
                style:background=move || contact.with(|c| c.phase.background())
                style:color=move || contact.with(|c| c.phase.color())
            >
                {move || contact.with(|c| c.phase.label())}
            </button>
        </form>
    }
}

/// Run the delayed handoff: open the mail client, then reset the form.
#[cfg(feature = "hydrate")]
fn start_handoff(contact: RwSignal<ContactState>, mailto_url: String) {
    use crate::state::contact::{PREPARE_DELAY, RESET_DELAY};

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(PREPARE_DELAY).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&mailto_url) {
                log::warn!("mail client handoff failed: {e:?}");
            }
        }
        // The form may have been unmounted while waiting.
        if contact.try_update(ContactState::mark_ready).is_none() {
            return;
        }
        gloo_timers::future::sleep(RESET_DELAY).await;
        let _ = contact.try_update(ContactState::reset);
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_handoff(contact: RwSignal<ContactState>, mailto_url: String) {
    let _ = (contact, mailto_url);
}

fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
