//! CV download button, lead form modal, and success modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a `LeadGate` backed by browser local storage. The gate decides
//! every transition; this component only maps DOM events onto it and
//! triggers the download it hands back.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::state::lead_gate::{LeadGate, LeadGateConfig, ModalKind, PointerTarget};
use crate::util::dom;
use crate::util::storage::LocalStorage;

/// Classify a click on a modal overlay: the overlay itself, or its content.
fn pointer_target(ev: &leptos::ev::MouseEvent, kind: ModalKind) -> PointerTarget {
    if ev.target() == ev.current_target() { PointerTarget::Backdrop(kind) } else { PointerTarget::Content }
}

/// Lead-gated CV download widget.
#[component]
pub fn CvDownload(#[prop(optional)] config: Option<LeadGateConfig>) -> impl IntoView {
    match LeadGate::deferred(LocalStorage, config.unwrap_or_default()) {
        Ok(gate) => view! { <CvDownloadWidget gate=RwSignal::new(gate)/> }.into_any(),
        Err(e) => {
            log::error!("cv download disabled: {e}");
            view! { <p class="cv-download__error">"CV download is unavailable."</p> }.into_any()
        }
    }
}

#[component]
fn CvDownloadWidget(gate: RwSignal<LeadGate<LocalStorage>>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    // Counter starts at the server-rendered 0; the stored value arrives as an update.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || gate.update(LeadGate::reload));
    }

    let contact_visible = move || gate.with(|g| g.state().contact_visible());
    let success_visible = move || gate.with(|g| g.state().success_visible());
    let count_text = move || gate.with(LeadGate::count_text);

    let on_open = move |_| {
        form_error.set(None);
        gate.update(LeadGate::open_contact);
    };
    let on_close = move |_| gate.update(LeadGate::close);
    let on_backdrop = move |ev: leptos::ev::MouseEvent, kind: ModalKind| {
        gate.update(|g| {
            g.backdrop_click(pointer_target(&ev, kind));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = gate.try_update(|g| g.submit(&email.get_untracked(), &mobile.get_untracked())) else {
            return;
        };
        match result {
            Ok(submission) => {
                dom::trigger_download(&submission.download.href, &submission.download.file_name);
                email.set(String::new());
                mobile.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="cv-download">
            <button id="download-button" class="btn btn--primary" on:click=on_open>
                "Download CV"
            </button>
            <p class="cv-download__counter">
                "Downloads: "
                <span id="click-counter">{count_text}</span>
            </p>

            // Overlays mount on <body>, outside any transformed card.
            <Portal>
                <Show when=contact_visible>
                    <div
                        id="contact-modal"
                        class="modal"
                        on:click=move |ev| on_backdrop(ev, ModalKind::Contact)
                    >
                        <div class="modal-content">
                            <button class="close-btn" on:click=on_close title="Close">"✕"</button>
                            <h2>"Get my CV"</h2>
                            <p>"Leave your details and the download starts right away."</p>
                            <form id="download-form" class="modal-form" on:submit=on_submit>
                                <input
                                    id="email-input"
                                    type="email"
                                    required
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    id="mobile-input"
                                    type="tel"
                                    required
                                    placeholder="Mobile number"
                                    prop:value=move || mobile.get()
                                    on:input=move |ev| mobile.set(event_target_value(&ev))
                                />
                                <Show when=move || form_error.get().is_some()>
                                    <p class="modal-form__error">{move || form_error.get().unwrap_or_default()}</p>
                                </Show>
                                <button class="btn btn--primary" type="submit">"Download"</button>
                            </form>
                        </div>
                    </div>
                </Show>

                <Show when=success_visible>
                    <div
                        id="success-modal"
                        class="modal"
                        on:click=move |ev| on_backdrop(ev, ModalKind::Success)
                    >
                        <div class="modal-content">
                            <button class="close-btn" on:click=on_close title="Close">"✕"</button>
                            <h2>"Thank you!"</h2>
                            <p>"Your download has started."</p>
                        </div>
                    </div>
                </Show>
            </Portal>
        </div>
    }
}
