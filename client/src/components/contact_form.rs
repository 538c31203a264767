//! Contact form posting to the server's contact endpoint.

use leptos::prelude::*;

use crate::state::contact::ContactState;

#[component]
pub fn ContactForm(#[prop(default = crate::net::api::CONTACT_ENDPOINT)] endpoint: &'static str) -> impl IntoView {
    let contact = RwSignal::new(ContactState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if contact.with_untracked(|c| c.sending) {
            return;
        }
        contact.update(|c| {
            c.sending = true;
            c.outcome = None;
        });
        let draft = contact.with_untracked(|c| c.draft.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(endpoint, &draft).await;
            contact.update(|c| c.finish(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, draft);
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                name="name"
                type="text"
                required
                placeholder="Your name"
                prop:value=move || contact.with(|c| c.draft.name.clone())
                on:input=move |ev| contact.update(|c| c.draft.name = event_target_value(&ev))
            />
            <input
                name="email"
                type="email"
                required
                placeholder="you@example.com"
                prop:value=move || contact.with(|c| c.draft.email.clone())
                on:input=move |ev| contact.update(|c| c.draft.email = event_target_value(&ev))
            />
            <input
                name="subject"
                type="text"
                placeholder="Subject"
                prop:value=move || contact.with(|c| c.draft.subject.clone())
                on:input=move |ev| contact.update(|c| c.draft.subject = event_target_value(&ev))
            />
            <textarea
                name="message"
                required
                placeholder="Message"
                prop:value=move || contact.with(|c| c.draft.message.clone())
                on:input=move |ev| contact.update(|c| c.draft.message = event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || contact.with(|c| c.sending)>
                {move || if contact.with(|c| c.sending) { "Sending..." } else { "Send Message" }}
            </button>
            <Show when=move || contact.with(|c| c.outcome.is_some())>
                <p class="contact-form__status">
                    {move || contact.with(|c| c.outcome.map(|o| o.message()).unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}
