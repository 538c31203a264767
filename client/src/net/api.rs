//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `ContactOutcome` instead of panics so network failures
//! degrade to an on-page message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::contact::{ContactDraft, ContactOutcome};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Send the contact form as JSON to `endpoint`.
pub async fn submit_contact(endpoint: &str, draft: &ContactDraft) -> ContactOutcome {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(draft)
        {
            Ok(request) => request,
            Err(e) => {
                log::warn!("contact payload encode failed: {e}");
                return ContactOutcome::Failed;
            }
        };
        match request.send().await {
            Ok(resp) => {
                let outcome = ContactOutcome::from_status(resp.status());
                if outcome != ContactOutcome::Sent {
                    log::warn!("{}", contact_failed_message(resp.status()));
                }
                outcome
            }
            Err(e) => {
                log::warn!("contact request error: {e}");
                ContactOutcome::Failed
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, draft);
        ContactOutcome::Failed
    }
}
