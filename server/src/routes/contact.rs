//! Contact route: `POST /api/contact`.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio::state::contact::ContactDraft;

use crate::services::contact as contact_svc;
use crate::state::AppState;

fn reply(status: StatusCode, error: Option<String>) -> Response {
    let body = match error {
        Some(error) => serde_json::json!({ "ok": false, "error": error }),
        None => serde_json::json!({ "ok": true }),
    };
    (status, Json(body)).into_response()
}

/// `POST /api/contact`: validate, rate limit, and forward a message.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(draft): Json<ContactDraft>,
) -> Response {
    let draft = match contact_svc::normalize(&draft) {
        Ok(draft) => draft,
        Err(e) => return reply(StatusCode::UNPROCESSABLE_ENTITY, Some(e.to_string())),
    };

    if let Err(e) = state.contact_limiter.check_and_record(addr.ip()) {
        tracing::warn!(client = %addr.ip(), error = %e, "contact rate limited");
        return reply(StatusCode::TOO_MANY_REQUESTS, Some(e.to_string()));
    }

    match contact_svc::deliver(state.config.mailer.as_ref(), &draft).await {
        Ok(delivery) => {
            tracing::info!(?delivery, "contact message accepted");
            reply(StatusCode::OK, None)
        }
        Err(e) => {
            tracing::error!(error = %e, "contact delivery failed");
            reply(StatusCode::BAD_GATEWAY, Some("delivery failed".to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
