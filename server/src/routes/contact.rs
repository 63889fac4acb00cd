//! Contact form submission route.
//!
//! Order of checks: validation, then rate limiting, then delivery. Invalid
//! submissions never count against a visitor's allowance.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use contact::{ContactErrorBody, ContactForm, ContactReceipt, ValidationErrors};
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::services::delivery::DeliveryError;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = contact_error_to_status(&self);
        let body = match &self {
            Self::Invalid(errors) => ContactErrorBody { error: errors.to_string(), fields: errors.messages() },
            Self::RateLimited(e) => ContactErrorBody { error: e.to_string(), ..ContactErrorBody::default() },
            // Provider details stay in the log.
            Self::Delivery(_) => ContactErrorBody {
                error: "message could not be delivered, please try again later".to_owned(),
                ..ContactErrorBody::default()
            },
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/contact`: validate, rate-limit, and deliver one message.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactReceipt>, ContactError> {
    let message = form.validate()?;
    state.rate_limiter.check_and_record(peer.ip()).inspect_err(|e| {
        tracing::warn!(peer = %peer.ip(), error = %e, "contact submission rate limited");
    })?;

    let id = Uuid::new_v4();
    state.delivery.deliver(id, &message).await.inspect_err(|e| {
        tracing::error!(%id, delivery = state.delivery.name(), error = %e, "contact delivery failed");
    })?;

    Ok(Json(ContactReceipt { id: id.to_string(), delivered_via: state.delivery.name().to_owned() }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
