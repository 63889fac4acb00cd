//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub error, since submission only happens in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `SubmitError` so the form can keep the visitor's
//! input and show either inline field messages or a single status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

#[cfg(any(test, feature = "hydrate"))]
use contact::ContactErrorBody;
use contact::{ContactForm, ContactReceipt, Field};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The server rejected one or more fields.
    Invalid { message: String, fields: BTreeMap<Field, String> },
    /// Transport failure, rate limiting, or delivery outage.
    Failed(String),
}

impl SubmitError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message, .. } | Self::Failed(message) => message,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Map a non-2xx response to a `SubmitError`, preferring the server's body.
#[cfg(any(test, feature = "hydrate"))]
fn submit_error_from(status: u16, body: Option<ContactErrorBody>) -> SubmitError {
    match body {
        Some(body) if !body.fields.is_empty() => SubmitError::Invalid { message: body.error, fields: body.fields },
        Some(body) if !body.error.is_empty() => SubmitError::Failed(body.error),
        _ => SubmitError::Failed(contact_failed_message(status)),
    }
}

/// Post the form to `/api/contact`.
///
/// # Errors
///
/// Returns `SubmitError::Invalid` when the server rejects fields and
/// `SubmitError::Failed` for any other failure.
pub async fn submit_contact(form: &ContactForm) -> Result<ContactReceipt, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| SubmitError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))?;
        if !resp.ok() {
            let body = resp.json::<ContactErrorBody>().await.ok();
            return Err(submit_error_from(resp.status(), body));
        }
        resp.json::<ContactReceipt>()
            .await
            .map_err(|e| SubmitError::Failed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(SubmitError::Failed("not available on server".to_owned()))
    }
}
