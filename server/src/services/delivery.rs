//! Contact message delivery.
//!
//! DESIGN
//! ======
//! Routes talk to a `ContactDelivery` trait object so the HTTP layer never
//! knows whether a message is mailed or only acknowledged. Two collaborators
//! ship with the server:
//! - `SimulatedDelivery`: sleeps for a fixed delay and succeeds
//! - `ResendDelivery`: renders an HTML email and sends it through Resend
//!
//! Which one runs is decided once at startup from `DeliveryConfig`.

use std::sync::Arc;
use std::time::Duration;

use contact::ValidContact;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use uuid::Uuid;

use crate::config::DeliveryConfig;

const CONTACT_MESSAGE_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("email delivery failed: {0}")]
    Email(String),
}

#[async_trait::async_trait]
pub trait ContactDelivery: Send + Sync {
    /// Short identifier reported back to the visitor in the receipt.
    fn name(&self) -> &'static str;

    /// Hand one validated message to the outside world.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the message could not be handed off.
    async fn deliver(&self, id: Uuid, message: &ValidContact) -> Result<(), DeliveryError>;
}

/// Build the delivery collaborator described by `config`.
#[must_use]
pub fn from_config(config: &DeliveryConfig) -> Arc<dyn ContactDelivery> {
    match config {
        DeliveryConfig::Simulated { delay } => Arc::new(SimulatedDelivery::new(*delay)),
        DeliveryConfig::Resend { api_key, from, to } => Arc::new(ResendDelivery::new(api_key, from, to)),
    }
}

// =============================================================================
// SIMULATED
// =============================================================================

pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl ContactDelivery for SimulatedDelivery {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn deliver(&self, id: Uuid, message: &ValidContact) -> Result<(), DeliveryError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(%id, from = %message.email, chars = message.message.chars().count(), "contact message accepted (simulated)");
        Ok(())
    }
}

// =============================================================================
// RESEND
// =============================================================================

/// Real email delivery. Only chosen when `RESEND_API_KEY` is set; the
/// default collaborator is [`SimulatedDelivery`].
pub struct ResendDelivery {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendDelivery {
    #[must_use]
    pub fn new(api_key: &str, from: &str, to: &str) -> Self {
        Self { resend: Resend::new(api_key), from: from.to_owned(), to: to.to_owned() }
    }
}

#[async_trait::async_trait]
impl ContactDelivery for ResendDelivery {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn deliver(&self, id: Uuid, message: &ValidContact) -> Result<(), DeliveryError> {
        let to = [self.to.as_str()];
        let subject = contact_subject(message);
        let html = render_contact_template(id, message);

        let email = CreateEmailBaseOptions::new(&self.from, to, subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| DeliveryError::Email(e.to_string()))?;
        tracing::info!(%id, "contact message sent via resend");
        Ok(())
    }
}

#[must_use]
pub fn contact_subject(message: &ValidContact) -> String {
    match &message.company {
        Some(company) => format!("Portfolio message from {} ({company})", message.name),
        None => format!("Portfolio message from {}", message.name),
    }
}

/// Fill the HTML template. Visitor input is escaped.
#[must_use]
pub fn render_contact_template(id: Uuid, message: &ValidContact) -> String {
    let company = message.company.as_deref().unwrap_or("-");
    CONTACT_MESSAGE_TEMPLATE
        .replace("{{ID}}", &id.to_string())
        .replace("{{NAME}}", &escape_html(&message.name))
        .replace("{{EMAIL}}", &escape_html(&message.email))
        .replace("{{COMPANY}}", &escape_html(company))
        .replace("{{MESSAGE}}", &escape_html(&message.message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "delivery_test.rs"]
mod tests;
