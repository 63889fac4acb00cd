//! Contact form model and field validation.
//!
//! Shared by `client` (inline errors while the visitor types) and `server`
//! (re-validation before anything is handed to a delivery collaborator), so
//! both sides agree on the rules and on the messages shown next to fields.


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Minimum message length, in characters. Counted on the raw value so
/// surrounding whitespace counts, while a blank message is still "required".
pub const MIN_MESSAGE_CHARS: usize = 10;

// =============================================================================
// FIELDS AND ERRORS
// =============================================================================

/// Validated form fields. `company` is optional and never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A single inline validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

/// Every failing field of one submission, at most one error per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("contact form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, err)| (*field, *err))
    }

    /// Field name to display message, as sent in a 422 response body.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.iter().map(|(field, err)| (field, err.to_string())).collect()
    }
}

// =============================================================================
// FORM
// =============================================================================

/// Raw form input exactly as the visitor typed it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Validate a single field, for inline feedback.
    #[must_use]
    pub fn check(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => check_name(&self.name),
            Field::Email => check_email(&self.email),
            Field::Message => check_message(&self.message),
        }
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns all failing fields when any required field is missing or
    /// malformed.
    pub fn validate(&self) -> Result<ValidContact, ValidationErrors> {
        let errors = Field::ALL
            .into_iter()
            .filter_map(|field| self.check(field).map(|err| (field, err)))
            .collect::<BTreeMap<_, _>>();
        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        Ok(ValidContact {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            company,
            message: self.message.trim().to_owned(),
        })
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    name.trim().is_empty().then_some(FieldError::NameRequired)
}

fn check_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    (!is_email_shape(email)).then_some(FieldError::EmailInvalid)
}

fn check_message(message: &str) -> Option<FieldError> {
    if message.trim().is_empty() {
        Some(FieldError::MessageRequired)
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Some(FieldError::MessageTooShort { min: MIN_MESSAGE_CHARS })
    } else {
        None
    }
}

/// Loose email shape check: one `@`, non-empty local part, a domain with no
/// whitespace that neither starts nor ends with a dot.
#[must_use]
pub fn is_email_shape(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !local.chars().any(char::is_whitespace)
        && !domain.is_empty()
        && !domain.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Successful `POST /api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
    /// Name of the delivery collaborator that accepted the message.
    pub delivered_via: String,
}

/// Error response body. `fields` is populated only for validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<Field, String>,
}
