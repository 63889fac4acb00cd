//! Contact form view state.
//!
//! Fields are edited as a raw `ContactForm`. Errors stay hidden until the
//! first submit attempt; after that every edit re-validates the edited field
//! so messages clear as soon as the input is fixed.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::collections::BTreeMap;

use contact::{ContactForm, ContactReceipt, Field};

use crate::net::api::SubmitError;

/// Where the last submission stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(ContactReceipt),
    Failed(String),
}

/// Form inputs the visitor can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Name,
    Email,
    Company,
    Message,
}

impl Input {
    /// The validated field behind this input; `Company` has none.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Email => Some(Field::Email),
            Self::Message => Some(Field::Message),
            Self::Company => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: BTreeMap<Field, String>,
    pub submitted_once: bool,
    pub status: SubmitStatus,
}

impl ContactFormState {
    #[must_use]
    pub fn value(&self, input: Input) -> String {
        match input {
            Input::Name => self.form.name.clone(),
            Input::Email => self.form.email.clone(),
            Input::Company => self.form.company.clone().unwrap_or_default(),
            Input::Message => self.form.message.clone(),
        }
    }

    pub fn set(&mut self, input: Input, value: String) {
        match input {
            Input::Name => self.form.name = value,
            Input::Email => self.form.email = value,
            Input::Company => self.form.company = Some(value).filter(|c| !c.is_empty()),
            Input::Message => self.form.message = value,
        }
        if !self.submitted_once {
            return;
        }
        if let Some(field) = input.field() {
            match self.form.check(field) {
                Some(err) => self.errors.insert(field, err.to_string()),
                None => self.errors.remove(&field),
            };
        }
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(&field).cloned()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Validate and, when clean, move to `Sending` and hand back the form to
    /// post. Returns `None` while a send is in flight or when fields fail.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_sending() {
            return None;
        }
        self.submitted_once = true;
        match self.form.validate() {
            Ok(_) => {
                self.errors.clear();
                self.status = SubmitStatus::Sending;
                Some(self.form.clone())
            }
            Err(errors) => {
                self.errors = errors.messages();
                self.status = SubmitStatus::Idle;
                None
            }
        }
    }

    /// Apply the outcome of a send. Success clears the form; failure keeps
    /// the fields and shows any per-field messages the server returned.
    pub fn finish(&mut self, outcome: Result<ContactReceipt, SubmitError>) {
        match outcome {
            Ok(receipt) => {
                self.form = ContactForm::default();
                self.errors.clear();
                self.submitted_once = false;
                self.status = SubmitStatus::Sent(receipt);
            }
            Err(SubmitError::Invalid { message, fields }) => {
                self.errors = fields;
                self.status = SubmitStatus::Failed(message);
            }
            Err(SubmitError::Failed(message)) => {
                self.status = SubmitStatus::Failed(message);
            }
        }
    }
}
