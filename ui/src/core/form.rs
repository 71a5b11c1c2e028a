//! Contact form engine: field values, per-field visual state and the
//! simulated submission lifecycle.
//!
//! The view feeds DOM events in (`input`, `blur`, `submit`) and schedules
//! [`ContactForm::complete`] after [`SUBMIT_DELAY_MS`]. No request is ever
//! sent; the delay stands in for network latency.

use serde::Serialize;

use super::toast::ToastSeverity;
use super::validation::{self, Field, FieldError, Trigger};

/// Simulated network latency for a submission.
pub const SUBMIT_DELAY_MS: u64 = 2000;

pub const BORDER_NEUTRAL: &str = "#e1e8ed";
pub const BORDER_VALID: &str = "#2ecc71";
pub const BORDER_INVALID: &str = "#e74c3c";

/// Dictionary key of the notification shown after a successful submission.
pub const SENT_MESSAGE_KEY: &str = "toast-sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Neutral,
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    pub fn border_color(&self) -> &'static str {
        match self {
            FieldState::Neutral => BORDER_NEUTRAL,
            FieldState::Valid => BORDER_VALID,
            FieldState::Invalid(_) => BORDER_INVALID,
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            FieldState::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

/// Payload of a submission (logged, never transmitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submit did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A previous submission is still in flight.
    Busy,
    /// One error per failing field, already reflected in the field states.
    Invalid(Vec<FieldError>),
}

/// What the caller must do once the simulated delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub submission: Submission,
    pub severity: ToastSeverity,
    pub message_key: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    name_state: FieldState,
    email_state: FieldState,
    message_state: FieldState,
    submit: SubmitState,
    pending: Option<Submission>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn state(&self, field: Field) -> FieldState {
        match field {
            Field::Name => self.name_state,
            Field::Email => self.email_state,
            Field::Message => self.message_state,
        }
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn is_sending(&self) -> bool {
        self.submit == SubmitState::Sending
    }

    /// Opacity of the submit control.
    pub fn submit_opacity(&self) -> &'static str {
        if self.is_sending() {
            "0.7"
        } else {
            "1"
        }
    }

    /// New input clears the field's error without re-validating.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        *self.state_mut(field) = FieldState::Neutral;
    }

    /// Blur validates the field on its own.
    pub fn blur(&mut self, field: Field) -> FieldState {
        let state = match validation::validate_field(field, self.value(field), Trigger::Blur) {
            Ok(()) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        };
        *self.state_mut(field) = state;
        state
    }

    /// Validate all fields. On success the form enters [`SubmitState::Sending`]
    /// and the returned delay must elapse before [`ContactForm::complete`].
    /// A submit while already sending is ignored.
    pub fn submit(&mut self) -> Result<u64, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::Busy);
        }
        if let Err(errors) = validation::validate_form(&self.name, &self.email, &self.message) {
            for err in &errors {
                *self.state_mut(err.field) = FieldState::Invalid(*err);
            }
            return Err(SubmitError::Invalid(errors));
        }
        self.pending = Some(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        });
        self.submit = SubmitState::Sending;
        Ok(SUBMIT_DELAY_MS)
    }

    /// Finish a pending submission: restore the control, clear the fields and
    /// hand back the notification to show. `None` when nothing was pending.
    pub fn complete(&mut self) -> Option<Completion> {
        let submission = self.pending.take()?;
        *self = ContactForm::default();
        Some(Completion {
            submission,
            severity: ToastSeverity::Success,
            message_key: SENT_MESSAGE_KEY,
        })
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn state_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name_state,
            Field::Email => &mut self.email_state,
            Field::Message => &mut self.message_state,
        }
    }
}
