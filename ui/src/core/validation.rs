//! Contact form field rules.
//!
//! - `name`: at least 2 characters after trimming
//! - `email`: `local@domain.tld` shape (no whitespace, one `@`, a dot inside the domain)
//! - `message`: at least 10 characters after trimming
//!
//! Lengths are counted in characters, not bytes, so CJK names validate the
//! same way Latin ones do.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name` attribute of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// What caused a validation pass; the wording of the message differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Blur,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub trigger: Trigger,
}

impl FieldError {
    /// Dictionary key of the message shown beneath the field.
    pub fn message_key(&self) -> &'static str {
        match (self.field, self.trigger) {
            (Field::Name, Trigger::Submit) => "error-name-submit",
            (Field::Name, Trigger::Blur) => "error-name-blur",
            (Field::Email, _) => "error-email",
            (Field::Message, Trigger::Submit) => "error-message-submit",
            (Field::Message, Trigger::Blur) => "error-message-blur",
        }
    }
}

pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= NAME_MIN_CHARS
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_message(value: &str) -> bool {
    value.trim().chars().count() >= MESSAGE_MIN_CHARS
}

/// Validate a single field. Blur validation trims the email first; submit does not.
pub fn validate_field(field: Field, value: &str, trigger: Trigger) -> Result<(), FieldError> {
    let ok = match field {
        Field::Name => is_valid_name(value),
        Field::Email => match trigger {
            Trigger::Blur => is_valid_email(value.trim()),
            Trigger::Submit => is_valid_email(value),
        },
        Field::Message => is_valid_message(value),
    };
    if ok {
        Ok(())
    } else {
        Err(FieldError { field, trigger })
    }
}

/// Validate every field for submission, collecting one error per failing field.
pub fn validate_form(name: &str, email: &str, message: &str) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Message, message),
    ]
    .into_iter()
    .filter_map(|(field, value)| validate_field(field, value, Trigger::Submit).err())
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_boundary() {
        assert!(is_valid_name("Al"));
        assert!(is_valid_name("  王五  "));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name(" A "));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn message_boundary() {
        assert!(is_valid_message("0123456789"));
        assert!(!is_valid_message("012345678"));
        assert!(!is_valid_message("  012345678  "));
        assert!(is_valid_message("这是一条足够长的留言内容"));
    }

    #[test]
    fn blur_trims_email_but_submit_does_not() {
        assert!(validate_field(Field::Email, " a@b.co ", Trigger::Blur).is_ok());
        assert_eq!(
            validate_field(Field::Email, " a@b.co ", Trigger::Submit),
            Err(FieldError {
                field: Field::Email,
                trigger: Trigger::Submit
            })
        );
    }

    #[test]
    fn form_reports_every_failing_field_once() {
        let errors = validate_form("A", "nope", "short").unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
        assert!(validate_form("Ann", "ann@example.com", "Hello there!").is_ok());
    }

    #[test]
    fn messages_depend_on_trigger() {
        let blur = FieldError {
            field: Field::Name,
            trigger: Trigger::Blur,
        };
        let submit = FieldError {
            field: Field::Name,
            trigger: Trigger::Submit,
        };
        assert_ne!(blur.message_key(), submit.message_key());
    }

    #[test]
    fn field_names_match_form_controls() {
        let names: Vec<_> = Field::ALL.iter().map(|field| field.name()).collect();
        assert_eq!(names, ["name", "email", "message"]);
    }
}
