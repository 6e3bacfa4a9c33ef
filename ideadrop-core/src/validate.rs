//! Per-step validation rules.
//!
//! Validation never propagates: a failed rule becomes the wizard's current
//! error message and the step stays where it is.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::answers::AnswerSet;
use crate::questions::{Question, QuestionKind};
use crate::wizard::NotifyMethod;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// A required field failed its rule. The `Display` strings are the exact
/// user-facing messages shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    MissingAnswer,
    #[error("Please select at least one platform.")]
    PlatformRequired,
    #[error("Please choose how you would like to be notified.")]
    MethodRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid Discord username or tag.")]
    InvalidDiscordHandle,
    #[error("Please enter your preferred notification method.")]
    ContactRequired,
}

/// Validate the active question against the collected answers.
pub fn validate_question(question: &Question, answers: &AnswerSet) -> Result<(), ValidationError> {
    if !question.required {
        return Ok(());
    }
    match question.kind {
        QuestionKind::Platform => {
            let selection = answers.platforms();
            if selection.is_empty() {
                return Err(ValidationError::PlatformRequired);
            }
            // "Other" without an elaboration is treated the same as no pick.
            if selection.other_selected() && selection.other_detail().is_none() {
                return Err(ValidationError::PlatformRequired);
            }
            Ok(())
        }
        QuestionKind::Text => {
            if answers.text(question.key).trim().is_empty() {
                Err(ValidationError::MissingAnswer)
            } else {
                Ok(())
            }
        }
    }
}

/// Validate the notification step, returning the chosen method on success.
pub fn validate_notification(
    method: Option<NotifyMethod>,
    contact: &str,
) -> Result<NotifyMethod, ValidationError> {
    let method = method.ok_or(ValidationError::MethodRequired)?;
    match method {
        NotifyMethod::Email => {
            if EMAIL_RE.is_match(contact) {
                Ok(method)
            } else {
                Err(ValidationError::InvalidEmail)
            }
        }
        NotifyMethod::Discord => {
            if contact.chars().count() >= 2 {
                Ok(method)
            } else {
                Err(ValidationError::InvalidDiscordHandle)
            }
        }
        NotifyMethod::Other => {
            if contact.trim().is_empty() {
                Err(ValidationError::ContactRequired)
            } else {
                Ok(method)
            }
        }
    }
}
