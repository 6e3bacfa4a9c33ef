//! The idea wizard state machine.
//!
//! All transitions happen on discrete user events; the only side effect is
//! the webhook request issued on final submission, which goes through an
//! injected [`IdeaSink`]. While a submission is in flight the `loading` flag
//! turns every further event into a no-op, so duplicate submissions are
//! impossible.

use std::fmt;

use tracing::{debug, warn};

use crate::answers::AnswerSet;
use crate::payload::{self, WebhookPayload};
use crate::questions::QUESTIONS;
use crate::render::RenderModel;
use crate::validate;
use crate::webhook::{IdeaSink, SinkError};

/// Generic retry message shown when delivery fails, regardless of cause.
pub const SUBMIT_FAILED: &str = "Failed to submit. Please try again later.";

/// How the submitter wants to hear back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMethod {
    Email,
    Discord,
    Other,
}

impl NotifyMethod {
    pub const ALL: [NotifyMethod; 3] = [
        NotifyMethod::Email,
        NotifyMethod::Discord,
        NotifyMethod::Other,
    ];

    /// Capitalized label, also the method half of the payload footer.
    pub fn label(self) -> &'static str {
        match self {
            NotifyMethod::Email => "Email",
            NotifyMethod::Discord => "Discord",
            NotifyMethod::Other => "Other",
        }
    }

    /// Prompt shown when asking for the contact value.
    pub fn contact_prompt(self) -> &'static str {
        match self {
            NotifyMethod::Email => "Enter your email",
            NotifyMethod::Discord => "Enter your Discord Username or User ID",
            NotifyMethod::Other => "Enter your preferred notification method (e.g. Telegram, SMS)",
        }
    }
}

impl fmt::Display for NotifyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a Next event.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Validation failed or a submission is in flight; nothing moved.
    Stayed,
    /// Moved forward one step.
    Moved,
    /// The final step validated. The wizard is now loading and the payload
    /// must be delivered, then resolved via [`Wizard::complete_submission`].
    Submit(WebhookPayload),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: usize,
    answers: AnswerSet,
    method: Option<NotifyMethod>,
    contact: String,
    submitted: bool,
    loading: bool,
    error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: 0,
            answers: AnswerSet::new(),
            method: None,
            contact: String::new(),
            submitted: false,
            loading: false,
            error: None,
        }
    }

    /// Current step index: `0..QUESTIONS.len()` are question steps, and
    /// `QUESTIONS.len()` is the notification step.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn method(&self) -> Option<NotifyMethod> {
        self.method
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_text_answer(&mut self, key: &str, value: impl Into<String>) {
        self.answers.set_text(key, value);
    }

    pub fn toggle_platform(&mut self, value: &str) {
        self.answers.platforms_mut().toggle(value);
    }

    /// Replace the platform selection wholesale (checkbox-group semantics).
    pub fn set_platforms(&mut self, values: Vec<String>) {
        self.answers.platforms_mut().set_selected(values);
    }

    pub fn set_platform_other(&mut self, detail: impl Into<String>) {
        self.answers.platforms_mut().set_other_detail(detail);
    }

    pub fn choose_method(&mut self, method: NotifyMethod) {
        self.method = Some(method);
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    /// Render model for the current state; see [`crate::render`].
    pub fn render(&self) -> RenderModel {
        crate::render::render(self)
    }

    /// Next event: validate the active step, then advance or start the
    /// submission. On failure the error message is set and nothing moves.
    pub fn next(&mut self) -> Advance {
        if self.loading || self.submitted {
            return Advance::Stayed;
        }
        if self.step < QUESTIONS.len() {
            let question = &QUESTIONS[self.step];
            if let Err(rule) = validate::validate_question(question, &self.answers) {
                self.error = Some(rule.to_string());
                return Advance::Stayed;
            }
            self.error = None;
            self.step += 1;
            debug!(step = self.step, "advanced to next step");
            Advance::Moved
        } else {
            let method = match validate::validate_notification(self.method, &self.contact) {
                Ok(method) => method,
                Err(rule) => {
                    self.error = Some(rule.to_string());
                    return Advance::Stayed;
                }
            };
            self.error = None;
            self.loading = true;
            debug!(%method, "submission started");
            Advance::Submit(payload::build_payload(&self.answers, method, &self.contact))
        }
    }

    /// Previous event: back one step. No-op at step 0, after submission, or
    /// while a submission is in flight. Stored answers are untouched.
    pub fn previous(&mut self) {
        if self.loading || self.submitted {
            return;
        }
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Restart after submission: everything back to its initial value.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Resolve an in-flight submission with the delivery outcome.
    pub fn complete_submission(&mut self, outcome: Result<(), SinkError>) {
        self.loading = false;
        match outcome {
            Ok(()) => {
                self.submitted = true;
                self.error = None;
            }
            Err(cause) => {
                warn!("submission failed: {cause}");
                self.error = Some(SUBMIT_FAILED.to_string());
            }
        }
    }

    /// Drive a Next event, delivering through `sink` when the event completes
    /// the wizard. Returns the advance outcome.
    pub async fn advance_with(&mut self, sink: &dyn IdeaSink) -> Advance {
        match self.next() {
            Advance::Submit(submission) => {
                let outcome = sink.deliver(&submission).await;
                self.complete_submission(outcome);
                Advance::Submit(submission)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::questions::OTHER_PLATFORM;
    use crate::validate::ValidationError;

    fn answered_through_platform() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.set_text_answer("idea", "X");
        assert_eq!(wizard.next(), Advance::Moved);
        wizard.set_text_answer("problem", "Y");
        assert_eq!(wizard.next(), Advance::Moved);
        wizard.toggle_platform("Browser");
        assert_eq!(wizard.next(), Advance::Moved);
        wizard
    }

    #[test]
    fn empty_required_answers_never_advance() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.next(), Advance::Stayed);
        assert_eq!(wizard.step(), 0);
        assert_eq!(wizard.error(), Some(ValidationError::MissingAnswer.to_string().as_str()));
    }

    #[test]
    fn valid_answer_advances_and_clears_the_error() {
        let mut wizard = Wizard::new();
        wizard.next();
        assert!(wizard.error().is_some());
        wizard.set_text_answer("idea", "a task manager");
        assert_eq!(wizard.next(), Advance::Moved);
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn platform_step_enforces_selection_rules() {
        let mut wizard = answered_through_platform();
        // walk back to the platform step and break the selection
        wizard.previous();
        assert_eq!(wizard.step(), 2);
        wizard.toggle_platform("Browser");
        assert_eq!(wizard.next(), Advance::Stayed);
        assert_eq!(
            wizard.error(),
            Some(ValidationError::PlatformRequired.to_string().as_str())
        );

        wizard.toggle_platform(OTHER_PLATFORM);
        assert_eq!(wizard.next(), Advance::Stayed);
        wizard.set_platform_other("a smart fridge");
        assert_eq!(wizard.next(), Advance::Moved);
    }

    #[test]
    fn optional_question_advances_empty() {
        let mut wizard = answered_through_platform();
        assert_eq!(wizard.step(), 3);
        assert_eq!(wizard.next(), Advance::Moved);
        assert_eq!(wizard.step(), QUESTIONS.len());
    }

    #[test]
    fn previous_is_a_noop_at_step_zero_and_keeps_answers() {
        let mut wizard = Wizard::new();
        wizard.previous();
        assert_eq!(wizard.step(), 0);

        wizard.set_text_answer("idea", "X");
        wizard.next();
        wizard.previous();
        assert_eq!(wizard.step(), 0);
        assert_eq!(wizard.answers().text("idea"), "X");
    }

    #[test]
    fn notification_step_requires_a_method_and_valid_contact() {
        let mut wizard = answered_through_platform();
        wizard.next();
        assert_eq!(wizard.step(), QUESTIONS.len());

        assert_eq!(wizard.next(), Advance::Stayed);
        assert_eq!(
            wizard.error(),
            Some(ValidationError::MethodRequired.to_string().as_str())
        );

        wizard.choose_method(NotifyMethod::Email);
        wizard.set_contact("not-an-email");
        assert_eq!(wizard.next(), Advance::Stayed);
        assert_eq!(
            wizard.error(),
            Some(ValidationError::InvalidEmail.to_string().as_str())
        );

        wizard.set_contact("a@b.co");
        let advance = wizard.next();
        let Advance::Submit(submission) = advance else {
            panic!("expected a submission, got {advance:?}");
        };
        assert!(wizard.is_loading());
        assert_eq!(wizard.error(), None);
        assert_eq!(submission.footer_text(), Some("Email: a@b.co"));
    }

    #[test]
    fn events_are_noops_while_loading() {
        let mut wizard = answered_through_platform();
        wizard.next();
        wizard.choose_method(NotifyMethod::Email);
        wizard.set_contact("a@b.co");
        assert!(matches!(wizard.next(), Advance::Submit(_)));

        assert_eq!(wizard.next(), Advance::Stayed);
        wizard.previous();
        assert_eq!(wizard.step(), QUESTIONS.len());
    }

    #[test]
    fn failed_delivery_returns_to_the_notification_step() {
        let mut wizard = answered_through_platform();
        wizard.next();
        wizard.choose_method(NotifyMethod::Email);
        wizard.set_contact("a@b.co");
        assert!(matches!(wizard.next(), Advance::Submit(_)));

        wizard.complete_submission(Err(SinkError::Status(500)));
        assert!(!wizard.is_submitted());
        assert!(!wizard.is_loading());
        assert_eq!(wizard.step(), QUESTIONS.len());
        assert_eq!(wizard.error(), Some(SUBMIT_FAILED));

        // resubmission is a plain Next again
        assert!(matches!(wizard.next(), Advance::Submit(_)));
        wizard.complete_submission(Ok(()));
        assert!(wizard.is_submitted());
        assert!(!wizard.is_loading());
        assert_eq!(wizard.error(), None);
    }

    #[test]
    fn restart_resets_everything() {
        let mut wizard = answered_through_platform();
        wizard.next();
        wizard.choose_method(NotifyMethod::Email);
        wizard.set_contact("a@b.co");
        assert!(matches!(wizard.next(), Advance::Submit(_)));
        wizard.complete_submission(Ok(()));
        assert!(wizard.is_submitted());

        wizard.restart();
        assert_eq!(wizard.step(), 0);
        assert_eq!(wizard.answers().text("idea"), "");
        assert!(wizard.answers().platforms().is_empty());
        assert_eq!(wizard.method(), None);
        assert_eq!(wizard.contact(), "");
        assert!(!wizard.is_submitted());
        assert!(!wizard.is_loading());
        assert_eq!(wizard.error(), None);
    }
}
