//! Tagged answer storage.
//!
//! Text questions map to plain strings; the platform question maps to a
//! selection set plus an optional "Other" elaboration. The platform selection
//! is always present, never absent, so the wizard can toggle options without
//! first materializing a slot for them.

use std::collections::HashMap;

use crate::questions::{OTHER_PLATFORM, QUESTIONS, QuestionKind};

/// Chosen platform options in selection order, plus the free-text detail
/// entered when "Other" is among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformSelection {
    selected: Vec<String>,
    other_detail: Option<String>,
}

impl PlatformSelection {
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|chosen| chosen == value)
    }

    /// Select `value` if absent, deselect it otherwise.
    pub fn toggle(&mut self, value: &str) {
        if let Some(index) = self.selected.iter().position(|chosen| chosen == value) {
            self.selected.remove(index);
        } else {
            self.selected.push(value.to_string());
        }
    }

    /// Replace the whole selection, keeping the "Other" detail as typed.
    pub fn set_selected(&mut self, values: Vec<String>) {
        self.selected = values;
    }

    /// The "Other" elaboration, if one was entered. Whitespace-only input
    /// counts as not entered.
    pub fn other_detail(&self) -> Option<&str> {
        self.other_detail.as_deref()
    }

    pub fn set_other_detail(&mut self, detail: impl Into<String>) {
        let detail = detail.into();
        self.other_detail = if detail.trim().is_empty() {
            None
        } else {
            Some(detail)
        };
    }

    pub fn other_selected(&self) -> bool {
        self.contains(OTHER_PLATFORM)
    }

    /// Display string for the outbound payload: options joined with `", "`,
    /// with the "Other" detail appended in parentheses when present.
    pub fn display(&self) -> String {
        let mut rendered = self.selected.join(", ");
        if self.other_selected() {
            if let Some(detail) = self.other_detail() {
                rendered.push_str(&format!(" (Other: {detail})"));
            }
        }
        rendered
    }
}

/// Answers collected so far, tagged per question key.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    texts: HashMap<String, String>,
    platforms: PlatformSelection,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text answer for `key`, or the empty string when unanswered.
    pub fn text(&self, key: &str) -> &str {
        self.texts.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.texts.insert(key.to_string(), value.into());
    }

    pub fn platforms(&self) -> &PlatformSelection {
        &self.platforms
    }

    pub fn platforms_mut(&mut self) -> &mut PlatformSelection {
        &mut self.platforms
    }

    /// Ordered `(key, display value)` pairs in catalog order. Unanswered
    /// questions yield empty strings; the payload layer substitutes its
    /// placeholder.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        QUESTIONS
            .iter()
            .map(|question| {
                let value = match question.kind {
                    QuestionKind::Platform => self.platforms.display(),
                    QuestionKind::Text => self.text(question.key).to_string(),
                };
                (question.key, value)
            })
            .collect()
    }
}
