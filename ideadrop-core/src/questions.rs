//! Fixed question catalog for the idea wizard.
//!
//! The catalog is ordered; the wizard's step index points into it, with one
//! extra virtual step (the notification method) past the end.

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-form text answer.
    Text,
    /// Multi-select platform choice with an optional "Other" elaboration.
    Platform,
}

/// A single selectable platform option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformOption {
    pub value: &'static str,
    pub icon: &'static str,
}

/// One prompt in the wizard sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Unique key, also the field name in the outbound payload.
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: Option<&'static str>,
    pub required: bool,
    pub kind: QuestionKind,
}

/// Key of the platform question.
pub const PLATFORM_KEY: &str = "platform";

/// Option label that opens the free-text elaboration box.
pub const OTHER_PLATFORM: &str = "Other";

pub const PLATFORM_OPTIONS: &[PlatformOption] = &[
    PlatformOption {
        value: "Browser",
        icon: "🌐",
    },
    PlatformOption {
        value: "iOS",
        icon: "🍎",
    },
    PlatformOption {
        value: "Android",
        icon: "🤖",
    },
    PlatformOption {
        value: "Windows",
        icon: "🪟",
    },
    PlatformOption {
        value: "Mac",
        icon: "🖥️",
    },
    PlatformOption {
        value: "Linux",
        icon: "🐧",
    },
    PlatformOption {
        value: OTHER_PLATFORM,
        icon: "✏️",
    },
];

pub const QUESTIONS: &[Question] = &[
    Question {
        key: "idea",
        label: "What's your software idea?",
        description: "Describe your software concept in detail. What would it do?",
        placeholder: Some("e.g. A task management app that integrates with your calendar"),
        required: true,
        kind: QuestionKind::Text,
    },
    Question {
        key: "problem",
        label: "What problem would it solve?",
        description: "Explain the problem your idea addresses.",
        placeholder: Some("e.g. It helps users organize their tasks more effectively."),
        required: true,
        kind: QuestionKind::Text,
    },
    Question {
        key: PLATFORM_KEY,
        label: "What platform would it be on?",
        description: "Select your target platform.",
        placeholder: None,
        required: true,
        kind: QuestionKind::Platform,
    },
    Question {
        key: "unique",
        label: "Any unique features?",
        description: "Share what sets your idea apart.",
        placeholder: None,
        required: false,
        kind: QuestionKind::Text,
    },
];
