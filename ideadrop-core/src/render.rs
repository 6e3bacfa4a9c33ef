//! UI-toolkit-independent render model.
//!
//! The wizard exposes rendering as a pure function of its state; front-ends
//! draw whatever the model says without consulting the state machine again.

use crate::questions::{PLATFORM_OPTIONS, QUESTIONS};
use crate::wizard::{NotifyMethod, Wizard};

/// 1-based position across the question steps plus the notification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// Completed fraction in `[0, 1]`, for progress-bar rendering.
    pub fn fraction(self) -> f32 {
        self.position as f32 / self.total as f32
    }
}

/// One platform choice with its current checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// Entry widget for the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryView {
    Text {
        current: String,
    },
    Platform {
        options: Vec<OptionView>,
        other_detail: Option<String>,
        /// The elaboration box is only drawn while "Other" is checked.
        show_other_entry: bool,
    },
}

/// One notification method choice with its current checked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodView {
    pub method: NotifyMethod,
    pub chosen: bool,
}

/// What the front-end should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Question {
        key: &'static str,
        label: &'static str,
        description: &'static str,
        placeholder: Option<&'static str>,
        entry: EntryView,
    },
    Notification {
        methods: Vec<MethodView>,
        contact: String,
    },
    Submitted {
        heading: &'static str,
        message: &'static str,
        restart_label: &'static str,
    },
}

/// Navigation button states and the forward button's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub forward_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub progress: Progress,
    pub screen: Screen,
    pub error: Option<String>,
    pub loading: bool,
    pub controls: Controls,
}

pub fn render(wizard: &Wizard) -> RenderModel {
    let total = QUESTIONS.len() + 1;
    let progress = Progress {
        position: wizard.step() + 1,
        total,
    };

    let screen = if wizard.is_submitted() {
        Screen::Submitted {
            heading: "Thank you for sharing your idea!",
            message: "If your idea gets developed, you'll be notified via your chosen method.",
            restart_label: "Submit Another Idea",
        }
    } else if wizard.step() < QUESTIONS.len() {
        let question = &QUESTIONS[wizard.step()];
        let entry = match question.kind {
            crate::questions::QuestionKind::Platform => {
                let selection = wizard.answers().platforms();
                EntryView::Platform {
                    options: PLATFORM_OPTIONS
                        .iter()
                        .map(|option| OptionView {
                            value: option.value,
                            icon: option.icon,
                            selected: selection.contains(option.value),
                        })
                        .collect(),
                    other_detail: selection.other_detail().map(str::to_string),
                    show_other_entry: selection.other_selected(),
                }
            }
            crate::questions::QuestionKind::Text => EntryView::Text {
                current: wizard.answers().text(question.key).to_string(),
            },
        };
        Screen::Question {
            key: question.key,
            label: question.label,
            description: question.description,
            placeholder: question.placeholder,
            entry,
        }
    } else {
        Screen::Notification {
            methods: NotifyMethod::ALL
                .into_iter()
                .map(|method| MethodView {
                    method,
                    chosen: wizard.method() == Some(method),
                })
                .collect(),
            contact: wizard.contact().to_string(),
        }
    };

    let on_question_steps = wizard.step() < QUESTIONS.len();
    let controls = if wizard.is_submitted() {
        Controls {
            back_enabled: false,
            forward_enabled: false,
            forward_label: "Submit",
        }
    } else {
        Controls {
            back_enabled: wizard.step() > 0 && !wizard.is_loading(),
            forward_enabled: !wizard.is_loading(),
            forward_label: if on_question_steps {
                "Next"
            } else if wizard.is_loading() {
                "Submitting..."
            } else {
                "Submit"
            },
        }
    };

    RenderModel {
        progress,
        screen,
        error: wizard.error().map(str::to_string),
        loading: wizard.is_loading(),
        controls,
    }
}
