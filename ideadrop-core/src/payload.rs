//! Outbound embed payload formatting.
//!
//! Pure functions from the answer set plus notification choice to the wire
//! shape the sink posts: `{"embeds": [embed]}` with a fixed title and accent
//! color, one field per catalog question, and a footer combining the
//! notification method with its contact value.

use serde::Serialize;

use crate::answers::AnswerSet;
use crate::wizard::NotifyMethod;

pub const EMBED_TITLE: &str = "New Software Idea Submission";
pub const EMBED_COLOR: u32 = 0xef88f8;

/// Rendered in place of an empty answer.
pub const EMPTY_ANSWER: &str = "(No answer)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub color: u32,
}

/// The complete request body for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    /// Field value for `name` in the first embed, if present. Convenience for
    /// tests and summaries.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.embeds.first().and_then(|embed| {
            embed
                .fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| field.value.as_str())
        })
    }

    pub fn footer_text(&self) -> Option<&str> {
        self.embeds.first().map(|embed| embed.footer.text.as_str())
    }
}

/// Build the outbound payload for a finished wizard run.
pub fn build_payload(answers: &AnswerSet, method: NotifyMethod, contact: &str) -> WebhookPayload {
    let fields = answers
        .entries()
        .into_iter()
        .map(|(name, value)| EmbedField {
            name: name.to_string(),
            value: if value.is_empty() {
                EMPTY_ANSWER.to_string()
            } else {
                value
            },
            inline: false,
        })
        .collect();

    WebhookPayload {
        embeds: vec![Embed {
            title: EMBED_TITLE.to_string(),
            fields,
            footer: EmbedFooter {
                text: format!("{}: {}", method.label(), contact),
            },
            color: EMBED_COLOR,
        }],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::questions::OTHER_PLATFORM;

    fn sample_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        answers.set_text("idea", "X");
        answers.set_text("problem", "Y");
        answers.platforms_mut().toggle("Browser");
        answers
    }

    #[test]
    fn fields_follow_catalog_order_with_placeholder() {
        let payload = build_payload(&sample_answers(), NotifyMethod::Email, "a@b.co");
        let embed = &payload.embeds[0];
        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["idea", "problem", "platform", "unique"]);
        assert_eq!(payload.field_value("platform"), Some("Browser"));
        assert_eq!(payload.field_value("unique"), Some(EMPTY_ANSWER));
        assert!(embed.fields.iter().all(|field| !field.inline));
    }

    #[test]
    fn footer_combines_method_and_contact() {
        let payload = build_payload(&sample_answers(), NotifyMethod::Email, "a@b.co");
        assert_eq!(payload.footer_text(), Some("Email: a@b.co"));
    }

    #[test]
    fn other_platform_detail_lands_in_the_platform_field() {
        let mut answers = sample_answers();
        answers.platforms_mut().toggle(OTHER_PLATFORM);
        answers.platforms_mut().set_other_detail("a smart fridge");
        let payload = build_payload(&answers, NotifyMethod::Discord, "jay#0001");
        assert_eq!(
            payload.field_value("platform"),
            Some("Browser, Other (Other: a smart fridge)")
        );
    }

    #[test]
    fn wire_shape_matches_the_embed_contract() {
        let payload = build_payload(&sample_answers(), NotifyMethod::Email, "a@b.co");
        let encoded = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(
            encoded,
            json!({
                "embeds": [{
                    "title": EMBED_TITLE,
                    "fields": [
                        {"name": "idea", "value": "X", "inline": false},
                        {"name": "problem", "value": "Y", "inline": false},
                        {"name": "platform", "value": "Browser", "inline": false},
                        {"name": "unique", "value": EMPTY_ANSWER, "inline": false},
                    ],
                    "footer": {"text": "Email: a@b.co"},
                    "color": 0xef88f8,
                }]
            })
        );
    }
}
