//! Idea collection wizard: state machine, validation, payload formatting,
//! and webhook delivery.
//!
//! The wizard is a plain state machine with no UI toolkit attached: events go
//! in ([`Wizard::next`], [`Wizard::previous`], [`Wizard::restart`]), a
//! [`render::RenderModel`] comes out, and the only side effect is the webhook
//! POST a finished run issues through an injected [`webhook::IdeaSink`].

pub mod answers;
pub mod payload;
pub mod questions;
pub mod render;
pub mod share;
pub mod validate;
pub mod webhook;
pub mod wizard;

pub use answers::{AnswerSet, PlatformSelection};
pub use payload::{WebhookPayload, build_payload};
pub use render::RenderModel;
pub use validate::ValidationError;
pub use webhook::{IdeaSink, SinkError, WebhookSink};
pub use wizard::{Advance, NotifyMethod, SUBMIT_FAILED, Wizard};
