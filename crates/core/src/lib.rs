//! # KalpSağlık Core
//!
//! Behaviour of the patient-education service, independent of any transport:
//! - narration: the single-active-utterance state machine owned by each screen instance
//! - speech: the speech-engine boundary and its process-backed and simulated engines
//! - render: mapping of content sections to render blocks and plain text
//! - screens: home and topic view models with their narration controls
//! - notify: delivery of fixed notices to the user
//!
//! **No API concerns**: HTTP routing, wire types and CLI parsing belong in `api-rest`,
//! `api-shared` and `kalp-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod narration;
pub mod notify;
pub mod render;
pub mod screens;
pub mod speech;

pub use config::{CoreConfig, SpeechEngineKind};
pub use constants::DEFAULT_REST_ADDR;
pub use error::{KalpError, KalpResult};
pub use narration::{NarrationController, NarrationState};
pub use notify::{LogNotifier, NoticeQueue, Notifier};
pub use render::{CalloutTone, NumberedStep, RenderBlock};
pub use screens::{HomeScreen, HomeView, NavLink, TopicCard, TopicScreen, TopicView};
pub use speech::{
    CommandSpeechEngine, SimulatedSpeechEngine, SpeechCommand, SpeechEngine, SpeechError,
    SpeechOptions, Utterance, UtteranceOutcome,
};

// Content types are part of this crate's public surface.
pub use kalp_content as content;
