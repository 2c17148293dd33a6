//! Speech-engine boundary.
//!
//! An engine exposes two requests: `stop`, which returns once any in-flight audio has ceased,
//! and `speak`, which starts an utterance and returns an [`Utterance`] handle. The utterance's
//! single outcome (done, stopped or error) arrives later on that handle, out of band from the
//! `speak` request itself.

mod command;
mod simulated;

pub use command::{CommandSpeechEngine, SpeechCommand};
pub use simulated::SimulatedSpeechEngine;

use crate::constants::{SPEECH_LOCALE, SPEECH_PITCH, SPEECH_RATE};
use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech command is empty")]
    EmptyCommand,
    #[error("failed to start speech command `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("speech engine unavailable: {0}")]
    Unavailable(String),
}

/// Language and prosody for an utterance.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechOptions {
    pub language: String,
    pub pitch: f32,
    pub rate: f32,
}

impl SpeechOptions {
    /// Primary language subtag, e.g. `tr` for `tr-TR`.
    pub fn primary_language(&self) -> String {
        self.language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for SpeechOptions {
    /// The fixed narration options: Turkish, normal pitch, slightly slowed rate.
    fn default() -> Self {
        Self {
            language: SPEECH_LOCALE.into(),
            pitch: SPEECH_PITCH,
            rate: SPEECH_RATE,
        }
    }
}

/// Terminal outcome of one utterance. Exactly one is delivered per utterance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UtteranceOutcome {
    Done,
    Stopped,
    Error(String),
}

/// Handle to a started utterance.
#[derive(Debug)]
pub struct Utterance {
    outcome: oneshot::Receiver<UtteranceOutcome>,
}

/// Engine side of an [`Utterance`].
#[derive(Debug)]
pub struct OutcomeSender(oneshot::Sender<UtteranceOutcome>);

impl OutcomeSender {
    pub fn finish(self, outcome: UtteranceOutcome) {
        // The receiver may already be gone if its screen was torn down.
        let _ = self.0.send(outcome);
    }
}

impl Utterance {
    /// Creates a linked sender/handle pair.
    pub fn channel() -> (OutcomeSender, Utterance) {
        let (tx, rx) = oneshot::channel();
        (OutcomeSender(tx), Utterance { outcome: rx })
    }

    /// Waits for the utterance to end.
    ///
    /// An engine that drops the utterance without reporting is treated as having stopped it.
    pub async fn outcome(self) -> UtteranceOutcome {
        self.outcome.await.unwrap_or(UtteranceOutcome::Stopped)
    }
}

/// Host text-to-speech engine.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Engine name for logs.
    fn name(&self) -> &str;

    /// Stops any in-progress utterance. Safe to call when nothing is playing.
    async fn stop(&self) -> Result<(), SpeechError>;

    /// Starts speaking `text`.
    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<Utterance, SpeechError>;
}

/// A playing utterance owned by an engine, stoppable from outside its task.
#[derive(Debug)]
pub(crate) struct Playback {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl Playback {
    pub(crate) fn new(stop: oneshot::Sender<()>, task: JoinHandle<()>) -> Self {
        Self { stop, task }
    }

    /// Signals the playback task and waits until it has finished.
    pub(crate) async fn halt(self) {
        let _ = self.stop.send(());
        if let Err(e) = self.task.await {
            tracing::warn!("speech playback task ended abnormally: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_fixed_turkish_narration() {
        let options = SpeechOptions::default();
        assert_eq!(options.language, "tr-TR");
        assert_eq!(options.pitch, 1.0);
        assert_eq!(options.rate, 0.88);
        assert_eq!(options.primary_language(), "tr");
    }

    #[tokio::test]
    async fn dropped_sender_reads_as_stopped() {
        let (tx, utterance) = Utterance::channel();
        drop(tx);
        assert_eq!(utterance.outcome().await, UtteranceOutcome::Stopped);
    }

    #[tokio::test]
    async fn outcome_is_delivered_once() {
        let (tx, utterance) = Utterance::channel();
        tx.finish(UtteranceOutcome::Error("no audio device".into()));
        assert_eq!(
            utterance.outcome().await,
            UtteranceOutcome::Error("no audio device".into())
        );
    }
}
