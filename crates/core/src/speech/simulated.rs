//! Speech engine that produces no audio and paces utterances by word count.
//!
//! Used on hosts without a speech synthesiser, so narration state still moves through
//! `Playing` and back to `Idle` on its own.

use super::{
    OutcomeSender, Playback, SpeechEngine, SpeechError, SpeechOptions, Utterance, UtteranceOutcome,
};
use crate::constants::SIMULATED_WORDS_PER_MINUTE;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};

#[derive(Debug)]
pub struct SimulatedSpeechEngine {
    words_per_minute: u32,
    current: Mutex<Option<Playback>>,
}

impl SimulatedSpeechEngine {
    pub fn new(words_per_minute: u32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
            current: Mutex::new(None),
        }
    }

    /// How long `text` takes to narrate at the given rate multiplier.
    pub fn duration_for(&self, text: &str, rate: f32) -> Duration {
        let words = text.split_whitespace().count() as f64;
        let per_minute = f64::from(self.words_per_minute) * f64::from(rate.max(0.1));
        Duration::from_secs_f64(words * 60.0 / per_minute)
    }
}

impl Default for SimulatedSpeechEngine {
    fn default() -> Self {
        Self::new(SIMULATED_WORDS_PER_MINUTE)
    }
}

#[async_trait]
impl SpeechEngine for SimulatedSpeechEngine {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        let playback = self.current.lock().await.take();
        if let Some(playback) = playback {
            playback.halt().await;
        }
        Ok(())
    }

    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<Utterance, SpeechError> {
        let mut current = self.current.lock().await;
        if let Some(playback) = current.take() {
            playback.halt().await;
        }

        let duration = self.duration_for(text, options.rate);
        tracing::debug!("simulating {:?} of narration", duration);

        let (outcome_tx, utterance) = Utterance::channel();
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(pace(duration, stop_rx, outcome_tx));
        *current = Some(Playback::new(stop_tx, task));

        Ok(utterance)
    }
}

async fn pace(duration: Duration, stop_rx: oneshot::Receiver<()>, outcome_tx: OutcomeSender) {
    let outcome = tokio::select! {
        _ = tokio::time::sleep(duration) => UtteranceOutcome::Done,
        _ = stop_rx => UtteranceOutcome::Stopped,
    };
    outcome_tx.finish(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_scales_with_words_and_rate() {
        let engine = SimulatedSpeechEngine::new(60);
        assert_eq!(engine.duration_for("bir iki üç", 1.0), Duration::from_secs(3));
        assert_eq!(engine.duration_for("bir iki üç", 2.0), Duration::from_millis(1500));
        assert_eq!(engine.duration_for("", 1.0), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_paced_duration() {
        let engine = SimulatedSpeechEngine::new(60);
        let utterance = engine
            .speak("bir iki", &SpeechOptions::default())
            .await
            .expect("speak");
        assert_eq!(utterance.outcome().await, UtteranceOutcome::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_utterance_early() {
        let engine = SimulatedSpeechEngine::new(1);
        let utterance = engine
            .speak("uzun bir anlatım metni", &SpeechOptions::default())
            .await
            .expect("speak");
        engine.stop().await.expect("stop");
        assert_eq!(utterance.outcome().await, UtteranceOutcome::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn new_utterance_stops_the_previous_one() {
        let engine = SimulatedSpeechEngine::new(1);
        let first = engine
            .speak("ilk metin", &SpeechOptions::default())
            .await
            .expect("speak first");
        let _second = engine
            .speak("ikinci metin", &SpeechOptions::default())
            .await
            .expect("speak second");
        assert_eq!(first.outcome().await, UtteranceOutcome::Stopped);
    }
}
