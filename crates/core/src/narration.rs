//! Narration playback state machine.
//!
//! A [`NarrationController`] belongs to one screen instance and mediates between that screen's
//! play/pause controls and the speech engine. It guarantees at most one active utterance and keeps
//! its observable [`NarrationState`] in line with what the engine reports, even when outcomes
//! arrive late.
//!
//! ```text
//! Idle        --toggle(id)-------------------> Playing(id)
//! Playing(id) --toggle(id)-------------------> Idle
//! Playing(id) --toggle(other)----------------> Playing(other)   (stop, then start)
//! Playing(id) --engine done/stopped/error----> Idle
//! ```
//!
//! Every toggle first asks the engine to stop and waits for that to finish before anything else
//! happens. Done and stopped outcomes only clear the state if it still belongs to the utterance
//! they were reported for. An error outcome always resets to `Idle` and raises one narration
//! failure notice.

use crate::notify::Notifier;
use crate::speech::{SpeechEngine, SpeechOptions, Utterance, UtteranceOutcome};
use kalp_content::Notice;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

/// Which catalog entry, if any, is currently being narrated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "id", rename_all = "lowercase")]
pub enum NarrationState {
    #[default]
    Idle,
    Playing(String),
}

impl NarrationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, NarrationState::Idle)
    }

    pub fn is_playing(&self, id: &str) -> bool {
        matches!(self, NarrationState::Playing(active) if active == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        match self {
            NarrationState::Idle => None,
            NarrationState::Playing(id) => Some(id),
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    /// Incremented whenever a new utterance starts or the active one is dropped.
    utterance: AtomicU64,
    torn_down: AtomicBool,
}

pub struct NarrationController {
    engine: Arc<dyn SpeechEngine>,
    notifier: Arc<dyn Notifier>,
    options: SpeechOptions,
    state: Arc<watch::Sender<NarrationState>>,
    shared: Arc<Shared>,
    toggle_lock: Mutex<()>,
    watchers: std::sync::Mutex<Vec<JoinHandle<()>>>,
}

impl NarrationController {
    /// Creates an idle controller using the fixed narration options.
    pub fn new(engine: Arc<dyn SpeechEngine>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_options(engine, notifier, SpeechOptions::default())
    }

    pub fn with_options(
        engine: Arc<dyn SpeechEngine>,
        notifier: Arc<dyn Notifier>,
        options: SpeechOptions,
    ) -> Self {
        let (state, _) = watch::channel(NarrationState::Idle);
        Self {
            engine,
            notifier,
            options,
            state: Arc::new(state),
            shared: Arc::new(Shared::default()),
            toggle_lock: Mutex::new(()),
            watchers: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Current state.
    pub fn state(&self) -> NarrationState {
        self.state.borrow().clone()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.state.borrow().is_playing(id)
    }

    /// Receives every state change, including those caused by engine outcomes.
    pub fn subscribe(&self) -> watch::Receiver<NarrationState> {
        self.state.subscribe()
    }

    pub fn is_torn_down(&self) -> bool {
        self.shared.torn_down.load(Ordering::SeqCst)
    }

    /// Starts narrating `script` for `target_id`, or stops it if `target_id` is already playing.
    ///
    /// Whatever is playing is stopped first, and the stop is awaited before a new utterance is
    /// requested. Engine failures are not returned: a failed stop is logged, and a failed start
    /// is handled like an error outcome. Does nothing once the controller has been torn down.
    pub async fn toggle(&self, target_id: &str, script: &str) {
        let _guard = self.toggle_lock.lock().await;
        if self.is_torn_down() {
            tracing::debug!("ignoring narration toggle for {target_id}: screen torn down");
            return;
        }

        let was_active = self.is_playing(target_id);

        if let Err(e) = self.engine.stop().await {
            tracing::warn!("{} failed to stop narration: {e}", self.engine.name());
        }

        if was_active {
            self.shared.utterance.fetch_add(1, Ordering::SeqCst);
            self.state.send_if_modified(|state| {
                let changed = !state.is_idle();
                *state = NarrationState::Idle;
                changed
            });
            tracing::info!("narration paused: {target_id}");
            return;
        }

        let generation = self.shared.utterance.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .send_replace(NarrationState::Playing(target_id.to_string()));
        tracing::info!("narration started: {target_id}");

        let completion = Completion {
            target_id: target_id.to_string(),
            generation,
            state: Arc::clone(&self.state),
            shared: Arc::clone(&self.shared),
            notifier: Arc::clone(&self.notifier),
        };

        match self.engine.speak(script, &self.options).await {
            Ok(utterance) => self.watch_utterance(utterance, completion),
            Err(e) => completion.apply(UtteranceOutcome::Error(e.to_string())),
        }
    }

    /// Stops narration for good.
    ///
    /// Issues an unconditional stop, resets to `Idle`, and detaches from any outstanding
    /// utterance so no later outcome changes state or raises a notice. Safe to call repeatedly.
    pub async fn teardown(&self) {
        self.shared.torn_down.store(true, Ordering::SeqCst);
        let _guard = self.toggle_lock.lock().await;

        self.abort_watchers();
        self.state.send_if_modified(|state| {
            let changed = !state.is_idle();
            *state = NarrationState::Idle;
            changed
        });

        if let Err(e) = self.engine.stop().await {
            tracing::warn!("{} failed to stop narration on teardown: {e}", self.engine.name());
        }
    }

    fn watch_utterance(&self, utterance: Utterance, completion: Completion) {
        let handle = tokio::spawn(async move {
            let outcome = utterance.outcome().await;
            completion.apply(outcome);
        });

        let mut watchers = self
            .watchers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        watchers.retain(|h| !h.is_finished());
        watchers.push(handle);
    }

    fn abort_watchers(&self) {
        let watchers = std::mem::take(
            &mut *self
                .watchers
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in watchers {
            handle.abort();
        }
    }
}

impl Drop for NarrationController {
    fn drop(&mut self) {
        self.abort_watchers();
        if self.shared.torn_down.swap(true, Ordering::SeqCst) || self.state.borrow().is_idle() {
            return;
        }

        // Dropped mid-utterance without teardown: still make sure the audio stops.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let engine = Arc::clone(&self.engine);
            handle.spawn(async move {
                if let Err(e) = engine.stop().await {
                    tracing::warn!("{} failed to stop narration on drop: {e}", engine.name());
                }
            });
        }
    }
}

impl std::fmt::Debug for NarrationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrationController")
            .field("engine", &self.engine.name())
            .field("state", &*self.state.borrow())
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}

/// Applies one utterance's outcome to the controller it was started from.
struct Completion {
    target_id: String,
    generation: u64,
    state: Arc<watch::Sender<NarrationState>>,
    shared: Arc<Shared>,
    notifier: Arc<dyn Notifier>,
}

impl Completion {
    fn apply(self, outcome: UtteranceOutcome) {
        if self.shared.torn_down.load(Ordering::SeqCst) {
            return;
        }

        match outcome {
            UtteranceOutcome::Done | UtteranceOutcome::Stopped => {
                let cleared = self.state.send_if_modified(|state| {
                    let current = self.shared.utterance.load(Ordering::SeqCst) == self.generation;
                    if current && state.is_playing(&self.target_id) {
                        *state = NarrationState::Idle;
                        true
                    } else {
                        false
                    }
                });
                if cleared {
                    tracing::info!("narration ended ({outcome:?}): {}", self.target_id);
                }
            }
            UtteranceOutcome::Error(reason) => {
                tracing::warn!("narration failed for {}: {reason}", self.target_id);
                self.notifier.notify(Notice::narration_failure());
                self.state.send_if_modified(|state| {
                    let changed = !state.is_idle();
                    *state = NarrationState::Idle;
                    changed
                });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use kalp_content::NoticeKind;

    fn controller(
        engine: &Arc<ScriptedEngine>,
        notifier: &Arc<RecordingNotifier>,
    ) -> NarrationController {
        NarrationController::new(engine.clone(), notifier.clone())
    }

    #[tokio::test]
    async fn starts_idle() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        assert_eq!(narration.state(), NarrationState::Idle);
        assert!(engine.calls().is_empty());
    }

    #[tokio::test]
    async fn toggling_the_same_target_twice_plays_then_pauses() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.toggle("genel", "Genel Bilgiler.").await;
        assert_eq!(narration.state(), NarrationState::Playing("genel".into()));

        narration.toggle("genel", "Genel Bilgiler.").await;
        assert_eq!(narration.state(), NarrationState::Idle);

        assert_eq!(
            engine.calls(),
            [
                EngineCall::Stop,
                EngineCall::Speak("Genel Bilgiler.".into()),
                EngineCall::Stop,
            ]
        );
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn switching_targets_stops_before_starting() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.toggle("genel", "script genel").await;
        assert_eq!(narration.state(), NarrationState::Playing("genel".into()));

        narration.toggle("oncesi", "script oncesi").await;
        yield_a_few().await;

        assert_eq!(
            engine.calls(),
            [
                EngineCall::Stop,
                EngineCall::Speak("script genel".into()),
                EngineCall::Stop,
                EngineCall::Speak("script oncesi".into()),
            ]
        );
        // The superseded utterance's late "stopped" must not clear the new one.
        assert_eq!(narration.state(), NarrationState::Playing("oncesi".into()));
    }

    #[tokio::test]
    async fn at_most_one_target_is_ever_playing() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        for id in ["genel", "oncesi", "oncesi", "ameliyat", "videolar", "genel", "ayarlar"] {
            narration.toggle(id, id).await;
            yield_a_few().await;
            let playing: Vec<_> = ["genel", "oncesi", "ameliyat", "videolar", "ayarlar"]
                .into_iter()
                .filter(|candidate| narration.is_playing(candidate))
                .collect();
            assert!(playing.len() <= 1, "several targets playing: {playing:?}");
        }
        assert_eq!(narration.state(), NarrationState::Playing("ayarlar".into()));
    }

    #[tokio::test]
    async fn completion_returns_to_idle() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        let mut rx = narration.subscribe();

        narration.toggle("videolar", "Videolar.").await;
        engine.finish(UtteranceOutcome::Done);

        settle(&mut rx, NarrationState::is_idle).await;
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn external_stop_returns_to_idle() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        let mut rx = narration.subscribe();

        narration.toggle("ayarlar", "Ayarlar.").await;
        engine.finish(UtteranceOutcome::Stopped);

        settle(&mut rx, NarrationState::is_idle).await;
    }

    #[tokio::test]
    async fn engine_error_resets_and_notifies_once() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        let mut rx = narration.subscribe();

        narration.toggle("ameliyat", "Ameliyathane.").await;
        engine.finish(UtteranceOutcome::Error("audio device busy".into()));

        settle(&mut rx, NarrationState::is_idle).await;
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::NarrationFailure);
    }

    #[tokio::test]
    async fn failed_start_is_treated_as_an_error_outcome() {
        let engine = ScriptedEngine::failing();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.toggle("genel", "Genel.").await;

        assert_eq!(narration.state(), NarrationState::Idle);
        assert_eq!(notifier.notices(), [Notice::narration_failure()]);
    }

    #[tokio::test]
    async fn retoggling_after_completion_starts_again() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        let mut rx = narration.subscribe();

        narration.toggle("genel", "Genel.").await;
        engine.finish(UtteranceOutcome::Done);
        settle(&mut rx, NarrationState::is_idle).await;

        narration.toggle("genel", "Genel.").await;
        assert_eq!(narration.state(), NarrationState::Playing("genel".into()));
    }

    #[tokio::test]
    async fn late_stop_from_a_replayed_target_does_not_clear_it() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);
        let mut rx = narration.subscribe();

        // Play, pause, play again before the first utterance's `Stopped` is observed.
        narration.toggle("genel", "Genel.").await;
        narration.toggle("genel", "Genel.").await;
        narration.toggle("genel", "Genel.").await;
        yield_a_few().await;

        assert_eq!(narration.state(), NarrationState::Playing("genel".into()));
        assert_eq!(
            engine.calls(),
            [
                EngineCall::Stop,
                EngineCall::Speak("Genel.".into()),
                EngineCall::Stop,
                EngineCall::Stop,
                EngineCall::Speak("Genel.".into()),
            ]
        );

        engine.finish(UtteranceOutcome::Done);
        settle(&mut rx, NarrationState::is_idle).await;
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn teardown_stops_and_freezes_state() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.toggle("oncesi", "Öncesi.").await;
        narration.teardown().await;

        assert_eq!(engine.calls().last(), Some(&EngineCall::Stop));
        assert_eq!(narration.state(), NarrationState::Idle);
        assert!(narration.is_torn_down());

        let calls_after_teardown = engine.calls().len();
        narration.toggle("genel", "Genel.").await;
        engine.finish(UtteranceOutcome::Error("late".into()));
        yield_a_few().await;

        assert_eq!(engine.calls().len(), calls_after_teardown);
        assert_eq!(narration.state(), NarrationState::Idle);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn teardown_while_idle_still_issues_stop() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.teardown().await;
        narration.teardown().await;

        assert_eq!(engine.calls(), [EngineCall::Stop, EngineCall::Stop]);
    }

    #[tokio::test]
    async fn dropping_without_teardown_stops_the_engine() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let narration = controller(&engine, &notifier);

        narration.toggle("genel", "Genel.").await;
        drop(narration);
        yield_a_few().await;

        assert_eq!(engine.calls().last(), Some(&EngineCall::Stop));
    }

    #[tokio::test]
    async fn dropping_an_idle_controller_leaves_the_engine_alone() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        drop(controller(&engine, &notifier));
        yield_a_few().await;

        assert!(engine.calls().is_empty());
    }

    #[test]
    fn state_serialises_with_status_tag() {
        let playing = serde_json::to_string(&NarrationState::Playing("genel".into())).unwrap();
        assert_eq!(playing, r#"{"status":"playing","id":"genel"}"#);

        let idle = serde_json::to_string(&NarrationState::Idle).unwrap();
        assert_eq!(idle, r#"{"status":"idle"}"#);
    }
}
