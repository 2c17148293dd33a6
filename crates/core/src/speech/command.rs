//! Speech engine backed by an external program such as `espeak-ng`.
//!
//! Each utterance runs one child process. The process exiting successfully completes the
//! utterance; being killed by [`SpeechEngine::stop`] reports it as stopped; failing to start or
//! exiting with a non-zero status reports an error.

use super::{
    OutcomeSender, Playback, SpeechEngine, SpeechError, SpeechOptions, Utterance, UtteranceOutcome,
};
use crate::constants::{DEFAULT_SPEECH_ARGS, DEFAULT_SPEECH_PROGRAM, ESPEAK_BASE_WPM};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::{oneshot, Mutex};

/// Program and argument template for the command engine.
///
/// Arguments may contain the placeholders `{voice}`, `{pitch}`, `{rate}` and `{text}`, which are
/// replaced per utterance. Pitch and rate are translated to espeak-ng units: pitch `0..=99` with
/// `50` as normal, rate in words per minute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechCommand {
    program: String,
    args: Vec<String>,
}

impl SpeechCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Result<Self, SpeechError> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(SpeechError::EmptyCommand);
        }
        Ok(Self { program, args })
    }

    /// Parses a whitespace-separated argument template.
    pub fn with_template(program: impl Into<String>, template: &str) -> Result<Self, SpeechError> {
        Self::new(
            program,
            template.split_whitespace().map(str::to_string).collect(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Expands the argument template for one utterance.
    pub fn build_args(&self, text: &str, options: &SpeechOptions) -> Vec<String> {
        let voice = options.primary_language();
        let pitch = espeak_pitch(options.pitch).to_string();
        let rate = espeak_rate(options.rate).to_string();

        self.args
            .iter()
            .map(|arg| {
                // `{text}` last so narration text containing placeholders is passed through intact.
                arg.replace("{voice}", &voice)
                    .replace("{pitch}", &pitch)
                    .replace("{rate}", &rate)
                    .replace("{text}", text)
            })
            .collect()
    }
}

impl Default for SpeechCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_SPEECH_PROGRAM.into(),
            args: DEFAULT_SPEECH_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn espeak_pitch(pitch: f32) -> u32 {
    (pitch * 50.0).round().clamp(0.0, 99.0) as u32
}

fn espeak_rate(rate: f32) -> u32 {
    (ESPEAK_BASE_WPM * rate).round().clamp(80.0, 450.0) as u32
}

/// Runs one child process per utterance.
#[derive(Debug)]
pub struct CommandSpeechEngine {
    command: SpeechCommand,
    current: Mutex<Option<Playback>>,
}

impl CommandSpeechEngine {
    pub fn new(command: SpeechCommand) -> Self {
        Self {
            command,
            current: Mutex::new(None),
        }
    }

    pub fn command(&self) -> &SpeechCommand {
        &self.command
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeechEngine {
    fn name(&self) -> &str {
        self.command.program()
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        let playback = self.current.lock().await.take();
        if let Some(playback) = playback {
            tracing::debug!("stopping `{}` utterance", self.command.program());
            playback.halt().await;
        }
        Ok(())
    }

    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<Utterance, SpeechError> {
        let mut current = self.current.lock().await;

        // One child at a time, even if the caller skipped `stop`.
        if let Some(playback) = current.take() {
            playback.halt().await;
        }

        let args = self.command.build_args(text, options);
        let child = Command::new(self.command.program())
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.command.program().to_string(),
                source,
            })?;

        tracing::debug!(
            "started `{}` utterance ({} chars)",
            self.command.program(),
            text.chars().count()
        );

        let (outcome_tx, utterance) = Utterance::channel();
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(run_child(child, stop_rx, outcome_tx));
        *current = Some(Playback::new(stop_tx, task));

        Ok(utterance)
    }
}

async fn run_child(
    mut child: tokio::process::Child,
    stop_rx: oneshot::Receiver<()>,
    outcome_tx: OutcomeSender,
) {
    let outcome = tokio::select! {
        status = child.wait() => match status {
            Ok(status) if status.success() => UtteranceOutcome::Done,
            Ok(status) => UtteranceOutcome::Error(format!("speech command exited with {status}")),
            Err(e) => UtteranceOutcome::Error(format!("failed to wait for speech command: {e}")),
        },
        _ = stop_rx => {
            if let Err(e) = child.kill().await {
                tracing::warn!("failed to kill speech command: {e}");
            }
            UtteranceOutcome::Stopped
        }
    };
    outcome_tx.finish(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_targets_espeak() {
        let command = SpeechCommand::default();
        assert_eq!(command.program(), "espeak-ng");

        let args = command.build_args("Merhaba", &SpeechOptions::default());
        assert_eq!(args, ["-v", "tr", "-p", "50", "-s", "154", "--", "Merhaba"]);
    }

    #[test]
    fn rejects_empty_program() {
        let err = SpeechCommand::new("  ", vec![]).expect_err("empty program");
        assert!(matches!(err, SpeechError::EmptyCommand));
    }

    #[test]
    fn template_is_split_on_whitespace() {
        let command = SpeechCommand::with_template("say", "-r {rate}  {text}").unwrap();
        assert_eq!(command.args(), ["-r", "{rate}", "{text}"]);
    }

    #[test]
    fn text_placeholders_are_not_expanded_twice() {
        let command = SpeechCommand::with_template("say", "{text}").unwrap();
        let args = command.build_args("{rate} kelimesi", &SpeechOptions::default());
        assert_eq!(args, ["{rate} kelimesi"]);
    }

    #[test]
    fn prosody_is_clamped_to_espeak_ranges() {
        assert_eq!(espeak_pitch(0.0), 0);
        assert_eq!(espeak_pitch(5.0), 99);
        assert_eq!(espeak_rate(0.1), 80);
        assert_eq!(espeak_rate(10.0), 450);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_exit_is_done() {
        let engine = CommandSpeechEngine::new(SpeechCommand::new("true", vec![]).unwrap());
        let utterance = engine
            .speak("Merhaba", &SpeechOptions::default())
            .await
            .expect("spawn true");
        assert_eq!(utterance.outcome().await, UtteranceOutcome::Done);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_exit_is_error() {
        let engine = CommandSpeechEngine::new(SpeechCommand::new("false", vec![]).unwrap());
        let utterance = engine
            .speak("Merhaba", &SpeechOptions::default())
            .await
            .expect("spawn false");
        assert!(matches!(
            utterance.outcome().await,
            UtteranceOutcome::Error(_)
        ));
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let engine = CommandSpeechEngine::new(
            SpeechCommand::new("kalp-no-such-speech-program", vec![]).unwrap(),
        );
        let err = engine
            .speak("Merhaba", &SpeechOptions::default())
            .await
            .expect_err("program does not exist");
        assert!(matches!(err, SpeechError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stop_kills_the_running_utterance() {
        let engine =
            CommandSpeechEngine::new(SpeechCommand::new("sleep", vec!["30".into()]).unwrap());
        let utterance = engine
            .speak("Merhaba", &SpeechOptions::default())
            .await
            .expect("spawn sleep");

        engine.stop().await.expect("stop");
        assert_eq!(utterance.outcome().await, UtteranceOutcome::Stopped);

        // Nothing left to stop.
        engine.stop().await.expect("second stop");
    }
}
