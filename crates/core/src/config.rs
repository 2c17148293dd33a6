//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into screens and engines.
//! Nothing in this crate reads environment variables; binaries read them and hand the raw values
//! to the `*_from_env_value` helpers below.

use crate::constants::{DEFAULT_SCREEN_TTL_SECS, DEFAULT_SPEECH_PROGRAM};
use crate::speech::{CommandSpeechEngine, SimulatedSpeechEngine, SpeechCommand, SpeechEngine};
use crate::{KalpError, KalpResult};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Which speech engine narrates topics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeechEngineKind {
    /// An external speech program, `espeak-ng` unless configured otherwise.
    #[default]
    Command,
    /// No audio; utterances are paced by word count.
    Simulated,
}

impl SpeechEngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpeechEngineKind::Command => "command",
            SpeechEngineKind::Simulated => "simulated",
        }
    }
}

impl FromStr for SpeechEngineKind {
    type Err = KalpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "command" => Ok(SpeechEngineKind::Command),
            "simulated" => Ok(SpeechEngineKind::Simulated),
            other => Err(KalpError::InvalidConfig(format!(
                "unknown speech engine `{other}` (expected `command` or `simulated`)"
            ))),
        }
    }
}

impl std::fmt::Display for SpeechEngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    speech_engine: SpeechEngineKind,
    speech_command: SpeechCommand,
    screen_ttl: Duration,
}

impl CoreConfig {
    pub fn new(speech_engine: SpeechEngineKind, speech_command: SpeechCommand) -> KalpResult<Self> {
        if speech_engine == SpeechEngineKind::Command {
            require_text_placeholder(&speech_command)?;
        }

        Ok(Self {
            speech_engine,
            speech_command,
            screen_ttl: Duration::from_secs(DEFAULT_SCREEN_TTL_SECS),
        })
    }

    /// Sets how long a mounted screen may go unpolled before it is torn down.
    pub fn with_screen_ttl(mut self, screen_ttl: Duration) -> Self {
        self.screen_ttl = screen_ttl;
        self
    }

    pub fn speech_engine(&self) -> SpeechEngineKind {
        self.speech_engine
    }

    pub fn speech_command(&self) -> &SpeechCommand {
        &self.speech_command
    }

    pub fn screen_ttl(&self) -> Duration {
        self.screen_ttl
    }

    /// Creates the configured engine. All screens of a process share it.
    pub fn build_speech_engine(&self) -> Arc<dyn SpeechEngine> {
        match self.speech_engine {
            SpeechEngineKind::Command => {
                Arc::new(CommandSpeechEngine::new(self.speech_command.clone()))
            }
            SpeechEngineKind::Simulated => Arc::new(SimulatedSpeechEngine::default()),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            speech_engine: SpeechEngineKind::default(),
            speech_command: SpeechCommand::default(),
            screen_ttl: Duration::from_secs(DEFAULT_SCREEN_TTL_SECS),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the speech engine kind from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`SpeechEngineKind::Command`].
pub fn speech_engine_from_env_value(value: Option<String>) -> KalpResult<SpeechEngineKind> {
    let parsed = non_empty(value)
        .map(|v| v.parse::<SpeechEngineKind>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Build the speech command from optional program and argument-template values.
///
/// A custom program without an argument template gets `{text}` as its only argument. The default
/// program keeps its default template unless one is given. Whether the template must carry
/// `{text}` depends on the engine, so [`CoreConfig::new`] checks that.
pub fn speech_command_from_env_values(
    program: Option<String>,
    args: Option<String>,
) -> KalpResult<SpeechCommand> {
    let program = non_empty(program);
    let args = non_empty(args);

    let command = match (program, args) {
        (None, None) => SpeechCommand::default(),
        (None, Some(template)) => SpeechCommand::with_template(DEFAULT_SPEECH_PROGRAM, &template)?,
        (Some(program), Some(template)) => SpeechCommand::with_template(program, &template)?,
        (Some(program), None) => SpeechCommand::new(program, vec!["{text}".into()])?,
    };

    Ok(command)
}

/// Parse the mounted-screen time-to-live, in whole seconds.
///
/// If `value` is `None` or empty/whitespace, returns the default of
/// [`DEFAULT_SCREEN_TTL_SECS`] seconds. Zero is rejected.
pub fn screen_ttl_from_env_value(value: Option<String>) -> KalpResult<Duration> {
    let Some(raw) = non_empty(value) else {
        return Ok(Duration::from_secs(DEFAULT_SCREEN_TTL_SECS));
    };

    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(KalpError::InvalidConfig(format!(
            "screen ttl `{raw}` must be a positive number of seconds"
        ))),
    }
}

/// Build the full configuration from the raw `KALP_SPEECH_*` values.
pub fn core_config_from_env_values(
    engine: Option<String>,
    program: Option<String>,
    args: Option<String>,
) -> KalpResult<CoreConfig> {
    let speech_engine = speech_engine_from_env_value(engine)?;
    let speech_command = speech_command_from_env_values(program, args)?;
    CoreConfig::new(speech_engine, speech_command)
}

fn require_text_placeholder(command: &SpeechCommand) -> KalpResult<()> {
    if command.args().iter().any(|arg| arg.contains("{text}")) {
        return Ok(());
    }
    Err(KalpError::InvalidConfig(format!(
        "speech arguments for `{}` must contain a {{text}} placeholder",
        command.program()
    )))
}
