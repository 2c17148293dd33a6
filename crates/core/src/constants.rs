//! Constants used throughout the KalpSağlık core crate.

/// Locale passed to the speech engine for every utterance.
pub const SPEECH_LOCALE: &str = "tr-TR";

/// Speech pitch multiplier. Fixed, not user-configurable.
pub const SPEECH_PITCH: f32 = 1.0;

/// Speech rate multiplier. Fixed, not user-configurable.
pub const SPEECH_RATE: f32 = 0.88;

/// Default REST listen address when `KALP_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Program run by the command speech engine when `KALP_SPEECH_PROGRAM` is unset.
pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

/// Argument template for [`DEFAULT_SPEECH_PROGRAM`].
pub const DEFAULT_SPEECH_ARGS: &[&str] = &[
    "-v", "{voice}", "-p", "{pitch}", "-s", "{rate}", "--", "{text}",
];

/// Seconds a mounted screen may go unpolled before it is torn down, when
/// `KALP_SCREEN_TTL_SECS` is unset.
pub const DEFAULT_SCREEN_TTL_SECS: u64 = 600;

/// espeak-ng speaking rate, in words per minute, at a rate multiplier of 1.0.
pub const ESPEAK_BASE_WPM: f32 = 175.0;

/// Pacing of the simulated engine, in words per minute, at a rate multiplier of 1.0.
pub const SIMULATED_WORDS_PER_MINUTE: u32 = 150;
