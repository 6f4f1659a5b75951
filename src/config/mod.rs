#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::countdown::Countdown;
use crate::domain::model::{DEFAULT_FINAL_WORD, DEFAULT_PAUSE, DEFAULT_START};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use std::time::Duration;
use toml_config::DrillsConfig;

pub const MAX_START: u32 = 10_000;
pub const MAX_PAUSE_MS: u64 = 60_000;

/// Values the command line may override on top of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownOverrides {
    pub start: Option<u32>,
    pub final_word: Option<String>,
    pub pause_ms: Option<u64>,
}

/// Fully resolved countdown settings: overrides, then file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSettings {
    pub start: u32,
    pub final_word: String,
    pub pause_ms: u64,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            final_word: DEFAULT_FINAL_WORD.to_string(),
            pause_ms: DEFAULT_PAUSE.as_millis() as u64,
        }
    }
}

impl CountdownSettings {
    pub fn resolve(file: Option<&DrillsConfig>, overrides: CountdownOverrides) -> Self {
        let defaults = Self::default();
        let section = file.map(|config| &config.countdown);

        Self {
            start: overrides
                .start
                .or_else(|| section.and_then(|s| s.start))
                .unwrap_or(defaults.start),
            final_word: overrides
                .final_word
                .or_else(|| section.and_then(|s| s.final_word.clone()))
                .unwrap_or(defaults.final_word),
            pause_ms: overrides
                .pause_ms
                .or_else(|| section.and_then(|s| s.pause_ms))
                .unwrap_or(defaults.pause_ms),
        }
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::new(self.start, self.final_word.clone())
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Validate for CountdownSettings {
    fn validate(&self) -> Result<()> {
        validate_range("countdown.start", self.start, 1, MAX_START)?;
        validate_non_empty_string("countdown.final_word", &self.final_word)?;
        validate_single_line("countdown.final_word", &self.final_word)?;
        validate_range("countdown.pause_ms", self.pause_ms, 0, MAX_PAUSE_MS)?;
        Ok(())
    }
}
