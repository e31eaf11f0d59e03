use serde::{Deserialize, Serialize};

use crate::counter::{coerce_step, STEP_MAX, STEP_MIN};

use super::loader::ConfigError;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counter: CounterConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Initial counter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Counter value at startup (default: 1).
    #[serde(default = "default_initial")]
    pub initial: i64,
    /// Step size at startup (default: 1). Fractional values truncate
    /// toward zero before use.
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            step: default_step(),
        }
    }
}

/// UI runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval of the event loop in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_initial() -> i64 {
    1
}

fn default_step() -> f64 {
    1.0
}

fn default_tick_ms() -> u64 {
    250
}

impl Config {
    /// Validates the configuration.
    ///
    /// Checks:
    /// - The coerced step falls inside the step control's range
    /// - The tick interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = coerce_step(self.counter.step);
        if !(STEP_MIN..=STEP_MAX).contains(&step) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "counter.step must truncate into {STEP_MIN}..={STEP_MAX}, got {}",
                    self.counter.step
                ),
            });
        }

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
