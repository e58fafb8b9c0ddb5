//! Loop configuration.
//!
//! Built programmatically with the [`LoopConfig`] builder, or seeded from the
//! environment with [`LoopConfig::from_env`]:
//!
//! - `CGE_SMART_UPDATING`: "1" or "true" to redraw only on change
//! - `CGE_INTERVAL_UPDATING`: redraw every N iterations
//! - `CGE_DELAY_SECS`: sleep after each iteration, in seconds (default 0)
//!
//! Hooks can only be attached in code.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Result;

use crate::core::UpdateMode;
use crate::error::EngineError;
use crate::types::Symbol;
use crate::world::World;

/// Hook run before or after each iteration.
pub type Hook = Box<dyn FnMut(&mut World) -> Result<()>>;

/// Hook run with every decoded key.
pub type KeyHook = Box<dyn FnMut(&mut World, Symbol) -> Result<()>>;

pub const ENV_SMART_UPDATING: &str = "CGE_SMART_UPDATING";
pub const ENV_INTERVAL_UPDATING: &str = "CGE_INTERVAL_UPDATING";
pub const ENV_DELAY_SECS: &str = "CGE_DELAY_SECS";

/// Options recognized when a game loop starts.
#[derive(Default)]
pub struct LoopConfig {
    smart_updating: bool,
    interval_updating: Option<u32>,
    delay: Duration,
    preupdate: Option<Hook>,
    postupdate: Option<Hook>,
    on_key: Option<KeyHook>,
}

impl LoopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a config from `CGE_*` environment variables.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seed a config from any key/value lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::new();

        if let Some(value) = get(ENV_SMART_UPDATING) {
            config.smart_updating = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(EngineError::InvalidSetting {
                        key: ENV_SMART_UPDATING,
                        value,
                    })
                }
            };
        }

        if let Some(value) = get(ENV_INTERVAL_UPDATING) {
            let n = value.parse().map_err(|_| EngineError::InvalidSetting {
                key: ENV_INTERVAL_UPDATING,
                value,
            })?;
            config.interval_updating = Some(n);
        }

        if let Some(value) = get(ENV_DELAY_SECS) {
            let secs: f64 = value.parse().map_err(|_| EngineError::InvalidSetting {
                key: ENV_DELAY_SECS,
                value,
            })?;
            config = config.delay_secs(secs)?;
        }

        Ok(config)
    }

    /// Redraw only after something marked the scheduler dirty.
    pub fn smart_updating(mut self, enabled: bool) -> Self {
        self.smart_updating = enabled;
        self
    }

    /// Redraw every `n` iterations. Ignored (with a warning) if smart updating
    /// is also requested.
    pub fn interval_updating(mut self, n: u32) -> Self {
        self.interval_updating = Some(n);
        self
    }

    /// Sleep after every iteration. Zero means no sleep.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay_secs(self, secs: f64) -> Result<Self, EngineError> {
        let delay = Duration::try_from_secs_f64(secs).map_err(|_| EngineError::InvalidDelay(secs))?;
        Ok(self.delay(delay))
    }

    pub fn preupdate(mut self, hook: impl FnMut(&mut World) -> Result<()> + 'static) -> Self {
        self.preupdate = Some(Box::new(hook));
        self
    }

    pub fn postupdate(mut self, hook: impl FnMut(&mut World) -> Result<()> + 'static) -> Self {
        self.postupdate = Some(Box::new(hook));
        self
    }

    pub fn on_key(mut self, hook: impl FnMut(&mut World, Symbol) -> Result<()> + 'static) -> Self {
        self.on_key = Some(Box::new(hook));
        self
    }

    /// Resolve the update mode. Warns once if smart and interval updating were
    /// both requested.
    ///
    /// A zero interval is only an error when interval updating would be used;
    /// smart updating ignores the interval.
    pub fn update_mode(&self) -> Result<UpdateMode, EngineError> {
        let interval = match self.interval_updating {
            Some(0) if self.smart_updating => {
                log::warn!(
                    "both smart and interval(0) updating requested; only smart updating will be used"
                );
                return Ok(UpdateMode::Smart);
            }
            Some(n) => Some(NonZeroU32::new(n).ok_or(EngineError::ZeroInterval)?),
            None => None,
        };
        Ok(UpdateMode::resolve(self.smart_updating, interval))
    }

    pub fn delay_duration(&self) -> Duration {
        self.delay
    }

    pub(crate) fn into_parts(self) -> Result<(UpdateMode, Duration, Hooks), EngineError> {
        let mode = self.update_mode()?;
        let hooks = Hooks {
            preupdate: self.preupdate,
            postupdate: self.postupdate,
            on_key: self.on_key,
        };
        Ok((mode, self.delay, hooks))
    }
}

impl fmt::Debug for LoopConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopConfig")
            .field("smart_updating", &self.smart_updating)
            .field("interval_updating", &self.interval_updating)
            .field("delay", &self.delay)
            .field("preupdate", &self.preupdate.is_some())
            .field("postupdate", &self.postupdate.is_some())
            .field("on_key", &self.on_key.is_some())
            .finish()
    }
}

/// Hooks owned by a running game.
#[derive(Default)]
pub(crate) struct Hooks {
    pub preupdate: Option<Hook>,
    pub postupdate: Option<Hook>,
    pub on_key: Option<KeyHook>,
}

impl Hooks {
    pub fn clear(&mut self) {
        self.preupdate = None;
        self.postupdate = None;
        self.on_key = None;
    }
}
