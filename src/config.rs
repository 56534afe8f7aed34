//! Runtime configuration.
//!
//! Defaults reproduce the classic timing: a 30 ms tick after a one-off 500 ms
//! delay, with stars re-jittered every frame. Each value can be overridden
//! through a `PASTURE_*` environment variable; unparsable values are logged
//! and ignored. The loop length is fixed by the animation schedules and is
//! not configurable.

use std::str::FromStr;
use std::time::Duration;

use crate::world::StarFieldMode;

pub const TICK_MS_VAR: &str = "PASTURE_TICK_MS";
pub const INITIAL_DELAY_MS_VAR: &str = "PASTURE_INITIAL_DELAY_MS";
pub const STARS_VAR: &str = "PASTURE_STARS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub tick: Duration,
    pub initial_delay: Duration,
    pub stars: StarFieldMode,
    /// Logical window size in pixels
    pub window_size: (u32, u32),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(30),
            initial_delay: Duration::from_millis(500),
            stars: StarFieldMode::PerFrame,
            window_size: (600, 600),
        }
    }
}

impl FromStr for StarFieldMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(StarFieldMode::Fixed),
            "per-frame" | "per_frame" | "perframe" => Ok(StarFieldMode::PerFrame),
            other => Err(format!("unknown star field mode '{other}'")),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, TICK_MS_VAR, |ms| *ms > 0) {
            config.tick = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, INITIAL_DELAY_MS_VAR, |_| true) {
            config.initial_delay = Duration::from_millis(ms);
        }
        if let Some(stars) = parse_var::<StarFieldMode>(&lookup, STARS_VAR, |_| true) {
            config.stars = stars;
        }

        log::debug!("configuration: {config:?}");
        config
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    valid: impl Fn(&T) -> bool,
) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => Some(value),
        Ok(_) => {
            log::warn!("ignoring {key}={raw}: out of range");
            None
        }
        Err(err) => {
            log::warn!("ignoring {key}={raw}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_classic_timing() {
        let config = config(&[]);
        assert_eq!(config.tick, Duration::from_millis(30));
        assert_eq!(config.initial_delay, Duration::from_millis(500));
        assert_eq!(config.stars, StarFieldMode::PerFrame);
        assert_eq!(config.window_size, (600, 600));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            (TICK_MS_VAR, " 16 "),
            (INITIAL_DELAY_MS_VAR, "0"),
            (STARS_VAR, "Fixed"),
        ]);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.initial_delay, Duration::ZERO);
        assert_eq!(config.stars, StarFieldMode::Fixed);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config(&[
            (TICK_MS_VAR, "0"),
            (INITIAL_DELAY_MS_VAR, "-3"),
            (STARS_VAR, "sometimes"),
        ]);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn loop_bound_is_not_read_from_the_environment() {
        let config = config(&[("PASTURE_LOOP_BOUND", "100000")]);
        assert_eq!(config, AppConfig::default());
    }
}
