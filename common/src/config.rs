use std::time::Duration;

use crate::defaults::{DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL_MS, DEFAULT_USE_TIMER};

/// Front-end configuration read from environment variables.
///
/// Invalid or missing values fall back to the defaults silently; a
/// misconfigured environment must never keep a front-end from starting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub use_timer: bool,
    pub board_size: usize,
    pub tick_interval_ms: u64,
}

impl EnvConfig {
    /// Read `TIMER`, `SIZE` and `TIMEOUT` from the process environment.
    pub fn from_env() -> Self {
        Self {
            use_timer: parse_timer_flag(std::env::var("TIMER").ok()),
            board_size: parse_board_size(std::env::var("SIZE").ok()),
            tick_interval_ms: parse_tick_interval(std::env::var("TIMEOUT").ok()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn parse_timer_flag(value: Option<String>) -> bool {
    match value {
        Some(v) => !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"),
        None => DEFAULT_USE_TIMER,
    }
}

fn parse_board_size(value: Option<String>) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&size| size > 1)
        .unwrap_or(DEFAULT_BOARD_SIZE)
}

fn parse_tick_interval(value: Option<String>) -> u64 {
    value
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&ms| ms > 1)
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
}
