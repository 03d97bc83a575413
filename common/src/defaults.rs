pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_USE_TIMER: bool = true;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;
