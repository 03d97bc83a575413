pub mod config;
pub mod defaults;
pub mod game;
pub mod logger;

pub use config::EnvConfig;
pub use game::{Cell, Direction, GameRng, GameState, Key, Point};
