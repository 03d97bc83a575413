mod rng;
mod state;
mod types;

pub use rng::GameRng;
pub use state::GameState;
pub use types::{Cell, Direction, Key, Point};
