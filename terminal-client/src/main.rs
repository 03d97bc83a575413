//! Terminal snake front-end.
//!
//! Single-threaded: input handling and timer-driven movement share one loop,
//! so every engine call is serialized by construction. In timer mode the
//! input poll timeout doubles as the tick, like a blocking read with a
//! timeout; without the timer the loop blocks on input and movement happens
//! only inside `on_key_press`.

mod input;
mod view;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use common::{EnvConfig, GameState};
use input::{map_key_event, should_quit};
use view::TerminalUi;

fn main() -> Result<()> {
    // The logger stays uninitialized on purpose: log lines would be drawn
    // over the alternate screen.
    let config = EnvConfig::from_env();
    let mut state = GameState::new(config.use_timer, config.board_size);

    let mut ui = TerminalUi::new();
    ui.enter()?;

    let result = run(&mut ui, &mut state, &config);

    // Always try to restore terminal state.
    let _ = ui.exit();
    result
}

fn run(ui: &mut TerminalUi, state: &mut GameState, config: &EnvConfig) -> Result<()> {
    loop {
        ui.draw(state)?;

        if config.use_timer && !event::poll(config.tick_interval())? {
            state.step();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(key) = map_key_event(key) {
                state.on_key_press(key);
            }
        }
    }
}
