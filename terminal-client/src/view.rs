//! Full-redraw terminal view on top of crossterm's alternate screen.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{QueueableCommand, cursor, style::Print, terminal};

use common::GameState;

pub struct TerminalUi {
    stdout: io::Stdout,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole screen. The board is small enough that diffing
    /// against the previous frame is not worth it.
    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(
            "Move snake with arrow keys or WASD. Press 'q' to quit, 'r' to restart",
        ))?;

        let board = state.to_board_string();
        let mut row: u16 = 2;
        for line in board.lines() {
            self.stdout.queue(cursor::MoveTo(0, row))?;
            self.stdout.queue(Print(line))?;
            row += 1;
        }

        let status = if state.did_win() {
            "You won"
        } else {
            "Game in progress"
        };
        self.stdout.queue(cursor::MoveTo(0, row + 1))?;
        self.stdout.queue(Print(status))?;

        self.stdout.queue(cursor::MoveTo(0, row + 3))?;
        self.stdout
            .queue(Print(format!("State: {}", serde_json::to_string(state)?)))?;

        self.stdout.flush()?;
        Ok(())
    }
}
