use std::collections::VecDeque;

use serde::Serialize;

use crate::log;

use super::rng::GameRng;
use super::types::{Cell, Direction, Key, Point};

/// The whole game state of a single-board snake game.
///
/// The board is an N x N toroidal grid: moving off one edge re-enters from
/// the opposite edge. The snake dies of nothing; the only terminal condition
/// is covering the entire board, after which the state is frozen until a
/// reset. There is deliberately no self-collision rule, so the snake may
/// overlap its own body.
///
/// The state holds no locks. Front-ends that mix timer ticks with input
/// events must funnel both through one serialization point (a mutex or a
/// single event loop) before calling into it.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    board_size: usize,
    use_timer: bool,
    snake: VecDeque<Point>,
    food: Point,
    direction: Direction,
    did_win: bool,
    #[serde(skip)]
    rng: GameRng,
}

impl GameState {
    /// Create a state with a single-segment snake at the origin, heading
    /// right, and food placed at a random free cell.
    ///
    /// `use_timer` is fixed for the lifetime of the state: when false,
    /// accepted directional input moves the snake immediately instead of
    /// waiting for an external tick.
    pub fn new(use_timer: bool, board_size: usize) -> Self {
        Self::with_rng(use_timer, board_size, GameRng::from_random())
    }

    /// Like [`GameState::new`] but with a caller-provided generator, for
    /// deterministic games and tests. The generator is kept for the whole
    /// lifetime of the state; reset does not replace it.
    pub fn with_rng(use_timer: bool, board_size: usize, rng: GameRng) -> Self {
        assert!(board_size > 1, "board size must be at least 2");

        let mut state = Self {
            board_size,
            use_timer,
            snake: VecDeque::from([Point::new(0, 0)]),
            food: Point::new(0, 0),
            direction: Direction::Right,
            did_win: false,
            rng,
        };
        state.place_food();

        log!(
            "new game: board size {}, rng seed {}",
            state.board_size,
            state.rng.seed()
        );

        state
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn use_timer(&self) -> bool {
        self.use_timer
    }

    pub fn did_win(&self) -> bool {
        self.did_win
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn head(&self) -> Point {
        *self
            .snake
            .front()
            .expect("snake body should never be empty")
    }

    /// Render the state into a grid of cell kinds, indexed `[y][x]`.
    ///
    /// Stamping order: food first, then every segment as tail, then the head
    /// on top, so an overlapped head cell always renders as the head.
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![Cell::Empty; self.board_size]; self.board_size];

        grid[self.food.y][self.food.x] = Cell::Food;

        for segment in &self.snake {
            grid[segment.y][segment.x] = Cell::SnakeTail;
        }

        let head = self.head();
        grid[head.y][head.x] = Cell::SnakeHead;

        grid
    }

    /// Render the board as text: one line per row, no separators between
    /// cells, a newline after every row.
    pub fn to_board_string(&self) -> String {
        let mut out = String::with_capacity(self.board_size * (self.board_size + 1));
        for row in self.to_grid() {
            for cell in row {
                out.push(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Apply a direction change if it is legal.
    ///
    /// Rejected after the game is won, and for an exact reversal of the
    /// current direction. Same-direction and perpendicular requests are
    /// accepted.
    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if self.did_win || new_direction.is_opposite(&self.direction) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    /// Handle one key event from a front-end.
    ///
    /// Directional keys go through [`GameState::change_direction`]; when the
    /// state runs without a timer, an accepted direction also advances the
    /// snake by one step. Reset reinitializes everything except the board
    /// size and the timer mode.
    pub fn on_key_press(&mut self, key: Key) {
        let accepted = match key {
            Key::Up => self.change_direction(Direction::Up),
            Key::Down => self.change_direction(Direction::Down),
            Key::Left => self.change_direction(Direction::Left),
            Key::Right => self.change_direction(Direction::Right),
            Key::Reset => {
                self.reset();
                false
            }
        };

        if accepted && !self.use_timer {
            self.step();
        }
    }

    /// Advance the snake by one cell. No-op once the game is won.
    pub fn step(&mut self) {
        if self.did_win {
            return;
        }

        let head = self.head();
        let next_head = match self.direction {
            Direction::Up => Point::new(head.x, wrapping_dec(head.y, self.board_size)),
            Direction::Down => Point::new(head.x, wrapping_inc(head.y, self.board_size)),
            Direction::Left => Point::new(wrapping_dec(head.x, self.board_size), head.y),
            Direction::Right => Point::new(wrapping_inc(head.x, self.board_size), head.y),
        };

        self.snake.push_front(next_head);

        if next_head != self.food {
            self.snake.pop_back();
            return;
        }

        log!(
            "ate food at ({}, {}), length {}",
            next_head.x,
            next_head.y,
            self.snake.len()
        );

        if self.snake.len() == self.board_size * self.board_size {
            // Board is full: the game is won and the stale food location is
            // left as-is since there is no cell to move it to.
            self.did_win = true;
            log!("board full, game won");
            return;
        }

        self.place_food();
    }

    /// Reinitialize the game, preserving the board size, the timer mode and
    /// the random generator.
    pub fn reset(&mut self) {
        self.snake = VecDeque::from([Point::new(0, 0)]);
        self.direction = Direction::Right;
        self.did_win = false;
        self.place_food();
        log!("game reset");
    }

    /// Move the food to a uniformly random free cell.
    ///
    /// Contract: at least one free cell exists. The win check in
    /// [`GameState::step`] guarantees it before every call, so an empty free
    /// set here is a bug in the caller, not a runtime condition.
    fn place_food(&mut self) {
        let grid = self.to_grid();
        let mut free_cells = Vec::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == Cell::Empty {
                    free_cells.push(Point::new(x, y));
                }
            }
        }

        assert!(
            !free_cells.is_empty(),
            "no free cell left to place food on"
        );

        self.food = free_cells[self.rng.random_range(0..free_cells.len())];
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_snake(&mut self, segments: &[Point]) {
        self.snake = segments.iter().copied().collect();
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}
