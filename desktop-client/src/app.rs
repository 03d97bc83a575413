use std::time::{Duration, Instant};

use common::EnvConfig;
use common::game::{Cell, GameState, Key};

pub const CELL_SIZE: f32 = 40.0;
const WINDOW_MARGIN: f32 = 100.0;

pub fn window_size(board_size: usize) -> (f32, f32) {
    let side = board_size as f32 * CELL_SIZE + WINDOW_MARGIN;
    (side, side)
}

pub struct SnakeApp {
    state: GameState,
    tick_interval: Duration,
    last_step: Instant,
}

impl SnakeApp {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            state: GameState::new(config.use_timer, config.board_size),
            tick_interval: config.tick_interval(),
            last_step: Instant::now(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let key = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                Some(Key::Up)
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                Some(Key::Down)
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                Some(Key::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                Some(Key::Right)
            } else if i.key_pressed(egui::Key::R) {
                Some(Key::Reset)
            } else {
                None
            }
        });

        if let Some(key) = key {
            self.state.on_key_press(key);
        }

        // Space advances the game by hand in timer mode.
        if self.state.use_timer() && ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.state.step();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_board(&self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);

        for row in &self.state.to_grid() {
            ui.horizontal(|ui| {
                for cell in row {
                    let size = egui::vec2(CELL_SIZE, CELL_SIZE);
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect.shrink(1.0), 2.0, cell_color(*cell));
                }
            });
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The tick runs inside the update loop, so movement and input are
        // serialized on the UI thread instead of racing from a background
        // ticker.
        if self.state.use_timer() {
            if self.last_step.elapsed() >= self.tick_interval {
                self.state.step();
                self.last_step = Instant::now();
            }
            let until_next = self.tick_interval.saturating_sub(self.last_step.elapsed());
            ctx.request_repaint_after(until_next);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_board(ui);

            ui.add_space(10.0);
            let status = if self.state.did_win() {
                "You won"
            } else {
                "Game in progress"
            };
            ui.label(status);
            ui.label("Arrow keys or WASD to move. 'q' quits, 'r' restarts.");
        });
    }
}

fn cell_color(cell: Cell) -> egui::Color32 {
    match cell {
        Cell::Empty => egui::Color32::WHITE,
        Cell::SnakeHead => egui::Color32::from_rgb(0, 255, 0),
        Cell::SnakeTail => egui::Color32::from_rgb(173, 255, 47),
        Cell::Food => egui::Color32::from_rgb(255, 0, 0),
    }
}
