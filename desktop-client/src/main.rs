mod app;

use eframe::egui;

use app::SnakeApp;
use common::{EnvConfig, logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger(Some("Desktop".to_string()));

    let config = EnvConfig::from_env();
    let (width, height) = app::window_size(config.board_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config)))),
    )?;

    Ok(())
}
