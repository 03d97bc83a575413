//! Web snake front-end.
//!
//! One game per server process. Browser requests drive movement directly, so
//! the engine runs in move-on-request mode regardless of the `TIMER`
//! environment variable. The shared state lives behind a mutex: concurrent
//! requests on the same instance are serialized there.

mod page;

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use clap::Parser;
use serde::Deserialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use common::game::{GameState, Key};
use common::{EnvConfig, log, logger};

#[derive(Parser)]
#[command(name = "snake_web")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone)]
struct WebServerState {
    game: Arc<Mutex<GameState>>,
}

#[derive(Deserialize)]
struct KeyQuery {
    key: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Web".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = EnvConfig::from_env();
    let state = WebServerState {
        game: Arc::new(Mutex::new(GameState::new(false, config.board_size))),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .layer(cors)
        .with_state(state);

    let addr = "0.0.0.0:8080";
    log!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app).await.expect("Web server error");
}

async fn index_handler(
    Query(query): Query<KeyQuery>,
    State(state): State<WebServerState>,
) -> Html<String> {
    let mut game = state.game.lock().await;

    if let Some(key) = query.key.as_deref().and_then(parse_key) {
        game.on_key_press(key);
    }

    let status = if game.did_win() {
        "You won"
    } else {
        "Game in progress"
    };
    let state_json = serde_json::to_string_pretty(&*game).unwrap_or_default();

    Html(page::render_page(&game.to_board_string(), status, &state_json))
}

/// Map the `key` query parameter onto the engine vocabulary. Unknown values
/// are ignored rather than rejected.
fn parse_key(value: &str) -> Option<Key> {
    match value {
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "r" => Some(Key::Reset),
        _ => None,
    }
}
