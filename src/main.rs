//! Main entry point for the snake backend.
//!
//! Initializes logging and the actor system, then launches the HTTP server
//! with WebSocket endpoints for playing and watching games.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use server::game_session::server::GameSessionManager;

pub mod config;
mod server;
mod game;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Log level comes from RUST_LOG, defaulting to info.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the GameSessionManager actor (owns every running game).
    let game_session_manager = GameSessionManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session_manager));

    let (host, port) = config::server::bind_address();
    log::info!("[Server] Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((host, port))?
    .run()
    .await
}
