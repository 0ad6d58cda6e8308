//! HTTP and WebSocket routing configuration.
//!
//! Each WebSocket connection is handled by its own `GameSessionActor`.

use actix_web::web;
use crate::server::game_session::session::{get_game, ws_new_game, ws_spectate};

/// Configure the application's HTTP/WebSocket routes.
///
/// - `/ws/game`: start a new game and play it.
/// - `/ws/game/{game_id}`: watch a running game.
/// - `/games/{game_id}`: current snapshot of a game, as JSON.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_new_game)
    )
    .service(
        web::resource("/ws/game/{game_id}")
            .to(ws_spectate)
    )
    .service(
        web::resource("/games/{game_id}")
            .route(web::get().to(get_game))
    );
}
