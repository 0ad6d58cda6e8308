/// WebSocket session handler for a snake game.
///
/// One actor per connection. The player's connection relays directional intents
/// and life purchases to its `GameSession`; spectators only receive updates.
use actix::prelude::*;
use actix_web::{HttpRequest, HttpResponse, web, Error};
use actix_web::error::ErrorInternalServerError;
use actix_web::http::StatusCode;
use actix_web_actors::ws;
use log::{debug, error};
use uuid::Uuid;

use crate::config::game::GameConfig;
use crate::server::game_session::server::{CreateGame, GameSession, GetGameSession};
use crate::server::game_session::messages::{
    ClientWsMessage, GetSnapshot, ProcessClientMessage, RegisterSession, ServerWsMessage,
    UnregisterSession,
};
use crate::server::state::AppState;
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct GameSessionActor {
    pub game_id: Uuid,
    pub connection_id: Uuid,
    pub is_player: bool,
    pub session_addr: Addr<GameSession>,
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterSession {
            connection_id: self.connection_id,
            addr: ctx.address().recipient(),
            is_player: self.is_player,
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(UnregisterSession {
            connection_id: self.connection_id,
            is_player: self.is_player,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match parse_command(self.is_player, &text) {
                Ok(msg) => self.session_addr.do_send(ProcessClientMessage {
                    msg,
                    connection_id: self.connection_id,
                }),
                Err((code, message)) => {
                    debug!("[GameSessionActor] Rejected command on game_id={}: {}", self.game_id, code);
                    ctx.text(ws_error_message(code, message));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                debug!("[GameSessionActor] Protocol error on game_id={}: {}", self.game_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[GameSessionActor] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(ws_error_message("INTERNAL", "Failed to serialize game update."));
            }
        }
    }
}

/// Turn a text frame into a command, or the error code and message to send back.
pub fn parse_command(is_player: bool, text: &str) -> Result<ClientWsMessage, (&'static str, &'static str)> {
    if !is_player {
        return Err(("SPECTATOR_READ_ONLY", "Spectators cannot send commands."));
    }
    serde_json::from_str(text).map_err(|_| ("INVALID_COMMAND", "Invalid command."))
}

/// WebSocket endpoint starting a new game for the connecting player.
pub async fn ws_new_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let (game_id, session_addr) = data.game_session_manager
        .send(CreateGame { config: GameConfig::default() })
        .await
        .map_err(ErrorInternalServerError)?
        .map_err(ErrorInternalServerError)?;

    ws::start(
        GameSessionActor {
            game_id,
            connection_id: Uuid::new_v4(),
            is_player: true,
            session_addr,
        },
        &req,
        stream,
    )
}

/// WebSocket endpoint for watching a running game.
pub async fn ws_spectate(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = path.into_inner();
    let session_addr = match lookup_session(&data, game_id).await? {
        Some(addr) => addr,
        None => return Ok(game_not_found(game_id)),
    };

    ws::start(
        GameSessionActor {
            game_id,
            connection_id: Uuid::new_v4(),
            is_player: false,
            session_addr,
        },
        &req,
        stream,
    )
}

/// HTTP endpoint returning the current snapshot of a game as JSON.
pub async fn get_game(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = path.into_inner();
    let session_addr = match lookup_session(&data, game_id).await? {
        Some(addr) => addr,
        None => return Ok(game_not_found(game_id)),
    };
    let snapshot = session_addr
        .send(GetSnapshot)
        .await
        .map_err(ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

async fn lookup_session(data: &AppState, game_id: Uuid) -> Result<Option<Addr<GameSession>>, Error> {
    let found = data.game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(ErrorInternalServerError)?;
    Ok(found.ok())
}

fn game_not_found(game_id: Uuid) -> HttpResponse {
    http_error_response(
        "GAME_NOT_FOUND",
        "Game session not found.",
        Some(&game_id.to_string()),
        StatusCode::NOT_FOUND,
    )
}
