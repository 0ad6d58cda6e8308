use actix::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::game::GameConfig;
use crate::game::error::GameError;
use crate::game::game_loop::GameLoop;
use crate::game::lives::{LifeOrder, LifeQuantity};
use crate::game::state::GameState;
use crate::server::game_session::messages::{
    ClientWsMessage, GameSnapshot, GetSnapshot, ProcessClientMessage, RegisterSession,
    ServerWsMessage, UnregisterSession,
};
use crate::server::game_session::ticking::{resolve_purchase, start_ticking, stop_ticking};

/// How long a freshly created session waits for its player to connect.
pub const PLAYER_JOIN_TIMEOUT: Duration = Duration::from_secs(10);

/// One snake game: the engine, its tick timer, and the connections watching it.
pub struct GameSession {
    pub game_id: Uuid,
    pub player: Option<(Uuid, Recipient<ServerWsMessage>)>,
    pub spectators: HashMap<Uuid, Recipient<ServerWsMessage>>,
    pub game: GameLoop,
    pub tick_timer: Option<SpawnHandle>,
    pub pending_order: Option<LifeOrder>,
    manager: Addr<GameSessionManager>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.run_later(PLAYER_JOIN_TIMEOUT, |act, ctx| {
            if act.player.is_none() {
                warn!("[GameSession] No player joined game_id={} in time, closing", act.game_id);
                ctx.stop();
            }
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.manager.do_send(GameClosed { game_id: self.game_id });
    }
}

impl GameSession {
    pub fn new(game_id: Uuid, state: GameState, manager: Addr<GameSessionManager>) -> Self {
        Self {
            game_id,
            player: None,
            spectators: HashMap::new(),
            game: GameLoop::new(state),
            tick_timer: None,
            pending_order: None,
            manager,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let state = self.game.state();
        GameSnapshot {
            game_id: self.game_id,
            tile_count: state.grid.tile_count,
            snake: state.snake.segments().collect(),
            food: state.food,
            score: state.score,
            lives: state.lives,
            status: state.status,
            tick_interval_ms: state.tick_interval.as_millis() as u64,
            awaiting_purchase: !state.is_active() && self.pending_order.is_some(),
        }
    }

    pub fn send_to_player(&self, msg: ServerWsMessage) {
        if let Some((_, addr)) = &self.player {
            addr.do_send(msg);
        }
    }

    fn is_current_player(&self, connection_id: Uuid) -> bool {
        self.player.as_ref().is_some_and(|(id, _)| *id == connection_id)
    }

    /// Price a life purchase and keep it until the player answers.
    fn quote_lives(&mut self, quantity: i64) {
        match LifeQuantity::try_from(quantity) {
            Ok(quantity) => {
                let order = LifeOrder::quote(quantity);
                info!(
                    "[GameSession] Quote {} for {} lives ({} cents) in game_id={}",
                    order.order_id, quantity.get(), order.price_cents, self.game_id
                );
                if let Some(previous) = self.pending_order.replace(order.clone()) {
                    debug!("[GameSession] Quote {} superseded", previous.order_id);
                }
                self.send_to_player(ServerWsMessage::PurchaseQuote(order));
            }
            Err(err) => {
                warn!("[GameSession] Rejected life purchase in game_id={}: {}", self.game_id, err);
                self.send_to_player(ServerWsMessage::game_error(&err));
            }
        }
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        if !self.is_current_player(msg.connection_id) {
            warn!("[GameSession] Command from unknown connection {} ignored", msg.connection_id);
            return;
        }

        match msg.msg {
            ClientWsMessage::Move(direction) => {
                if !self.game.change_direction(direction) {
                    debug!("[GameSession] Intent {:?} ignored in game_id={}", direction, self.game_id);
                }
            }
            ClientWsMessage::BuyLives { quantity } => self.quote_lives(quantity),
            ClientWsMessage::ConfirmPurchase { order_id } => resolve_purchase(self, ctx, order_id, true),
            ClientWsMessage::CancelPurchase { order_id } => resolve_purchase(self, ctx, order_id, false),
            ClientWsMessage::Ping => {}
        }
    }
}

impl Handler<RegisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSession, ctx: &mut Context<Self>) -> Self::Result {
        if !msg.is_player {
            self.spectators.insert(msg.connection_id, msg.addr.clone());
            msg.addr.do_send(ServerWsMessage::Snapshot(self.snapshot()));
            return;
        }

        if self.player.is_some() {
            warn!("[GameSession] Second player connection refused for game_id={}", self.game_id);
            msg.addr.do_send(ServerWsMessage::error("GAME_TAKEN", "This game already has a player."));
            return;
        }

        info!("[GameSession] Player {} joined game_id={}", msg.connection_id, self.game_id);
        self.player = Some((msg.connection_id, msg.addr.clone()));
        msg.addr.do_send(ServerWsMessage::Snapshot(self.snapshot()));
        start_ticking(self, ctx);
    }
}

impl Handler<UnregisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSession, ctx: &mut Context<Self>) -> Self::Result {
        if !msg.is_player {
            self.spectators.remove(&msg.connection_id);
            return;
        }
        if self.is_current_player(msg.connection_id) {
            info!("[GameSession] Player left game_id={}, closing session", self.game_id);
            self.player = None;
            stop_ticking(self, ctx);
            ctx.stop();
        }
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

/// Owns every running game session.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(&mut self, config: GameConfig, ctx: &mut Context<Self>) -> Result<(Uuid, Addr<GameSession>), GameError> {
        let game_id = Uuid::new_v4();
        let state = GameState::new(config)?;
        let session = GameSession::new(game_id, state, ctx.address()).start();

        self.sessions.insert(game_id, session.clone());
        info!("[SessionManager] Game created, game_id={} ({} running)", game_id, self.sessions.len());
        Ok((game_id, session))
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "Result<(Uuid, Addr<GameSession>), GameError>")]
pub struct CreateGame {
    pub config: GameConfig,
}

impl Handler<CreateGame> for GameSessionManager {
    type Result = Result<(Uuid, Addr<GameSession>), GameError>;

    fn handle(&mut self, msg: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        self.create_game(msg.config, ctx)
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct GameClosed {
    pub game_id: Uuid,
}

impl Handler<GameClosed> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: GameClosed, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            debug!("[SessionManager] Game closed, game_id={}", msg.game_id);
        }
    }
}
