/// Runs a GameSession's game loop on the actor's own timer.
/// Bridges the engine's scheduler and observer traits to actix futures and WebSocket messages.

use std::collections::HashMap;
use std::time::Duration;
use actix::prelude::*;
use log::{info, trace, warn};
use uuid::Uuid;

use crate::game::entities::Snake;
use crate::game::lives::ClientConfirmation;
use crate::game::observer::GameObserver;
use crate::game::scheduler::TickScheduler;
use crate::game::systems::render_ascii;
use crate::game::types::{Position, TickOutcome};
use crate::server::game_session::server::GameSession;
use crate::server::game_session::messages::ServerWsMessage;

/// Arms ticks with `run_later` and remembers the handle so they can be cancelled.
pub struct ActorTicker<'a> {
    ctx: &'a mut Context<GameSession>,
    handle: &'a mut Option<SpawnHandle>,
}

impl<'a> ActorTicker<'a> {
    pub fn new(ctx: &'a mut Context<GameSession>, handle: &'a mut Option<SpawnHandle>) -> Self {
        Self { ctx, handle }
    }
}

impl TickScheduler for ActorTicker<'_> {
    fn schedule(&mut self, after: Duration) {
        let handle = self.ctx.run_later(after, |act, ctx| {
            run_tick(act, ctx);
        });
        *self.handle = Some(handle);
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.ctx.cancel_future(handle);
        }
    }
}

/// Forwards engine notifications to the player and every spectator.
pub struct Broadcast<'a> {
    player: Option<&'a Recipient<ServerWsMessage>>,
    spectators: &'a HashMap<Uuid, Recipient<ServerWsMessage>>,
}

impl<'a> Broadcast<'a> {
    pub fn new(
        player: &'a Option<(Uuid, Recipient<ServerWsMessage>)>,
        spectators: &'a HashMap<Uuid, Recipient<ServerWsMessage>>,
    ) -> Self {
        Self {
            player: player.as_ref().map(|(_, addr)| addr),
            spectators,
        }
    }

    fn send(&self, msg: ServerWsMessage) {
        for addr in self.player.into_iter().chain(self.spectators.values()) {
            addr.do_send(msg.clone());
        }
    }
}

impl GameObserver for Broadcast<'_> {
    fn render(&mut self, snake: &Snake, food: Position) {
        self.send(ServerWsMessage::Frame { snake: snake.segments().collect(), food });
    }

    fn on_score_changed(&mut self, score: u32) {
        self.send(ServerWsMessage::Score { score });
    }

    fn on_lives_changed(&mut self, lives: u32) {
        self.send(ServerWsMessage::Lives { lives });
    }

    fn on_round_ended(&mut self, final_score: u32) {
        self.send(ServerWsMessage::RoundEnded { final_score });
    }
}

/// Send the opening frame and arm the first tick.
pub fn start_ticking(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let mut ticker = ActorTicker::new(ctx, &mut this.tick_timer);
    let mut broadcast = Broadcast::new(&this.player, &this.spectators);
    this.game.start(&mut ticker, &mut broadcast);
}

/// Cancel the armed tick, if any.
pub fn stop_ticking(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    let mut ticker = ActorTicker::new(ctx, &mut this.tick_timer);
    this.game.stop(&mut ticker);
}

/// Timer callback: advance the game one step and broadcast the result.
pub fn run_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    // The handle that fired is spent.
    this.tick_timer = None;

    let outcome = {
        let mut ticker = ActorTicker::new(ctx, &mut this.tick_timer);
        let mut broadcast = Broadcast::new(&this.player, &this.spectators);
        this.game.on_timer(&mut ticker, &mut broadcast)
    };

    let state = this.game.state();
    trace!(
        "[GameSession] game_id={} turn={}\n{}",
        this.game_id,
        state.turn,
        render_ascii(&state.grid, &state.snake, state.food)
    );

    if let TickOutcome::Ended { final_score } = outcome {
        info!("[GameSession] Round over in game_id={}, final score {}", this.game_id, final_score);
    }
}

/// Settle the pending quote with the player's answer.
pub fn resolve_purchase(this: &mut GameSession, ctx: &mut Context<GameSession>, order_id: Uuid, confirmed: bool) {
    let order = match this.pending_order.take() {
        Some(order) if order.order_id == order_id => order,
        other => {
            this.pending_order = other;
            warn!("[GameSession] Unknown order {} in game_id={}", order_id, this.game_id);
            this.send_to_player(ServerWsMessage::error("UNKNOWN_ORDER", "No pending order with this id."));
            return;
        }
    };

    let mut broker = ClientConfirmation::new(confirmed);
    let result = {
        let mut ticker = ActorTicker::new(ctx, &mut this.tick_timer);
        let mut broadcast = Broadcast::new(&this.player, &this.spectators);
        this.game.purchase_lives(order.quantity.get(), &mut broker, &mut ticker, &mut broadcast)
    };

    match result {
        Ok(outcome) => {
            info!(
                "[GameSession] Order {} for {} lives {:?} in game_id={}",
                order.order_id, order.quantity.get(), outcome, this.game_id
            );
            this.send_to_player(ServerWsMessage::PurchaseResult {
                order_id: order.order_id,
                outcome,
                lives: this.game.state().lives,
            });
        }
        Err(err) => this.send_to_player(ServerWsMessage::game_error(&err)),
    }
}
