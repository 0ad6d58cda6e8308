//! Drives a `GameState` from a tick scheduler.
//!
//! Keeps at most one tick armed: the next one is scheduled only after the
//! current one has run, and an ended round cancels instead of re-arming.

use log::{debug, info};

use crate::game::error::GameError;
use crate::game::lives::{LifeBroker, LifeQuantity, PurchaseOutcome};
use crate::game::observer::GameObserver;
use crate::game::scheduler::TickScheduler;
use crate::game::state::GameState;
use crate::game::types::{Direction, GrantOutcome, TickOutcome};

pub struct GameLoop {
    state: GameState,
    armed: bool,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state, armed: false }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Show the opening frame and arm the first tick.
    pub fn start(&mut self, scheduler: &mut impl TickScheduler, observer: &mut impl GameObserver) {
        observer.on_score_changed(self.state.score);
        observer.on_lives_changed(self.state.lives);
        observer.render(&self.state.snake, self.state.food);
        if self.state.is_active() {
            self.arm(scheduler);
        }
    }

    /// Run the tick that just fired and decide whether another one follows.
    pub fn on_timer(&mut self, scheduler: &mut impl TickScheduler, observer: &mut impl GameObserver) -> TickOutcome {
        self.armed = false;
        let outcome = self.state.tick(observer);
        match outcome {
            TickOutcome::Continue { .. } => self.arm(scheduler),
            TickOutcome::Ended { final_score } => {
                info!("[GameLoop] Round ended with score {}, ticking stopped", final_score);
                scheduler.cancel();
            }
            TickOutcome::Inactive => scheduler.cancel(),
        }
        outcome
    }

    pub fn change_direction(&mut self, intent: Direction) -> bool {
        self.state.change_direction(intent)
    }

    /// Validate and grant lives, re-arming the timer if an ended round came back.
    pub fn grant_lives(
        &mut self,
        quantity: u32,
        scheduler: &mut impl TickScheduler,
        observer: &mut impl GameObserver,
    ) -> Result<GrantOutcome, GameError> {
        let quantity = LifeQuantity::try_from(quantity)?;
        let outcome = self.state.grant_lives(quantity, observer);
        if outcome == GrantOutcome::Resumed && !self.armed {
            self.arm(scheduler);
        }
        Ok(outcome)
    }

    /// Ask `broker` for `quantity` lives and grant them if it confirms.
    ///
    /// An out-of-range quantity is rejected before the broker is consulted.
    pub fn purchase_lives(
        &mut self,
        quantity: u32,
        broker: &mut impl LifeBroker,
        scheduler: &mut impl TickScheduler,
        observer: &mut impl GameObserver,
    ) -> Result<PurchaseOutcome, GameError> {
        let validated = LifeQuantity::try_from(quantity)?;
        let outcome = broker.request_life_purchase(validated);
        match outcome {
            PurchaseOutcome::Confirmed => {
                self.grant_lives(validated.get(), scheduler, observer)?;
            }
            PurchaseOutcome::Cancelled => debug!("[GameLoop] Purchase of {} lives cancelled", quantity),
        }
        Ok(outcome)
    }

    /// Stop ticking, e.g. when the player disconnects.
    pub fn stop(&mut self, scheduler: &mut impl TickScheduler) {
        if self.armed {
            scheduler.cancel();
            self.armed = false;
        }
    }

    fn arm(&mut self, scheduler: &mut impl TickScheduler) {
        scheduler.schedule(self.state.tick_interval);
        self.armed = true;
    }
}
