use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::GameConfig;
use crate::game::entities::{Snake, spawn_food};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::lives::LifeQuantity;
use crate::game::observer::GameObserver;
use crate::game::systems::{apply_food_rules, change_direction, detect_collision, move_snake};
use crate::game::types::{Direction, GrantOutcome, Position, RoundStatus, TickOutcome};

/// Everything one game session needs: the board, the snake, and the round counters.
///
/// Score and speed survive a lost life; only a life-grant on an ended round
/// starts them over.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Position,
    /// Heading travelled on the last tick.
    pub direction: Direction,
    /// Heading the next tick will use.
    pub pending_direction: Direction,
    pub score: u32,
    pub lives: u32,
    pub tick_interval: Duration,
    pub status: RoundStatus,
    pub turn: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Start a game session; fails if `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = Grid::new(config.tile_count);
        let snake = Snake::new(config.start);

        let mut state = GameState {
            grid,
            snake,
            food: config.start,
            direction: Direction::Stay,
            pending_direction: Direction::Stay,
            score: 0,
            lives: config.initial_lives,
            tick_interval: config.initial_tick,
            status: RoundStatus::Active,
            turn: 0,
            config,
            rng,
        };
        state.place_food();
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::Active
    }

    /// Resample the food somewhere off the snake.
    pub fn place_food(&mut self) {
        self.food = spawn_food(&self.grid, &self.snake, &mut self.rng);
    }

    /// Advance the game by one step.
    pub fn tick(&mut self, observer: &mut impl GameObserver) -> TickOutcome {
        if !self.is_active() {
            return TickOutcome::Inactive;
        }
        self.turn += 1;

        if move_snake(self) {
            apply_food_rules(self);
            debug!("[GameState] Food eaten, score={} interval={:?}", self.score, self.tick_interval);
            observer.on_score_changed(self.score);
        }

        if let Some(collision) = detect_collision(&self.grid, &self.snake) {
            self.lives = self.lives.saturating_sub(1);
            observer.on_lives_changed(self.lives);

            if self.lives == 0 {
                self.status = RoundStatus::Ended;
                info!("[GameState] {:?} on turn {}, no lives left. Final score {}", collision, self.turn, self.score);
                observer.on_round_ended(self.score);
                return TickOutcome::Ended { final_score: self.score };
            }

            info!("[GameState] {:?} on turn {}, {} lives left", collision, self.turn, self.lives);
            self.respawn();
        }

        observer.render(&self.snake, self.food);
        TickOutcome::Continue { next_in: self.tick_interval }
    }

    /// Queue a heading for the next tick. See [`change_direction`].
    pub fn change_direction(&mut self, intent: Direction) -> bool {
        change_direction(self, intent)
    }

    /// Add lives; an ended round restarts with a fresh snake, food, score and speed.
    pub fn grant_lives(&mut self, quantity: LifeQuantity, observer: &mut impl GameObserver) -> GrantOutcome {
        self.lives += quantity.get();
        observer.on_lives_changed(self.lives);

        if self.is_active() {
            info!("[GameState] Granted {} lives mid-round, now {}", quantity.get(), self.lives);
            return GrantOutcome::Added;
        }

        self.reset_round();
        info!("[GameState] Granted {} lives, round restarted with {} lives", quantity.get(), self.lives);
        observer.on_score_changed(self.score);
        observer.render(&self.snake, self.food);
        GrantOutcome::Resumed
    }

    /// Put the snake back on its start cell after a lost life.
    fn respawn(&mut self) {
        self.snake = Snake::new(self.config.start);
        self.direction = Direction::Stay;
        self.pending_direction = Direction::Stay;
        self.place_food();
    }

    /// Full restart of the round, lives excepted.
    fn reset_round(&mut self) {
        self.respawn();
        self.score = 0;
        self.tick_interval = self.config.initial_tick;
        self.status = RoundStatus::Active;
    }
}
