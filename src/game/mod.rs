//! Game core: the snake engine and everything it needs to run without a server.

pub mod types;
pub mod error;
pub mod state;
pub mod game_loop;
pub mod scheduler;
pub mod observer;
pub mod lives;

pub mod entities;
pub mod grid;
pub mod systems;
