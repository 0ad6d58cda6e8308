// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Game session orchestration (session lifecycle, tick timer, player commands)
//! - Error response helpers

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
