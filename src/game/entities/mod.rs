//! Game entities module.
//!
//! This module organizes snake and food entity logic.

pub mod snake;
pub mod food;

pub use snake::*;
pub use food::*;
