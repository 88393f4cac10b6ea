//! Rules engine for two-player 10x10 Battleship: boards, ship placement
//! with adjacency buffering, attack resolution, turn management and the
//! computer opponent's hunt/target heuristic. Presentation layers render
//! the state exposed here; this crate never touches a screen.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod ship;
mod turn;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use turn::*;
