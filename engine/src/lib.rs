//! 3×3 tic-tac-toe: board rules, a game session, and an AI opponent with
//! random, heuristic and full minimax strategies.

pub mod config;
pub mod game;
pub mod logger;
mod session_rng;

pub use game::*;
pub use session_rng::SessionRng;
