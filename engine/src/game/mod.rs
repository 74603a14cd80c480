mod board;
mod bot_controller;
mod error;
mod game_session;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, CENTER, reset};
pub use bot_controller::{BotInput, calculate_move, choose_move};
pub use error::InvalidMove;
pub use game_session::{GameMode, GameSession};
pub use minimax::minimax_score;
pub use types::{Difficulty, GameOutcome, Mark, MoveRecord, Player, WINNING_LINES, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
