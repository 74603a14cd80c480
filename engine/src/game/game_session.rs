use serde::{Deserialize, Serialize};

use crate::session_rng::SessionRng;
use crate::log_debug;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::InvalidMove;
use super::types::{Difficulty, GameOutcome, MoveRecord, Player};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VersusAi {
        difficulty: Difficulty,
        ai_player: Player,
    },
}

impl GameMode {
    pub fn versus_ai(difficulty: Difficulty, human_player: Player) -> Self {
        GameMode::VersusAi {
            difficulty,
            ai_player: human_player.opponent(),
        }
    }

    pub fn ai_player(&self) -> Option<Player> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VersusAi { ai_player, .. } => Some(*ai_player),
        }
    }
}

/// One game: board, side to move, mode and the moves played so far. The
/// outcome is always derived from the board.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    mode: GameMode,
    history: Vec<MoveRecord>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn is_active(&self) -> bool {
        !self.outcome().is_terminal()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.is_active() && self.mode.ai_player() == Some(self.current_player)
    }

    /// Plays a move for the side to act. In versus-AI mode only the human's
    /// turns go through here.
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, InvalidMove> {
        if self.is_ai_turn() {
            return Err(InvalidMove::WrongTurn {
                player: self.current_player,
            });
        }
        self.apply(index)
    }

    /// Asks the configured AI for the current player's move and plays it.
    /// Returns the chosen cell and the resulting outcome.
    pub fn play_ai_turn(
        &mut self,
        rng: &mut SessionRng,
    ) -> Result<(usize, GameOutcome), InvalidMove> {
        let GameMode::VersusAi {
            difficulty,
            ai_player,
        } = self.mode
        else {
            return Err(InvalidMove::NoAiOpponent);
        };

        if !self.is_active() {
            return Err(InvalidMove::GameOver);
        }

        if self.current_player != ai_player {
            return Err(InvalidMove::WrongTurn {
                player: self.current_player,
            });
        }

        let input = BotInput::from_session(self);
        let index = calculate_move(difficulty, &input, rng).ok_or(InvalidMove::GameOver)?;
        log_debug!("{} AI ({}) picks cell {}", ai_player, difficulty, index);

        let outcome = self.apply(index)?;
        Ok((index, outcome))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.history.clear();
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn apply(&mut self, index: usize) -> Result<GameOutcome, InvalidMove> {
        let player = self.current_player;
        self.board = self.board.apply_move(index, player)?;
        self.history.push(MoveRecord::new(player, index));

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            log_debug!("game finished after {} moves: {}", self.history.len(), outcome);
        } else {
            self.current_player = player.opponent();
        }

        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
