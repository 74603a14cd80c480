use crate::session_rng::SessionRng;

use super::board::{Board, CENTER};
use super::game_session::GameSession;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, GameOutcome, Player};

/// Snapshot handed to a strategy. Strategies keep nothing between calls.
#[derive(Clone, Copy, Debug)]
pub struct BotInput {
    pub board: Board,
    pub ai_player: Player,
    pub human_player: Player,
}

impl BotInput {
    pub fn new(board: Board, ai_player: Player) -> Self {
        Self {
            board,
            ai_player,
            human_player: ai_player.opponent(),
        }
    }

    pub fn from_session(session: &GameSession) -> Self {
        Self::new(*session.board(), session.current_player())
    }
}

/// Returns `None` only when the board has no empty cell.
///
/// # Panics
///
/// Panics when the two players are the same or when the board already has a
/// winner; both mean the caller skipped its own outcome check.
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    ai_player: Player,
    human_player: Player,
    rng: &mut SessionRng,
) -> Option<usize> {
    let input = BotInput {
        board: *board,
        ai_player,
        human_player,
    };
    calculate_move(difficulty, &input, rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if input.board.is_full() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_heuristic_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

/// Precondition shared by every strategy.
pub(crate) fn assert_playable(input: &BotInput) {
    assert_ne!(
        input.ai_player, input.human_player,
        "AI and human must play different marks"
    );

    if let GameOutcome::Win { player, .. } = input.board.outcome() {
        panic!(
            "AI asked to move on a finished game won by {}:\n{}",
            player, input.board
        );
    }
}

pub(crate) fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    assert_playable(input);
    let available_moves = input.board.available_moves();
    rng.pick(&available_moves)
}

/// Win, then block, then center, then random.
pub(crate) fn calculate_heuristic_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    assert_playable(input);
    let available_moves = input.board.available_moves();

    if let Some(index) = find_winning_move(&input.board, input.ai_player, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, input.human_player, &available_moves) {
        return Some(index);
    }

    if input.board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    calculate_random_move(input, rng)
}

fn find_winning_move(board: &Board, player: Player, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| board.with_mark(index, player).winner() == Some(player))
}
