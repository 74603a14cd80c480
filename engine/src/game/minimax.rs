use super::board::Board;
use super::bot_controller::{BotInput, assert_playable};
use super::types::{GameOutcome, Player};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Full-depth search over every continuation. Among equally scored moves the
/// lowest index wins, since the incumbent is only replaced on a strictly
/// better score.
pub(crate) fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    assert_playable(input);

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.available_moves() {
        let next = input.board.with_mark(index, input.ai_player);
        let score = minimax(&next, input.human_player, input.ai_player);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Value of `board` for `ai_player` with `mover` to act, under optimal play
/// from both sides.
pub fn minimax_score(board: &Board, mover: Player, ai_player: Player) -> i32 {
    minimax(board, mover, ai_player)
}

fn terminal_score(outcome: GameOutcome, ai_player: Player) -> Option<i32> {
    match outcome {
        GameOutcome::Win { player, .. } if player == ai_player => Some(WIN_SCORE),
        GameOutcome::Win { .. } => Some(LOSS_SCORE),
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::InProgress => None,
    }
}

fn minimax(board: &Board, mover: Player, ai_player: Player) -> i32 {
    if let Some(score) = terminal_score(board.outcome(), ai_player) {
        return score;
    }

    let is_maximizing = mover == ai_player;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        let next = board.with_mark(index, mover);
        let eval = minimax(&next, mover.opponent(), ai_player);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Mark::{Empty as E, O, X};

    fn assert_never_loses(board: Board, to_move: Player, ai_player: Player) {
        match board.outcome() {
            GameOutcome::Win { player, .. } => {
                assert_eq!(player, ai_player, "AI lost on\n{}", board);
                return;
            }
            GameOutcome::Draw => return,
            GameOutcome::InProgress => {}
        }

        if to_move == ai_player {
            let index = calculate_minimax_move(&BotInput::new(board, ai_player))
                .expect("in-progress board has a move");
            let next = board.apply_move(index, ai_player).unwrap();
            assert_never_loses(next, to_move.opponent(), ai_player);
        } else {
            for index in board.available_moves() {
                let next = board.apply_move(index, to_move).unwrap();
                assert_never_loses(next, to_move.opponent(), ai_player);
            }
        }
    }

    #[test]
    fn test_never_loses_as_second_player() {
        assert_never_loses(Board::new(), Player::X, Player::O);
    }

    #[test]
    fn test_never_loses_as_first_player() {
        assert_never_loses(Board::new(), Player::X, Player::X);
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        assert_eq!(minimax_score(&Board::new(), Player::X, Player::X), 0);
        assert_eq!(minimax_score(&Board::new(), Player::X, Player::O), 0);
    }

    #[test]
    fn test_opening_move_is_corner_or_center_and_stable() {
        let input = BotInput::new(Board::new(), Player::X);
        let first = calculate_minimax_move(&input).unwrap();
        assert!([0, 2, 4, 6, 8].contains(&first));
        for _ in 0..3 {
            assert_eq!(calculate_minimax_move(&input), Some(first));
        }
    }

    #[test]
    fn test_blocks_forced_loss() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);
        let input = BotInput::new(board, Player::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_takes_lowest_index_win() {
        let board = Board::from_cells([O, O, E, X, X, E, X, E, E]);
        let input = BotInput::new(board, Player::O);
        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_terminal_scores_from_ai_perspective() {
        let x_wins = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(minimax_score(&x_wins, Player::O, Player::X), WIN_SCORE);
        assert_eq!(minimax_score(&x_wins, Player::O, Player::O), LOSS_SCORE);

        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(minimax_score(&draw, Player::X, Player::X), DRAW_SCORE);
    }

    #[test]
    #[should_panic(expected = "finished game")]
    fn test_search_on_won_board_panics() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        calculate_minimax_move(&BotInput::new(board, Player::O));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(calculate_minimax_move(&BotInput::new(draw, Player::X)), None);
    }
}
