use tictactoe_engine::{
    BotInput, GameMode, GameOutcome, GameSession, InvalidMove, MoveRecord, SessionRng,
    calculate_move, log_debug,
};

use crate::arena_config::Matchup;
use crate::report::MatchupReport;

pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: Vec<MoveRecord>,
}

/// Plays one AI-vs-AI game from an empty board. Both sides go through a
/// two-player session so every move passes the same checks a human move does.
pub fn play_game(matchup: Matchup, rng: &mut SessionRng) -> Result<GameResult, InvalidMove> {
    let mut session = GameSession::new(GameMode::TwoPlayer);

    while session.is_active() {
        let difficulty = matchup.difficulty_for(session.current_player());
        let input = BotInput::from_session(&session);
        let Some(index) = calculate_move(difficulty, &input, rng) else {
            break;
        };
        session.play(index)?;
    }

    Ok(GameResult {
        outcome: session.outcome(),
        moves: session.history().to_vec(),
    })
}

pub fn run_matchup(
    matchup: Matchup,
    games: u32,
    rng: &mut SessionRng,
) -> Result<MatchupReport, InvalidMove> {
    let mut report = MatchupReport::new(matchup, rng.seed());

    for game in 0..games {
        let result = play_game(matchup, rng)?;
        log_debug!("{} game {}: {}", matchup, game + 1, result.outcome);
        report.record(&result);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Difficulty, Player};

    #[test]
    fn test_hard_self_play_is_a_draw() {
        let matchup = Matchup::new(Difficulty::Hard, Difficulty::Hard);
        let mut rng = SessionRng::new(0);
        let result = play_game(matchup, &mut rng).unwrap();
        assert_eq!(result.outcome, GameOutcome::Draw);
        assert_eq!(result.moves.len(), 9);
    }

    #[test]
    fn test_hard_never_loses_to_easy_as_o() {
        let matchup = Matchup::new(Difficulty::Easy, Difficulty::Hard);
        let mut rng = SessionRng::new(21);
        let report = run_matchup(matchup, 25, &mut rng).unwrap();
        assert_eq!(report.games, 25);
        assert_eq!(report.x_wins, 0);
        assert_eq!(report.hard_losses(), 0);
    }

    #[test]
    fn test_hard_never_loses_to_medium_as_x() {
        let matchup = Matchup::new(Difficulty::Hard, Difficulty::Medium);
        let mut rng = SessionRng::new(8);
        let report = run_matchup(matchup, 3, &mut rng).unwrap();
        assert_eq!(report.o_wins, 0);
    }

    #[test]
    fn test_moves_alternate_starting_with_x() {
        let matchup = Matchup::new(Difficulty::Easy, Difficulty::Easy);
        let mut rng = SessionRng::new(5);
        let result = play_game(matchup, &mut rng).unwrap();

        assert!(result.outcome.is_terminal());
        for (i, record) in result.moves.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(record.player, expected);
        }
    }

    #[test]
    fn test_same_seed_reproduces_report() {
        let matchup = Matchup::new(Difficulty::Easy, Difficulty::Medium);
        let first = run_matchup(matchup, 20, &mut SessionRng::new(77)).unwrap();
        let second = run_matchup(matchup, 20, &mut SessionRng::new(77)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.x_wins + first.o_wins + first.draws, 20);
    }
}
