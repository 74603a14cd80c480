use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider,
    YamlConfigSerializer,
};
use tictactoe_engine::{Difficulty, GameOutcome, Player};

use crate::arena_config::Matchup;
use crate::match_runner::GameResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub matchup: Matchup,
    pub seed: u64,
    pub games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    pub total_moves: u32,
}

impl MatchupReport {
    pub fn new(matchup: Matchup, seed: u64) -> Self {
        Self {
            matchup,
            seed,
            games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            total_moves: 0,
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_moves += result.moves.len() as u32;
        match result.outcome {
            GameOutcome::Win {
                player: Player::X, ..
            } => self.x_wins += 1,
            GameOutcome::Win {
                player: Player::O, ..
            } => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }

    /// Games lost by a side playing Hard. Anything above zero is a search bug.
    pub fn hard_losses(&self) -> u32 {
        let mut losses = 0;
        if self.matchup.x == Difficulty::Hard {
            losses += self.o_wins;
        }
        if self.matchup.o == Difficulty::Hard {
            losses += self.x_wins;
        }
        losses
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} games, X won {}, O won {}, {} draws, {:.1} moves/game (seed {})",
            self.matchup,
            self.games,
            self.x_wins,
            self.o_wins,
            self.draws,
            self.average_moves(),
            self.seed
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaReport {
    pub seed: u64,
    pub games_per_matchup: u32,
    pub matchups: Vec<MatchupReport>,
}

pub fn write_report(path: &Path, report: &ArenaReport) -> Result<(), ConfigError> {
    let content = YamlConfigSerializer.serialize(report)?;
    FileContentConfigProvider::new(path).set_config_content(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{MoveRecord, WINNING_LINES};

    fn result(outcome: GameOutcome, move_count: usize) -> GameResult {
        let moves = (0..move_count)
            .map(|i| {
                let player = if i % 2 == 0 { Player::X } else { Player::O };
                MoveRecord::new(player, i)
            })
            .collect();
        GameResult { outcome, moves }
    }

    #[test]
    fn test_record_tallies_outcomes() {
        let mut report = MatchupReport::new(Matchup::new(Difficulty::Easy, Difficulty::Easy), 1);
        report.record(&result(
            GameOutcome::Win {
                player: Player::X,
                line: WINNING_LINES[0],
            },
            5,
        ));
        report.record(&result(GameOutcome::Draw, 9));
        report.record(&result(
            GameOutcome::Win {
                player: Player::O,
                line: WINNING_LINES[3],
            },
            6,
        ));

        assert_eq!(report.games, 3);
        assert_eq!((report.x_wins, report.o_wins, report.draws), (1, 1, 1));
        assert_eq!(report.total_moves, 20);
    }

    #[test]
    fn test_hard_losses_counts_only_hard_side() {
        let mut report = MatchupReport::new(Matchup::new(Difficulty::Hard, Difficulty::Easy), 1);
        report.x_wins = 4;
        report.o_wins = 1;
        assert_eq!(report.hard_losses(), 1);

        let mut report = MatchupReport::new(Matchup::new(Difficulty::Easy, Difficulty::Medium), 1);
        report.x_wins = 4;
        report.o_wins = 3;
        assert_eq!(report.hard_losses(), 0);
    }

    #[test]
    fn test_average_moves_on_empty_report() {
        let report = MatchupReport::new(Matchup::new(Difficulty::Hard, Difficulty::Hard), 0);
        assert_eq!(report.average_moves(), 0.0);
    }

    #[test]
    fn test_summary_mentions_matchup_and_tallies() {
        let mut report = MatchupReport::new(Matchup::new(Difficulty::Hard, Difficulty::Hard), 42);
        report.record(&result(GameOutcome::Draw, 9));
        assert_eq!(
            report.summary(),
            "hard (X) vs hard (O): 1 games, X won 0, O won 0, 1 draws, 9.0 moves/game (seed 42)"
        );
    }

    #[test]
    fn test_write_report_reads_back_as_yaml() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("report.yaml");

        let mut matchup = MatchupReport::new(Matchup::new(Difficulty::Hard, Difficulty::Easy), 5);
        matchup.record(&result(GameOutcome::Draw, 9));
        let report = ArenaReport {
            seed: 5,
            games_per_matchup: 1,
            matchups: vec![matchup],
        };

        write_report(&path, &report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let read_back: ArenaReport = serde_yaml_ng::from_str(&content).unwrap();
        assert_eq!(read_back, report);
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("report.yaml");
        let report = ArenaReport {
            seed: 0,
            games_per_matchup: 1,
            matchups: Vec::new(),
        };

        assert!(matches!(
            write_report(&path, &report),
            Err(ConfigError::Write { .. })
        ));
    }
}
