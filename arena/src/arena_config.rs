use std::fmt;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::logger::LogLevel;
use tictactoe_engine::{Difficulty, Player};

pub const MAX_GAMES_PER_MATCHUP: u32 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub x: Difficulty,
    pub o: Difficulty,
}

impl Matchup {
    pub fn new(x: Difficulty, o: Difficulty) -> Self {
        Self { x, o }
    }

    pub fn difficulty_for(&self, player: Player) -> Difficulty {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (X) vs {} (O)", self.x, self.o)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games_per_matchup: u32,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
    pub matchups: Vec<Matchup>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let levels = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        let matchups = levels
            .iter()
            .flat_map(|&x| levels.iter().map(move |&o| Matchup::new(x, o)))
            .collect();

        Self {
            games_per_matchup: 100,
            seed: None,
            log_level: LogLevel::Info,
            matchups,
        }
    }
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games_per_matchup == 0 || self.games_per_matchup > MAX_GAMES_PER_MATCHUP {
            return Err(format!(
                "games_per_matchup must be between 1 and {}, got {}",
                MAX_GAMES_PER_MATCHUP, self.games_per_matchup
            ));
        }
        if self.matchups.is_empty() {
            return Err("At least one matchup is required".to_string());
        }
        Ok(())
    }
}
