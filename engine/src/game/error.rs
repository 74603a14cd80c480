use super::types::Player;

/// A rejected move. The board or session it was aimed at is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("cell index {index} is out of range 0..=8")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("the move for {player} must come from the other side")]
    WrongTurn { player: Player },

    #[error("session has no AI opponent")]
    NoAiOpponent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        assert_eq!(
            InvalidMove::Occupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(
            InvalidMove::OutOfRange { index: 9 }.to_string(),
            "cell index 9 is out of range 0..=8"
        );
        assert_eq!(InvalidMove::GameOver.to_string(), "game is already over");
    }
}
