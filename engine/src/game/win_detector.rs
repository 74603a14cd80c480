use super::board::Board;
use super::types::{GameOutcome, Mark, Player, WINNING_LINES, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<(Player, WinningLine)> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        let mark = cells[a];
        if mark == Mark::Empty {
            continue;
        }
        if cells[b] == mark && cells[c] == mark {
            return mark.player().map(|player| (player, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}

/// Win takes precedence over draw: a full board with a completed line is a win.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, line)) = check_win_with_line(board) {
        return GameOutcome::Win { player, line };
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
