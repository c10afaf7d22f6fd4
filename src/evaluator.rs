//! Static scoring of search leaves

use crate::board::{Board, Cell, Player};

/// Score awarded (or deducted) when a side has four in a row
pub const WIN_SCORE: i32 = 100;
/// Score awarded (or deducted) per near-four window
pub const NEAR_FOUR_SCORE: i32 = 5;

/// Scores positions from the point of view of one player
#[derive(Copy, Clone, Debug)]
pub struct Evaluator {
    player: Player,
    opponent: Player,
}

impl Evaluator {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            opponent: player.other(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Scores a leaf position, positive values favouring `self.player`
    pub fn evaluate<B: Board>(&self, board: &B) -> i32 {
        let mut score = NEAR_FOUR_SCORE * near_four(board, self.player) as i32
            - NEAR_FOUR_SCORE * near_four(board, self.opponent) as i32;
        if board.check_win(self.player) {
            score += WIN_SCORE;
        }
        if board.check_win(self.opponent) {
            score -= WIN_SCORE;
        }
        score
    }
}

/// Counts the horizontal and vertical windows of four cells holding exactly
/// three `player` pieces and one empty cell
///
/// Diagonal windows are not counted.
pub fn near_four<B: Board>(board: &B, player: Player) -> usize {
    let player = Cell::from(player);
    let is_near = |cells: [Cell; 4]| {
        cells.iter().filter(|&&c| c == player).count() == 3
            && cells.iter().filter(|c| c.is_empty()).count() == 1
    };
    let (rows, columns) = (board.rows(), board.columns());

    let mut count = 0;
    for row in 0..rows {
        for column in 0..columns.saturating_sub(3) {
            let window = [0, 1, 2, 3].map(|i| board.state(row, column + i));
            if is_near(window) {
                count += 1;
            }
        }
    }
    for column in 0..columns {
        for row in 0..rows.saturating_sub(3) {
            let window = [0, 1, 2, 3].map(|i| board.state(row + i, column));
            if is_near(window) {
                count += 1;
            }
        }
    }
    count
}
