use anyhow::{anyhow, Result};

use std::fmt;

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, MAX_CELLS, WIDTH};

// direction steps as (row, column) deltas: right, down, down-right, up-right
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A game board stored as a flat, fixed-capacity array of cells
///
/// Cells are stored row-major from the top-left corner. The array is sized
/// for the largest supported grid so that copying a board never allocates.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArrayBoard {
    cells: [Cell; MAX_CELLS],
    width: usize,
    height: usize,
    last_added: Option<(usize, usize)>,
}

impl ArrayBoard {
    /// Creates an empty board with the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "Invalid board size {}x{}, both dimensions must be at least 1",
                width,
                height
            ));
        }
        if width * height > MAX_CELLS {
            return Err(anyhow!(
                "Invalid board size {}x{}, at most {} cells are supported",
                width,
                height,
                MAX_CELLS
            ));
        }
        Ok(Self {
            cells: [Cell::Empty; MAX_CELLS],
            width,
            height,
            last_added: None,
        })
    }

    /// Creates a board by replaying a string of 1-indexed column digits,
    /// alternating players starting with `Player::One`
    pub fn from_moves<S: AsRef<str>>(width: usize, height: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(width, height)?;
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if (1..=width).contains(&column) => {
                    if !board.accept_move(column - 1, player) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.other();
                }
                Some(column) => {
                    return Err(anyhow!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        column,
                        width
                    ))
                }
                None => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.height && column < self.width,
            "cell ({}, {}) outside {}x{} board",
            row,
            column,
            self.width,
            self.height
        );
        row * self.width + column
    }

    /// Whether four `player` cells start at `(row, column)` and step by `(dr, dc)`
    fn four_from(&self, row: usize, column: usize, (dr, dc): (isize, isize), player: Cell) -> bool {
        (0..4).all(|i| {
            let r = row as isize + dr * i;
            let c = column as isize + dc * i;
            r >= 0
                && c >= 0
                && (r as usize) < self.height
                && (c as usize) < self.width
                && self.cells[r as usize * self.width + c as usize] == player
        })
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; MAX_CELLS],
            width: WIDTH,
            height: HEIGHT,
            last_added: None,
        }
    }
}

impl Board for ArrayBoard {
    fn columns(&self) -> usize {
        self.width
    }

    fn rows(&self) -> usize {
        self.height
    }

    fn last_added(&self) -> Option<(usize, usize)> {
        self.last_added
    }

    fn accept_move(&mut self, column: usize, player: Player) -> bool {
        if !self.cells[self.index(0, column)].is_empty() {
            return false;
        }
        // the top cell is empty so this always finds a landing row
        for row in (0..self.height).rev() {
            let idx = self.index(row, column);
            if self.cells[idx].is_empty() {
                self.cells[idx] = player.into();
                self.last_added = Some((row, column));
                return true;
            }
        }
        unreachable!("column {} has an empty top cell but no empty row", column)
    }

    fn state(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    fn check_win(&self, player: Player) -> bool {
        let player = Cell::from(player);
        for row in 0..self.height {
            for column in 0..self.width {
                if self.cells[row * self.width + column] != player {
                    continue;
                }
                if DIRECTIONS
                    .iter()
                    .any(|&direction| self.four_from(row, column, direction, player))
                {
                    return true;
                }
            }
        }
        false
    }

    fn is_full(&self) -> bool {
        !self.cells[..self.width * self.height]
            .iter()
            .any(|cell| cell.is_empty())
    }

    fn playable(&self, column: usize) -> bool {
        self.cells[self.index(0, column)].is_empty()
    }
}

impl fmt::Display for ArrayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells[..self.width * self.height].chunks(self.width) {
            write!(f, "|")?;
            for cell in row {
                let c = match cell {
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                    Cell::Empty => ' ',
                };
                write!(f, "{}|", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
