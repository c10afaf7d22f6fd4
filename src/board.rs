//! Cell states, players and the capability set every game board exposes

/// The state of a single grid position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The conventional player number, 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// Operations shared by the game session, the renderers and the search engine
///
/// Rows are indexed from the top (row 0) downwards, so pieces settle towards
/// `rows() - 1`. Passing a column or row outside the grid to any method is a
/// caller bug and panics.
pub trait Board {
    /// Number of columns
    fn columns(&self) -> usize;

    /// Number of rows
    fn rows(&self) -> usize;

    /// `(row, column)` of the most recently placed piece, if any
    fn last_added(&self) -> Option<(usize, usize)>;

    /// Drops a piece for `player` into `column`
    ///
    /// Returns `false` without touching the grid if the column is full.
    fn accept_move(&mut self, column: usize, player: Player) -> bool;

    /// The state of the cell at `(row, column)`
    fn state(&self, row: usize, column: usize) -> Cell;

    /// Whether `player` has four consecutive pieces in any direction
    fn check_win(&self, player: Player) -> bool;

    /// Whether no empty cell remains
    fn is_full(&self) -> bool;

    /// Whether a piece can still be dropped into `column`
    fn playable(&self, column: usize) -> bool {
        self.state(0, column).is_empty()
    }

    /// A snapshot of the whole grid, top row first
    fn states_grid(&self) -> Vec<Vec<Cell>> {
        (0..self.rows())
            .map(|row| (0..self.columns()).map(|column| self.state(row, column)).collect())
            .collect()
    }
}
