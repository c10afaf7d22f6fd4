use crate::board::{Board, Player};

/// A node of the search tree: a private board copy and the player about to move
#[derive(Clone, Debug)]
pub struct GameState<B> {
    board: B,
    current_player: Player,
    originating_move: Option<usize>,
}

impl<B: Board + Clone> GameState<B> {
    /// Creates a root state from a copy of `board` with `player` to move
    pub fn root(board: &B, player: Player) -> Self {
        Self {
            board: board.clone(),
            current_player: player,
            originating_move: None,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The column played by the parent to reach this state, `None` at the root
    pub fn originating_move(&self) -> Option<usize> {
        self.originating_move
    }

    /// Whether the game is over in this state
    pub fn is_terminal(&self) -> bool {
        self.board.check_win(Player::One) || self.board.check_win(Player::Two) || self.board.is_full()
    }

    /// Expands every legal move of the current player, in ascending column order
    ///
    /// Terminal states have no children.
    pub fn generate_children(&self) -> Vec<GameState<B>> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.columns())
            .filter(|&column| self.board.playable(column))
            .map(|column| {
                let mut board = self.board.clone();
                board.accept_move(column, self.current_player);
                GameState {
                    board,
                    current_player: self.current_player.other(),
                    originating_move: Some(column),
                }
            })
            .collect()
    }
}
