//! Fixed-depth minimax search with alpha-beta pruning

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use std::time::{Duration, Instant};

use crate::{board::*, evaluator::*, game_state::*, DEFAULT_DEPTH};

/// Stands in for negative infinity, below every reachable score
pub const NEG_INFINITY: i32 = i32::MIN;
/// Stands in for positive infinity, above every reachable score
pub const POS_INFINITY: i32 = i32::MAX;

/// Diagnostics about the work done by a `SearchEngine`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes visited by the most recent `choose_move`
    pub nodes_last_search: usize,
    /// Nodes visited across every search since creation or the last reset
    pub total_nodes: usize,
    /// Wall-clock time taken by the most recent `choose_move`
    pub last_search_duration: Duration,
}

/// An automated player choosing moves by game tree search
///
/// # Notes
/// The engine never holds on to the live board: each call to `choose_move`
/// copies the position it is given and explores private copies from there.
/// Every leaf (depth exhausted or game over) is scored by an `Evaluator`
/// for the engine's own player, who maximises; the opponent minimises.
///
/// The random source is only used to pick a fallback move before any child
/// is scored, so a seeded generator makes whole games reproducible.
pub struct SearchEngine<R> {
    evaluator: Evaluator,
    depth: usize,
    rng: R,
    node_count: usize,
    statistics: SearchStatistics,
}

impl<R: Rng> SearchEngine<R> {
    /// Creates an engine playing as `player` with the default search depth
    pub fn new(player: Player, rng: R) -> Self {
        Self {
            evaluator: Evaluator::new(player),
            depth: DEFAULT_DEPTH,
            rng,
            node_count: 0,
            statistics: SearchStatistics::default(),
        }
    }

    /// Sets the number of plies searched from the current position
    ///
    /// # Panics
    /// If `depth` is zero.
    pub fn with_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "search depth must be at least one ply");
        self.depth = depth;
        self
    }

    pub fn player(&self) -> Player {
        self.evaluator.player()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.statistics = SearchStatistics::default();
    }

    /// Picks a column for the engine's player on `board`
    ///
    /// Each immediate child is scored with a fresh search window and the first
    /// child with the strictly highest score wins, so ties go to the lowest
    /// column. Returns `None` only when no column is playable.
    pub fn choose_move<B: Board + Clone>(&mut self, board: &B) -> Option<usize> {
        let start = Instant::now();
        self.node_count = 0;

        let legal: Vec<usize> = (0..board.columns()).filter(|&c| board.playable(c)).collect();
        let mut best_move = legal.choose(&mut self.rng).copied();
        let mut best_score = NEG_INFINITY;

        let root = GameState::root(board, self.player());
        for child in root.generate_children() {
            let score = self.minimax(&child, self.depth - 1, false, NEG_INFINITY, POS_INFINITY);
            debug!(
                "player {} column {:?} scored {}",
                self.player().number(),
                child.originating_move(),
                score
            );
            if score > best_score {
                best_score = score;
                best_move = child.originating_move();
            }
        }

        let elapsed = start.elapsed();
        self.statistics.nodes_last_search = self.node_count;
        self.statistics.total_nodes += self.node_count;
        self.statistics.last_search_duration = elapsed;
        debug!(
            "player {} chose {:?} (score {}, {} nodes in {:?})",
            self.player().number(),
            best_move,
            best_score,
            self.node_count,
            elapsed
        );

        best_move
    }

    /// Scores `state` by searching `depth` further plies
    ///
    /// Children whose subtree can no longer affect the result, once
    /// `beta <= alpha`, are left unexplored.
    pub fn minimax<B: Board + Clone>(
        &mut self,
        state: &GameState<B>,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || state.is_terminal() {
            let score = self.evaluator.evaluate(state.board());
            trace!("leaf at depth {} scored {}", depth, score);
            return score;
        }

        if maximizing {
            let mut max = NEG_INFINITY;
            for child in state.generate_children() {
                let score = self.minimax(&child, depth - 1, false, alpha, beta);
                max = max.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    trace!("beta cut-off at depth {}", depth);
                    break;
                }
            }
            max
        } else {
            let mut min = POS_INFINITY;
            for child in state.generate_children() {
                let score = self.minimax(&child, depth - 1, true, alpha, beta);
                min = min.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    trace!("alpha cut-off at depth {}", depth);
                    break;
                }
            }
            min
        }
    }
}
