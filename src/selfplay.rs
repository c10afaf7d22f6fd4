//! Engine-versus-engine matches for comparing search depths
//!
//! Games are independent, so a match spreads them over the rayon thread pool
//! while each individual search stays single-threaded.

use anyhow::{anyhow, Result};
use indicatif::*;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use std::fmt;

use crate::{arrayboard::*, board::*, search::*, DEFAULT_DEPTH, HEIGHT, WIDTH};

/// Settings shared by every game of a match
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub width: usize,
    pub height: usize,
    /// Search depth of the engines playing as player one and player two
    pub depths: (usize, usize),
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            depths: (DEFAULT_DEPTH, DEFAULT_DEPTH),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// The result of a single self-play game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Columns played, starting with player one's first move
    pub moves: Vec<usize>,
    /// Nodes searched by player one's and player two's engine
    pub nodes: (usize, usize),
    pub final_board: ArrayBoard,
}

/// Plays one game between two engines, player one moving first
///
/// Both engines draw their fallback moves from generators derived from
/// `seed`, so a given seed always replays the same game.
pub fn play_game(config: &SelfPlayConfig, seed: u64) -> Result<GameRecord> {
    if config.depths.0 == 0 || config.depths.1 == 0 {
        return Err(anyhow!(
            "Invalid search depths {:?}, both engines need at least one ply",
            config.depths
        ));
    }
    let mut board = ArrayBoard::new(config.width, config.height)?;
    let mut engines = [
        SearchEngine::new(Player::One, SmallRng::seed_from_u64(seed.wrapping_mul(2)))
            .with_depth(config.depths.0),
        SearchEngine::new(Player::Two, SmallRng::seed_from_u64(seed.wrapping_mul(2) + 1))
            .with_depth(config.depths.1),
    ];

    let mut moves = Vec::new();
    let mut player = Player::One;
    let outcome = loop {
        let engine = &mut engines[player.number() as usize - 1];
        let column = engine
            .choose_move(&board)
            .ok_or_else(|| anyhow!("no playable column for player {}", player.number()))?;
        if !board.accept_move(column, player) {
            return Err(anyhow!(
                "player {} engine proposed full column {}",
                player.number(),
                column + 1
            ));
        }
        moves.push(column);

        if board.check_win(player) {
            break Outcome::Win(player);
        }
        if board.is_full() {
            break Outcome::Draw;
        }
        player = player.other();
    };

    let nodes = (
        engines[0].statistics().total_nodes,
        engines[1].statistics().total_nodes,
    );
    info!(
        "self-play game {} finished after {} moves: {:?}",
        seed,
        moves.len(),
        outcome
    );

    Ok(GameRecord {
        outcome,
        moves,
        nodes,
        final_board: board,
    })
}

/// Aggregate results of a match
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchReport {
    pub games: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub mean_moves: f64,
    /// Mean nodes searched per game by each side's engine
    pub mean_nodes: (f64, f64),
}

impl MatchReport {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut report = Self {
            games: records.len(),
            ..Self::default()
        };
        if records.is_empty() {
            return report;
        }
        for record in records {
            match record.outcome {
                Outcome::Win(Player::One) => report.player_one_wins += 1,
                Outcome::Win(Player::Two) => report.player_two_wins += 1,
                Outcome::Draw => report.draws += 1,
            }
        }
        let games = records.len() as f64;
        report.mean_moves = records.iter().map(|r| r.moves.len()).sum::<usize>() as f64 / games;
        report.mean_nodes = (
            records.iter().map(|r| r.nodes.0).sum::<usize>() as f64 / games,
            records.iter().map(|r| r.nodes.1).sum::<usize>() as f64 / games,
        );
        report
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games)?;
        writeln!(
            f,
            "Player 1 wins: {}, Player 2 wins: {}, Draws: {}",
            self.player_one_wins, self.player_two_wins, self.draws
        )?;
        writeln!(f, "Mean game length: {:.1} moves", self.mean_moves)?;
        write!(
            f,
            "Mean nodes per game: {:.0} (player 1), {:.0} (player 2)",
            self.mean_nodes.0, self.mean_nodes.1
        )
    }
}

/// Plays `games` games in parallel, game `i` using seed `seed + i`
pub fn play_match(
    config: &SelfPlayConfig,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<MatchReport> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Self-play: {bar:40.cyan/blue} {pos}/{len} games ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let records = (0..games)
        .into_par_iter()
        .map(|i| {
            let record = play_game(config, seed.wrapping_add(i as u64));
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    Ok(MatchReport::from_records(&records))
}
