use anyhow::{anyhow, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use std::io::{stdin, stdout, Write};

use connect4_minimax::selfplay::{play_match, SelfPlayConfig};
use connect4_minimax::*;

mod display;
use display::*;

/// Play Connect 4 against a minimax agent
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board width in columns
    #[arg(long, default_value_t = WIDTH)]
    width: usize,

    /// Board height in rows
    #[arg(long, default_value_t = HEIGHT)]
    height: usize,

    /// Search depth in plies for AI players
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Search depth for player 2, if different from --depth
    #[arg(long)]
    depth_two: Option<usize>,

    /// Seed for the AI players' random fallback moves
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many AI-vs-AI games and print a summary instead of an interactive game
    #[arg(long, value_name = "GAMES")]
    self_play: Option<usize>,
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        print!("{}", prompt);
        stdout().flush()?;

        let mut buffer = String::new();
        if stdin().read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed"));
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let depths = (args.depth, args.depth_two.unwrap_or(args.depth));
    if depths.0 == 0 || depths.1 == 0 {
        return Err(anyhow!("Search depth must be at least 1"));
    }
    let seed = args.seed.unwrap_or_else(rand::random);

    if let Some(games) = args.self_play {
        let config = SelfPlayConfig {
            width: args.width,
            height: args.height,
            depths,
        };
        let report = play_match(&config, games, seed, true)?;
        println!("{}", report);
        return Ok(());
    }

    let mut board = ArrayBoard::new(args.width, args.height)?;

    println!("Welcome to Connect 4\n");

    let mut engines = [
        ask_yes_no("Is player 1 AI controlled? y/n: ")?.then(|| {
            SearchEngine::new(Player::One, SmallRng::seed_from_u64(seed)).with_depth(depths.0)
        }),
        ask_yes_no("Is player 2 AI controlled? y/n: ")?.then(|| {
            SearchEngine::new(Player::Two, SmallRng::seed_from_u64(seed.wrapping_add(1)))
                .with_depth(depths.1)
        }),
    ];
    let both_ai = engines.iter().all(Option::is_some);

    // game loop
    let mut player = Player::One;
    loop {
        display(&board)?;

        let column = match engines[player.number() as usize - 1].as_mut() {
            // AI player
            Some(engine) => {
                println!("AI is thinking...");
                stdout().flush()?;

                // slow down play if both players are AI
                if both_ai {
                    std::thread::sleep(std::time::Duration::from_secs(1));
                }

                let column = engine
                    .choose_move(&board)
                    .ok_or_else(|| anyhow!("no playable column left"))?;
                let stats = engine.statistics();
                println!(
                    "Nodes explored: {}, total nodes explored: {}, time taken: {:.3}s",
                    stats.nodes_last_search,
                    stats.total_nodes,
                    stats.last_search_duration.as_secs_f64()
                );
                println!("Best move: {}", column + 1);
                column
            }
            // human player
            None => {
                print!(
                    "Player {}: select a column (1-{}) > ",
                    player.number(),
                    board.columns()
                );
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin().read_line(&mut input_str)? == 0 {
                    return Err(anyhow!("input closed"));
                }

                match input_str.trim().parse::<usize>() {
                    Ok(column) if (1..=board.columns()).contains(&column) => column - 1,
                    Ok(column) => {
                        println!(
                            "Invalid move, column {} out of range. Columns must be between 1 and {}",
                            column,
                            board.columns()
                        );
                        continue;
                    }
                    Err(_) => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                }
            }
        };

        if !board.accept_move(column, player) {
            println!("Invalid move, column {} full", column + 1);
            // try the move again
            continue;
        }

        // end states
        if board.check_win(player) {
            display(&board)?;
            println!("Player {} wins!", player.number());
            break;
        }
        if board.is_full() {
            display(&board)?;
            println!("Draw!");
            break;
        }
        player = player.other();
    }
    Ok(())
}
