//! Self-play driver: the search engine against a random mover.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isolation::eval::{AggressiveMobility, CenterPressure, ChaseDistance, Evaluator};
use isolation::{Board, BoardState, Move, Player, SearchConfig, SearchEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Heuristic {
    /// Mobility difference minus the distance to the opponent
    Chase,
    /// Mobility difference plus the opponent's distance from center
    Center,
    /// Mobility difference with the opponent double-weighted
    Aggressive,
}

#[derive(Parser, Debug)]
#[command(name = "isolation", about = "Knight's Isolation search engine self-play")]
struct Args {
    /// Board height
    #[arg(long, default_value_t = 7)]
    height: u8,

    /// Board width
    #[arg(long, default_value_t = 7)]
    width: u8,

    /// Time budget per engine move, in milliseconds
    #[arg(long, default_value_t = 150.0)]
    time_ms: f64,

    /// Depth cap; omit to deepen until the clock runs out
    #[arg(long)]
    max_depth: Option<u32>,

    /// Evaluation heuristic for the engine
    #[arg(long, value_enum, default_value_t = Heuristic::Chase)]
    heuristic: Heuristic,

    /// JSON search config file; command-line flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn load_config(args: &Args) -> Result<SearchConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SearchConfig::default(),
    };
    if let Some(depth) = args.max_depth {
        config.max_depth = Some(depth);
    }
    Ok(config)
}

/// Play one game: the engine as player One, a random mover as player Two.
/// Returns the winner.
fn play_game<E: Evaluator<Board>>(
    mut engine: SearchEngine<E>,
    mut board: Board,
    time_ms: f64,
    rng: &mut StdRng,
) -> Player {
    let mut ply = 0u32;
    loop {
        let mover = board.active_player();
        let mv = match mover {
            Player::One => {
                let start = Instant::now();
                let time_left = move || time_ms - start.elapsed().as_secs_f64() * 1000.0;
                engine.choose_move(&board, &time_left)
            }
            Player::Two => board
                .legal_moves()
                .choose(rng)
                .copied()
                .unwrap_or(Move::NONE),
        };

        if mv.is_none() {
            let winner = mover.opponent();
            info!(ply, ?winner, "game over");
            return winner;
        }

        info!(ply, ?mover, row = mv.row, col = mv.col, "move");
        board = board.apply(mv);
        ply += 1;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let board = Board::with_size(args.height, args.width);
    let mut rng = StdRng::seed_from_u64(args.seed);

    info!(
        height = args.height,
        width = args.width,
        time_ms = args.time_ms,
        heuristic = ?args.heuristic,
        "starting game"
    );

    let winner = match args.heuristic {
        Heuristic::Chase => play_game(
            SearchEngine::with_config(ChaseDistance, config),
            board,
            args.time_ms,
            &mut rng,
        ),
        Heuristic::Center => play_game(
            SearchEngine::with_config(CenterPressure, config),
            board,
            args.time_ms,
            &mut rng,
        ),
        Heuristic::Aggressive => play_game(
            SearchEngine::with_config(AggressiveMobility, config),
            board,
            args.time_ms,
            &mut rng,
        ),
    };

    println!("winner: {winner:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_play_terminates_with_a_winner() {
        let config = SearchConfig {
            max_depth: Some(3),
            ..SearchConfig::default()
        };
        let engine = SearchEngine::with_config(ChaseDistance, config);
        let mut rng = StdRng::seed_from_u64(7);

        // Small board keeps the game short; 1e9ms means the clock
        // never fires and the depth cap bounds each move.
        let winner = play_game(engine, Board::with_size(5, 5), 1.0e9, &mut rng);
        assert!(winner == Player::One || winner == Player::Two);
    }

    #[test]
    fn test_config_file_overridden_by_flag() {
        let args = Args::parse_from(["isolation", "--max-depth", "4"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.max_depth, Some(4));
        assert_eq!(config.timer_threshold_ms, 10.0);
    }
}
