use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use draughtbot::board::{Board, Color};
use draughtbot::movegen::complete_turns;
use draughtbot::perft::{divide, perft};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Count complete turns to a fixed depth")]
struct Args {
    /// Depth in turns
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board file (8 rows of `.wbWB`) or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Side to move
    #[arg(long, default_value = "white")]
    to_move: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print the count below each root turn
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" {
        Board::start()
    } else {
        let text = std::fs::read_to_string(&args.board).with_context(|| format!("reading {}", args.board))?;
        text.parse::<Board>()?
    };
    let color = match args.to_move.to_lowercase().as_str() {
        "w" | "white" => Color::White,
        "b" | "black" => Color::Black,
        other => anyhow::bail!("invalid side to move: {other}"),
    };
    let depth = args.depth;

    if args.divide && depth > 0 {
        let mut total = 0;
        for (turn, n) in divide(&board, color, depth) {
            println!("{turn}: {n}");
            total += n;
        }
        println!("nodes: {total}");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth < 2 {
            perft(&board, color, depth)
        } else {
            complete_turns(&board, color)
                .par_iter()
                .map(|t| perft(&board.apply_turn(t), color.opposite(), depth - 1))
                .sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
