use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use draughtbot::board::Color;
use draughtbot::game::{Game, Headless, Outcome};
use draughtbot::search::{Optimization, ScoringMode};
use draughtbot::Settings;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "draughtbot-selfplay", about = "Play bot-vs-bot games and summarize the results")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 120)]
    max_turns: usize,
    #[arg(long, default_value_t = 3)]
    white_depth: u32,
    #[arg(long, default_value_t = 3)]
    black_depth: u32,
    /// Pruning level: O0, O1 or O2
    #[arg(long, default_value = "O1")]
    opt: String,
    /// Score by material only
    #[arg(long, default_value_t = false)]
    material_only: bool,
    /// Games played concurrently
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Base seed; game `i` uses `seed + i`. Unseeded games draw from entropy.
    #[arg(long)]
    seed: Option<u64>,
    /// Print every game as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct GameRecord {
    index: usize,
    /// "white", "black" or "draw"
    result: String,
    turns: usize,
    legs: Vec<String>,
}

fn play_one(base: &Settings, index: usize, seed: Option<u64>) -> GameRecord {
    let mut settings = base.clone();
    settings.bot.seed = seed.map(|s| s.wrapping_add(index as u64));
    let mut game = Game::new(settings, Headless::default());
    let outcome = game.play();
    let turns = game.position().turns_played();
    let result = match outcome {
        Outcome::Win(c) => c.to_string(),
        Outcome::Draw | Outcome::Quit => "draw".to_string(),
    };
    let legs = game.into_frontend().legs.iter().map(|m| m.to_string()).collect();
    GameRecord { index, result, turns, legs }
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let optimization: Optimization = serde_json::from_value(serde_json::Value::String(a.opt.clone()))?;

    let mut settings = Settings::default();
    settings.bot.is_white_bot = true;
    settings.bot.is_black_bot = true;
    settings.bot.white_bot_level = a.white_depth;
    settings.bot.black_bot_level = a.black_depth;
    settings.bot.optimization = optimization;
    if a.material_only { settings.bot.bot_scoring_type = ScoringMode::Number; }
    settings.game.max_num_turns = a.max_turns;

    eprintln!(
        "Playing {} games (white depth={}, black depth={}, opt={:?}, threads={})",
        a.games, a.white_depth, a.black_depth, optimization, a.threads
    );
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let records: Vec<GameRecord> = pool.install(|| {
        (0..a.games)
            .into_par_iter()
            .map(|i| {
                let r = play_one(&settings, i, a.seed);
                pb.inc(1);
                r
            })
            .collect()
    });
    pb.finish_and_clear();

    let wins = |c: Color| records.iter().filter(|r| r.result == c.to_string()).count();
    let (white, black) = (wins(Color::White), wins(Color::Black));
    let draws = records.len() - white - black;
    let avg_turns = records.iter().map(|r| r.turns).sum::<usize>() as f64 / records.len().max(1) as f64;
    println!(
        "white {white}  black {black}  draws {draws}  avg turns {avg_turns:.1}  in {:.1}s",
        t0.elapsed().as_secs_f64()
    );

    if a.json { println!("{}", serde_json::to_string_pretty(&records)?); }
    Ok(())
}
