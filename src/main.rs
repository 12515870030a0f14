use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use draughtbot::board::{Board, Cell, Color};
use draughtbot::game::{Frontend, Game, Outcome, Response};
use draughtbot::movegen::Move;
use draughtbot::notation::parse_cell;
use draughtbot::search::{Optimization, ScoringMode};
use draughtbot::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Player {
    Human,
    Bot,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play checkers against the search engine", long_about = None)]
struct Args {
    /// JSON settings file; re-read on every replay
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long, value_enum)]
    white: Option<Player>,
    #[arg(long, value_enum)]
    black: Option<Player>,
    /// Search depth of the white bot
    #[arg(long)]
    white_level: Option<u32>,
    /// Search depth of the black bot
    #[arg(long)]
    black_level: Option<u32>,
    /// Pruning level: 0, 1 or 2
    #[arg(long)]
    opt: Option<u8>,
    /// Score by material only, without the advancement bonus
    #[arg(long, default_value_t = false)]
    material_only: bool,
    /// Deterministic move ordering
    #[arg(long, default_value_t = false)]
    no_random: bool,
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long)]
    max_turns: Option<usize>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut s = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(p) = self.white { s.bot.is_white_bot = p == Player::Bot; }
        if let Some(p) = self.black { s.bot.is_black_bot = p == Player::Bot; }
        if let Some(l) = self.white_level { s.bot.white_bot_level = l; }
        if let Some(l) = self.black_level { s.bot.black_bot_level = l; }
        if let Some(o) = self.opt {
            s.bot.optimization = match o {
                0 => Optimization::None,
                1 => Optimization::AlphaBeta,
                2 => Optimization::AlphaBetaWithEqualCutoff,
                _ => anyhow::bail!("invalid pruning level {o}: use 0, 1 or 2"),
            };
        }
        if self.material_only { s.bot.bot_scoring_type = ScoringMode::Number; }
        if self.no_random { s.bot.no_random = true; }
        if let Some(d) = self.delay_ms { s.bot.bot_delay_ms = d; }
        if let Some(t) = self.threads { s.bot.threads = t; }
        if let Some(m) = self.max_turns { s.game.max_num_turns = m; }
        Ok(s)
    }
}

/// Reads squares and commands from stdin, draws the board on stdout.
struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

impl<R: BufRead> Frontend for Terminal<R> {
    fn pick(&mut self, board: &Board, selectable: &[Cell]) -> Response {
        println!("\n{board}");
        let options: Vec<String> = selectable.iter().map(Cell::to_string).collect();
        loop {
            print!("[{}] square, back, replay or quit: ", options.join(" "));
            let _ = io::stdout().flush();
            let Some(line) = self.read_line() else { return Response::Quit };
            match line.as_str() {
                "back" | "b" => return Response::Back,
                "replay" | "r" => return Response::Replay,
                "quit" | "q" => return Response::Quit,
                text => match parse_cell(text) {
                    Ok(cell) => return Response::Cell(cell),
                    Err(e) => println!("{e}"),
                },
            }
        }
    }

    fn on_leg(&mut self, _board: &Board, mv: &Move) { println!("  {mv}"); }

    fn on_turn_start(&mut self, _board: &Board, color: Color) { println!("{color} to move"); }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = args.settings()?;
    let stdin = io::stdin();
    let mut game = Game::new(settings, Terminal { input: stdin.lock() });
    let outcome = game.play();
    println!("\n{}", game.position().board());
    match outcome {
        Outcome::Win(c) => println!("{c} wins after {} turns", game.position().turns_played()),
        Outcome::Draw => println!("draw: turn limit reached"),
        Outcome::Quit => println!("game abandoned"),
    }
    Ok(())
}
