//! Turn orchestration: alternates movers, asks the search engine or the
//! frontend for a turn, and commits it to the live board.

pub mod frontend;

use std::thread;
use std::time::Instant;

use log::{info, warn};

pub use frontend::{Frontend, Headless, Response, Scripted};
use crate::board::position::Position;
use crate::board::{Cell, Color};
use crate::config::Settings;
use crate::movegen::{legal_moves_for_color, legal_moves_for_piece, Move, TurnSet};
use crate::notation::format_turn;
use crate::search::Searcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    /// Turn limit reached.
    Draw,
    Quit,
}

enum Flow {
    Done(Outcome),
    Replay,
}

enum HumanTurn {
    Played,
    Back,
    Replay,
    Quit,
}

impl From<Response> for HumanTurn {
    fn from(r: Response) -> Self {
        match r {
            Response::Back => HumanTurn::Back,
            Response::Replay => HumanTurn::Replay,
            Response::Quit => HumanTurn::Quit,
            Response::Cell(_) => HumanTurn::Played,
        }
    }
}

pub struct Game<F: Frontend> {
    settings: Settings,
    initial: Position,
    position: Position,
    searcher: Searcher,
    frontend: F,
}

impl<F: Frontend> Game<F> {
    pub fn new(settings: Settings, frontend: F) -> Self { Self::with_position(settings, Position::startpos(), frontend) }

    pub fn with_position(settings: Settings, position: Position, frontend: F) -> Self {
        let searcher = Searcher::new(settings.search_params(position.side_to_move()));
        Self { settings, initial: position.clone(), position, searcher, frontend }
    }

    pub fn position(&self) -> &Position { &self.position }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn frontend(&self) -> &F { &self.frontend }

    pub fn into_frontend(self) -> F { self.frontend }

    /// Play until a side cannot move, the turn limit is hit, or the frontend quits.
    pub fn play(&mut self) -> Outcome {
        loop {
            let start = Instant::now();
            let flow = self.run();
            info!("game time: {} ms", start.elapsed().as_millis());
            match flow {
                Flow::Done(outcome) => return outcome,
                Flow::Replay => self.restart(),
            }
        }
    }

    fn restart(&mut self) {
        if let Err(e) = self.settings.reload() { warn!("keeping previous settings: {e}"); }
        self.position = self.initial.clone();
        self.searcher = Searcher::new(self.settings.search_params(self.position.side_to_move()));
    }

    fn run(&mut self) -> Flow {
        let max_turns = self.settings.game.max_num_turns;
        while self.position.turns_played() < max_turns {
            let color = self.position.side_to_move();
            let set = legal_moves_for_color(self.position.board(), color);
            if set.is_empty() {
                info!("{color} has no legal moves after {} turns", self.position.turns_played());
                return Flow::Done(Outcome::Win(color.opposite()));
            }
            self.frontend.on_turn_start(self.position.board(), color);
            if self.settings.is_bot(color) {
                self.bot_turn(color);
                continue;
            }
            match self.human_turn(&set) {
                HumanTurn::Played => {}
                HumanTurn::Back => self.take_back(color),
                HumanTurn::Replay => return Flow::Replay,
                HumanTurn::Quit => return Flow::Done(Outcome::Quit),
            }
        }
        Flow::Done(Outcome::Draw)
    }

    fn commit_leg(&mut self, mv: Move) {
        self.position.play_leg(mv);
        self.frontend.on_leg(self.position.board(), &mv);
    }

    fn bot_turn(&mut self, color: Color) {
        let start = Instant::now();
        // depth is per color and may change between turns
        self.searcher.set_params(self.settings.search_params(color));
        let result = self.searcher.choose_turn(self.position.board(), color);
        let delay = self.settings.bot_delay();
        if let Some(rest) = delay.checked_sub(start.elapsed()) { thread::sleep(rest); }
        for (i, &mv) in result.turn.iter().enumerate() {
            if i > 0 { thread::sleep(delay); }
            self.commit_leg(mv);
        }
        self.position.end_turn();
        info!(
            "bot turn: {color} played {} (score {:.3}, {} nodes) in {} ms",
            format_turn(&result.turn), result.score, result.nodes, start.elapsed().as_millis()
        );
    }

    // Select a piece, then its destination; a capture obliges the same piece
    // to keep jumping while it can.
    fn human_turn(&mut self, set: &TurnSet) -> HumanTurn {
        let mut origins: Vec<Cell> = Vec::new();
        for mv in &set.moves {
            if !origins.contains(&mv.from) { origins.push(mv.from); }
        }
        let mut selected: Option<Cell> = None;
        let mut selectable = origins.clone();
        let mut leg = loop {
            let cell = match self.frontend.pick(self.position.board(), &selectable) {
                Response::Cell(c) => c,
                other => return other.into(),
            };
            if let Some(mv) = selected.and_then(|from| set.moves.iter().find(|m| m.from == from && m.to == cell)) {
                break *mv;
            }
            if origins.contains(&cell) {
                selected = Some(cell);
                selectable = set.moves.iter().filter(|m| m.from == cell).map(|m| m.to).collect();
            } else {
                selected = None;
                selectable = origins.clone();
            }
        };
        self.commit_leg(leg);

        while leg.is_capture() {
            let next = legal_moves_for_piece(self.position.board(), leg.to);
            if !next.forced_capture { break; }
            let targets: Vec<Cell> = next.moves.iter().map(|m| m.to).collect();
            leg = loop {
                match self.frontend.pick(self.position.board(), &targets) {
                    Response::Cell(c) => {
                        if let Some(mv) = next.moves.iter().find(|m| m.to == c) { break *mv; }
                    }
                    other => return other.into(),
                }
            };
            self.commit_leg(leg);
        }
        self.position.end_turn();
        HumanTurn::Played
    }

    // Mid-chain: restart the current turn. Otherwise return to this player's
    // previous turn: two turns back against a bot, one in hot-seat play.
    fn take_back(&mut self, color: Color) {
        if self.position.turn_in_progress() {
            self.position.restart_turn();
            return;
        }
        let turns = if self.settings.is_bot(color.opposite()) { 2 } else { 1 };
        if !self.position.rollback(turns) {
            warn!("take-back ignored: only {} turns played", self.position.turns_played());
        }
    }
}
