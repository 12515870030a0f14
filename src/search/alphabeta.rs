use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color};
use crate::movegen::{legal_moves_for_piece, Move, MoveGenerator, SeedPolicy, TurnSet};
use crate::notation::format_turn;
use crate::search::chain::ChainArena;
use crate::search::eval::{score, ScoringMode, INF};

/// Pruning level. Config tokens are `O0`, `O1`, `O2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Optimization {
    /// Full tree; the reference result.
    #[serde(rename = "O0")]
    None,
    #[serde(rename = "O1")]
    #[default]
    AlphaBeta,
    /// Also stops as soon as the window closes (`alpha == beta`), returning an
    /// approximate bound. Move choice may differ slightly from exact minimax.
    #[serde(rename = "O2")]
    AlphaBetaWithEqualCutoff,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    pub max_depth: u32,
    pub scoring: ScoringMode,
    pub optimization: Optimization,
    pub seed: SeedPolicy,
    /// Above 1, root candidates are searched in parallel.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            scoring: ScoringMode::default(),
            optimization: Optimization::default(),
            seed: SeedPolicy::default(),
            threads: 1,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    /// One full player action; several legs when it is a capture chain.
    pub turn: Vec<Move>,
    pub score: f64,
    pub nodes: u64,
}

/// Two cooperating recursions over hypothetical boards. The root driver
/// explores the mover's own capture chain leg by leg, recording its choices
/// in a [`ChainArena`]; once the chain ends it hands over to plain minimax
/// starting with the opponent's reply.
pub struct Searcher {
    params: SearchParams,
    gen: MoveGenerator,
    arena: ChainArena,
    nodes: u64,
    root: Color,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, gen: MoveGenerator::new(params.seed), arena: ChainArena::new(), nodes: 0, root: Color::White }
    }

    fn worker(params: SearchParams, gen: MoveGenerator, root: Color) -> Self {
        Self { params, gen, arena: ChainArena::new(), nodes: 0, root }
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    /// Replace the parameters; the move-order seed is kept unless its policy changes.
    pub fn set_params(&mut self, params: SearchParams) {
        if params.seed != self.params.seed { self.gen = MoveGenerator::new(params.seed); }
        self.params = params;
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Best full turn for `color`. An empty turn means `color` has no legal move.
    pub fn choose_turn(&mut self, board: &Board, color: Color) -> SearchResult {
        let t0 = Instant::now();
        self.nodes = 0;
        self.arena.clear();
        self.root = color;
        let root_set = self.gen.legal_moves_for_color(board, color);
        if root_set.is_empty() {
            return SearchResult { turn: Vec::new(), score: 0.0, nodes: 0 };
        }
        let best = if self.params.threads > 1 && root_set.len() > 1 {
            self.root_parallel(board, color, root_set)
        } else {
            let root = self.arena.open();
            self.nodes += 1;
            self.expand(board, color, root, root_set)
        };
        let turn = self.arena.reconstruct(0);
        debug!(
            "search {} depth={} opt={:?} nodes={} score={:.4} turn={} in {:?}",
            color, self.params.max_depth, self.params.optimization, self.nodes, best, format_turn(&turn), t0.elapsed()
        );
        SearchResult { turn, score: best, nodes: self.nodes }
    }

    // Driver node inside the searcher's own chain: only the piece on `cell` may
    // move. Once it has no capture left the turn is over and the opponent replies.
    fn driver(&mut self, board: &Board, color: Color, cell: Cell, alpha: f64) -> f64 {
        let node = self.arena.open();
        let set = legal_moves_for_piece(board, cell);
        if !set.forced_capture {
            return self.minimax(board, color.opposite(), 0, alpha, INF + 1.0, None);
        }
        self.nodes += 1;
        self.expand(board, color, node, set)
    }

    fn expand(&mut self, board: &Board, color: Color, node: usize, set: TurnSet) -> f64 {
        let mut best = -1.0;
        for mv in set.moves {
            let child = board.apply(mv);
            let next = self.arena.next_index();
            let s = if set.forced_capture {
                self.driver(&child, color, mv.to, best)
            } else {
                self.minimax(&child, color.opposite(), 0, best, INF + 1.0, None)
            };
            let unset = self.arena.get(node).map_or(true, |n| n.best.is_none());
            if s > best || unset {
                if s > best { best = s; }
                self.arena.record(node, mv, set.forced_capture.then_some(next), s);
            }
        }
        best
    }

    fn root_parallel(&mut self, board: &Board, color: Color, set: TurnSet) -> f64 {
        let (params, gen, forced) = (self.params, self.gen, set.forced_capture);
        let results: Vec<(Move, f64, ChainArena, u64)> = set
            .moves
            .par_iter()
            .map(|&mv| {
                let mut w = Searcher::worker(params, gen, color);
                let child = board.apply(mv);
                let s = if forced {
                    w.driver(&child, color, mv.to, -1.0)
                } else {
                    w.minimax(&child, color.opposite(), 0, -1.0, INF + 1.0, None)
                };
                (mv, s, w.arena, w.nodes)
            })
            .collect();

        // Reduce in candidate order so ties resolve as in the serial search.
        let root = self.arena.open();
        self.nodes += 1;
        let mut best = -1.0;
        let mut pick: Option<usize> = None;
        for (i, (_, s, _, n)) in results.iter().enumerate() {
            self.nodes += n;
            if *s > best || pick.is_none() {
                if *s > best { best = *s; }
                pick = Some(i);
            }
        }
        if let Some(i) = pick {
            let (mv, s, sub, _) = &results[i];
            let next = if forced { Some(self.arena.graft(sub)) } else { None };
            self.arena.record(root, *mv, next, *s);
        }
        best
    }

    /// Depth-limited minimax from the searcher's point of view. `depth` counts
    /// plies after the searcher's own turn; a chain keeps the same depth.
    fn minimax(&mut self, board: &Board, color: Color, depth: u32, mut alpha: f64, mut beta: f64, chain_from: Option<Cell>) -> f64 {
        self.nodes += 1;
        if depth >= self.params.max_depth {
            return score(board, self.root.opposite(), self.params.scoring);
        }
        let set = match chain_from {
            Some(cell) => legal_moves_for_piece(board, cell),
            None => self.gen.legal_moves_for_color(board, color),
        };
        if chain_from.is_some() && !set.forced_capture {
            return self.minimax(board, color.opposite(), depth + 1, alpha, beta, None);
        }
        let maximizing = color == self.root;
        if set.is_empty() {
            return if maximizing { 0.0 } else { INF };
        }

        let mut min_score = INF + 1.0;
        let mut max_score = -1.0;
        for mv in set.moves {
            let child = board.apply(mv);
            let s = if set.forced_capture {
                self.minimax(&child, color, depth, alpha, beta, Some(mv.to))
            } else {
                self.minimax(&child, color.opposite(), depth + 1, alpha, beta, None)
            };
            min_score = f64::min(min_score, s);
            max_score = f64::max(max_score, s);
            if maximizing { alpha = alpha.max(max_score); } else { beta = beta.min(min_score); }

            match self.params.optimization {
                Optimization::None => {}
                Optimization::AlphaBeta => {
                    if alpha > beta { break; }
                }
                Optimization::AlphaBetaWithEqualCutoff => {
                    if alpha > beta { break; }
                    if alpha == beta { return if maximizing { max_score + 1.0 } else { min_score - 1.0 }; }
                }
            }
        }
        if maximizing { max_score } else { min_score }
    }
}

/// One-shot search: the full turn `color` should play on `board`.
pub fn choose_turn(board: &Board, color: Color, params: &SearchParams) -> Vec<Move> {
    Searcher::new(*params).choose_turn(board, color).turn
}
