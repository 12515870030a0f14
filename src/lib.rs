//! Checkers rules and turn search.
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;

pub use board::position::Position;
pub use board::{Board, Cell, Color, Piece};
pub use config::Settings;
pub use error::{ConfigError, ParseError};
pub use game::{Frontend, Game, Outcome, Response};
pub use movegen::{legal_moves_for_color, legal_moves_for_piece, Move, MoveGenerator, SeedPolicy, TurnSet};
pub use search::{choose_turn, Optimization, ScoringMode, SearchParams, SearchResult, Searcher};
