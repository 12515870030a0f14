pub mod alphabeta;
pub mod chain;
pub mod eval;

pub use alphabeta::{choose_turn, Optimization, SearchParams, SearchResult, Searcher};
pub use eval::{score, ScoringMode, INF};
