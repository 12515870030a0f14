use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 8 board rows, found {0}")]
    RowCount(usize),
    #[error("board row {row} has {width} cells, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("unknown board symbol {symbol:?} at row {row}, col {col}")]
    Symbol { row: usize, col: usize, symbol: char },
    #[error("invalid square {0:?}")]
    Square(String),
    #[error("invalid move text {0:?}")]
    MoveText(String),
    #[error("illegal turn {0}")]
    IllegalTurn(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
