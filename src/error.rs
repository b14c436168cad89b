//! Error types for the tttgraph crate

use thiserror::Error;

/// Main error type for the tttgraph crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid box count {num_boxes}: a board needs at least one box")]
    InvalidBoxCount { num_boxes: usize },

    #[error(
        "board with {num_boxes} boxes exceeds the supported maximum of {max} (the full graph is held in memory)"
    )]
    TooManyBoxes { num_boxes: usize, max: usize },

    #[error("winning line {line} contains no boxes")]
    EmptyWinningLine { line: usize },

    #[error("winning line {line} references box {index}, expected 1..={num_boxes}")]
    BoxOutOfRange {
        line: usize,
        index: usize,
        num_boxes: usize,
    },

    #[error("board definition is missing the box count")]
    MissingBoxCount,

    #[error("line {line_number}: '{value}' is not a valid box count")]
    InvalidBoxCountLiteral { line_number: usize, value: String },

    #[error("line {line_number}: '{value}' is not a valid box index")]
    InvalidBoxIndex { line_number: usize, value: String },

    #[error("cannot draw {line_size} distinct boxes per line from a board of {num_boxes}")]
    InvalidLineSize { line_size: usize, num_boxes: usize },

    #[error("internal consistency error: {message}")]
    InconsistentGraph { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
