use thiserror::Error;

/// Errors at the edges of the engine: protocol input, textual boards and the
/// background session worker. Illegal moves are not errors; see `Board::place`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed command: {0}")]
    Json(#[from] serde_json::Error),

    #[error("column {column} out of range")]
    ColumnOutOfRange { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("could not parse move '{token}'")]
    ParseMove { token: String },

    #[error("session worker disconnected")]
    Disconnected,
}
