use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Atomic number {atomic_number} exceeds the total shell capacity of {capacity}")]
    UnsupportedAtomicNumber { atomic_number: u32, capacity: u32 },

    #[error("Element not found: Z={0}")]
    ElementNotFound(u32),

    #[error("Malformed element record {key}: {reason}")]
    MalformedRecord { key: String, reason: String },

    #[error("Grid cell (period {row}, group {column}) claimed by both Z={first} and Z={second}")]
    CellCollision {
        row: u32,
        column: u32,
        first: u32,
        second: u32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
