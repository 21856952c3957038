use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown component '{name}'. Available: {}", .available.join(", "))]
    UnknownComponent { name: String, available: Vec<String> },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Data parsing error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
