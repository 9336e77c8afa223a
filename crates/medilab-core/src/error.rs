use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed counter target: {0:?}")]
    MalformedTarget(String),

    #[error("Unknown counter format: {0}")]
    UnknownFormat(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Invalid field rule: {0}")]
    InvalidRule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
