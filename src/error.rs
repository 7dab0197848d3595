use thiserror::Error;

/// Prime Factors error types
#[derive(Error, Debug)]
pub enum Error {
    /// Factorization was asked for a negative number
    #[error("{value} is an invalid input.")]
    InvalidArgument { value: i64 },

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}

impl Error {
    pub fn invalid_argument(value: i64) -> Self {
        Self::InvalidArgument { value }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
