use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {source}")]
    InvalidBindAddr { source: std::net::AddrParseError },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logger initialization failed: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
