use thiserror::Error;

use shared::error::AppError;

/// Startup and serve failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to initialize state: {0}")]
    Init(#[from] AppError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
