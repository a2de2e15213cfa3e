#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Empty image file: {0}")]
    EmptyImage(String),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

pub type ServerResult<T> = std::result::Result<T, ServerError>;
