// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("browser: {0}")]
    Browser(String),

    /// The CDP connection is gone (browser closed or crashed).
    #[error("browser connection closed: {0}")]
    Closed(String),

    #[error("failed to start browser: {0}")]
    Launch(String),

    #[error("no page matching the bed table route is open")]
    NoPage,

    #[error("a scan or update is already running")]
    Busy,

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        use chromiumoxide::error::CdpError;
        match e {
            CdpError::ChannelSendError(_) | CdpError::Ws(_) => Error::Closed(e.to_string()),
            other => Error::Browser(other.to_string()),
        }
    }
}

impl Error {
    /// A page read that failed but may succeed on the next poll
    /// (navigation in progress, execution context replaced).
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Browser(_) | Error::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
