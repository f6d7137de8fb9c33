//! Crate-level error type for the client session.

use thiserror::Error;

use crate::ai::ActorError;

/// Everything that can go wrong between construction and the end of a
/// session. Configuration problems surface before any connection is
/// attempted; transport and protocol problems end the session without
/// retry.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("connection closed abnormally (code {code}): {reason}")]
    AbnormalClose { code: u16, reason: String },
    #[error("connection lost before close handshake")]
    ConnectionLost,
    #[error("actor error: {0}")]
    Actor(#[from] ActorError),
}

impl ClientError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
