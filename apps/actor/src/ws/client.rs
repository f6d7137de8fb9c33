//! The session loop driving a [`PlayerActor`] over a WebSocket.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info};

use crate::ai::PlayerActor;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::protocol::{ActionRequest, RequestKind};

/// A WebSocket client driving a [`PlayerActor`].
///
/// One client owns one connection and one actor. Requests are served
/// strictly one at a time: the next read is not issued until the
/// previous response has been sent. There is no read timeout; the
/// loop waits for the next request or a close signal indefinitely.
pub struct WebSocketActorClient<A> {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    actor: A,
}

impl<A: PlayerActor> WebSocketActorClient<A> {
    /// Connect using `RPC_URL` and `CLIENT_SECRET` from the
    /// environment.
    pub async fn from_env(actor: A) -> Result<Self, ClientError> {
        Self::connect(ClientConfig::resolve(None, None)?, actor).await
    }

    /// Open the connection and authenticate by sending the secret as
    /// the first message.
    pub async fn connect(config: ClientConfig, actor: A) -> Result<Self, ClientError> {
        info!(url = %config.url, "connecting");
        let (mut stream, _) = connect_async(config.url.as_str()).await?;
        stream.send(Message::text(config.secret)).await?;
        Ok(Self { stream, actor })
    }

    /// Serve requests until the server closes the connection.
    ///
    /// Returns `Ok(())` only after a close frame with the normal
    /// closure code (the game ended). Any other close code, loss of
    /// the connection without a close handshake, or a read/write/
    /// decode failure ends the session as an error; nothing is
    /// retried.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        while let Some(msg) = self.stream.next().await {
            match msg? {
                Message::Text(raw) => {
                    let reply = self.answer(raw.as_str())?;
                    self.stream.send(Message::text(reply)).await?;
                }
                Message::Close(frame) => {
                    return match frame {
                        Some(frame) if frame.code == CloseCode::Normal => {
                            info!("game finished, server closed the session");
                            Ok(())
                        }
                        Some(frame) => {
                            error!(
                                code = u16::from(frame.code),
                                reason = %frame.reason,
                                "session closed abnormally"
                            );
                            Err(ClientError::AbnormalClose {
                                code: frame.code.into(),
                                reason: frame.reason.to_string(),
                            })
                        }
                        None => Err(ClientError::ConnectionLost),
                    };
                }
                other => debug!(frame = ?other, "ignoring non-text frame"),
            }
        }
        Err(ClientError::ConnectionLost)
    }

    /// Decode one request, dispatch it to the actor, and encode the
    /// bare response value.
    fn answer(&self, raw: &str) -> Result<String, ClientError> {
        let ActionRequest { kind, snapshot } = serde_json::from_str(raw)?;
        debug!(?kind, "received request");
        let reply = match kind {
            RequestKind::GetAction => {
                let action = self.actor.get_action(&snapshot)?;
                info!(?action, "chose action");
                serde_json::to_string(&action)?
            }
            RequestKind::DropTokens => {
                let drops = self.actor.drop_tokens(&snapshot)?;
                info!(?drops, "chose discards");
                serde_json::to_string(&drops)?
            }
            RequestKind::SelectNoble => {
                let noble = self.actor.select_noble(&snapshot)?;
                info!(?noble, "chose noble");
                serde_json::to_string(&noble)?
            }
        };
        Ok(reply)
    }
}
