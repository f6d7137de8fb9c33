//! WebSocket session: authenticate, then serve decision requests.

mod client;

pub use client::WebSocketActorClient;
