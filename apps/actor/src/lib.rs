#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Client-side player actor for a Splendor-style resource-collection
//! game. The authoritative server pushes decision requests over a
//! WebSocket, each carrying a full read-only snapshot of the table;
//! this crate answers them with a chosen move, a token discard, or a
//! noble selection.

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod ws;

// Re-exports for public API
pub use ai::{create_actor, ActorError, PlayerActor, RandomActor};
pub use config::ClientConfig;
pub use error::ClientError;
pub use ws::WebSocketActorClient;
