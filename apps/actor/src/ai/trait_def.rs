//! Player actor trait definition.

use std::fmt;

use crate::domain::GameSnapshot;
use crate::protocol::{DropTokensAction, PlayerAction, SelectNobleAction};

/// Errors that can occur during a decision computation.
///
/// A `Precondition` error means the server invoked a capability under
/// a violated contract; it aborts the decision (and with it the
/// session) rather than answering with a guess.
#[derive(Debug)]
pub enum ActorError {
    /// Capability invoked under a violated contract
    Precondition(String),
    /// The snapshot itself is malformed
    Snapshot(String),
    /// Internal failure unrelated to the request
    Internal(String),
}

impl ActorError {
    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::Precondition(detail.into())
    }
    pub fn snapshot(detail: impl Into<String>) -> Self {
        Self::Snapshot(detail.into())
    }
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}

impl fmt::Display for ActorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorError::Precondition(detail) => write!(f, "precondition violated: {detail}"),
            ActorError::Snapshot(detail) => write!(f, "malformed snapshot: {detail}"),
            ActorError::Internal(detail) => write!(f, "internal actor error: {detail}"),
        }
    }
}

impl std::error::Error for ActorError {}

/// The three decision capabilities a player actor must provide.
///
/// Implementations receive an immutable snapshot per request and own
/// whatever private state (such as an RNG) their strategy needs.
/// Methods take `&self`; interior mutability is the implementation's
/// concern.
pub trait PlayerActor: Send + Sync {
    /// It is the player's turn: choose the move to take.
    fn get_action(&self, snapshot: &GameSnapshot) -> Result<PlayerAction, ActorError>;

    /// The player holds more than the hand limit: choose which tokens
    /// to discard. Calling this at or under the limit is a
    /// precondition violation.
    fn drop_tokens(&self, snapshot: &GameSnapshot) -> Result<DropTokensAction, ActorError>;

    /// One or more nobles are eligible: choose which one to accept.
    /// Calling this with zero eligible nobles is a precondition
    /// violation.
    fn select_noble(&self, snapshot: &GameSnapshot) -> Result<SelectNobleAction, ActorError>;
}

impl<P: PlayerActor + ?Sized> PlayerActor for Box<P> {
    fn get_action(&self, snapshot: &GameSnapshot) -> Result<PlayerAction, ActorError> {
        (**self).get_action(snapshot)
    }

    fn drop_tokens(&self, snapshot: &GameSnapshot) -> Result<DropTokensAction, ActorError> {
        (**self).drop_tokens(snapshot)
    }

    fn select_noble(&self, snapshot: &GameSnapshot) -> Result<SelectNobleAction, ActorError> {
        (**self).select_noble(snapshot)
    }
}
