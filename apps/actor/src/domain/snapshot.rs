//! Read-only game state delivered with each decision request.

use serde::{Deserialize, Serialize};

use super::cards::{CardPool, CardView, DevelopmentCards};
use super::colors::ColorVec;
use super::nobles::Noble;

/// A player as seen in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Seat index of the player.
    pub idx: usize,
    /// Total points, cards and nobles combined.
    pub points: u8,
    /// Tokens currently held.
    pub tokens: ColorVec,
    /// Owned development cards.
    pub development_cards: DevelopmentCards,
    /// Reserved cards; hidden for everyone but the owner.
    pub reserved_cards: Vec<CardView>,
    /// Nobles already claimed.
    pub nobles: Vec<Noble>,
}

/// Full point-in-time view of the table. The server owns the state;
/// the client only reads it and computes a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Whether the game is in its last round.
    pub last_round: bool,
    pub current_round: u32,
    /// Seat index of the player the request is addressed to.
    pub current_player: usize,
    /// Tokens remaining in the bank.
    pub tokens: ColorVec,
    pub card_pool: CardPool,
    /// Nobles still available.
    pub nobles: Vec<Noble>,
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    /// The player whose decision is being requested, if the seat index
    /// is in range.
    pub fn acting_player(&self) -> Option<&PlayerSnapshot> {
        self.players.get(self.current_player)
    }
}
