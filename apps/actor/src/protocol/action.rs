//! Action encoding: the four move kinds and the two bare responses.

use serde::{Deserialize, Serialize};

use crate::domain::{ColorVec, Tier};

/// A turn action, encoded as a tagged envelope `{ "type", "action" }`.
/// The no-op variant carries no inner payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    Nop,
    TakeTokens(TakeTokensAction),
    ReserveCard(ReserveCardAction),
    BuyCard(BuyCardAction),
}

/// Token-taking subtypes; both carry the vector of tokens taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TakeTokensAction {
    /// Up to three tokens of distinct colors.
    ThreeDifferent { tokens: ColorVec },
    /// Two tokens of one color.
    TwoSame { tokens: ColorVec },
}

impl TakeTokensAction {
    pub fn tokens(&self) -> &ColorVec {
        match self {
            TakeTokensAction::ThreeDifferent { tokens } => tokens,
            TakeTokensAction::TwoSame { tokens } => tokens,
        }
    }
}

/// Reserve a revealed card by slot index, or blind from the tier's
/// face-down pool when `idx` is absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveCardAction {
    pub tier: Tier,
    pub idx: Option<usize>,
}

impl ReserveCardAction {
    pub const fn from_revealed(tier: Tier, idx: usize) -> Self {
        Self {
            tier,
            idx: Some(idx),
        }
    }

    pub const fn from_pool(tier: Tier) -> Self {
        Self { tier, idx: None }
    }
}

/// Where a bought card comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "location", rename_all = "snake_case")]
pub enum BuyCardSource {
    /// A face-up card in the pool.
    Revealed { tier: Tier, idx: usize },
    /// An index into the player's own reserved cards.
    Reserved(usize),
}

/// Buy a card, paying with the given tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyCardAction {
    pub source: BuyCardSource,
    /// Exact payment: colored tokens, wildcards in the yellow slot.
    pub uses: ColorVec,
}

/// Response to a `drop_tokens` request: the bare vector of discards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropTokensAction(pub ColorVec);

/// Response to a `select_noble` request: the bare index into the
/// snapshot's noble list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectNobleAction(pub usize);
