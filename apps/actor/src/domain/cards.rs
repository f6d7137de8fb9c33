//! Card, card pool, and reserved-card view types.

use serde::{Deserialize, Serialize};

use super::colors::{Color, ColorVec};

/// One of the three card difficulty tiers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    I,
    II,
    III,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::I, Tier::II, Tier::III];
}

/// A development card offered for purchase or reservation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub tier: Tier,
    /// The standing bonus color this card grants once owned.
    pub bonus: Color,
    pub points: u8,
    /// Token cost. The wildcard slot is unused in card costs.
    pub requires: ColorVec,
}

/// Face-down counts and face-up cards, indexed by tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    pub remaining: [u8; 3],
    /// At most four revealed cards per tier.
    pub revealed: [Vec<Card>; 3],
}

/// A reserved card as seen by some player: the owner sees the card,
/// everyone else an opaque placeholder carrying only the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "view", rename_all = "lowercase")]
pub enum CardView {
    Visible(Card),
    Invisible(Tier),
}

impl CardView {
    /// The wrapped card, if this view is visible.
    pub fn visible(&self) -> Option<&Card> {
        match self {
            CardView::Visible(card) => Some(card),
            CardView::Invisible(_) => None,
        }
    }
}

/// Aggregate of a player's owned development cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentCards {
    /// Points from owned cards.
    pub points: u8,
    /// Standing bonus discounts, one per owned card's bonus color.
    pub bonus: ColorVec,
    /// Owned cards grouped by bonus color (regular colors only).
    pub inner: [Vec<Card>; 5],
}
