//! Affordability: whether a player can pay for a card, and with what.

use super::colors::{Color, ColorVec};

/// Computes the exact payment for a card, or `None` when the player
/// cannot afford it.
///
/// Owned-card bonuses discount the cost first, floored at zero per
/// color. Colored tokens cover what they can of the discounted cost;
/// whatever shortfall remains must be covered by wildcards, one each.
/// The returned vector holds the colored tokens actually spent with
/// the wildcard count in the yellow slot.
///
/// Both subtractions saturate, so a bonus or token surplus in one
/// color never offsets a deficit in another.
pub fn payment_for(cost: &ColorVec, bonus: &ColorVec, tokens: &ColorVec) -> Option<ColorVec> {
    let effective = cost.saturating_sub(bonus);
    let shortfall = effective.saturating_sub(tokens);
    if shortfall.total() > tokens.get(Color::WILDCARD) {
        return None;
    }
    // shortfall <= effective in every slot, so nothing clips here
    let mut uses = effective.saturating_sub(&shortfall);
    uses.set(Color::WILDCARD, shortfall.total());
    Some(uses)
}
