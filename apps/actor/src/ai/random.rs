//! Random actor - chooses uniformly among legal candidates.
//!
//! For the primary move it builds at most one representative candidate
//! per move category (take three distinct, take two of one color,
//! reserve, buy) and draws uniformly among the categories that have
//! one; an empty table yields the no-op move.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{ActorError, PlayerActor};
use crate::domain::rules::{HAND_LIMIT, MAX_RESERVED_CARDS, TWO_SAME_MIN_STOCK};
use crate::domain::{payment_for, Color, ColorVec, GameSnapshot, PlayerSnapshot, Tier};
use crate::protocol::{
    BuyCardAction, BuyCardSource, DropTokensAction, PlayerAction, ReserveCardAction,
    SelectNobleAction, TakeTokensAction,
};

/// Actor that draws uniformly at random from legal candidates.
///
/// Holds its RNG behind a `Mutex` since the trait methods take
/// `&self`. A fixed seed makes every decision sequence reproducible.
pub struct RandomActor {
    rng: Mutex<StdRng>,
}

impl RandomActor {
    /// Create a new `RandomActor`, seeded for reproducible behavior
    /// when `seed` is given, from OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, ActorError> {
        self.rng
            .lock()
            .map_err(|e| ActorError::internal(format!("rng lock poisoned: {e}")))
    }
}

fn acting_player(snapshot: &GameSnapshot) -> Result<&PlayerSnapshot, ActorError> {
    snapshot.acting_player().ok_or_else(|| {
        ActorError::snapshot(format!(
            "current_player {} out of range for {} players",
            snapshot.current_player,
            snapshot.players.len()
        ))
    })
}

impl PlayerActor for RandomActor {
    fn get_action(&self, snapshot: &GameSnapshot) -> Result<PlayerAction, ActorError> {
        let player = acting_player(snapshot)?;
        let mut rng = self.lock_rng()?;
        let mut candidates: Vec<PlayerAction> = Vec::with_capacity(4);

        // Take up to three distinct colors, picked from a shuffle of
        // whatever the bank still stocks.
        let mut stocked: Vec<Color> = Color::REGULAR
            .iter()
            .copied()
            .filter(|c| snapshot.tokens.get(*c) > 0)
            .collect();
        if !stocked.is_empty() {
            stocked.shuffle(&mut *rng);
            let mut tokens = ColorVec::empty();
            for color in stocked.iter().take(3) {
                tokens.set(*color, 1);
            }
            candidates.push(PlayerAction::TakeTokens(TakeTokensAction::ThreeDifferent {
                tokens,
            }));
        }

        // Take two of one color, only where the bank holds enough.
        let doubled: Vec<Color> = Color::REGULAR
            .iter()
            .copied()
            .filter(|c| snapshot.tokens.get(*c) >= TWO_SAME_MIN_STOCK)
            .collect();
        if let Some(color) = doubled.choose(&mut *rng) {
            let mut tokens = ColorVec::empty();
            tokens.set(*color, 2);
            candidates.push(PlayerAction::TakeTokens(TakeTokensAction::TwoSame {
                tokens,
            }));
        }

        // Reserve a revealed card or blind from a tier's pool, while
        // under the reservation cap.
        if player.reserved_cards.len() < MAX_RESERVED_CARDS {
            let mut reservable: Vec<ReserveCardAction> = Vec::new();
            for row in &snapshot.card_pool.revealed {
                for (idx, card) in row.iter().enumerate() {
                    reservable.push(ReserveCardAction::from_revealed(card.tier, idx));
                }
            }
            for (tier, remaining) in Tier::ALL.iter().zip(snapshot.card_pool.remaining.iter()) {
                if *remaining > 0 {
                    reservable.push(ReserveCardAction::from_pool(*tier));
                }
            }
            if let Some(reserve) = reservable.choose(&mut *rng) {
                candidates.push(PlayerAction::ReserveCard(*reserve));
            }
        }

        // Buy any affordable card, revealed or among the player's own
        // visible reservations.
        let bonus = &player.development_cards.bonus;
        let mut purchasable: Vec<BuyCardAction> = Vec::new();
        for row in &snapshot.card_pool.revealed {
            for (idx, card) in row.iter().enumerate() {
                if let Some(uses) = payment_for(&card.requires, bonus, &player.tokens) {
                    purchasable.push(BuyCardAction {
                        source: BuyCardSource::Revealed {
                            tier: card.tier,
                            idx,
                        },
                        uses,
                    });
                }
            }
        }
        for (idx, view) in player.reserved_cards.iter().enumerate() {
            if let Some(card) = view.visible() {
                if let Some(uses) = payment_for(&card.requires, bonus, &player.tokens) {
                    purchasable.push(BuyCardAction {
                        source: BuyCardSource::Reserved(idx),
                        uses,
                    });
                }
            }
        }
        if let Some(buy) = purchasable.choose(&mut *rng) {
            candidates.push(PlayerAction::BuyCard(*buy));
        }

        Ok(candidates.choose(&mut *rng).copied().unwrap_or(PlayerAction::Nop))
    }

    fn drop_tokens(&self, snapshot: &GameSnapshot) -> Result<DropTokensAction, ActorError> {
        let player = acting_player(snapshot)?;
        let total = player.tokens.total();
        if total <= HAND_LIMIT {
            return Err(ActorError::precondition(format!(
                "drop_tokens requested at {total} held tokens, limit is {HAND_LIMIT}"
            )));
        }

        let mut rng = self.lock_rng()?;
        let mut held = player.tokens;
        let mut to_drop = total - HAND_LIMIT;
        let mut drops = ColorVec::empty();
        while to_drop > 0 {
            let colors: Vec<Color> = Color::ALL
                .iter()
                .copied()
                .filter(|c| held.get(*c) > 0)
                .collect();
            let color = colors
                .choose(&mut *rng)
                .copied()
                .ok_or_else(|| ActorError::internal("ran out of tokens to drop"))?;
            held.sub(color, 1);
            drops.add(color, 1);
            to_drop -= 1;
        }
        Ok(DropTokensAction(drops))
    }

    fn select_noble(&self, snapshot: &GameSnapshot) -> Result<SelectNobleAction, ActorError> {
        let player = acting_player(snapshot)?;
        let bonus = &player.development_cards.bonus;
        let eligible: Vec<usize> = snapshot
            .nobles
            .iter()
            .enumerate()
            .filter(|(_, noble)| noble.requires <= *bonus)
            .map(|(idx, _)| idx)
            .collect();

        let mut rng = self.lock_rng()?;
        let idx = eligible.choose(&mut *rng).copied().ok_or_else(|| {
            ActorError::precondition("select_noble requested with no eligible noble")
        })?;
        Ok(SelectNobleAction(idx))
    }
}
