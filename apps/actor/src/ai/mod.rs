//! Player actors - the decision strategies behind [`PlayerActor`].
//!
//! This module provides:
//! - The [`PlayerActor`] capability trait (move, discard, noble)
//! - [`RandomActor`]: uniformly-random legal decisions (seedable for tests)
//! - A factory for building actors by kind string

mod random;
mod trait_def;

pub use random::RandomActor;
pub use trait_def::{ActorError, PlayerActor};

#[cfg(test)]
mod tests_random;

/// Create an actor from a kind string and an optional RNG seed.
///
/// Currently supports:
/// - "random": [`RandomActor`], seeded when `seed` is given
///
/// Returns `None` if the kind is unrecognized.
pub fn create_actor(kind: &str, seed: Option<u64>) -> Option<Box<dyn PlayerActor>> {
    match kind {
        "random" => Some(Box::new(RandomActor::new(seed))),
        _ => None,
    }
}
