//! Domain layer: game state types and pure helpers.

pub mod cards;
mod cards_serde;
pub mod colors;
mod colors_serde;
pub mod nobles;
pub mod purchase;
pub mod rules;
pub mod snapshot;


#[cfg(test)]
mod tests_colors;

// Re-exports for ergonomics
pub use cards::{Card, CardPool, CardView, DevelopmentCards, Tier};
pub use colors::{Color, ColorVec};
pub use nobles::Noble;
pub use purchase::payment_for;
pub use snapshot::{GameSnapshot, PlayerSnapshot};
