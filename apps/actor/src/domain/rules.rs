//! Game-rule constants the decision engine relies on.

/// Most tokens a player may hold at the end of a turn.
pub const HAND_LIMIT: u8 = 10;

/// Most cards a player may have reserved at once.
pub const MAX_RESERVED_CARDS: usize = 3;

/// Bank stock a color needs before two of it may be taken at once.
pub const TWO_SAME_MIN_STOCK: u8 = 4;

/// Number of players a table can seat.
pub const MAX_PLAYERS: usize = 4;
