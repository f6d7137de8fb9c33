//! Noble (bonus tile) type.

use serde::{Deserialize, Serialize};

use super::colors::ColorVec;

/// A bonus tile, claimable once a player's development-card bonuses
/// meet its requirement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Noble {
    /// Required bonuses, over regular colors only.
    pub requires: ColorVec,
}
