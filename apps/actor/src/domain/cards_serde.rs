//! Serialization for card types: tiers travel as 0-based integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards::Tier;

impl Serialize for Tier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u8::deserialize(deserializer)?;
        match n {
            0 => Ok(Tier::I),
            1 => Ok(Tier::II),
            2 => Ok(Tier::III),
            _ => Err(serde::de::Error::custom(format!("Invalid tier: {n}"))),
        }
    }
}
