//! Reagent rarity tiers.
//!
//! Rarity is ordered from `Common` to `Legendary`. Each tier carries a
//! fixed duration weight used when a resistance potion's duration is
//! aggregated from its curative reagents.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rarity tier of a reagent.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::Rarity;
///
/// let rarity: Rarity = "Very Rare".parse().unwrap();
/// assert_eq!(rarity, Rarity::VeryRare);
/// assert_eq!(rarity.duration_hours(), 16);
/// assert!(Rarity::Common < Rarity::Legendary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Very Rare")]
    VeryRare,
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::VeryRare,
        Rarity::Legendary,
    ];

    /// Resistance duration contributed by a curative reagent of this rarity.
    pub fn duration_hours(self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 4,
            Rarity::Rare => 8,
            Rarity::VeryRare => 16,
            Rarity::Legendary => 24,
        }
    }

    /// Display name as it appears in catalog data.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::VeryRare => "Very Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl FromStr for Rarity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseError::UnknownRarity(s.to_string()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
