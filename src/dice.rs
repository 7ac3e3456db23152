//! Dice pools in `<count>d<sides>` notation.
//!
//! Potions never roll dice; they only report how many dice of which
//! size the drinker rolls. Pools from several reagents are merged into
//! one with [`DicePool::combine`].

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pool of `count` dice with `sides` faces each.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::DicePool;
///
/// let pool: DicePool = "2d6".parse().unwrap();
/// assert_eq!(pool, DicePool::new(2, 6));
/// assert_eq!(pool.to_string(), "2d6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePool {
    pub count: u32,
    pub sides: u32,
}

impl DicePool {
    /// The pool produced by combining nothing, rendered as `0d0`.
    pub const EMPTY: DicePool = DicePool { count: 0, sides: 0 };

    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Merge several pools into one.
    ///
    /// Counts are summed. The die size is taken from the first pool;
    /// later pools contribute only their count, so `[1d4, 1d6]`
    /// combines to `2d4`. An empty input yields [`DicePool::EMPTY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alchemy_calc::DicePool;
    ///
    /// let pools = [DicePool::new(1, 4), DicePool::new(2, 4)];
    /// assert_eq!(DicePool::combine(pools), DicePool::new(3, 4));
    /// assert_eq!(DicePool::combine([]), DicePool::EMPTY);
    /// ```
    pub fn combine<I>(pools: I) -> DicePool
    where
        I: IntoIterator<Item = DicePool>,
    {
        let mut pools = pools.into_iter();
        let Some(first) = pools.next() else {
            return DicePool::EMPTY;
        };

        pools.fold(first, |acc, pool| {
            if pool.sides != acc.sides {
                tracing::trace!(
                    kept = acc.sides,
                    ignored = pool.sides,
                    "mixed die sizes in pool, keeping the first"
                );
            }
            DicePool::new(acc.count.saturating_add(pool.count), acc.sides)
        })
    }
}

impl FromStr for DicePool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDice(s.to_string());
        let (count, sides) = s.split_once('d').ok_or_else(invalid)?;

        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(count) || !is_number(sides) {
            return Err(invalid());
        }

        Ok(DicePool {
            count: count.parse().map_err(|_| invalid())?,
            sides: sides.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}
