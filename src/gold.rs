//! Gold piece amounts.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// A monetary amount in gold pieces.
///
/// Catalog data stores values as an integer followed by a two-character
/// currency suffix (`"50gp"`). Parsing strips the last two characters
/// and reads the rest as an unsigned integer; the suffix itself is not
/// checked.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::Gold;
///
/// let value: Gold = "120gp".parse().unwrap();
/// assert_eq!(value, Gold(120));
/// assert_eq!((value + Gold(5)).to_string(), "125gp");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gold(pub u32);

impl FromStr for Gold {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidValue(s.to_string());

        // Cut before the second-to-last character, not byte.
        let cut = s.char_indices().rev().nth(1).map(|(idx, _)| idx).ok_or_else(invalid)?;
        let amount = &s[..cut];
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        amount.parse().map(Gold).map_err(|_| invalid())
    }
}

impl Add for Gold {
    type Output = Gold;

    fn add(self, rhs: Gold) -> Gold {
        Gold(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Gold {
    fn sum<I: Iterator<Item = Gold>>(iter: I) -> Gold {
        iter.fold(Gold::default(), Add::add)
    }
}

impl fmt::Display for Gold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}gp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_suffix() {
        assert_eq!("5gp".parse::<Gold>(), Ok(Gold(5)));
        assert_eq!("1500gp".parse::<Gold>(), Ok(Gold(1500)));
        assert_eq!("40sp".parse::<Gold>(), Ok(Gold(40)));
    }

    #[test]
    fn test_parse_rejects_short_or_non_numeric() {
        for bad in ["", "g", "gp", "xxgp", "1.5gp", "-3gp", "50"] {
            assert_eq!(
                bad.parse::<Gold>(),
                Err(ParseError::InvalidValue(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_multibyte_suffix() {
        assert_eq!("30€€".parse::<Gold>(), Ok(Gold(30)));
    }

    #[test]
    fn test_sum() {
        let total: Gold = [Gold(10), Gold(25), Gold(0)].into_iter().sum();
        assert_eq!(total, Gold(35));
        assert_eq!(total.to_string(), "35gp");
    }
}
