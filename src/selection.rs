//! Reagent selections.
//!
//! A [`Selection`] names one chosen reagent by its (name, category,
//! rarity) triple. Callers that present reagents as single strings use
//! the display encoding `"<name> (<category>, <rarity>)"`, which
//! [`Selection::parse_display`] decodes.
//!
//! The encoding is ambiguous for some data: a reagent name containing
//! `" ("` or a category containing `", "` cannot round-trip. Catalog
//! data must avoid those substrings if it is to be selected through the
//! string form; the structured form has no such limit.

use crate::category::Category;
use crate::error::ParseError;
use crate::rarity::Rarity;
use crate::reagent::ReagentRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One chosen reagent slot.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::{Selection, Rarity};
///
/// let sel = Selection::parse_display("Ember Moss (Herb, Very Rare)").unwrap();
/// assert_eq!(sel.name, "Ember Moss");
/// assert_eq!(sel.category.as_str(), "Herb");
/// assert_eq!(sel.rarity, Rarity::VeryRare);
/// assert_eq!(sel.to_string(), "Ember Moss (Herb, Very Rare)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub category: Category,
    pub rarity: Rarity,
}

impl Selection {
    pub fn new(name: impl Into<String>, category: impl Into<Category>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            rarity,
        }
    }

    /// Decode `"<name> (<category>, <rarity>)"`.
    ///
    /// Splits on the first `" ("`, then the remainder on the first
    /// `", "`, then drops the closing `")"`.
    pub fn parse_display(display: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidSelection(display.to_string());

        let (name, rest) = display.split_once(" (").ok_or_else(invalid)?;
        let (category, rarity) = rest.split_once(", ").ok_or_else(invalid)?;
        let rarity = rarity.strip_suffix(')').ok_or_else(invalid)?;

        Ok(Selection {
            name: name.to_string(),
            category: Category::new(category),
            rarity: rarity.parse()?,
        })
    }

    /// Whether `record` carries exactly this triple.
    pub fn matches(&self, record: &ReagentRecord) -> bool {
        record.name == self.name && record.category == self.category && record.rarity == self.rarity
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.category, self.rarity)
    }
}
