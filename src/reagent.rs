//! Reagent records.
//!
//! A catalog row arrives as a [`RawReagent`], exactly as stored on disk,
//! and is validated into a [`ReagentRecord`] whose [`ReagentKind`]
//! carries only the fields that matter for its role in a brew.

use crate::category::Category;
use crate::dice::DicePool;
use crate::error::{CatalogError, ParseError};
use crate::gold::Gold;
use crate::rarity::Rarity;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

const CHANGE_DAMAGE_TYPE: &str = "Change Damage Type to ";

/// A catalog row before validation.
///
/// `value` still carries its currency suffix, `type` is a free string
/// tag and `damage`/`effect` are optional regardless of type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReagent {
    pub name: String,
    pub category: Category,
    pub rarity: String,
    pub dc: u32,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
}

/// The role a reagent plays in a potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReagentKind {
    /// Curative reagent. Its dice feed healing, its rarity feeds resistance duration.
    Heal { dice: DicePool },
    /// Damaging reagent. `effect` names the damage, e.g. `"Fire Damage"`.
    Damage { dice: DicePool, effect: String },
    /// Alters other reagents: either `"Change Damage Type to <X>"` or a
    /// text ending in a resistance type.
    Modifier { effect: String },
    /// Standalone effect, reported verbatim.
    Effect { effect: String },
}

impl ReagentKind {
    /// The catalog tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ReagentKind::Heal { .. } => "heal",
            ReagentKind::Damage { .. } => "damage",
            ReagentKind::Modifier { .. } => "modifier",
            ReagentKind::Effect { .. } => "effect",
        }
    }
}

/// A validated, immutable reagent.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::{RawReagent, ReagentRecord, ReagentKind, DicePool, Gold};
///
/// let raw = RawReagent {
///     name: "Ember Moss".to_string(),
///     category: "Herb".into(),
///     rarity: "Uncommon".to_string(),
///     dc: 2,
///     value: "40gp".to_string(),
///     kind: "damage".to_string(),
///     damage: Some("1d6".to_string()),
///     effect: Some("Fire Damage".to_string()),
/// };
///
/// let record = ReagentRecord::try_from(raw).unwrap();
/// assert_eq!(record.value, Gold(40));
/// assert_eq!(
///     record.kind,
///     ReagentKind::Damage { dice: DicePool::new(1, 6), effect: "Fire Damage".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReagentRecord {
    pub name: String,
    pub category: Category,
    pub rarity: Rarity,
    pub dc: u32,
    pub value: Gold,
    #[serde(flatten)]
    pub kind: ReagentKind,
}

impl ReagentRecord {
    /// The (name, category, rarity) triple identifying this record.
    pub fn selection(&self) -> Selection {
        Selection::new(self.name.clone(), self.category.clone(), self.rarity)
    }

    /// For a modifier of the form `"Change Damage Type to <X>"`, returns `<X>`.
    pub fn damage_type_override(&self) -> Option<&str> {
        match &self.kind {
            ReagentKind::Modifier { effect } => effect
                .split_once(CHANGE_DAMAGE_TYPE)
                .map(|(_, new_type)| new_type),
            _ => None,
        }
    }

    /// The damage type word used to name a resistance potion.
    ///
    /// Damage reagents contribute the first word of their effect
    /// (`"Fire Damage"` → `"Fire"`); modifiers contribute the last word
    /// (`"Grants Cold"` → `"Cold"`). Other kinds have none.
    pub fn resistance_type(&self) -> Option<&str> {
        match &self.kind {
            ReagentKind::Damage { effect, .. } => effect.split_whitespace().next(),
            ReagentKind::Modifier { effect } => effect.split_whitespace().next_back(),
            _ => None,
        }
    }
}

impl TryFrom<RawReagent> for ReagentRecord {
    type Error = CatalogError;

    fn try_from(raw: RawReagent) -> Result<Self, Self::Error> {
        let invalid = |source: ParseError| CatalogError::InvalidReagent {
            name: raw.name.clone(),
            source,
        };

        let rarity: Rarity = raw.rarity.parse().map_err(invalid)?;
        let value: Gold = raw.value.parse().map_err(invalid)?;

        let dice = |kind: &'static str| -> Result<DicePool, CatalogError> {
            raw.damage
                .as_deref()
                .ok_or_else(|| CatalogError::MissingField {
                    name: raw.name.clone(),
                    kind,
                    field: "damage",
                })?
                .parse::<DicePool>()
                .map_err(invalid)
        };
        let effect = |kind: &'static str| -> Result<String, CatalogError> {
            raw.effect
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .map(str::to_string)
                .ok_or_else(|| CatalogError::MissingField {
                    name: raw.name.clone(),
                    kind,
                    field: "effect",
                })
        };

        let kind = match raw.kind.as_str() {
            "heal" => ReagentKind::Heal { dice: dice("heal")? },
            "damage" => ReagentKind::Damage {
                dice: dice("damage")?,
                effect: effect("damage")?,
            },
            "modifier" => ReagentKind::Modifier {
                effect: effect("modifier")?,
            },
            "effect" => ReagentKind::Effect {
                effect: effect("effect")?,
            },
            other => return Err(invalid(ParseError::UnknownKind(other.to_string()))),
        };

        Ok(ReagentRecord {
            name: raw.name,
            category: raw.category,
            rarity,
            dc: raw.dc,
            value,
            kind,
        })
    }
}
