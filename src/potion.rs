//! Potion results.
//!
//! A [`PotionResult`] is the structured outcome of one brew. Rendering
//! it as the text shown to players is a separate step
//! ([`PotionResult::render_lines`] or `Display`).

use crate::dice::DicePool;
use crate::gold::Gold;
use crate::reagent::ReagentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DC every potion starts from before reagents are added.
pub const BASE_DC: u32 = 10;

/// Text shown when nothing was brewed.
pub const EMPTY_POTION_MESSAGE: &str = "No valid reagents selected or potion cannot be crafted.";

/// One effect of a finished potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectLine {
    /// Resistance to a damage type, e.g. `effect = "Fire Resistance"`.
    Resistance { effect: String, duration_hours: u32 },
    Healing { amount: DicePool },
    /// Damage of one type, e.g. `damage_type = "Cold Damage"`.
    Damage { damage_type: String, amount: DicePool },
    /// A standalone effect, verbatim from the reagent.
    Effect { text: String },
}

impl EffectLine {
    fn render_into(&self, lines: &mut Vec<String>) {
        match self {
            EffectLine::Resistance {
                effect,
                duration_hours,
            } => {
                lines.push("Type: Resistance".to_string());
                lines.push(format!("Effect: {effect}"));
                lines.push(format!("Duration: {duration_hours} hours"));
            }
            EffectLine::Healing { amount } => {
                lines.push("Type: Healing".to_string());
                lines.push("Effect: Healing".to_string());
                lines.push(format!("Amount: {amount}"));
            }
            EffectLine::Damage {
                damage_type,
                amount,
            } => {
                lines.push("Type: Damage".to_string());
                lines.push(format!("Effect: {damage_type}"));
                lines.push(format!("Amount: {amount}"));
            }
            EffectLine::Effect { text } => {
                lines.push(format!("Effect: {text}"));
            }
        }
        lines.push(String::new());
    }
}

/// Bucket a reagent was routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Curative,
    Damage,
    Modifier,
    Effect,
}

impl From<&ReagentKind> for Role {
    fn from(kind: &ReagentKind) -> Self {
        match kind {
            ReagentKind::Heal { .. } => Role::Curative,
            ReagentKind::Damage { .. } => Role::Damage,
            ReagentKind::Modifier { .. } => Role::Modifier,
            ReagentKind::Effect { .. } => Role::Effect,
        }
    }
}

/// What a single reagent added to the brew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Reagent in `"<name> (<category>, <rarity>)"` form.
    pub reagent: String,
    pub role: Role,
    pub dc: u32,
    pub value: Gold,
}

/// The outcome of brewing a set of reagents.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::{PotionResult, EffectLine, DicePool};
///
/// let mut potion = PotionResult::new();
/// assert!(potion.is_empty());
/// assert_eq!(potion.to_string(), "No valid reagents selected or potion cannot be crafted.");
///
/// potion.push_effect(EffectLine::Healing { amount: DicePool::new(2, 4) });
/// potion.total_dc = 12;
/// assert_eq!(
///     potion.render_lines(),
///     vec!["Type: Healing", "Effect: Healing", "Amount: 2d4", "", "Total DC: 12", "Total Value: 0gp"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionResult {
    /// `BASE_DC` plus every reagent's DC.
    pub total_dc: u32,

    /// Sum of every reagent's value.
    pub total_value: Gold,

    /// Effects in output order.
    pub effects: Vec<EffectLine>,

    /// Per-reagent contributions, in selection order.
    pub breakdown: Vec<Contribution>,
}

impl PotionResult {
    /// A potion with no reagents: base DC, no value, no effects.
    pub fn new() -> Self {
        Self {
            total_dc: BASE_DC,
            total_value: Gold::default(),
            effects: Vec::new(),
            breakdown: Vec::new(),
        }
    }

    /// Record a reagent's contribution and add it to the totals.
    pub fn add_contribution(&mut self, contribution: Contribution) {
        self.total_dc = self.total_dc.saturating_add(contribution.dc);
        self.total_value = self.total_value + contribution.value;
        self.breakdown.push(contribution);
    }

    pub fn push_effect(&mut self, effect: EffectLine) {
        self.effects.push(effect);
    }

    /// True when neither reagents nor effects went into the potion.
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty() && self.effects.is_empty()
    }

    /// Player-facing text, one entry per line.
    ///
    /// Each effect becomes a short block followed by a blank line, then
    /// the DC and value totals. An empty potion renders only
    /// [`EMPTY_POTION_MESSAGE`].
    pub fn render_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![EMPTY_POTION_MESSAGE.to_string()];
        }

        let mut lines = Vec::new();
        for effect in &self.effects {
            effect.render_into(&mut lines);
        }
        lines.push(format!("Total DC: {}", self.total_dc));
        lines.push(format!("Total Value: {}", self.total_value));
        lines
    }
}

impl Default for PotionResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PotionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_potion_has_base_dc() {
        let potion = PotionResult::new();
        assert_eq!(potion.total_dc, BASE_DC);
        assert_eq!(potion.total_value, Gold(0));
        assert!(potion.is_empty());
    }

    #[test]
    fn test_empty_potion_renders_fallback_only() {
        let potion = PotionResult::new();
        assert_eq!(potion.render_lines(), vec![EMPTY_POTION_MESSAGE]);
    }

    #[test]
    fn test_add_contribution_updates_totals() {
        let mut potion = PotionResult::new();
        potion.add_contribution(Contribution {
            reagent: "Silverleaf (Herb, Common)".to_string(),
            role: Role::Curative,
            dc: 2,
            value: Gold(15),
        });
        potion.add_contribution(Contribution {
            reagent: "Ember Moss (Herb, Uncommon)".to_string(),
            role: Role::Damage,
            dc: 3,
            value: Gold(40),
        });

        assert_eq!(potion.total_dc, 15);
        assert_eq!(potion.total_value, Gold(55));
        assert_eq!(potion.breakdown.len(), 2);
        assert!(!potion.is_empty());
    }

    #[test]
    fn test_render_reagents_without_effects() {
        let mut potion = PotionResult::new();
        potion.add_contribution(Contribution {
            reagent: "Glass Dust (Mineral, Common)".to_string(),
            role: Role::Modifier,
            dc: 1,
            value: Gold(5),
        });
        assert_eq!(potion.render_lines(), vec!["Total DC: 11", "Total Value: 5gp"]);
    }

    #[test]
    fn test_render_matches_legacy_text() {
        let mut potion = PotionResult::new();
        potion.total_dc = 14;
        potion.total_value = Gold(70);
        potion.push_effect(EffectLine::Resistance {
            effect: "Fire Resistance".to_string(),
            duration_hours: 5,
        });
        potion.push_effect(EffectLine::Effect {
            text: "Glows faintly".to_string(),
        });

        let expected = "Type: Resistance\nEffect: Fire Resistance\nDuration: 5 hours\n\n\
                        Effect: Glows faintly\n\n\
                        Total DC: 14\nTotal Value: 70gp";
        assert_eq!(potion.to_string(), expected);
    }

    #[test]
    fn test_json_shape() {
        let effect = EffectLine::Damage {
            damage_type: "Cold Damage".to_string(),
            amount: DicePool::new(2, 6),
        };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["type"], "Damage");
        assert_eq!(json["damage_type"], "Cold Damage");
        assert_eq!(json["amount"]["count"], 2);
    }
}
