//! Potion resolver module.
//!
//! Provides the `PotionResolver` type, the main entry point for brewing.
//! It routes each reagent into a role bucket and applies the
//! combination rules that turn those buckets into potion effects.

use crate::catalog::Catalog;
use crate::container::ContainerKind;
use crate::dice::DicePool;
use crate::error::PotionError;
use crate::potion::{Contribution, EffectLine, PotionResult, Role};
use crate::reagent::{ReagentKind, ReagentRecord};
use crate::rarity::Rarity;
use crate::selection::Selection;

/// Brews potions from reagents of one catalog.
///
/// Resolution applies these rules in order:
/// 1. Every reagent adds its DC and value and is routed by kind
/// 2. Curative + damage/modifier reagents make a resistance potion,
///    consuming the damage reagents
/// 3. Curative reagents alone pool their dice into healing
/// 4. Remaining damage reagents are retyped by modifiers and grouped by type
/// 5. Standalone effects are appended verbatim
///
/// The resolver holds no mutable state; one instance can brew any
/// number of potions, from any number of threads.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::*;
///
/// let catalog = Catalog::from_json_str(r#"{ "reagents": [
///     { "name": "Silverleaf", "category": "Herb", "rarity": "Common",
///       "dc": 1, "value": "10gp", "type": "heal", "damage": "1d4" },
///     { "name": "Bloodmoss", "category": "Herb", "rarity": "Uncommon",
///       "dc": 2, "value": "25gp", "type": "heal", "damage": "1d6" }
/// ]}"#).unwrap();
///
/// let resolver = PotionResolver::new(&catalog);
/// let slots = vec![
///     Some(Selection::new("Silverleaf", "Herb", Rarity::Common)),
///     None,
///     Some(Selection::new("Bloodmoss", "Herb", Rarity::Uncommon)),
/// ];
/// let potion = resolver.brew(ContainerKind::Glass, &slots).unwrap();
///
/// assert_eq!(potion.total_dc, 13);
/// assert_eq!(potion.total_value, Gold(35));
/// assert_eq!(potion.effects, vec![EffectLine::Healing { amount: DicePool::new(2, 4) }]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PotionResolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> PotionResolver<'c> {
    /// Create a resolver over `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Brew from selection slots.
    ///
    /// `slots` may hold at most as many entries as the container has
    /// slots. `None` entries are unset slots and are skipped.
    ///
    /// # Errors
    ///
    /// * [`PotionError::TooManyReagents`] if `slots` is longer than the container allows
    /// * [`PotionError::Catalog`] if a selection has no catalog record
    pub fn brew(
        &self,
        container: ContainerKind,
        slots: &[Option<Selection>],
    ) -> Result<PotionResult, PotionError> {
        if slots.len() > container.slots() {
            return Err(PotionError::TooManyReagents {
                container,
                capacity: container.slots(),
                given: slots.len(),
            });
        }

        let reagents = self.catalog.resolve_slots(slots)?;
        Ok(self.resolve(&reagents))
    }

    /// Brew from `"<name> (<category>, <rarity>)"` strings.
    ///
    /// Empty strings are unset slots.
    pub fn brew_display<S: AsRef<str>>(
        &self,
        container: ContainerKind,
        displays: &[S],
    ) -> Result<PotionResult, PotionError> {
        let slots = Catalog::parse_display_slots(displays)?;
        self.brew(container, &slots)
    }

    /// Combine already resolved reagents into a potion.
    ///
    /// Input order matters: it decides which reagent names a resistance,
    /// which die size a pool keeps, and the order of damage groups.
    pub fn resolve(&self, reagents: &[&ReagentRecord]) -> PotionResult {
        let mut potion = PotionResult::new();

        let mut curative: Vec<(Rarity, DicePool)> = Vec::new();
        let mut damage: Vec<&ReagentRecord> = Vec::new();
        let mut modifiers: Vec<&ReagentRecord> = Vec::new();
        let mut effects: Vec<&str> = Vec::new();

        // Step 1: Totals and routing
        for &reagent in reagents {
            let role = Role::from(&reagent.kind);
            tracing::debug!(reagent = %reagent.selection(), ?role, "routing reagent");

            potion.add_contribution(Contribution {
                reagent: reagent.selection().to_string(),
                role,
                dc: reagent.dc,
                value: reagent.value,
            });

            match &reagent.kind {
                ReagentKind::Heal { dice } => curative.push((reagent.rarity, *dice)),
                ReagentKind::Damage { .. } => damage.push(reagent),
                ReagentKind::Modifier { .. } => modifiers.push(reagent),
                ReagentKind::Effect { effect } => effects.push(effect),
            }
        }

        // Step 2: Resistance or healing from curatives
        if !curative.is_empty() {
            if !damage.is_empty() || !modifiers.is_empty() {
                potion.push_effect(resistance_effect(&curative, &damage, &modifiers));
                damage.clear();
            } else {
                let amount = DicePool::combine(curative.iter().map(|(_, dice)| *dice));
                tracing::debug!(%amount, "healing potion");
                potion.push_effect(EffectLine::Healing { amount });
            }
        }

        // Step 3: Damage grouped by effective type
        for (damage_type, pools) in group_damage(&damage, &modifiers) {
            potion.push_effect(EffectLine::Damage {
                damage_type,
                amount: DicePool::combine(pools),
            });
        }

        // Step 4: Standalone effects
        for text in effects {
            potion.push_effect(EffectLine::Effect {
                text: text.to_string(),
            });
        }

        potion
    }
}

/// Resistance named by the first damage reagent, else the first modifier.
/// Duration sums the curatives' rarity weights.
fn resistance_effect(
    curative: &[(Rarity, DicePool)],
    damage: &[&ReagentRecord],
    modifiers: &[&ReagentRecord],
) -> EffectLine {
    let source = damage.first().or_else(|| modifiers.first());
    let resistance = source.and_then(|r| r.resistance_type()).unwrap_or_default();
    let duration_hours: u32 = curative.iter().map(|(rarity, _)| rarity.duration_hours()).sum();

    tracing::debug!(resistance, duration_hours, "resistance potion");
    EffectLine::Resistance {
        effect: format!("{resistance} Resistance"),
        duration_hours,
    }
}

/// Group damage pools by effective damage type, in first-seen order.
///
/// A modifier reading `"Change Damage Type to <X>"` retypes every damage
/// reagent to `"<X> Damage"`; with several such modifiers the last one
/// in selection order applies.
fn group_damage(
    damage: &[&ReagentRecord],
    modifiers: &[&ReagentRecord],
) -> Vec<(String, Vec<DicePool>)> {
    let retype = modifiers
        .iter()
        .filter_map(|m| m.damage_type_override())
        .last()
        .map(|new_type| format!("{new_type} Damage"));

    let mut groups: Vec<(String, Vec<DicePool>)> = Vec::new();
    for reagent in damage {
        let ReagentKind::Damage { dice, effect } = &reagent.kind else {
            continue;
        };
        let damage_type = retype.clone().unwrap_or_else(|| effect.clone());

        match groups.iter_mut().find(|(label, _)| *label == damage_type) {
            Some((_, pools)) => pools.push(*dice),
            None => groups.push((damage_type, vec![*dice])),
        }
    }
    groups
}
