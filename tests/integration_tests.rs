use alchemy_calc::*;
use proptest::prelude::*;
use std::path::PathBuf;

fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reagents.json");
    Catalog::load(path).unwrap()
}

fn brew(catalog: &Catalog, container: ContainerKind, reagents: &[&str]) -> PotionResult {
    PotionResolver::new(catalog)
        .brew_display(container, reagents)
        .unwrap()
}

/// Test that unset slots produce only the fallback message.
#[test]
fn test_all_slots_empty() {
    let catalog = sample_catalog();
    let potion = brew(&catalog, ContainerKind::Glass, &["", "", "", ""]);

    assert!(potion.is_empty());
    assert_eq!(
        potion.to_string(),
        "No valid reagents selected or potion cannot be crafted."
    );
}

/// Test a pure healing potion end to end, including rendered text.
#[test]
fn test_healing_potion() {
    let catalog = sample_catalog();
    let potion = brew(
        &catalog,
        ContainerKind::Glass,
        &["Silverleaf (Herb, Common)", "", "Bloodmoss (Herb, Uncommon)"],
    );

    assert_eq!(potion.total_dc, 13);
    assert_eq!(potion.total_value, Gold(35));
    assert_eq!(
        potion.to_string(),
        "Type: Healing\nEffect: Healing\nAmount: 2d4\n\nTotal DC: 13\nTotal Value: 35gp"
    );
}

/// Test that curative + damage reagents make a resistance potion.
#[test]
fn test_resistance_potion() {
    let catalog = sample_catalog();
    let potion = brew(
        &catalog,
        ContainerKind::Crystal,
        &[
            "Bloodmoss (Herb, Uncommon)",
            "Stormglass (Mineral, Rare)",
            "Troll Sweat (Monster Part, Very Rare)",
            "Ember Moss (Herb, Common)",
        ],
    );

    // Stormglass comes first among the damage reagents
    assert_eq!(
        potion.effects,
        vec![EffectLine::Resistance {
            effect: "Lightning Resistance".to_string(),
            duration_hours: 4 + 16,
        }]
    );
    assert_eq!(potion.total_dc, 10 + 2 + 4 + 5 + 2);
    assert_eq!(potion.total_value, Gold(25 + 150 + 300 + 40));
}

/// Test retyping damage with a modifier and grouping the result.
#[test]
fn test_retyped_damage_potion() {
    let catalog = sample_catalog();
    let potion = brew(
        &catalog,
        ContainerKind::Glass,
        &[
            "Ember Moss (Herb, Common)",
            "Frost Salt (Mineral, Uncommon)",
            "Wyvern Venom (Monster Part, Uncommon)",
            "Glimmercap (Fungus, Common)",
        ],
    );

    assert_eq!(
        potion.render_lines(),
        vec![
            "Type: Damage",
            "Effect: Cold Damage",
            "Amount: 2d6",
            "",
            "Effect: The drinker sheds dim light in a 10-foot radius for 1 hour.",
            "",
            "Total DC: 18",
            "Total Value: 210gp",
        ]
    );
}

/// Test that unretyped damage keeps one group per type in first-seen order.
#[test]
fn test_mixed_damage_groups() {
    let catalog = sample_catalog();
    let potion = brew(
        &catalog,
        ContainerKind::Crystal,
        &[
            "Wyvern Venom (Monster Part, Uncommon)",
            "Stormglass (Mineral, Rare)",
            "Ember Moss (Herb, Common)",
            "Wyvern Venom (Monster Part, Uncommon)",
        ],
    );

    let labels: Vec<&str> = potion
        .effects
        .iter()
        .filter_map(|e| match e {
            EffectLine::Damage { damage_type, .. } => Some(damage_type.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["Poison Damage", "Lightning Damage", "Fire Damage"]);
    assert_eq!(
        potion.effects[0],
        EffectLine::Damage {
            damage_type: "Poison Damage".to_string(),
            amount: DicePool::new(2, 6),
        }
    );
}

/// Test that an unknown reagent is reported with its slot instead of dropped.
#[test]
fn test_unresolved_selection_is_reported() {
    let catalog = sample_catalog();
    let result = PotionResolver::new(&catalog).brew_display(
        ContainerKind::Glass,
        &["Silverleaf (Herb, Common)", "Silverleaf (Herb, Legendary)"],
    );

    assert_eq!(
        result,
        Err(PotionError::Catalog(CatalogError::Unresolved {
            slot: 2,
            selection: "Silverleaf (Herb, Legendary)".to_string(),
        }))
    );
}

/// Test the container slot limit.
#[test]
fn test_glass_holds_four() {
    let catalog = sample_catalog();
    let five = ["Silverleaf (Herb, Common)"; 5];

    let glass = PotionResolver::new(&catalog).brew_display(ContainerKind::Glass, &five);
    assert!(matches!(glass, Err(PotionError::TooManyReagents { capacity: 4, .. })));

    let crystal = brew(&catalog, ContainerKind::Crystal, &five);
    assert_eq!(
        crystal.effects,
        vec![EffectLine::Healing {
            amount: DicePool::new(5, 4)
        }]
    );
}

/// Test that the structured result serializes for machine consumers.
#[test]
fn test_json_output() {
    let catalog = sample_catalog();
    let potion = brew(&catalog, ContainerKind::Glass, &["Whisperroot (Herb, Rare)"]);

    let json = serde_json::to_value(&potion).unwrap();
    assert_eq!(json["total_dc"], 14);
    assert_eq!(json["total_value"], 200);
    assert_eq!(json["effects"][0]["type"], "Effect");
    assert_eq!(json["breakdown"][0]["role"], "effect");
    assert_eq!(json["breakdown"][0]["reagent"], "Whisperroot (Herb, Rare)");

    let back: PotionResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, potion);
}

// ============================================================================
// Property Tests
// ============================================================================

fn arb_kind() -> impl Strategy<Value = ReagentKind> {
    let dice = (0u32..6, 1u32..13).prop_map(|(count, sides)| DicePool::new(count, sides));
    let damage_type = prop::sample::select(vec!["Fire Damage", "Cold Damage", "Acid Damage"]);
    let modifier = prop::sample::select(vec![
        "Change Damage Type to Cold",
        "Change Damage Type to Thunder",
        "Ward against Radiant",
    ]);
    prop_oneof![
        dice.clone().prop_map(|dice| ReagentKind::Heal { dice }),
        (dice, damage_type).prop_map(|(dice, effect)| ReagentKind::Damage {
            dice,
            effect: effect.to_string(),
        }),
        modifier.prop_map(|effect| ReagentKind::Modifier {
            effect: effect.to_string(),
        }),
        "[a-z ]{1,20}".prop_map(|effect| ReagentKind::Effect { effect }),
    ]
}

fn arb_reagent() -> impl Strategy<Value = ReagentRecord> {
    (
        0u32..20,
        0u32..5000,
        prop::sample::select(Rarity::ALL.to_vec()),
        arb_kind(),
    )
        .prop_map(|(dc, value, rarity, kind)| ReagentRecord {
            name: "Reagent".to_string(),
            category: "Herb".into(),
            rarity,
            dc,
            value: Gold(value),
            kind,
        })
}

proptest! {
    /// Total DC is the base plus every reagent's DC.
    #[test]
    fn prop_total_dc(reagents in prop::collection::vec(arb_reagent(), 0..=5)) {
        let catalog = Catalog::new();
        let refs: Vec<&ReagentRecord> = reagents.iter().collect();
        let potion = PotionResolver::new(&catalog).resolve(&refs);

        let expected = BASE_DC + reagents.iter().map(|r| r.dc).sum::<u32>();
        prop_assert_eq!(potion.total_dc, expected);
        prop_assert!(potion.total_dc >= BASE_DC);
    }

    /// Total value is the sum of every reagent's value.
    #[test]
    fn prop_total_value(reagents in prop::collection::vec(arb_reagent(), 0..=5)) {
        let catalog = Catalog::new();
        let refs: Vec<&ReagentRecord> = reagents.iter().collect();
        let potion = PotionResolver::new(&catalog).resolve(&refs);

        let expected: Gold = reagents.iter().map(|r| r.value).sum();
        prop_assert_eq!(potion.total_value, expected);
    }

    /// A resistance potion never also reports damage.
    #[test]
    fn prop_resistance_consumes_damage(reagents in prop::collection::vec(arb_reagent(), 0..=5)) {
        let catalog = Catalog::new();
        let refs: Vec<&ReagentRecord> = reagents.iter().collect();
        let potion = PotionResolver::new(&catalog).resolve(&refs);

        let resistance = potion.effects.iter().any(|e| matches!(e, EffectLine::Resistance { .. }));
        let damage = potion.effects.iter().any(|e| matches!(e, EffectLine::Damage { .. }));
        prop_assert!(!(resistance && damage));
    }

    /// Dice counts combine commutatively when die sizes agree.
    #[test]
    fn prop_dice_combination_commutes(counts in prop::collection::vec(0u32..10, 0..6), sides in 1u32..21) {
        let pools: Vec<DicePool> = counts.iter().map(|&c| DicePool::new(c, sides)).collect();
        let mut reversed = pools.clone();
        reversed.reverse();

        let combined = DicePool::combine(pools.clone());
        prop_assert_eq!(combined, DicePool::combine(reversed));
        prop_assert_eq!(combined.count, counts.iter().sum::<u32>());
    }
}
