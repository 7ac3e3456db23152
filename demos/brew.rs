//! Brew example: resolve a few potions from the sample catalog
//!
//! This example demonstrates:
//! - Loading the reagent catalog
//! - Brewing from structured selections and from display strings
//! - Reading the breakdown behind a potion's totals

use alchemy_calc::*;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/reagents.json");
    let catalog = Catalog::load(path)?;
    let resolver = PotionResolver::new(&catalog);

    // Curatives alone pool their dice into healing
    println!("=== Healing draught (glass) ===");
    let slots = vec![
        Some(Selection::new("Silverleaf", "Herb", Rarity::Common)),
        Some(Selection::new("Bloodmoss", "Herb", Rarity::Uncommon)),
        None,
        None,
    ];
    let healing = resolver.brew(ContainerKind::Glass, &slots)?;
    println!("{healing}\n");

    // A curative plus a damage reagent makes a resistance potion
    println!("=== Storm ward (crystal) ===");
    let ward = resolver.brew_display(
        ContainerKind::Crystal,
        &[
            "Troll Sweat (Monster Part, Very Rare)",
            "Stormglass (Mineral, Rare)",
            "Glimmercap (Fungus, Common)",
        ],
    )?;
    println!("{ward}\n");

    // A change-type modifier retypes every damage reagent
    println!("=== Frostbite flask (glass) ===");
    let frost = resolver.brew_display(
        ContainerKind::Glass,
        &[
            "Ember Moss (Herb, Common)",
            "Wyvern Venom (Monster Part, Uncommon)",
            "Frost Salt (Mineral, Uncommon)",
        ],
    )?;
    println!("{frost}");

    println!("\nBreakdown:");
    for part in &frost.breakdown {
        println!("  {} [{:?}]: DC +{}, {}", part.reagent, part.role, part.dc, part.value);
    }

    // Unknown reagents are reported, not dropped
    match resolver.brew_display(ContainerKind::Glass, &["Moonpetal (Herb, Legendary)"]) {
        Ok(_) => println!("\nUnexpectedly brewed an unknown reagent"),
        Err(e) => println!("\nExpected error: {e}"),
    }

    Ok(())
}
