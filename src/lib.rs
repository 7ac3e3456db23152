//! # alchemy-calc - Deterministic Potion Crafting Calculator
//!
//! Computes what a potion brewed from a handful of reagents does:
//! - **Difficulty class**: base 10 plus every reagent's DC
//! - **Value**: the summed gold value of the reagents
//! - **Effects**: healing, damage, resistance or exotic effects derived
//!   from the combination rules below
//!
//! ## Core Concepts
//!
//! ### Brewing Pipeline
//!
//! ```text
//! [Selection] → [Catalog] → [ReagentRecord] → [PotionResolver] → [PotionResult]
//! ```
//!
//! 1. **Selections** name reagents by (name, category, rarity)
//! 2. The **Catalog** resolves each selection to a validated record
//! 3. The **PotionResolver** routes records by kind and combines them
//! 4. The **PotionResult** carries totals, effects and a per-reagent breakdown
//!
//! ### Combination Rules
//!
//! - Curative reagents together with damage or modifier reagents make a
//!   **resistance** potion; its duration is the sum of the curatives'
//!   rarity weights and the damage reagents are consumed
//! - Curative reagents alone pool their dice into **healing**
//! - Damage reagents are grouped by damage type, after any
//!   `"Change Damage Type to <X>"` modifier retypes them
//! - Effect reagents are reported verbatim
//!
//! ## Example
//!
//! ```rust
//! use alchemy_calc::*;
//!
//! let catalog = Catalog::from_json_str(r#"{ "reagents": [
//!     { "name": "Silverleaf", "category": "Herb", "rarity": "Uncommon",
//!       "dc": 1, "value": "10gp", "type": "heal", "damage": "1d4" },
//!     { "name": "Ember Moss", "category": "Herb", "rarity": "Common",
//!       "dc": 2, "value": "40gp", "type": "damage", "damage": "1d6",
//!       "effect": "Fire Damage" }
//! ]}"#).unwrap();
//!
//! let resolver = PotionResolver::new(&catalog);
//! let potion = resolver
//!     .brew_display(ContainerKind::Glass, &["Silverleaf (Herb, Uncommon)", "Ember Moss (Herb, Common)"])
//!     .unwrap();
//!
//! assert_eq!(potion.total_dc, 13);
//! assert_eq!(
//!     potion.effects,
//!     vec![EffectLine::Resistance { effect: "Fire Resistance".to_string(), duration_hours: 4 }]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Immutable reagent catalog and selection lookup
//! - [`reagent`] - Catalog rows and validated reagent records
//! - [`selection`] - Reagent selections and their display encoding
//! - [`resolver`] - The potion resolver
//! - [`potion`] - Potion results and text rendering
//! - [`dice`], [`gold`], [`rarity`], [`category`], [`container`] - Value types
//! - [`config`] - TOML configuration
//! - [`error`] - Error types

pub mod catalog;
pub mod category;
pub mod config;
pub mod container;
pub mod dice;
pub mod error;
pub mod gold;
pub mod potion;
pub mod rarity;
pub mod reagent;
pub mod resolver;
pub mod selection;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use category::Category;
pub use config::AlchemyConfig;
pub use container::ContainerKind;
pub use dice::DicePool;
pub use error::{CatalogError, ConfigError, ParseError, PotionError};
pub use gold::Gold;
pub use potion::{Contribution, EffectLine, PotionResult, Role, BASE_DC, EMPTY_POTION_MESSAGE};
pub use rarity::Rarity;
pub use reagent::{RawReagent, ReagentKind, ReagentRecord};
pub use resolver::PotionResolver;
pub use selection::Selection;
