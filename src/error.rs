//! Error types for catalog loading and potion resolution.
//!
//! Every failure is reported through one of the enums below. The
//! calculator fails fast: a malformed catalog row is rejected when the
//! catalog is built, and an unresolvable selection aborts the brew with
//! the offending slot named.

use crate::container::ContainerKind;
use thiserror::Error;

/// A single field of a catalog row or a user selection could not be parsed.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::ParseError;
///
/// let err = ParseError::InvalidDice("d6".to_string());
/// assert_eq!(err.to_string(), "Invalid dice notation: \"d6\" (expected <count>d<sides>)");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A gold value was not a number followed by a two-character currency suffix.
    #[error("Invalid gold value: {0:?} (expected <amount> followed by a 2-character currency suffix)")]
    InvalidValue(String),

    /// A dice string did not match `<count>d<sides>`.
    #[error("Invalid dice notation: {0:?} (expected <count>d<sides>)")]
    InvalidDice(String),

    /// The rarity name is not one of the five known tiers.
    #[error("Unknown rarity: {0:?}")]
    UnknownRarity(String),

    /// The container name is neither `glass` nor `crystal`.
    #[error("Unknown container type: {0:?}")]
    UnknownContainer(String),

    /// The reagent type tag is not one of heal, damage, modifier or effect.
    #[error("Unknown reagent type: {0:?}")]
    UnknownKind(String),

    /// A selection string did not follow `<name> (<category>, <rarity>)`.
    #[error("Invalid selection {0:?} (expected \"<name> (<category>, <rarity>)\")")]
    InvalidSelection(String),
}

/// Errors raised while loading the reagent catalog or resolving selections.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },

    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("Malformed catalog: {0}")]
    Json(String),

    /// A catalog row has a field that does not parse.
    #[error("Invalid reagent {name:?}: {source}")]
    InvalidReagent {
        name: String,
        #[source]
        source: ParseError,
    },

    /// A catalog row lacks a field its type requires.
    #[error("Reagent {name:?} of type {kind} is missing the {field:?} field")]
    MissingField {
        name: String,
        kind: &'static str,
        field: &'static str,
    },

    /// A selection string could not be decoded.
    #[error("Slot {slot}: {source}")]
    InvalidSelection {
        slot: usize,
        #[source]
        source: ParseError,
    },

    /// No catalog record matches the selection.
    ///
    /// `slot` is 1-based, matching the numbering shown to the user.
    #[error("Slot {slot}: no reagent matches {selection}")]
    Unresolved { slot: usize, selection: String },
}

/// Errors raised by the brewing pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PotionError {
    /// Selection could not be turned into catalog records.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// More slots were supplied than the container holds.
    #[error("A {container} container holds {capacity} reagents, {given} slots were supplied")]
    TooManyReagents {
        container: ContainerKind,
        capacity: usize,
        given: usize,
    },
}

/// Errors raised while loading the TOML configuration file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {message}")]
    Io { path: String, message: String },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("Malformed config: {0}")]
    Toml(String),
}
