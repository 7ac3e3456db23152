//! Potion containers.
//!
//! The container decides how many reagent slots a brew has.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vessel a potion is brewed in.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::ContainerKind;
///
/// let container: ContainerKind = "crystal".parse().unwrap();
/// assert_eq!(container.slots(), 5);
/// assert_eq!(ContainerKind::default().slots(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    Glass,
    Crystal,
}

impl ContainerKind {
    /// Number of reagent slots the container offers.
    pub fn slots(self) -> usize {
        match self {
            ContainerKind::Glass => 4,
            ContainerKind::Crystal => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::Glass => "glass",
            ContainerKind::Crystal => "crystal",
        }
    }
}

impl FromStr for ContainerKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glass" => Ok(ContainerKind::Glass),
            "crystal" => Ok(ContainerKind::Crystal),
            other => Err(ParseError::UnknownContainer(other.to_string())),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
