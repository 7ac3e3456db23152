//! Reagent categories.
//!
//! Categories are open-ended: the catalog decides which ones exist and
//! the calculator only compares them during selection lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Category tag of a reagent, e.g. `"Herb"` or `"Monster Part"`.
///
/// Backed by `Arc<str>` because every record and every selection built
/// from it carries a copy. Serialized as a plain string.
///
/// # Examples
///
/// ```rust
/// use alchemy_calc::Category;
///
/// let herb: Category = "Herb".into();
/// assert_eq!(herb, Category::new("Herb"));
/// assert_eq!(herb.to_string(), "Herb");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category(Arc<str>);

impl Category {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
