//! Core data types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a record: its position in the dataset it was first
/// loaded into. Sampling never renumbers rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub usize);

impl RowId {
    /// Position of the row in its original dataset
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(index: usize) -> Self {
        RowId(index)
    }
}

/// Seed type for reproducible sampling.
pub type Seed = u64;

/// Category value of a record under the stratifying column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Row whose category field is `true`
    True,
    /// Row whose category field is `false`
    False,
}

impl From<bool> for Category {
    fn from(value: bool) -> Self {
        if value {
            Category::True
        } else {
            Category::False
        }
    }
}

impl From<Category> for bool {
    fn from(category: Category) -> Self {
        category == Category::True
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::True => write!(f, "true"),
            Category::False => write!(f, "false"),
        }
    }
}
