//! PlayerSlot: one position-tagged input cell awaiting a player name.

use serde::{Deserialize, Serialize};

/// A slot in the pool. `position` references a catalog position name; `name`
/// is whatever the user has typed so far (kept raw, trimmed at sort time).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub position: String,
    pub name: String,
}

impl PlayerSlot {
    /// Create an empty slot for the given position.
    pub fn empty(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            name: String::new(),
        }
    }

    /// A slot counts as filled once its name trims non-empty.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
