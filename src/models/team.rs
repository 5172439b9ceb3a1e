//! Team and TeamPlayer: the output of a sort.

use serde::{Deserialize, Serialize};

/// One player on a sorted team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub name: String,
    pub position: String,
}

/// A sorted team. Rebuilt from scratch on every sort, never patched in place.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<TeamPlayer>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }
}
