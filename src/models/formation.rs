//! Game formats, futsal formations, and the position catalog.

use serde::{Deserialize, Serialize};

/// Top-level game type. Futsal needs a formation choice on top; society does not.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameFormat {
    Futsal,
    Society,
}

/// Futsal sub-choice: which of the two formations to field.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutsalFormation {
    Formation1,
    Formation2,
}

/// One row of the position catalog: a position and how many of it one team fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Position {
    pub name: &'static str,
    pub quantity_per_team: usize,
}

impl Position {
    const fn new(name: &'static str, quantity_per_team: usize) -> Self {
        Self {
            name,
            quantity_per_team,
        }
    }
}

/// Position table for a format/formation selection, in display order.
///
/// The order matters: slot groups are rendered in it and team rosters are
/// sorted by it. An incomplete selection (no format yet, or futsal without a
/// formation) returns an empty table: still choosing, not an error.
pub fn positions_for(
    format: Option<GameFormat>,
    formation: Option<FutsalFormation>,
) -> Vec<Position> {
    match (format, formation) {
        (Some(GameFormat::Futsal), Some(FutsalFormation::Formation1)) => vec![
            Position::new("Goleiro", 1),
            Position::new("Ala", 2),
            Position::new("Fixo", 1),
            Position::new("Pivô", 1),
        ],
        (Some(GameFormat::Futsal), Some(FutsalFormation::Formation2)) => vec![
            Position::new("Goleiro", 1),
            Position::new("Defensor", 2),
            Position::new("Atacante", 2),
        ],
        (Some(GameFormat::Society), _) => vec![
            Position::new("Goleiro", 1),
            Position::new("Zagueiro", 1),
            Position::new("Lateral", 2),
            Position::new("Meio-campista", 2),
            Position::new("Atacante", 1),
        ],
        _ => Vec::new(),
    }
}
