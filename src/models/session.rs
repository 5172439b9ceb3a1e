//! SortSession and SortError: the per-session sorting state.

use crate::models::formation::{positions_for, FutsalFormation, GameFormat, Position};
use crate::models::slot::PlayerSlot;
use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during sorting-session operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortError {
    /// Not every slot has a name yet; `missing` says how many are still empty.
    IncompleteRoster { missing: usize },
    /// Session is not in a state that allows this action.
    InvalidState,
    /// Slot index past the end of the pool.
    SlotOutOfRange(usize),
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::IncompleteRoster { missing } => {
                write!(f, "{} position(s) still need a player name", missing)
            }
            SortError::InvalidState => write!(f, "Invalid state for this action"),
            SortError::SlotOutOfRange(idx) => write!(f, "No slot at index {}", idx),
        }
    }
}

/// Unique identifier for a sorting session.
pub type SessionId = Uuid;

/// Full sorting-session state: format choice, slot pool, and sorted teams.
///
/// Slots exist only once the selection is complete (format chosen, plus a
/// formation when the format is futsal). `teams` is empty until a sort runs,
/// then holds exactly two entries, replaced wholesale on every re-sort.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SortSession {
    pub id: SessionId,
    pub game_format: Option<GameFormat>,
    pub futsal_formation: Option<FutsalFormation>,
    /// The slot pool: `quantity_per_team * 2` slots per position, catalog order.
    pub slots: Vec<PlayerSlot>,
    /// Result of the last sort (empty, or exactly two teams).
    pub teams: Vec<Team>,
    /// One-shot guard so repeated initialization never wipes typed names.
    slots_initialized: bool,
}

impl Default for SortSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SortSession {
    /// Create a fresh session with nothing chosen yet.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            game_format: None,
            futsal_formation: None,
            slots: Vec::new(),
            teams: Vec::new(),
            slots_initialized: false,
        }
    }

    /// Position catalog for the current selection (empty while still choosing).
    pub fn positions(&self) -> Vec<Position> {
        positions_for(self.game_format, self.futsal_formation)
    }

    /// Total slots the current selection requires (both teams).
    pub fn total_slots(&self) -> usize {
        self.positions()
            .iter()
            .map(|p| p.quantity_per_team * 2)
            .sum()
    }

    /// How many slots already have a non-blank name.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Choose the game format. Only valid while no format is chosen; society
    /// completes the selection and builds the pool immediately.
    pub fn choose_format(&mut self, format: GameFormat) -> Result<(), SortError> {
        if self.game_format.is_some() {
            return Err(SortError::InvalidState);
        }
        self.game_format = Some(format);
        self.ensure_slots();
        Ok(())
    }

    /// Choose the futsal formation. Requires futsal with no formation yet.
    pub fn choose_formation(&mut self, formation: FutsalFormation) -> Result<(), SortError> {
        if self.game_format != Some(GameFormat::Futsal) || self.futsal_formation.is_some() {
            return Err(SortError::InvalidState);
        }
        self.futsal_formation = Some(formation);
        self.ensure_slots();
        Ok(())
    }

    /// Back out of the formation screen to the format choice (futsal only,
    /// before a formation is picked).
    pub fn back_to_format(&mut self) -> Result<(), SortError> {
        if self.game_format != Some(GameFormat::Futsal) || self.futsal_formation.is_some() {
            return Err(SortError::InvalidState);
        }
        self.game_format = None;
        Ok(())
    }

    /// Build the slot pool once the selection is complete: for each catalog
    /// position, `quantity_per_team * 2` empty slots (both teams' worth).
    ///
    /// Idempotent: a no-op while the selection is incomplete, and once armed
    /// it never rebuilds, so typed names survive incidental re-calls. `reset`
    /// re-arms it.
    pub fn ensure_slots(&mut self) {
        if self.slots_initialized || !self.slots.is_empty() {
            return;
        }
        let positions = self.positions();
        if positions.is_empty() {
            return;
        }
        for position in &positions {
            for _ in 0..position.quantity_per_team * 2 {
                self.slots.push(PlayerSlot::empty(position.name));
            }
        }
        self.slots_initialized = true;
    }

    /// Update one slot's player name (stored raw; trimming happens at sort time).
    pub fn update_slot(&mut self, index: usize, name: impl Into<String>) -> Result<(), SortError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SortError::SlotOutOfRange(index))?;
        slot.name = name.into();
        Ok(())
    }

    /// Wipe everything back to a fresh session (keeps the id). Clears format,
    /// formation, slots, and teams, and re-arms the initialization guard.
    pub fn reset(&mut self) {
        let id = self.id;
        *self = Self::new();
        self.id = id;
    }
}
