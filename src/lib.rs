//! Team sorter web app: library with models and sorting logic.

pub mod logic;
pub mod models;

pub use logic::{assign, format_roster, sort_teams};
pub use models::{
    positions_for, FutsalFormation, GameFormat, PlayerSlot, Position, SessionId, SortError,
    SortSession, Team, TeamPlayer,
};
