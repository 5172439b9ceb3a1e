//! Data structures for the team sorter: formats, slots, teams, session state.

mod formation;
mod session;
mod slot;
mod team;

pub use formation::{positions_for, FutsalFormation, GameFormat, Position};
pub use session::{SessionId, SortError, SortSession};
pub use slot::PlayerSlot;
pub use team::{Team, TeamPlayer};
