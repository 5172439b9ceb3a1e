//! Sorting business logic: team assignment and roster export.

mod assign;
mod export;

pub use assign::{assign, sort_teams};
pub use export::format_roster;
