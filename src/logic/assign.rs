//! Team assignment: shuffle the filled pool, then greedy per-position fill.

use crate::models::{PlayerSlot, Position, SortError, SortSession, Team, TeamPlayer};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Run a sort on the session's pool and store the two teams on it.
///
/// Every slot must have a non-blank name; otherwise `IncompleteRoster` says
/// how many are still empty and the previous teams (if any) are left alone.
pub fn sort_teams(session: &mut SortSession) -> Result<(), SortError> {
    let positions = session.positions();
    if positions.is_empty() {
        return Err(SortError::InvalidState);
    }

    let filled: Vec<PlayerSlot> = session
        .slots
        .iter()
        .filter(|s| s.is_filled())
        .cloned()
        .collect();
    let required = session.total_slots();
    if filled.len() < required {
        return Err(SortError::IncompleteRoster {
            missing: required - filled.len(),
        });
    }

    let (team_1, team_2) = assign(&filled, &positions);
    session.teams = vec![team_1, team_2];
    Ok(())
}

/// Split filled slots into two teams matching the position quotas exactly.
///
/// 1. Shuffle the slots (uniform permutation; also randomizes who hits the
///    tie-break first).
/// 2. Walk them in shuffled order. While both teams still need the slot's
///    position, a fair coin picks the side; once one side's quota for that
///    position is full, the other side takes the rest.
/// 3. Sort each roster by catalog position order, then by name, so the
///    output reads the same way regardless of placement order.
///
/// Callers must pass exactly `quantity_per_team * 2` slots per position;
/// the pool built by `SortSession::ensure_slots` guarantees that.
pub fn assign(filled_slots: &[PlayerSlot], positions: &[Position]) -> (Team, Team) {
    let mut rng = rand::thread_rng();

    let quota: HashMap<&str, usize> = positions
        .iter()
        .map(|p| (p.name, p.quantity_per_team))
        .collect();
    let mut counts_1: HashMap<&str, usize> = positions.iter().map(|p| (p.name, 0)).collect();
    let mut counts_2: HashMap<&str, usize> = positions.iter().map(|p| (p.name, 0)).collect();

    let mut shuffled: Vec<&PlayerSlot> = filled_slots.iter().collect();
    shuffled.shuffle(&mut rng);

    let mut team_1 = Team::new("Time 1");
    let mut team_2 = Team::new("Time 2");

    for slot in shuffled {
        let position = slot.position.as_str();
        let player = TeamPlayer {
            name: slot.name.trim().to_string(),
            position: slot.position.clone(),
        };
        let needs_1 = counts_1[position] < quota[position];
        let needs_2 = counts_2[position] < quota[position];

        let take_1 = match (needs_1, needs_2) {
            (true, true) => rng.gen_bool(0.5),
            (true, false) => true,
            (false, true) => false,
            // 2x-quota pool makes a third full-on-both-sides slot impossible.
            (false, false) => unreachable!("slot pool exceeds position quotas"),
        };
        if take_1 {
            team_1.players.push(player);
            *counts_1.entry(position).or_default() += 1;
        } else {
            team_2.players.push(player);
            *counts_2.entry(position).or_default() += 1;
        }
    }

    sort_roster(&mut team_1, positions);
    sort_roster(&mut team_2, positions);
    (team_1, team_2)
}

/// Order a roster by catalog position index, then lexicographically by name.
fn sort_roster(team: &mut Team, positions: &[Position]) {
    let index_of = |position: &str| {
        positions
            .iter()
            .position(|p| p.name == position)
            .unwrap_or(positions.len())
    };
    team.players
        .sort_by(|a, b| index_of(&a.position).cmp(&index_of(&b.position)).then_with(|| a.name.cmp(&b.name)));
}
