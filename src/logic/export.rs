//! Roster text export for the clipboard ("Copiar Times").

use crate::models::Team;

/// Render the two sorted teams as the share/clipboard text.
///
/// Returns `None` unless exactly two teams exist (nothing sorted yet), so
/// the caller can simply skip the copy. Output is a pure function of the
/// teams: header line, then one section per team with `name - position`
/// lines in the teams' already-sorted order.
pub fn format_roster(teams: &[Team]) -> Option<String> {
    if teams.len() != 2 {
        return None;
    }

    let mut text = String::from("Time Azul x Time Vermelho\n\n");

    text.push_str("Time Azul\n");
    for player in &teams[0].players {
        text.push_str(&format!("{} - {}\n", player.name, player.position));
    }

    text.push_str("\nTime Vermelho\n");
    for player in &teams[1].players {
        text.push_str(&format!("{} - {}\n", player.name, player.position));
    }

    Some(text)
}
