//! Integration tests for the roster text export.

use team_sorter_web::{format_roster, sort_teams, FutsalFormation, GameFormat, SortSession, Team, TeamPlayer};

fn team(name: &str, players: &[(&str, &str)]) -> Team {
    Team {
        name: name.to_string(),
        players: players
            .iter()
            .map(|(n, p)| TeamPlayer {
                name: n.to_string(),
                position: p.to_string(),
            })
            .collect(),
    }
}

#[test]
fn export_matches_the_share_text_exactly() {
    let teams = vec![
        team("Time 1", &[("Ana", "Goleiro"), ("Bia", "Fixo")]),
        team("Time 2", &[("Caio", "Goleiro"), ("Davi", "Fixo")]),
    ];
    let text = format_roster(&teams).unwrap();
    assert_eq!(
        text,
        "Time Azul x Time Vermelho\n\n\
         Time Azul\n\
         Ana - Goleiro\n\
         Bia - Fixo\n\
         \n\
         Time Vermelho\n\
         Caio - Goleiro\n\
         Davi - Fixo\n"
    );
}

#[test]
fn export_is_deterministic_for_identical_teams() {
    let teams = vec![
        team("Time 1", &[("Ana", "Goleiro")]),
        team("Time 2", &[("Bia", "Goleiro")]),
    ];
    assert_eq!(format_roster(&teams), format_roster(&teams));
}

#[test]
fn export_is_a_noop_without_exactly_two_teams() {
    assert_eq!(format_roster(&[]), None);
    assert_eq!(format_roster(&[team("Time 1", &[])]), None);
    let three = vec![team("a", &[]), team("b", &[]), team("c", &[])];
    assert_eq!(format_roster(&three), None);
}

#[test]
fn sorted_session_exports_every_player_once() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Futsal).unwrap();
    s.choose_formation(FutsalFormation::Formation2).unwrap();
    for i in 0..s.slots.len() {
        s.update_slot(i, format!("P{i}")).unwrap();
    }
    assert_eq!(format_roster(&s.teams), None);

    sort_teams(&mut s).unwrap();
    let text = format_roster(&s.teams).unwrap();
    for i in 0..10 {
        assert_eq!(
            text.matches(&format!("P{i} - ")).count(),
            1,
            "P{i} should appear exactly once"
        );
    }
}
