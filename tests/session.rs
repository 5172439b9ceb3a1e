//! Integration tests for the position catalog and session/slot lifecycle.

use team_sorter_web::{
    positions_for, FutsalFormation, GameFormat, SortError, SortSession,
};

#[test]
fn futsal_formation1_table() {
    let positions = positions_for(Some(GameFormat::Futsal), Some(FutsalFormation::Formation1));
    let table: Vec<_> = positions
        .iter()
        .map(|p| (p.name, p.quantity_per_team))
        .collect();
    assert_eq!(
        table,
        vec![("Goleiro", 1), ("Ala", 2), ("Fixo", 1), ("Pivô", 1)]
    );
}

#[test]
fn futsal_formation2_table() {
    let positions = positions_for(Some(GameFormat::Futsal), Some(FutsalFormation::Formation2));
    let table: Vec<_> = positions
        .iter()
        .map(|p| (p.name, p.quantity_per_team))
        .collect();
    assert_eq!(table, vec![("Goleiro", 1), ("Defensor", 2), ("Atacante", 2)]);
}

#[test]
fn society_table_ignores_formation() {
    let with = positions_for(Some(GameFormat::Society), Some(FutsalFormation::Formation1));
    let without = positions_for(Some(GameFormat::Society), None);
    assert_eq!(with, without);
    let table: Vec<_> = without
        .iter()
        .map(|p| (p.name, p.quantity_per_team))
        .collect();
    assert_eq!(
        table,
        vec![
            ("Goleiro", 1),
            ("Zagueiro", 1),
            ("Lateral", 2),
            ("Meio-campista", 2),
            ("Atacante", 1),
        ]
    );
}

#[test]
fn pending_selection_yields_empty_table() {
    assert!(positions_for(None, None).is_empty());
    assert!(positions_for(None, Some(FutsalFormation::Formation2)).is_empty());
    // Futsal without a formation is "still choosing", not an error.
    assert!(positions_for(Some(GameFormat::Futsal), None).is_empty());
}

#[test]
fn society_builds_fourteen_slots_in_catalog_order() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Society).unwrap();
    assert_eq!(s.slots.len(), 14);
    assert_eq!(s.total_slots(), 14);
    let order: Vec<&str> = s.slots.iter().map(|slot| slot.position.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "Goleiro",
            "Goleiro",
            "Zagueiro",
            "Zagueiro",
            "Lateral",
            "Lateral",
            "Lateral",
            "Lateral",
            "Meio-campista",
            "Meio-campista",
            "Meio-campista",
            "Meio-campista",
            "Atacante",
            "Atacante",
        ]
    );
    assert!(s.slots.iter().all(|slot| slot.name.is_empty()));
}

#[test]
fn futsal_waits_for_formation_before_building_slots() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Futsal).unwrap();
    assert!(s.slots.is_empty());
    s.choose_formation(FutsalFormation::Formation1).unwrap();
    assert_eq!(s.slots.len(), 10);
}

#[test]
fn ensure_slots_never_wipes_typed_names() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Society).unwrap();
    s.update_slot(0, "Rafael").unwrap();
    s.ensure_slots();
    s.ensure_slots();
    assert_eq!(s.slots.len(), 14);
    assert_eq!(s.slots[0].name, "Rafael");
}

#[test]
fn choosing_twice_is_rejected() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Futsal).unwrap();
    assert_eq!(
        s.choose_format(GameFormat::Society),
        Err(SortError::InvalidState)
    );
    s.choose_formation(FutsalFormation::Formation2).unwrap();
    assert_eq!(
        s.choose_formation(FutsalFormation::Formation1),
        Err(SortError::InvalidState)
    );
}

#[test]
fn formation_requires_futsal() {
    let mut s = SortSession::new();
    assert_eq!(
        s.choose_formation(FutsalFormation::Formation1),
        Err(SortError::InvalidState)
    );
    s.choose_format(GameFormat::Society).unwrap();
    assert_eq!(
        s.choose_formation(FutsalFormation::Formation1),
        Err(SortError::InvalidState)
    );
}

#[test]
fn back_to_format_only_from_formation_screen() {
    let mut s = SortSession::new();
    assert_eq!(s.back_to_format(), Err(SortError::InvalidState));

    s.choose_format(GameFormat::Futsal).unwrap();
    s.back_to_format().unwrap();
    assert_eq!(s.game_format, None);

    s.choose_format(GameFormat::Society).unwrap();
    assert_eq!(s.back_to_format(), Err(SortError::InvalidState));
}

#[test]
fn update_slot_rejects_bad_index() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Society).unwrap();
    assert_eq!(s.update_slot(14, "x"), Err(SortError::SlotOutOfRange(14)));
    s.update_slot(13, "Léo").unwrap();
    assert_eq!(s.slots[13].name, "Léo");
}

#[test]
fn filled_count_ignores_whitespace_names() {
    let mut s = SortSession::new();
    s.choose_format(GameFormat::Futsal).unwrap();
    s.choose_formation(FutsalFormation::Formation2).unwrap();
    s.update_slot(0, "Ana").unwrap();
    s.update_slot(1, "   ").unwrap();
    assert_eq!(s.filled_count(), 1);
}

#[test]
fn reset_rearms_slot_building() {
    let mut s = SortSession::new();
    let id = s.id;
    s.choose_format(GameFormat::Futsal).unwrap();
    s.choose_formation(FutsalFormation::Formation1).unwrap();
    s.update_slot(0, "Bruno").unwrap();

    s.reset();
    assert_eq!(s.id, id);
    assert_eq!(s.game_format, None);
    assert_eq!(s.futsal_formation, None);
    assert!(s.slots.is_empty());
    assert!(s.teams.is_empty());

    // A fresh choice after reset rebuilds cleanly.
    s.choose_format(GameFormat::Society).unwrap();
    assert_eq!(s.slots.len(), 14);
    assert!(s.slots.iter().all(|slot| slot.name.is_empty()));
}
