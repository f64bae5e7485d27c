// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    assigned_ids, availability_for, create_dated_record, create_family, create_test_minister,
    create_test_slot, march, run, time,
};
use crate::{RunMode, RunOutcome};
use mesc_roster_domain::{
    AvailabilityRecord, FamilyGroup, MassSlot, MassTime, Minister, MinisterId, SlotCategory,
};
use std::collections::BTreeMap;
use time::Date;

fn everyone_at(
    ids: &[&str],
    masses: &[(Date, MassTime)],
) -> BTreeMap<MinisterId, AvailabilityRecord> {
    let entries: Vec<(&str, AvailabilityRecord)> = ids
        .iter()
        .map(|id| (*id, create_dated_record(masses)))
        .collect();
    availability_for(&entries)
}

fn roster(ids: &[&str]) -> Vec<Minister> {
    ids.iter().map(|id| create_test_minister(id)).collect()
}

#[test]
fn test_family_is_placed_as_a_block() {
    let ids: [&str; 5] = ["a", "b", "f1", "f2", "f3"];
    let mass: (Date, MassTime) = (march(1), time(10, 0));
    let families: Vec<FamilyGroup> = vec![create_family("fam", &["f1", "f2", "f3"], true)];
    let slots: Vec<MassSlot> = vec![create_test_slot(mass.0, mass.1, SlotCategory::Sunday, 4, 5)];

    let outcome: RunOutcome = run(
        &roster(&ids),
        &everyone_at(&ids, &[mass]),
        &families,
        &slots,
        RunMode::Final,
    )
    .unwrap();

    let assigned: Vec<String> = assigned_ids(&outcome, 0);
    assert_eq!(assigned.len(), 4);
    assert_eq!(&assigned[..3], &["f1", "f2", "f3"]);
    assert_eq!(assigned[3], "a");
}

#[test]
fn test_available_subset_of_family_is_placed() {
    let mass: (Date, MassTime) = (march(1), time(10, 0));
    let other: (Date, MassTime) = (march(1), time(8, 0));
    let mut availability: BTreeMap<MinisterId, AvailabilityRecord> =
        everyone_at(&["a", "f1", "f2"], &[mass]);
    availability.insert(MinisterId::new("f3"), create_dated_record(&[other]));
    let families: Vec<FamilyGroup> = vec![create_family("fam", &["f1", "f2", "f3"], true)];
    let slots: Vec<MassSlot> = vec![create_test_slot(mass.0, mass.1, SlotCategory::Sunday, 3, 3)];

    let outcome: RunOutcome = run(
        &roster(&["a", "f1", "f2", "f3"]),
        &availability,
        &families,
        &slots,
        RunMode::Final,
    )
    .unwrap();

    assert_eq!(assigned_ids(&outcome, 0), vec!["f1", "f2", "a"]);
}

#[test]
fn test_family_too_large_for_slot_is_not_split() {
    let ids: [&str; 4] = ["a", "f1", "f2", "f3"];
    let mass: (Date, MassTime) = (march(1), time(10, 0));
    let families: Vec<FamilyGroup> = vec![create_family("fam", &["f1", "f2", "f3"], true)];
    let slots: Vec<MassSlot> = vec![create_test_slot(mass.0, mass.1, SlotCategory::Sunday, 2, 2)];

    let outcome: RunOutcome = run(
        &roster(&ids),
        &everyone_at(&ids, &[mass]),
        &families,
        &slots,
        RunMode::Final,
    )
    .unwrap();

    // members of a family not yet placed are never picked one by one
    assert_eq!(assigned_ids(&outcome, 0), vec!["a"]);
    assert!(outcome.assignments[0].confidence < 0.5);
}

#[test]
fn test_placed_family_stays_together_later() {
    let ids: [&str; 4] = ["a", "b", "f1", "f2"];
    let first: (Date, MassTime) = (march(1), time(10, 0));
    let second: (Date, MassTime) = (march(8), time(10, 0));
    let families: Vec<FamilyGroup> = vec![create_family("fam", &["f1", "f2"], true)];
    let slots: Vec<MassSlot> = vec![
        create_test_slot(first.0, first.1, SlotCategory::Sunday, 2, 2),
        create_test_slot(second.0, second.1, SlotCategory::Sunday, 4, 4),
    ];

    let outcome: RunOutcome = run(
        &roster(&ids),
        &everyone_at(&ids, &[first, second]),
        &families,
        &slots,
        RunMode::Final,
    )
    .unwrap();

    assert_eq!(assigned_ids(&outcome, 0), vec!["f1", "f2"]);
    let second_slot: Vec<String> = assigned_ids(&outcome, 1);
    assert_eq!(second_slot.len(), 4);
    let f1: usize = second_slot.iter().position(|id| id == "f1").unwrap();
    let f2: usize = second_slot.iter().position(|id| id == "f2").unwrap();
    assert_eq!(f1.abs_diff(f2), 1);
}

#[test]
fn test_independent_family_members_are_individuals() {
    let ids: [&str; 3] = ["a", "f1", "f2"];
    let mass: (Date, MassTime) = (march(1), time(10, 0));
    let families: Vec<FamilyGroup> = vec![create_family("fam", &["f1", "f2"], false)];
    let slots: Vec<MassSlot> = vec![create_test_slot(mass.0, mass.1, SlotCategory::Sunday, 2, 2)];

    let outcome: RunOutcome = run(
        &roster(&ids),
        &everyone_at(&ids, &[mass]),
        &families,
        &slots,
        RunMode::Final,
    )
    .unwrap();

    assert_eq!(assigned_ids(&outcome, 0), vec!["a", "f1"]);
}

#[test]
fn test_couple_serves_together() {
    let mut husband: Minister = create_test_minister("h");
    husband.can_serve_as_couple = true;
    husband.spouse_id = Some(MinisterId::new("w"));
    husband.total_services = 50;
    let mut wife: Minister = create_test_minister("w");
    wife.can_serve_as_couple = true;
    wife.spouse_id = Some(MinisterId::new("h"));
    let ministers: Vec<Minister> = vec![create_test_minister("a"), husband, wife];
    let mass: (Date, MassTime) = (march(1), time(10, 0));
    let slots: Vec<MassSlot> = vec![create_test_slot(mass.0, mass.1, SlotCategory::Sunday, 3, 3)];

    let outcome: RunOutcome = run(
        &ministers,
        &everyone_at(&["a", "h", "w"], &[mass]),
        &[],
        &slots,
        RunMode::Final,
    )
    .unwrap();

    let assigned: Vec<String> = assigned_ids(&outcome, 0);
    assert_eq!(assigned, vec!["w", "h", "a"]);
}
