// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::date;
use crate::{AvailabilityRecord, MassSlot, MassTime, ServiceWeekday, SlotCategory};
use time::Month;

fn slot(day: u8, time: &str, category: SlotCategory) -> MassSlot {
    MassSlot::new(
        date(2025, Month::October, day),
        MassTime::parse(time).unwrap(),
        category,
        1,
        4,
    )
}

#[test]
fn test_sunday_requires_exact_time_or_whole_day() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record
        .dated
        .insert((date(2025, Month::October, 5), MassTime::parse("10:00").unwrap()));
    record.whole_days.insert(date(2025, Month::October, 12));

    assert!(record.is_available_for(&slot(5, "10:00", SlotCategory::Sunday)));
    assert!(!record.is_available_for(&slot(5, "08:00", SlotCategory::Sunday)));
    assert!(record.is_available_for(&slot(12, "08:00", SlotCategory::Sunday)));
    assert!(record.is_available_for(&slot(12, "19:00", SlotCategory::Sunday)));
}

#[test]
fn test_weekday_slot_matches_weekday_set() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.weekdays.insert(ServiceWeekday::Monday);

    // 2025-10-06 is a Monday, 2025-10-07 a Tuesday
    assert!(record.is_available_for(&slot(6, "06:30", SlotCategory::Weekday)));
    assert!(!record.is_available_for(&slot(7, "06:30", SlotCategory::Weekday)));
}

#[test]
fn test_special_events_use_flags_and_keys() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.special.first_friday = true;
    record
        .special
        .novena
        .insert((date(2025, Month::October, 20), MassTime::parse("19:30").unwrap()));

    assert!(record.is_available_for(&slot(3, "06:30", SlotCategory::FirstFriday)));
    assert!(!record.is_available_for(&slot(2, "19:30", SlotCategory::FirstThursday)));
    assert!(record.is_available_for(&slot(20, "19:30", SlotCategory::Novena)));
    assert!(!record.is_available_for(&slot(21, "19:30", SlotCategory::Novena)));
    assert!(!record.is_available_for(&slot(28, "19:30", SlotCategory::Feast)));
}

#[test]
fn test_merged_novena_sunday_accepts_sunday_answer() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record
        .dated
        .insert((date(2025, Month::October, 26), MassTime::parse("19:00").unwrap()));

    assert!(record.is_available_for(&slot(26, "19:00", SlotCategory::Novena)));
}

#[test]
fn test_empty_record_ignores_substitution_flag() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.can_substitute = true;
    assert!(record.is_empty());

    record.special.healing_liberation = true;
    assert!(!record.is_empty());
}

#[test]
fn test_clear_regular_masses_keeps_special_events() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.weekdays.insert(ServiceWeekday::Friday);
    record.whole_days.insert(date(2025, Month::October, 5));
    record.special.first_saturday = true;

    record.clear_regular_masses();

    assert!(record.weekdays.is_empty());
    assert!(record.whole_days.is_empty());
    assert!(record.special.first_saturday);
}
