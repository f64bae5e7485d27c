// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, RunMode, RunOutcome, ScheduleInput, generate_assignments};
use mesc_roster_domain::{
    AvailabilityRecord, FamilyGroup, MassSlot, MassTime, Minister, MinisterId, ServiceWeekday,
    SlotCategory,
};
use std::collections::BTreeMap;
use time::{Date, Month};

pub const YEAR: i32 = 2026;
pub const MONTH: Month = Month::March;

pub fn march(day: u8) -> Date {
    Date::from_calendar_date(YEAR, MONTH, day).unwrap()
}

pub fn time(hour: u8, minute: u8) -> MassTime {
    MassTime::new(hour, minute).unwrap()
}

pub fn create_test_slot(
    date: Date,
    at: MassTime,
    category: SlotCategory,
    min: usize,
    max: usize,
) -> MassSlot {
    MassSlot::new(date, at, category, min, max)
}

pub fn create_test_minister(id: &str) -> Minister {
    Minister::new(id, &format!("Minister {id}"))
}

/// A record offering the given masses.
pub fn create_dated_record(masses: &[(Date, MassTime)]) -> AvailabilityRecord {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.dated.extend(masses.iter().copied());
    record
}

/// A record offering every mass of the month.
pub fn create_open_record(dates: &[Date]) -> AvailabilityRecord {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.whole_days.extend(dates.iter().copied());
    record.weekdays.extend(ServiceWeekday::ALL);
    record.special.healing_liberation = true;
    record.special.first_friday = true;
    record.special.first_saturday = true;
    record
}

pub fn availability_for(
    entries: &[(&str, AvailabilityRecord)],
) -> BTreeMap<MinisterId, AvailabilityRecord> {
    entries
        .iter()
        .map(|(id, record)| (MinisterId::new(id), record.clone()))
        .collect()
}

pub fn create_family(family_id: &str, members: &[&str], serve_together: bool) -> FamilyGroup {
    FamilyGroup {
        family_id: family_id.to_string(),
        members: members.iter().map(|id| MinisterId::new(id)).collect(),
        serve_together,
    }
}

pub fn run(
    ministers: &[Minister],
    availability: &BTreeMap<MinisterId, AvailabilityRecord>,
    families: &[FamilyGroup],
    slots: &[MassSlot],
    mode: RunMode,
) -> Result<RunOutcome, CoreError> {
    generate_assignments(&ScheduleInput {
        year: YEAR,
        month: MONTH,
        ministers,
        availability,
        families,
        slots,
        named_days: &[],
        mode,
    })
}

pub fn assigned_ids(outcome: &RunOutcome, slot_index: usize) -> Vec<String> {
    outcome.assignments[slot_index]
        .assigned
        .iter()
        .map(|assigned| assigned.minister_id.value().to_string())
        .collect()
}
