// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot generation for one month.
//!
//! Every day of the month is run through an ordered rule table:
//!
//! 1. Recurring weekday mass (Monday-Friday), except inside the novena
//! 2. The Sunday masses (the latest one becomes the novena mass on the
//!    Sunday inside the novena window)
//! 3. First-Thursday healing mass (moved to its holiday time on civil holidays)
//! 4. First-Friday mass
//! 5. First-Saturday mass
//! 6. Novena masses on Monday-Saturday inside the window
//! 7. The feast day, whose masses replace every other rule for that date
//!
//! ## Invariants
//!
//! - At most one slot survives per (date, time); the higher
//!   `SlotCategory::priority` wins
//! - Output is sorted by date, then time
//! - The feast date yields exactly its configured masses, whatever its weekday

use crate::error::CoreError;
use mesc_roster_domain::{
    MassSlot, MassTime, ServiceWeekday, SlotCategory, SlotConfig, SlotRule, is_civil_holiday,
    is_first_weekday_of_month, month_days,
};
use std::collections::BTreeMap;
use time::{Date, Month, Weekday};
use tracing::{debug, info};

/// Generates the mass slots of a month.
///
/// # Arguments
///
/// * `year` - The target year
/// * `month` - The target month
/// * `config` - Times and headcounts for every rule
///
/// # Returns
///
/// The month's slots sorted by date then time.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the year is out
/// of the supported range.
pub fn generate_slots(
    year: i32,
    month: Month,
    config: &SlotConfig,
) -> Result<Vec<MassSlot>, CoreError> {
    config.validate()?;

    let candidates: Vec<MassSlot> = month_days(year, month)?
        .into_iter()
        .flat_map(|day| slots_for_day(day, config))
        .collect();
    let slots: Vec<MassSlot> = resolve_collisions(candidates);

    info!(
        year,
        month = u8::from(month),
        slots = slots.len(),
        "Generated mass slots"
    );
    Ok(slots)
}

fn from_rule(day: Date, rule: &SlotRule, category: SlotCategory) -> MassSlot {
    MassSlot::new(
        day,
        rule.time,
        category,
        rule.min_ministers,
        rule.max_ministers,
    )
}

/// Applies the rule table to a single day.
fn slots_for_day(day: Date, config: &SlotConfig) -> Vec<MassSlot> {
    if config.is_feast_day(day) {
        return config
            .feast
            .iter()
            .map(|rule| from_rule(day, rule, SlotCategory::Feast))
            .collect();
    }

    let weekday: Weekday = day.weekday();
    let in_novena: bool = config.is_novena_day(day);
    let mut slots: Vec<MassSlot> = Vec::new();

    if ServiceWeekday::from_weekday(weekday).is_some() && !in_novena {
        slots.push(from_rule(day, &config.weekday, SlotCategory::Weekday));
    }

    if weekday == Weekday::Sunday {
        let evening: Option<MassTime> = config.sunday_evening().map(|rule| rule.time);
        for rule in &config.sunday {
            let category: SlotCategory = if in_novena && Some(rule.time) == evening {
                SlotCategory::Novena
            } else {
                SlotCategory::Sunday
            };
            slots.push(from_rule(day, rule, category));
        }
    }

    if is_first_weekday_of_month(day, Weekday::Thursday) {
        let mut rule: SlotRule = config.first_thursday;
        if is_civil_holiday(day) {
            rule.time = config.first_thursday_holiday_time;
        }
        slots.push(from_rule(day, &rule, SlotCategory::FirstThursday));
    }
    if is_first_weekday_of_month(day, Weekday::Friday) {
        slots.push(from_rule(day, &config.first_friday, SlotCategory::FirstFriday));
    }
    if is_first_weekday_of_month(day, Weekday::Saturday) {
        slots.push(from_rule(
            day,
            &config.first_saturday,
            SlotCategory::FirstSaturday,
        ));
    }

    if in_novena {
        match weekday {
            Weekday::Saturday => {
                slots.push(from_rule(day, &config.novena_saturday, SlotCategory::Novena));
            }
            // merged into the Sunday evening mass above
            Weekday::Sunday => {}
            _ => slots.push(from_rule(day, &config.novena_weekday, SlotCategory::Novena)),
        }
    }

    slots
}

/// Keeps one slot per (date, time), choosing the highest priority.
///
/// The result is sorted by date then time.
#[must_use]
pub fn resolve_collisions(slots: Vec<MassSlot>) -> Vec<MassSlot> {
    let mut kept: BTreeMap<(Date, MassTime), MassSlot> = BTreeMap::new();

    for slot in slots {
        let key: (Date, MassTime) = (slot.date, slot.time);
        match kept.get(&key) {
            Some(existing) if existing.category.priority() >= slot.category.priority() => {
                debug!(
                    slot_id = %slot.id,
                    kept = existing.category.as_str(),
                    dropped = slot.category.as_str(),
                    "Resolved slot collision"
                );
            }
            Some(existing) => {
                debug!(
                    slot_id = %slot.id,
                    kept = slot.category.as_str(),
                    dropped = existing.category.as_str(),
                    "Resolved slot collision"
                );
                kept.insert(key, slot);
            }
            None => {
                kept.insert(key, slot);
            }
        }
    }

    kept.into_values().collect()
}
