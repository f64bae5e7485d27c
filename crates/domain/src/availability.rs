// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical availability of one minister for one month.
//!
//! Survey answers arrive in several historical shapes; all of them are
//! reduced to an `AvailabilityRecord` before scheduling. The record is
//! the only thing the assignment engine consults to decide whether a
//! minister can serve a slot.
//!
//! ## Eligibility rules
//!
//! - Sunday slots: the exact (date, time) pair, or the whole date when
//!   the answer named a Sunday without a time
//! - Novena and feast slots: the event-specific (date, time) key, or the
//!   same match as a Sunday slot
//! - Recurring weekday slots: the slot's weekday is in the weekday set
//! - First Thursday / Friday / Saturday: the matching special-event flag

use crate::slot::{MassSlot, SlotCategory};
use crate::types::{MassTime, ServiceWeekday};
use std::collections::BTreeSet;
use time::Date;

/// Availability for the special monthly and seasonal events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialEvents {
    /// First-Thursday healing and liberation mass.
    pub healing_liberation: bool,
    /// First-Friday (Sacred Heart) mass.
    pub first_friday: bool,
    /// First-Saturday (Immaculate Heart) mass.
    pub first_saturday: bool,
    /// Novena masses, keyed by date and time.
    pub novena: BTreeSet<(Date, MassTime)>,
    /// Feast-day masses, keyed by date and time.
    pub feast: BTreeSet<(Date, MassTime)>,
}

impl SpecialEvents {
    /// Returns whether no special event is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.healing_liberation
            && !self.first_friday
            && !self.first_saturday
            && self.novena.is_empty()
            && self.feast.is_empty()
    }
}

/// The canonical availability of one minister.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityRecord {
    /// Specific masses the minister can serve.
    pub dated: BTreeSet<(Date, MassTime)>,
    /// Dates offered without a time; any mass of the date matches.
    pub whole_days: BTreeSet<Date>,
    /// Weekdays on which the minister serves the recurring morning mass.
    pub weekdays: BTreeSet<ServiceWeekday>,
    /// Special-event availability.
    pub special: SpecialEvents,
    /// Whether the minister accepts being called as a substitute.
    pub can_substitute: bool,
}

impl AvailabilityRecord {
    /// Returns whether the record offers no mass at all.
    ///
    /// Substitution willingness alone does not make a record usable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dated.is_empty()
            && self.whole_days.is_empty()
            && self.weekdays.is_empty()
            && self.special.is_empty()
    }

    /// Returns whether the minister can serve the slot.
    #[must_use]
    pub fn is_available_for(&self, slot: &MassSlot) -> bool {
        let key: (Date, MassTime) = (slot.date, slot.time);
        match slot.category {
            SlotCategory::Weekday => ServiceWeekday::from_weekday(slot.weekday())
                .is_some_and(|day| self.weekdays.contains(&day)),
            SlotCategory::Sunday => self.offers_mass(key),
            SlotCategory::Novena => self.special.novena.contains(&key) || self.offers_mass(key),
            SlotCategory::Feast => self.special.feast.contains(&key) || self.offers_mass(key),
            SlotCategory::FirstThursday => self.special.healing_liberation,
            SlotCategory::FirstFriday => self.special.first_friday,
            SlotCategory::FirstSaturday => self.special.first_saturday,
        }
    }

    fn offers_mass(&self, key: (Date, MassTime)) -> bool {
        self.dated.contains(&key) || self.whole_days.contains(&key.0)
    }

    /// Drops Sunday and weekday availability, keeping special events.
    ///
    /// Used when a minister answers that they are unavailable for the
    /// month as a whole.
    pub fn clear_regular_masses(&mut self) {
        self.dated.clear();
        self.whole_days.clear();
        self.weekdays.clear();
    }
}
