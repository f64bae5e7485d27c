// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mesc_roster_domain::{MassSlot, Minister};
use std::collections::BTreeSet;
use time::Date;

/// Maximum number of non-weekday assignments per minister per month.
pub const MONTHLY_CAP: u32 = 4;

/// Run-scoped counters of one minister.
///
/// A fresh set is created for every run and returned with the outcome;
/// caller-owned ministers are never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinisterCounters {
    /// Assignments made in this run, all categories.
    pub monthly_assignment_count: u32,
    /// Assignments to slots other than the recurring weekday mass.
    pub non_weekday_count: u32,
    /// Date of the latest assignment in this run.
    pub last_assigned_date: Option<Date>,
    /// Every date with an assignment.
    pub assigned_dates: BTreeSet<Date>,
}

impl MinisterCounters {
    /// Records an assignment to the slot.
    pub fn record(&mut self, slot: &MassSlot) {
        self.monthly_assignment_count += 1;
        self.assigned_dates.insert(slot.date);
        if !slot.category.is_recurring_weekday() {
            self.non_weekday_count += 1;
        }
        self.last_assigned_date = Some(
            self.last_assigned_date
                .map_or(slot.date, |last| last.max(slot.date)),
        );
    }

    /// Returns whether the minister reached the monthly cap.
    #[must_use]
    pub const fn at_cap(&self) -> bool {
        self.non_weekday_count >= MONTHLY_CAP
    }

    /// Returns whether the minister serves anywhere on the date.
    ///
    /// Any earlier assignment on the date, weekday mass included, rules
    /// the minister out of the date's other masses.
    #[must_use]
    pub fn serves_on(&self, date: Date) -> bool {
        self.assigned_dates.contains(&date)
    }

    /// The run's last assignment, falling back to the lifetime last service.
    #[must_use]
    pub fn effective_last_service(&self, minister: &Minister) -> Option<Date> {
        self.last_assigned_date.or(minister.last_service)
    }
}
