// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot headcount configuration.
//!
//! Holds every time and headcount used by the slot generator together
//! with the fixed feast date and the length of the novena that precedes
//! it. The default reproduces the parish's standard month.
//!
//! ## Invariants
//!
//! - Every rule has `min_ministers <= max_ministers`
//! - The Sunday and feast rule sets are non-empty
//! - The feast date exists at least in leap years
//! - The novena lasts between 1 and 28 days and ends the day before the feast

use crate::calendar::{add_days, month_from_number};
use crate::error::DomainError;
use crate::types::MassTime;
use serde::{Deserialize, Serialize};
use time::Date;

/// Time and headcount of one kind of mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRule {
    /// Time of day.
    pub time: MassTime,
    /// Minimum number of ministers required.
    pub min_ministers: usize,
    /// Maximum number of ministers allowed.
    pub max_ministers: usize,
}

impl SlotRule {
    const fn at(hour: u8, minute: u8, min_ministers: usize, max_ministers: usize) -> Self {
        Self {
            time: MassTime::from_parts(hour, minute),
            min_ministers,
            max_ministers,
        }
    }

    fn validate(&self, name: &str) -> Result<(), DomainError> {
        if self.min_ministers > self.max_ministers {
            return Err(DomainError::InvalidHeadcount {
                rule: format!("{name} {}", self.time),
                min: self.min_ministers,
                max: self.max_ministers,
            });
        }
        Ok(())
    }
}

/// Configuration consumed by the slot generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Recurring Monday-Friday mass.
    pub weekday: SlotRule,
    /// The Sunday masses, in any order.
    pub sunday: Vec<SlotRule>,
    /// First-Thursday healing and liberation mass.
    pub first_thursday: SlotRule,
    /// Time used for the healing mass when the first Thursday is a civil holiday.
    pub first_thursday_holiday_time: MassTime,
    /// First-Friday mass.
    pub first_friday: SlotRule,
    /// First-Saturday mass.
    pub first_saturday: SlotRule,
    /// Novena mass on Monday to Friday.
    pub novena_weekday: SlotRule,
    /// Novena mass on Saturday.
    pub novena_saturday: SlotRule,
    /// Month of the fixed feast (1-12).
    pub feast_month: u8,
    /// Day of month of the fixed feast.
    pub feast_day: u8,
    /// The masses celebrated on the feast day.
    pub feast: Vec<SlotRule>,
    /// Number of days in the novena window.
    pub novena_days: u8,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            weekday: SlotRule::at(6, 30, 5, 8),
            sunday: vec![
                SlotRule::at(8, 0, 15, 20),
                SlotRule::at(10, 0, 20, 28),
                SlotRule::at(19, 0, 20, 28),
            ],
            first_thursday: SlotRule::at(19, 30, 20, 28),
            first_thursday_holiday_time: MassTime::from_parts(19, 0),
            first_friday: SlotRule::at(6, 30, 8, 12),
            first_saturday: SlotRule::at(6, 30, 8, 12),
            novena_weekday: SlotRule::at(19, 30, 18, 20),
            novena_saturday: SlotRule::at(19, 0, 18, 20),
            feast_month: 10,
            feast_day: 28,
            feast: vec![
                SlotRule::at(7, 0, 12, 12),
                SlotRule::at(10, 0, 12, 12),
                SlotRule::at(12, 0, 12, 12),
                SlotRule::at(15, 0, 12, 12),
                SlotRule::at(17, 0, 15, 15),
                SlotRule::at(19, 30, 20, 25),
            ],
            novena_days: 9,
        }
    }
}

impl SlotConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any rule has a minimum above its maximum
    /// - The Sunday or feast rule set is empty
    /// - The feast date does not exist
    /// - The novena length is outside 1..=28
    pub fn validate(&self) -> Result<(), DomainError> {
        self.weekday.validate("weekday")?;
        self.first_thursday.validate("first_thursday")?;
        self.first_friday.validate("first_friday")?;
        self.first_saturday.validate("first_saturday")?;
        self.novena_weekday.validate("novena_weekday")?;
        self.novena_saturday.validate("novena_saturday")?;
        if self.sunday.is_empty() {
            return Err(DomainError::EmptyRuleSet("sunday"));
        }
        if self.feast.is_empty() {
            return Err(DomainError::EmptyRuleSet("feast"));
        }
        for rule in &self.sunday {
            rule.validate("sunday")?;
        }
        for rule in &self.feast {
            rule.validate("feast")?;
        }

        // 2024 is a leap year, so 29 February is accepted
        let month: time::Month = month_from_number(self.feast_month)?;
        Date::from_calendar_date(2024, month, self.feast_day).map_err(|_| {
            DomainError::InvalidFeastDate {
                month: self.feast_month,
                day: self.feast_day,
            }
        })?;

        if self.novena_days == 0 || self.novena_days > 28 {
            return Err(DomainError::InvalidNovenaLength(self.novena_days));
        }
        Ok(())
    }

    /// Returns the feast date in a year, if it exists that year.
    #[must_use]
    pub fn feast_date(&self, year: i32) -> Option<Date> {
        let month: time::Month = month_from_number(self.feast_month).ok()?;
        Date::from_calendar_date(year, month, self.feast_day).ok()
    }

    /// Returns whether the date is the fixed feast day.
    #[must_use]
    pub fn is_feast_day(&self, date: Date) -> bool {
        self.feast_date(date.year()) == Some(date)
    }

    /// Returns the first and last day of the novena that precedes the
    /// feast of `year`.
    #[must_use]
    pub fn novena_window(&self, year: i32) -> Option<(Date, Date)> {
        let feast: Date = self.feast_date(year)?;
        let first: Date = add_days(feast, -i64::from(self.novena_days), "novena start").ok()?;
        let last: Date = add_days(feast, -1, "novena end").ok()?;
        Some((first, last))
    }

    /// Returns whether the date falls inside a novena window.
    ///
    /// A window may start in the calendar year before its feast.
    #[must_use]
    pub fn is_novena_day(&self, date: Date) -> bool {
        [date.year(), date.year() + 1].iter().any(|year| {
            self.novena_window(*year)
                .is_some_and(|(first, last)| first <= date && date <= last)
        })
    }

    /// Returns the latest Sunday rule, which absorbs the novena on the
    /// Sunday inside the window.
    #[must_use]
    pub fn sunday_evening(&self) -> Option<&SlotRule> {
        self.sunday.iter().max_by_key(|rule| rule.time)
    }

    /// Returns the latest feast-day mass time.
    #[must_use]
    pub fn feast_evening_time(&self) -> Option<MassTime> {
        self.feast.iter().map(|rule| rule.time).max()
    }
}
