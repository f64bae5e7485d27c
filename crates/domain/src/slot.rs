// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mass slots and their categories.
//!
//! A slot is one concrete service opportunity: a date, a time of day and
//! the headcount it needs. Its category records which calendar rule
//! produced it and decides which rule wins when two rules land on the
//! same date and time.

use crate::types::MassTime;
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// The calendar rule that produced a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotCategory {
    /// Recurring early-morning mass, Monday to Friday.
    Weekday,
    /// One of the Sunday masses.
    Sunday,
    /// Healing and liberation mass on the first Thursday of the month.
    FirstThursday,
    /// Sacred Heart mass on the first Friday of the month.
    FirstFriday,
    /// Immaculate Heart mass on the first Saturday of the month.
    FirstSaturday,
    /// Evening mass inside the novena window.
    Novena,
    /// One of the masses of the patronal feast day.
    Feast,
}

impl SlotCategory {
    /// Collision priority: when two rules produce a slot at the same
    /// date and time, the higher value is kept.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Feast => 6,
            Self::Novena => 5,
            Self::FirstThursday => 4,
            Self::FirstFriday | Self::FirstSaturday => 3,
            Self::Sunday => 2,
            Self::Weekday => 1,
        }
    }

    /// Returns whether this is the recurring weekday category.
    ///
    /// Recurring weekday slots are exempt from the same-day rule and
    /// from the monthly cap.
    #[must_use]
    pub const fn is_recurring_weekday(&self) -> bool {
        matches!(self, Self::Weekday)
    }

    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Sunday => "sunday",
            Self::FirstThursday => "first_thursday",
            Self::FirstFriday => "first_friday",
            Self::FirstSaturday => "first_saturday",
            Self::Novena => "novena",
            Self::Feast => "feast",
        }
    }
}

/// One concrete mass that needs ministers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MassSlot {
    /// Stable identifier, `"{date}_{time}"`.
    pub id: String,
    /// Calendar date.
    pub date: Date,
    /// Time of day.
    pub time: MassTime,
    /// The rule that produced the slot.
    pub category: SlotCategory,
    /// Minimum number of ministers required.
    pub min_ministers: usize,
    /// Maximum number of ministers allowed.
    pub max_ministers: usize,
}

impl MassSlot {
    /// Creates a new slot, deriving its identifier from date and time.
    #[must_use]
    pub fn new(
        date: Date,
        time: MassTime,
        category: SlotCategory,
        min_ministers: usize,
        max_ministers: usize,
    ) -> Self {
        Self {
            id: format!("{date}_{time}"),
            date,
            time,
            category,
            min_ministers,
            max_ministers,
        }
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
