// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod calendar;
mod error;
mod minister;
mod slot;
mod slot_config;
mod types;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityRecord, SpecialEvents};
pub use calendar::{
    LiturgicalColor, LiturgicalCycle, LiturgicalSeason, MAX_YEAR, MIN_YEAR, MovableFeast,
    MovableFeasts, SeasonSpan, advent_start, easter_sunday, first_day_of_month, is_civil_holiday,
    is_first_weekday_of_month, liturgical_season, month_days, month_from_number,
    nth_sunday_of_month, season_spans, validate_year,
};
pub use slot::{MassSlot, SlotCategory};
pub use slot_config::{SlotConfig, SlotRule};

// Re-export public types
pub use error::DomainError;
pub use minister::{FamilyGroup, Minister, NamedDay};
pub use types::{CelebrationRank, MassTime, MinisterId, MinisterRole, ServiceWeekday};
