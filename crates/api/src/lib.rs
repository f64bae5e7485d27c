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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod in_memory;
mod providers;
mod response;
mod schedule;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use in_memory::{InMemorySource, StoredSurvey};
pub use providers::{
    FamilySource, NamedDaySource, Providers, RosterSource, SlotConfigSource, SourceError,
    StoredResponse, SurveySnapshot, SurveySource, SurveyStatus,
};
pub use response::{
    AssignedMinisterView, BackupView, CalendarResponse, FeastView, ScheduleResponse,
    ScheduledSlotView, SeasonView, ShortageView, SlotListResponse, SlotView, SummaryView,
    WorkloadView,
};
pub use schedule::{describe_year, generate_schedule, list_slots};
