// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.

use mesc_roster::{
    AssignedMinister, BackupCandidate, GeneratedAssignment, MinisterCounters, RunSummary,
};
use mesc_roster_domain::{
    LiturgicalColor, LiturgicalCycle, LiturgicalSeason, MassSlot, MinisterId, SlotCategory,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// A minister placed on a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedMinisterView {
    /// Liturgical position, starting at 1.
    pub position: usize,
    pub minister_id: MinisterId,
    pub name: String,
}

impl From<&AssignedMinister> for AssignedMinisterView {
    fn from(assigned: &AssignedMinister) -> Self {
        Self {
            position: assigned.position,
            minister_id: assigned.minister_id.clone(),
            name: assigned.name.clone(),
        }
    }
}

/// A suggested substitute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupView {
    pub minister_id: MinisterId,
    pub name: String,
    pub score: f64,
}

impl From<&BackupCandidate> for BackupView {
    fn from(backup: &BackupCandidate) -> Self {
        Self {
            minister_id: backup.minister_id.clone(),
            name: backup.name.clone(),
            score: backup.score,
        }
    }
}

/// A mass slot without assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub slot_id: String,
    pub date: Date,
    /// Time of day as `HH:MM`.
    pub time: String,
    /// Lowercase English weekday name.
    pub weekday: String,
    pub category: SlotCategory,
    pub season: LiturgicalSeason,
    pub color: LiturgicalColor,
    pub min_ministers: usize,
    pub max_ministers: usize,
}

impl SlotView {
    /// Builds the view of a slot within its season.
    #[must_use]
    pub fn new(slot: &MassSlot, season: LiturgicalSeason) -> Self {
        Self {
            slot_id: slot.id.clone(),
            date: slot.date,
            time: slot.time.to_string(),
            weekday: slot.weekday().to_string().to_lowercase(),
            category: slot.category,
            season,
            color: season.color(),
            min_ministers: slot.min_ministers,
            max_ministers: slot.max_ministers,
        }
    }
}

/// One slot of the generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSlotView {
    #[serde(flatten)]
    pub slot: SlotView,
    pub assigned: Vec<AssignedMinisterView>,
    pub backups: Vec<BackupView>,
    /// Quality of the assignment, in [0, 1].
    pub confidence: f64,
    /// Whether the minimum headcount was reached.
    pub complete: bool,
}

impl ScheduledSlotView {
    #[must_use]
    pub fn new(assignment: &GeneratedAssignment, season: LiturgicalSeason) -> Self {
        Self {
            slot: SlotView::new(&assignment.slot, season),
            assigned: assignment.assigned.iter().map(Into::into).collect(),
            backups: assignment.backups.iter().map(Into::into).collect(),
            confidence: assignment.confidence,
            complete: assignment.is_complete(),
        }
    }
}

/// A slot left below its minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageView {
    pub slot_id: String,
    pub required: usize,
    pub assigned: usize,
    pub missing: usize,
}

/// Assignments of one minister in the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadView {
    pub minister_id: MinisterId,
    pub monthly_assignment_count: u32,
    pub non_weekday_count: u32,
    pub last_assigned_date: Option<Date>,
}

impl WorkloadView {
    #[must_use]
    pub fn new(minister_id: &MinisterId, counters: &MinisterCounters) -> Self {
        Self {
            minister_id: minister_id.clone(),
            monthly_assignment_count: counters.monthly_assignment_count,
            non_weekday_count: counters.non_weekday_count,
            last_assigned_date: counters.last_assigned_date,
        }
    }
}

/// Aggregate figures of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub total_slots: usize,
    pub complete_slots: usize,
    pub incomplete_slots: usize,
    pub average_confidence: f64,
    pub shortages: Vec<ShortageView>,
}

impl From<&RunSummary> for SummaryView {
    fn from(summary: &RunSummary) -> Self {
        Self {
            total_slots: summary.total_slots,
            complete_slots: summary.complete_slots,
            incomplete_slots: summary.incomplete_slots,
            average_confidence: summary.average_confidence,
            shortages: summary
                .shortages
                .iter()
                .map(|shortage| ShortageView {
                    slot_id: shortage.slot_id.clone(),
                    required: shortage.required,
                    assigned: shortage.assigned,
                    missing: shortage.required.saturating_sub(shortage.assigned),
                })
                .collect(),
        }
    }
}

/// API response for a generated monthly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub year: i32,
    pub month: u8,
    pub preview: bool,
    pub cycle: LiturgicalCycle,
    pub slots: Vec<ScheduledSlotView>,
    pub summary: SummaryView,
    /// Run-scoped counters of every minister who served.
    pub workload: Vec<WorkloadView>,
}

/// API response listing the slots of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotListResponse {
    pub year: i32,
    pub month: u8,
    pub slots: Vec<SlotView>,
}

/// A movable feast and its date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeastView {
    pub name: String,
    pub date: Date,
}

/// A season and its date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonView {
    pub season: LiturgicalSeason,
    pub color: LiturgicalColor,
    pub start: Date,
    pub end: Date,
}

/// API response describing a liturgical year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub cycle: LiturgicalCycle,
    pub easter: Date,
    pub movable_feasts: Vec<FeastView>,
    pub seasons: Vec<SeasonView>,
    /// The parish feast of this year, if it exists.
    pub feast_date: Option<Date>,
    /// First and last day of the novena before the feast.
    pub novena: Option<(Date, Date)>,
}
