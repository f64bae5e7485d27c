// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment engine.
//!
//! Slots are processed one at a time in date-then-time order. Every
//! selection updates the run-scoped counters, so later slots see the
//! assignments of earlier ones; the processing order is part of the
//! contract.
//!
//! Per slot:
//!
//! 1. Eligibility: placeholders, ministers already serving any mass that
//!    day and ministers at the monthly cap are excluded (filling a
//!    recurring weekday mass is exempt from the last two), then the
//!    availability record decides
//! 2. Ranking by current-month count, last service, lifetime count,
//!    name-day bonus and id
//! 3. Family-first: each "serve together" unit not yet placed this run is
//!    placed as a block when its eligible members fit under the maximum
//! 4. Individual fill up to the minimum, skipping members of units not yet
//!    placed; members of placed units join only as a block
//! 5. Backups: the two best-scored remaining candidates
//! 6. Confidence
//!
//! ## Invariants
//!
//! - A minister appears at most once per slot
//! - Outside the weekday mass, nobody serves twice on one date
//! - Nobody exceeds `MONTHLY_CAP` non-weekday assignments
//! - Eligible members of a "serve together" unit are all placed or none

use crate::counters::MinisterCounters;
use crate::error::CoreError;
use crate::family::{FamilyIndex, FamilyUnit};
use crate::name_bonus::NameBonusTable;
use crate::scoring::{ScoreInput, ScoringContext, candidate_score, slot_confidence};
use mesc_roster_domain::{
    AvailabilityRecord, FamilyGroup, MassSlot, Minister, MinisterId, NamedDay,
    first_day_of_month,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, Month};
use tracing::{debug, info, warn};

/// Number of backup candidates kept per slot.
pub const BACKUP_COUNT: usize = 2;

/// Whether a run produces a final schedule or a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Requires usable availability data.
    Final,
    /// Tolerates missing data; an empty availability set means everyone
    /// is available.
    Preview,
}

impl RunMode {
    #[must_use]
    pub const fn is_preview(&self) -> bool {
        matches!(self, Self::Preview)
    }
}

/// Everything one run consumes.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleInput<'a> {
    pub year: i32,
    pub month: Month,
    pub ministers: &'a [Minister],
    pub availability: &'a BTreeMap<MinisterId, AvailabilityRecord>,
    pub families: &'a [FamilyGroup],
    pub slots: &'a [MassSlot],
    pub named_days: &'a [NamedDay],
    pub mode: RunMode,
}

/// A minister placed on a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedMinister {
    pub minister_id: MinisterId,
    pub name: String,
    /// Liturgical position, starting at 1.
    pub position: usize,
}

/// A candidate suggested as a substitute.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupCandidate {
    pub minister_id: MinisterId,
    pub name: String,
    pub score: f64,
}

/// The result for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAssignment {
    pub slot: MassSlot,
    pub assigned: Vec<AssignedMinister>,
    pub backups: Vec<BackupCandidate>,
    pub confidence: f64,
}

impl GeneratedAssignment {
    /// Returns whether the slot reached its minimum headcount.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned.len() >= self.slot.min_ministers
    }
}

/// A slot left below its minimum headcount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotShortage {
    pub slot_id: String,
    pub required: usize,
    pub assigned: usize,
}

/// Aggregate figures of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub total_slots: usize,
    pub complete_slots: usize,
    pub incomplete_slots: usize,
    pub average_confidence: f64,
    pub shortages: Vec<SlotShortage>,
    /// Assignments per minister, only for ministers who serve.
    pub workload: BTreeMap<MinisterId, u32>,
}

impl RunSummary {
    /// Summarizes a run's assignments.
    #[must_use]
    pub fn from_assignments(
        assignments: &[GeneratedAssignment],
        counters: &BTreeMap<MinisterId, MinisterCounters>,
    ) -> Self {
        let shortages: Vec<SlotShortage> = assignments
            .iter()
            .filter(|assignment| !assignment.is_complete())
            .map(|assignment| SlotShortage {
                slot_id: assignment.slot.id.clone(),
                required: assignment.slot.min_ministers,
                assigned: assignment.assigned.len(),
            })
            .collect();
        let total_slots: usize = assignments.len();
        let confidence_sum: f64 = assignments.iter().map(|a| a.confidence).sum();
        let average_confidence: f64 = if total_slots == 0 {
            0.0
        } else {
            confidence_sum / count_as_f64(total_slots)
        };
        let workload: BTreeMap<MinisterId, u32> = counters
            .iter()
            .filter(|(_, counter)| counter.monthly_assignment_count > 0)
            .map(|(id, counter)| (id.clone(), counter.monthly_assignment_count))
            .collect();

        Self {
            total_slots,
            complete_slots: total_slots - shortages.len(),
            incomplete_slots: shortages.len(),
            average_confidence,
            shortages,
            workload,
        }
    }
}

/// The output of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub assignments: Vec<GeneratedAssignment>,
    /// Final run-scoped counters of every candidate.
    pub counters: BTreeMap<MinisterId, MinisterCounters>,
    pub summary: RunSummary,
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// A schedulable minister for the run.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    id: &'a MinisterId,
    minister: &'a Minister,
    record: Option<&'a AvailabilityRecord>,
}

/// Generates the assignments of one month.
///
/// # Arguments
///
/// * `input` - Roster, availability, families, slots and named days
///
/// # Returns
///
/// One `GeneratedAssignment` per slot in slot order, the final counters
/// and a summary. Under-filled slots are part of a successful outcome.
///
/// # Errors
///
/// Returns an error if:
/// - No schedulable minister exists
/// - The slot list is empty
/// - In final mode, no minister has a usable availability record
pub fn generate_assignments(input: &ScheduleInput<'_>) -> Result<RunOutcome, CoreError> {
    let candidates: Vec<Candidate<'_>> = schedulable_roster(input);
    if candidates.is_empty() {
        return Err(CoreError::EmptyRoster);
    }
    if input.slots.is_empty() {
        return Err(CoreError::EmptySlotList);
    }

    let usable_records: usize = candidates
        .iter()
        .filter(|candidate| candidate.record.is_some_and(|record| !record.is_empty()))
        .count();
    let assume_available: bool = match input.mode {
        RunMode::Final if usable_records == 0 => {
            return Err(CoreError::NoUsableAvailability {
                year: input.year,
                month: u8::from(input.month),
            });
        }
        RunMode::Final => false,
        RunMode::Preview => usable_records == 0,
    };

    info!(
        year = input.year,
        month = u8::from(input.month),
        ministers = candidates.len(),
        slots = input.slots.len(),
        usable_records,
        preview = input.mode.is_preview(),
        "Starting assignment run"
    );
    if assume_available {
        warn!("No availability data; treating every minister as available");
    }

    let roster: Vec<Minister> = candidates.iter().map(|c| c.minister.clone()).collect();
    let families: FamilyIndex = FamilyIndex::build(&roster, input.families);
    let dates: BTreeSet<Date> = input.slots.iter().map(|slot| slot.date).collect();
    let bonuses: NameBonusTable = NameBonusTable::compute(&roster, &dates, input.named_days);
    let total_services: f64 = candidates
        .iter()
        .map(|c| f64::from(c.minister.total_services))
        .sum();
    let context: ScoringContext = ScoringContext {
        month_start: first_day_of_month(input.year, input.month)?,
        average_services: total_services / count_as_f64(candidates.len()),
    };

    let mut run: Run<'_> = Run {
        candidates: &candidates,
        families: &families,
        bonuses: &bonuses,
        context,
        assume_available,
        counters: candidates
            .iter()
            .map(|c| (c.id.clone(), MinisterCounters::default()))
            .collect(),
        empty: MinisterCounters::default(),
        placed_units: BTreeSet::new(),
    };

    let mut ordered: Vec<&MassSlot> = input.slots.iter().collect();
    ordered.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    let assignments: Vec<GeneratedAssignment> =
        ordered.into_iter().map(|slot| run.assign_slot(slot)).collect();

    let summary: RunSummary = RunSummary::from_assignments(&assignments, &run.counters);
    info!(
        total_slots = summary.total_slots,
        complete_slots = summary.complete_slots,
        incomplete_slots = summary.incomplete_slots,
        average_confidence = summary.average_confidence,
        serving_ministers = summary.workload.len(),
        "Assignment run finished"
    );

    Ok(RunOutcome {
        assignments,
        counters: run.counters,
        summary,
    })
}

/// Non-vacant schedulable ministers, first occurrence of each id.
fn schedulable_roster<'a>(input: &ScheduleInput<'a>) -> Vec<Candidate<'a>> {
    let mut seen: BTreeSet<&MinisterId> = BTreeSet::new();
    let mut candidates: Vec<Candidate<'a>> = Vec::new();
    for minister in input.ministers {
        let Some(id) = &minister.id else {
            continue;
        };
        if !minister.role.is_schedulable() || !seen.insert(id) {
            continue;
        }
        candidates.push(Candidate {
            id,
            minister,
            record: input.availability.get(id),
        });
    }
    candidates
}

struct Run<'a> {
    candidates: &'a [Candidate<'a>],
    families: &'a FamilyIndex,
    bonuses: &'a NameBonusTable,
    context: ScoringContext,
    assume_available: bool,
    counters: BTreeMap<MinisterId, MinisterCounters>,
    empty: MinisterCounters,
    placed_units: BTreeSet<usize>,
}

impl<'a> Run<'a> {
    fn counters_of(&self, id: &MinisterId) -> &MinisterCounters {
        self.counters.get(id).unwrap_or(&self.empty)
    }

    fn is_eligible(&self, candidate: &Candidate<'_>, slot: &MassSlot) -> bool {
        let counters: &MinisterCounters = self.counters_of(candidate.id);
        let blocked: bool = !slot.category.is_recurring_weekday()
            && (counters.serves_on(slot.date) || counters.at_cap());
        if blocked {
            return false;
        }
        self.assume_available
            || candidate
                .record
                .is_some_and(|record| record.is_available_for(slot))
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>, date: Date) -> Ordering {
        let counters_a: &MinisterCounters = self.counters_of(a.id);
        let counters_b: &MinisterCounters = self.counters_of(b.id);
        counters_a
            .monthly_assignment_count
            .cmp(&counters_b.monthly_assignment_count)
            .then_with(|| {
                counters_a
                    .effective_last_service(a.minister)
                    .cmp(&counters_b.effective_last_service(b.minister))
            })
            .then_with(|| a.minister.total_services.cmp(&b.minister.total_services))
            .then_with(|| {
                self.bonuses
                    .bonus(b.id, date)
                    .total_cmp(&self.bonuses.bonus(a.id, date))
            })
            .then_with(|| a.id.cmp(b.id))
    }

    fn score(&self, candidate: &Candidate<'_>, slot: &MassSlot) -> f64 {
        let input: ScoreInput<'_> = ScoreInput {
            minister: candidate.minister,
            counters: self.counters_of(candidate.id),
            can_substitute: candidate.record.is_some_and(|record| record.can_substitute),
            name_bonus: self.bonuses.bonus(candidate.id, slot.date),
        };
        candidate_score(&input, slot, &self.context)
    }

    fn together_unit(&self, id: &MinisterId) -> Option<(usize, &'a FamilyUnit)> {
        self.families
            .unit_of(id)
            .filter(|(_, unit)| unit.serve_together)
    }

    fn assign_slot(&mut self, slot: &MassSlot) -> GeneratedAssignment {
        let mut ranked: Vec<Candidate<'a>> = self
            .candidates
            .iter()
            .filter(|candidate| self.is_eligible(candidate, slot))
            .copied()
            .collect();
        ranked.sort_by(|a, b| self.compare(a, b, slot.date));

        let mut chosen: Vec<Candidate<'a>> = Vec::new();
        self.place_families(slot, &ranked, &mut chosen);
        self.fill_individuals(slot, &ranked, &mut chosen);

        let chosen_ids: BTreeSet<&MinisterId> = chosen.iter().map(|c| c.id).collect();
        let mut backups: Vec<BackupCandidate> = ranked
            .iter()
            .filter(|candidate| !chosen_ids.contains(candidate.id))
            .map(|candidate| BackupCandidate {
                minister_id: candidate.id.clone(),
                name: candidate.minister.name.clone(),
                score: self.score(candidate, slot),
            })
            .collect();
        backups.sort_by(|a, b| b.score.total_cmp(&a.score));
        backups.truncate(BACKUP_COUNT);

        let scores: Vec<f64> = chosen.iter().map(|c| self.score(c, slot)).collect();
        let lifetime: Vec<u32> = chosen.iter().map(|c| c.minister.total_services).collect();
        let confidence: f64 = slot_confidence(&scores, &lifetime, slot.min_ministers);

        for candidate in &chosen {
            self.counters
                .entry(candidate.id.clone())
                .or_default()
                .record(slot);
        }

        let assigned: Vec<AssignedMinister> = chosen
            .iter()
            .enumerate()
            .map(|(index, candidate)| AssignedMinister {
                minister_id: candidate.id.clone(),
                name: candidate.minister.name.clone(),
                position: index + 1,
            })
            .collect();

        if assigned.len() < slot.min_ministers {
            warn!(
                slot_id = %slot.id,
                required = slot.min_ministers,
                assigned = assigned.len(),
                eligible = ranked.len(),
                "Slot under-filled"
            );
        } else {
            debug!(
                slot_id = %slot.id,
                category = slot.category.as_str(),
                assigned = assigned.len(),
                eligible = ranked.len(),
                confidence,
                "Slot filled"
            );
        }

        GeneratedAssignment {
            slot: slot.clone(),
            assigned,
            backups,
            confidence,
        }
    }

    /// Places unplaced "serve together" units present in the pool, best
    /// ranked unit first.
    fn place_families(
        &mut self,
        slot: &MassSlot,
        ranked: &[Candidate<'a>],
        chosen: &mut Vec<Candidate<'a>>,
    ) {
        let mut blocks: Vec<(usize, Vec<Candidate<'a>>)> = Vec::new();
        for candidate in ranked {
            let Some((unit_index, _)) = self.together_unit(candidate.id) else {
                continue;
            };
            if self.placed_units.contains(&unit_index) {
                continue;
            }
            match blocks.iter_mut().find(|(index, _)| *index == unit_index) {
                Some((_, members)) => members.push(*candidate),
                None => blocks.push((unit_index, vec![*candidate])),
            }
        }

        for (unit_index, members) in blocks {
            if chosen.len() + members.len() > slot.max_ministers {
                debug!(
                    slot_id = %slot.id,
                    members = members.len(),
                    "Family does not fit; left for a later slot"
                );
                continue;
            }
            chosen.extend(members);
            self.placed_units.insert(unit_index);
        }
    }

    /// Fills the slot up to its minimum from the ranked pool.
    fn fill_individuals(
        &self,
        slot: &MassSlot,
        ranked: &[Candidate<'a>],
        chosen: &mut Vec<Candidate<'a>>,
    ) {
        for candidate in ranked {
            if chosen.len() >= slot.min_ministers {
                break;
            }
            if chosen.iter().any(|c| c.id == candidate.id) {
                continue;
            }
            match self.together_unit(candidate.id) {
                Some((unit_index, _)) if !self.placed_units.contains(&unit_index) => {}
                Some((_, unit)) => {
                    let block: Vec<Candidate<'a>> = ranked
                        .iter()
                        .filter(|c| unit.members.contains(c.id))
                        .filter(|c| !chosen.iter().any(|placed| placed.id == c.id))
                        .copied()
                        .collect();
                    if chosen.len() + block.len() <= slot.max_ministers {
                        chosen.extend(block);
                    }
                }
                None => {
                    if chosen.len() < slot.max_ministers {
                        chosen.push(*candidate);
                    }
                }
            }
        }
    }
}
