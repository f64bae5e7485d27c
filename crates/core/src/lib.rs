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

mod counters;
mod engine;
mod error;
mod family;
mod name_bonus;
mod normalizer;
mod scoring;
mod slots;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use counters::{MONTHLY_CAP, MinisterCounters};
pub use engine::{
    AssignedMinister, BACKUP_COUNT, BackupCandidate, GeneratedAssignment, RunMode, RunOutcome,
    RunSummary, ScheduleInput, SlotShortage, generate_assignments,
};
pub use error::CoreError;
pub use family::{FamilyIndex, FamilyUnit};
pub use name_bonus::{NameBonusTable, name_match_score};
pub use normalizer::{
    NormalizeContext, QuestionAnswer, RawResponse, STRUCTURED_FORMAT_VERSION, encode_record,
    normalize_response,
};
pub use scoring::{ScoreInput, ScoringContext, candidate_score, slot_confidence};
pub use slots::{generate_slots, resolve_collisions};
