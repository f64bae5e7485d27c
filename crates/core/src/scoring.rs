// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate scores and slot confidence.
//!
//! ## Candidate score
//!
//! | Term            | Weight                                        |
//! |-----------------|-----------------------------------------------|
//! | Service balance | 0.4 × how far below the roster average        |
//! | Recency         | 0.3 per 30 days since last service, max 0.6   |
//! | Preferred time  | 0.2                                           |
//! | Substitution    | 0.1                                           |
//! | Name day        | 0.2 × name bonus                              |
//! | Same day        | -0.5                                          |
//!
//! The raw sum is divided by the best attainable score (1.5) and clamped
//! into [0, 1].
//!
//! ## Confidence
//!
//! 60% fill ratio, 25% average candidate score of the assigned ministers,
//! 15% inverse variance of their lifetime service counts. A slot below its
//! minimum headcount never reaches 0.5.

use crate::counters::MinisterCounters;
use mesc_roster_domain::{MassSlot, Minister};
use time::Date;

const BALANCE_WEIGHT: f64 = 0.4;
const RECENCY_WEIGHT: f64 = 0.3;
const RECENCY_PERIOD_DAYS: f64 = 30.0;
const RECENCY_MAX_PERIODS: f64 = 2.0;
const PREFERENCE_WEIGHT: f64 = 0.2;
const SUBSTITUTE_WEIGHT: f64 = 0.1;
const NAME_BONUS_WEIGHT: f64 = 0.2;
const SAME_DAY_PENALTY: f64 = 0.5;
const MAX_SCORE: f64 = 1.5;

const FILL_SHARE: f64 = 0.6;
const SCORE_SHARE: f64 = 0.25;
const BALANCE_SHARE: f64 = 0.15;
const UNDERFILLED_CEILING: f64 = 0.49;

/// Run-wide values shared by every score of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    /// First day of the target month; recency is measured against it.
    pub month_start: Date,
    /// Mean lifetime service count of the roster.
    pub average_services: f64,
}

/// One candidate as seen by the scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub minister: &'a Minister,
    pub counters: &'a MinisterCounters,
    pub can_substitute: bool,
    pub name_bonus: f64,
}

/// Scores a candidate for a slot, in [0, 1].
#[must_use]
pub fn candidate_score(input: &ScoreInput<'_>, slot: &MassSlot, context: &ScoringContext) -> f64 {
    let services: f64 = f64::from(input.minister.total_services);
    let deficit: f64 = (context.average_services - services).max(0.0);
    let balance: f64 = (deficit / context.average_services.max(1.0)).min(1.0) * BALANCE_WEIGHT;

    let recency: f64 = input
        .counters
        .effective_last_service(input.minister)
        .map_or(RECENCY_WEIGHT, |last| {
            let days: f64 = days_as_f64((context.month_start - last).whole_days()).max(0.0);
            (days / RECENCY_PERIOD_DAYS).min(RECENCY_MAX_PERIODS) * RECENCY_WEIGHT
        });

    let preference: f64 = if input.minister.prefers(slot.time) {
        PREFERENCE_WEIGHT
    } else {
        0.0
    };
    let substitute: f64 = if input.can_substitute {
        SUBSTITUTE_WEIGHT
    } else {
        0.0
    };
    let name_day: f64 = NAME_BONUS_WEIGHT * input.name_bonus;
    let same_day: f64 = if input.counters.serves_on(slot.date) {
        SAME_DAY_PENALTY
    } else {
        0.0
    };

    let raw: f64 = balance + recency + preference + substitute + name_day - same_day;
    (raw / MAX_SCORE).clamp(0.0, 1.0)
}

/// Computes the confidence of one slot's assignment, in [0, 1].
///
/// # Arguments
///
/// * `scores` - Candidate scores of the assigned ministers
/// * `lifetime_services` - Lifetime service counts of the assigned ministers
/// * `min_ministers` - The slot's minimum headcount
#[must_use]
pub fn slot_confidence(scores: &[f64], lifetime_services: &[u32], min_ministers: usize) -> f64 {
    let assigned: usize = scores.len();
    if assigned == 0 {
        return if min_ministers == 0 { 1.0 } else { 0.0 };
    }

    let fill: f64 = if min_ministers == 0 {
        1.0
    } else {
        (count_as_f64(assigned) / count_as_f64(min_ministers)).min(1.0)
    };
    let average_score: f64 = scores.iter().sum::<f64>() / count_as_f64(assigned);
    let spread: f64 = 1.0 / (1.0 + variance(lifetime_services));

    let fill_term: f64 = FILL_SHARE * fill;
    let score_term: f64 = SCORE_SHARE * average_score;
    let balance_term: f64 = BALANCE_SHARE * spread;
    let confidence: f64 = (fill_term + score_term + balance_term).clamp(0.0, 1.0);

    if assigned < min_ministers {
        confidence.min(UNDERFILLED_CEILING)
    } else {
        confidence
    }
}

/// Population variance.
fn variance(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count: f64 = count_as_f64(values.len());
    let mean: f64 = values.iter().copied().map(f64::from).sum::<f64>() / count;
    values
        .iter()
        .map(|value| {
            let delta: f64 = f64::from(*value) - mean;
            delta * delta
        })
        .sum::<f64>()
        / count
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

#[allow(clippy::cast_precision_loss)]
fn days_as_f64(days: i64) -> f64 {
    days as f64
}
