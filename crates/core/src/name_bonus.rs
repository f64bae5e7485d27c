// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Name-day bonus.
//!
//! A minister whose name matches the saint celebrated on a mass date gets
//! a small bonus for that date. The bonus only breaks ties; it never
//! outweighs fairness.
//!
//! ## Scoring
//!
//! Names are lowercased, accent-folded and split into words; words shorter
//! than three letters and honorifics ("são", "santa", ...) are ignored.
//! For every pair of words:
//!
//! - identical words add 1.0
//! - one word containing the other adds 0.5
//! - otherwise, an edit-distance similarity above 0.7 adds 0.3
//!
//! The total is divided by the larger word count, multiplied by the
//! celebration rank weight and capped at 1.0.

use mesc_roster_domain::{Minister, MinisterId, NamedDay};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;
use tracing::debug;

const HONORIFICS: [&str; 10] = [
    "sao", "santo", "santa", "saint", "beato", "beata", "dos", "das", "del", "nossa",
];

/// Precomputed bonuses keyed by (minister, date).
///
/// Only positive bonuses are stored; a missing entry means no bonus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameBonusTable {
    bonuses: BTreeMap<(MinisterId, Date), f64>,
}

impl NameBonusTable {
    /// Computes the bonus of every minister for every date.
    ///
    /// # Arguments
    ///
    /// * `ministers` - The roster (vacant placeholders are skipped)
    /// * `dates` - The distinct mass dates of the run
    /// * `named_days` - Saints and mysteries keyed by month and day
    #[must_use]
    pub fn compute(ministers: &[Minister], dates: &BTreeSet<Date>, named_days: &[NamedDay]) -> Self {
        let mut bonuses: BTreeMap<(MinisterId, Date), f64> = BTreeMap::new();

        for date in dates {
            let celebrated: Vec<&NamedDay> =
                named_days.iter().filter(|day| day.falls_on(*date)).collect();
            if celebrated.is_empty() {
                continue;
            }
            for minister in ministers {
                let Some(id) = &minister.id else {
                    continue;
                };
                let best: f64 = celebrated
                    .iter()
                    .map(|day| name_match_score(&minister.name, day))
                    .fold(0.0, f64::max);
                if best > 0.0 {
                    bonuses.insert((id.clone(), *date), best);
                }
            }
        }

        debug!(entries = bonuses.len(), "Computed name-day bonuses");
        Self { bonuses }
    }

    /// Returns the bonus for a minister on a date, or 0.0.
    #[must_use]
    pub fn bonus(&self, id: &MinisterId, date: Date) -> f64 {
        self.bonuses
            .get(&(id.clone(), date))
            .copied()
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.bonuses.len()
    }
}

/// Scores how well a person's name matches a named day, in [0, 1].
#[must_use]
pub fn name_match_score(name: &str, day: &NamedDay) -> f64 {
    let person: Vec<String> = name_words(name);
    let saint: Vec<String> = name_words(&day.name);
    if person.is_empty() || saint.is_empty() {
        return 0.0;
    }

    let mut total: f64 = 0.0;
    for mine in &person {
        for theirs in &saint {
            if mine == theirs {
                total += 1.0;
            } else if mine.contains(theirs.as_str()) || theirs.contains(mine.as_str()) {
                total += 0.5;
            } else if similarity(mine, theirs) > 0.7 {
                total += 0.3;
            }
        }
    }

    let words: f64 = count_as_f64(person.len().max(saint.len()));
    (total / words * day.rank.weight()).min(1.0)
}

#[allow(clippy::cast_precision_loss)]
fn count_as_f64(count: usize) -> f64 {
    count as f64
}

fn name_words(name: &str) -> Vec<String> {
    let folded: String = name.chars().flat_map(char::to_lowercase).map(fold_accent).collect();
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= 3)
        .filter(|word| !HONORIFICS.iter().any(|honorific| honorific == word))
        .map(str::to_string)
        .collect()
}

const fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Normalized edit-distance similarity in [0, 1].
fn similarity(a: &str, b: &str) -> f64 {
    let longest: usize = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - count_as_f64(levenshtein(a, b)) / count_as_f64(longest)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current: Vec<usize> = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitution: usize = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b_chars.len()]
}
