// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Family units used by the assignment engine.
//!
//! Units come from three places, in this order:
//!
//! 1. Family groups supplied with their preference
//! 2. Ministers whose `family_id` names no supplied group (they form a
//!    group that prefers to serve together)
//! 3. Spouses who both asked to serve as a couple and belong to no family
//!
//! ## Invariants
//!
//! - A minister belongs to at most one unit; the first unit listing it wins
//! - Vacant placeholders never belong to a unit

use mesc_roster_domain::{FamilyGroup, Minister, MinisterId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A set of ministers treated together by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyUnit {
    /// Identifier of the unit (the family id, or `couple:<a>:<b>`).
    pub key: String,
    /// Members of the unit.
    pub members: BTreeSet<MinisterId>,
    /// Whether available members must be placed together.
    pub serve_together: bool,
}

/// Lookup from minister to family unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyIndex {
    units: Vec<FamilyUnit>,
    by_member: BTreeMap<MinisterId, usize>,
}

impl FamilyIndex {
    /// Builds the index from the roster and the supplied family groups.
    #[must_use]
    pub fn build(ministers: &[Minister], groups: &[FamilyGroup]) -> Self {
        let mut index: Self = Self::default();

        let mut declared: BTreeMap<String, (BTreeSet<MinisterId>, bool)> = BTreeMap::new();
        for group in groups {
            let entry: &mut (BTreeSet<MinisterId>, bool) = declared
                .entry(group.family_id.clone())
                .or_insert_with(|| (BTreeSet::new(), group.serve_together));
            entry.0.extend(group.members.iter().cloned());
        }
        for minister in ministers {
            if let (Some(id), Some(family_id)) = (&minister.id, &minister.family_id) {
                declared
                    .entry(family_id.clone())
                    .or_insert_with(|| (BTreeSet::new(), true))
                    .0
                    .insert(id.clone());
            }
        }
        for (key, (members, serve_together)) in declared {
            index.push(key, members, serve_together);
        }

        let couple_flag: BTreeMap<&MinisterId, (&Minister, Option<&MinisterId>)> = ministers
            .iter()
            .filter_map(|minister| {
                minister
                    .id
                    .as_ref()
                    .map(|id| (id, (minister, minister.spouse_id.as_ref())))
            })
            .collect();
        for (id, (minister, spouse_id)) in &couple_flag {
            let Some(spouse_id) = spouse_id else {
                continue;
            };
            // each couple is visited once, from its smaller id
            if *id >= *spouse_id || !minister.can_serve_as_couple {
                continue;
            }
            let Some((spouse, spouse_of_spouse)) = couple_flag.get(spouse_id) else {
                continue;
            };
            let mutual: bool = *spouse_of_spouse == Some(*id) && spouse.can_serve_as_couple;
            if !mutual
                || index.by_member.contains_key(*id)
                || index.by_member.contains_key(*spouse_id)
            {
                continue;
            }
            let members: BTreeSet<MinisterId> =
                [(*id).clone(), (*spouse_id).clone()].into_iter().collect();
            index.push(format!("couple:{id}:{spouse_id}"), members, true);
        }

        debug!(units = index.units.len(), "Built family index");
        index
    }

    fn push(&mut self, key: String, members: BTreeSet<MinisterId>, serve_together: bool) {
        let position: usize = self.units.len();
        let mut owned: BTreeSet<MinisterId> = BTreeSet::new();
        for member in members {
            if !self.by_member.contains_key(&member) {
                self.by_member.insert(member.clone(), position);
                owned.insert(member);
            }
        }
        if !owned.is_empty() {
            self.units.push(FamilyUnit {
                key,
                members: owned,
                serve_together,
            });
        }
    }

    /// Returns the unit index and unit of a minister.
    #[must_use]
    pub fn unit_of(&self, id: &MinisterId) -> Option<(usize, &FamilyUnit)> {
        let position: usize = *self.by_member.get(id)?;
        self.units.get(position).map(|unit| (position, unit))
    }

    #[cfg(test)]
    pub(crate) fn together_units(&self) -> impl Iterator<Item = (usize, &FamilyUnit)> {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.serve_together)
    }

    #[cfg(test)]
    pub(crate) fn units(&self) -> &[FamilyUnit] {
        &self.units
    }
}
