// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CelebrationRank, MassTime, MinisterId, MinisterRole};
use serde::{Deserialize, Serialize};
use time::Date;

/// A volunteer who may be assigned to masses.
///
/// A minister without an id is a vacant placeholder kept by the roster
/// for display purposes. It is never a candidate for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minister {
    /// The roster identifier. `None` marks a vacant placeholder.
    pub id: Option<MinisterId>,
    /// Display name.
    pub name: String,
    /// Roster role.
    #[serde(default = "default_role")]
    pub role: MinisterRole,
    /// Number of masses served over the minister's lifetime.
    #[serde(default)]
    pub total_services: u32,
    /// Date of the most recent service, if any.
    #[serde(default)]
    pub last_service: Option<Date>,
    /// Preferred mass times.
    #[serde(default)]
    pub preferred_times: Vec<MassTime>,
    /// Whether the minister wishes to serve together with a spouse.
    #[serde(default)]
    pub can_serve_as_couple: bool,
    /// The spouse's roster identifier.
    #[serde(default)]
    pub spouse_id: Option<MinisterId>,
    /// The family group this minister belongs to.
    #[serde(default)]
    pub family_id: Option<String>,
}

const fn default_role() -> MinisterRole {
    MinisterRole::Minister
}

impl Minister {
    /// Creates a minister with no service history.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: Some(MinisterId::new(id)),
            name: name.to_string(),
            role: MinisterRole::Minister,
            total_services: 0,
            last_service: None,
            preferred_times: Vec::new(),
            can_serve_as_couple: false,
            spouse_id: None,
            family_id: None,
        }
    }

    /// Creates a vacant placeholder.
    #[must_use]
    pub fn vacant(name: &str) -> Self {
        Self {
            id: None,
            ..Self::new("", name)
        }
    }

    /// Returns whether this entry is a vacant placeholder.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        self.id.is_none()
    }

    /// Returns whether the minister prefers the given mass time.
    #[must_use]
    pub fn prefers(&self, time: MassTime) -> bool {
        self.preferred_times.contains(&time)
    }
}

/// Ministers sharing a family id, with their service preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    /// Family identifier.
    pub family_id: String,
    /// Members of the family.
    pub members: Vec<MinisterId>,
    /// When true, available members are placed in the same mass or not at all.
    #[serde(default = "default_serve_together")]
    pub serve_together: bool,
}

const fn default_serve_together() -> bool {
    true
}

/// A calendar day linked to a saint or mystery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDay {
    /// Month number (1-12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Name of the celebration (e.g. "São José").
    pub name: String,
    /// Liturgical rank.
    pub rank: CelebrationRank,
}

impl NamedDay {
    /// Returns whether this named day falls on the date.
    #[must_use]
    pub fn falls_on(&self, date: Date) -> bool {
        u8::from(date.month()) == self.month && date.day() == self.day
    }
}
