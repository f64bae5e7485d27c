// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a minister across providers.
///
/// The identifier is opaque; it is whatever the roster provider uses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinisterId {
    value: String,
}

impl MinisterId {
    /// Creates a new `MinisterId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MinisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A wall-clock time of day with minute precision.
///
/// Always rendered as `HH:MM`. Parsing accepts `HH:MM`, `H:MM`,
/// `HH:MM:SS` (seconds are dropped) and the shorthand forms `10h`
/// and `19h30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MassTime {
    hour: u8,
    minute: u8,
}

impl MassTime {
    /// Creates a time of day from its components.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is above 23 or the minute above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTime(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    /// Builds a time from components already known to be in range.
    pub(crate) const fn from_parts(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Parses a time-of-day string in any of the accepted notations.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw time string (e.g. `"19:30"`, `"8h"`, `"19h30"`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if the string is not a time of day.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTime(value.to_string());
        let normalized: String = value.trim().to_lowercase();

        let (hour_part, minute_part): (&str, &str) =
            if let Some((hour, minute)) = normalized.split_once('h') {
                (hour, if minute.is_empty() { "0" } else { minute })
            } else if let Some((hour, rest)) = normalized.split_once(':') {
                // seconds are dropped
                (hour, rest.split_once(':').map_or(rest, |(minute, _)| minute))
            } else {
                return Err(invalid());
            };

        let hour: u8 = parse_component(hour_part).ok_or_else(invalid)?;
        let minute: u8 = parse_component(minute_part).ok_or_else(invalid)?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for MassTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for MassTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MassTime> for String {
    fn from(value: MassTime) -> Self {
        value.to_string()
    }
}

/// A weekday on which the recurring early-morning mass is celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceWeekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
}

impl ServiceWeekday {
    /// All service weekdays in calendar order.
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Maps a calendar weekday onto a service weekday.
    ///
    /// Returns `None` for Saturday and Sunday.
    #[must_use]
    pub const fn from_weekday(weekday: time::Weekday) -> Option<Self> {
        match weekday {
            time::Weekday::Monday => Some(Self::Monday),
            time::Weekday::Tuesday => Some(Self::Tuesday),
            time::Weekday::Wednesday => Some(Self::Wednesday),
            time::Weekday::Thursday => Some(Self::Thursday),
            time::Weekday::Friday => Some(Self::Friday),
            time::Weekday::Saturday | time::Weekday::Sunday => None,
        }
    }

    /// Parses an English or Portuguese weekday name.
    ///
    /// Only whole names and their usual abbreviations match, with or
    /// without the `-feira` suffix (`"Seg"`, `"Terça-feira"`, `"wed"`).
    /// Other words, even ones sharing a prefix, return `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let lowered: String = value.trim().trim_end_matches('.').to_lowercase();
        let name: &str = lowered
            .strip_suffix("-feira")
            .or_else(|| lowered.strip_suffix(" feira"))
            .unwrap_or(&lowered);
        match name {
            "monday" | "mon" | "segunda" | "seg" | "2ª" => Some(Self::Monday),
            "tuesday" | "tue" | "tues" | "terça" | "terca" | "ter" | "3ª" => Some(Self::Tuesday),
            "wednesday" | "wed" | "quarta" | "qua" | "4ª" => Some(Self::Wednesday),
            "thursday" | "thu" | "thurs" | "quinta" | "qui" | "5ª" => Some(Self::Thursday),
            "friday" | "fri" | "sexta" | "sex" | "6ª" => Some(Self::Friday),
            _ => None,
        }
    }

    /// Returns the canonical lowercase English name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
        }
    }
}

/// The role a person holds in the ministry roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinisterRole {
    /// A regular extraordinary minister.
    #[serde(alias = "ministro")]
    Minister,
    /// A coordinator who also serves at mass.
    #[serde(alias = "coordenador")]
    Coordinator,
    /// An administrative account that is never scheduled.
    #[serde(alias = "gestor")]
    Manager,
}

impl MinisterRole {
    /// Returns whether people with this role may be assigned to slots.
    #[must_use]
    pub const fn is_schedulable(&self) -> bool {
        matches!(self, Self::Minister | Self::Coordinator)
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minister => "minister",
            Self::Coordinator => "coordinator",
            Self::Manager => "manager",
        }
    }
}

/// The liturgical rank of a named calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationRank {
    /// Solemnity
    #[serde(alias = "SOLEMNITY", alias = "solenidade")]
    Solemnity,
    /// Feast
    #[serde(alias = "FEAST", alias = "festa")]
    Feast,
    /// Obligatory memorial
    #[serde(alias = "MEMORIAL", alias = "memoria")]
    Memorial,
    /// Optional memorial
    #[serde(alias = "OPTIONAL_MEMORIAL", alias = "memoria_facultativa")]
    OptionalMemorial,
}

impl CelebrationRank {
    /// Multiplier applied to a name-match score for this rank.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        match self {
            Self::Solemnity => 1.5,
            Self::Feast => 1.3,
            Self::Memorial => 1.2,
            Self::OptionalMemorial => 1.0,
        }
    }
}
