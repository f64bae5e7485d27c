// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts of the data collaborators.
//!
//! The schedule computation owns no storage. Every input arrives through
//! one of these traits, and any of them may fail with a `SourceError`.

use mesc_roster_domain::{FamilyGroup, Minister, MinisterId, NamedDay, SlotConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use time::Month;

/// Failures reported by a data collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The collaborator could not be reached or read.
    #[error("{source_name} is unavailable: {message}")]
    Unavailable {
        source_name: &'static str,
        message: String,
    },

    /// The collaborator returned data that cannot be decoded.
    #[error("{source_name} returned malformed data: {message}")]
    Malformed {
        source_name: &'static str,
        message: String,
    },
}

/// Lifecycle status of a monthly survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    Draft,
    Open,
    Sent,
    Active,
    Closed,
}

impl SurveyStatus {
    /// Returns whether a final schedule may be built from this survey.
    #[must_use]
    pub const fn allows_final(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns whether a preview may read this survey's responses.
    #[must_use]
    pub const fn allows_preview(&self) -> bool {
        !matches!(self, Self::Draft)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Open => "open",
            Self::Sent => "sent",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

/// One minister's stored answer, in whatever shape it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub minister_id: MinisterId,
    pub payload: Value,
}

/// The survey of one month with its responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySnapshot {
    pub status: SurveyStatus,
    #[serde(default)]
    pub responses: Vec<StoredResponse>,
}

/// Supplies the minister roster.
pub trait RosterSource {
    /// Returns every minister on the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be read.
    fn ministers(&self) -> Result<Vec<Minister>, SourceError>;
}

/// Supplies survey responses.
pub trait SurveySource {
    /// Returns the survey of a month, or `None` if none was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the survey cannot be read.
    fn survey(&self, year: i32, month: Month) -> Result<Option<SurveySnapshot>, SourceError>;
}

/// Supplies slot times and headcounts.
pub trait SlotConfigSource {
    /// Returns the slot configuration, or `None` if none is set up.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read.
    fn slot_config(&self) -> Result<Option<SlotConfig>, SourceError>;
}

/// Supplies saints and mysteries linked to calendar days.
pub trait NamedDaySource {
    /// Returns every named day.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be read.
    fn named_days(&self) -> Result<Vec<NamedDay>, SourceError>;
}

/// Supplies family groups and their service preference.
pub trait FamilySource {
    /// Returns every family group.
    ///
    /// # Errors
    ///
    /// Returns an error if the groups cannot be read.
    fn families(&self) -> Result<Vec<FamilyGroup>, SourceError>;
}

/// The collaborators of one schedule computation.
#[derive(Clone, Copy)]
pub struct Providers<'a> {
    pub roster: &'a dyn RosterSource,
    pub surveys: &'a dyn SurveySource,
    pub slot_config: &'a dyn SlotConfigSource,
    pub named_days: &'a dyn NamedDaySource,
    pub families: &'a dyn FamilySource,
}
