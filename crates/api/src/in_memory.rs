// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory providers loaded from a JSON document.
//!
//! The document layout:
//!
//! ```json
//! {
//!   "ministers": [...],
//!   "families": [...],
//!   "named_days": [...],
//!   "slot_config": {...},
//!   "surveys": [{"year": 2026, "month": 3, "status": "closed", "responses": [...]}]
//! }
//! ```
//!
//! Every key is optional. A missing `slot_config` means no configuration
//! is set up.

use crate::providers::{
    FamilySource, NamedDaySource, Providers, RosterSource, SlotConfigSource, SourceError,
    SurveySnapshot, SurveySource,
};
use mesc_roster_domain::{FamilyGroup, Minister, NamedDay, SlotConfig};
use serde::{Deserialize, Serialize};
use time::Month;
use tracing::debug;

/// A survey stored for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSurvey {
    pub year: i32,
    pub month: u8,
    #[serde(flatten)]
    pub snapshot: SurveySnapshot,
}

/// Every collaborator's data held in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemorySource {
    pub ministers: Vec<Minister>,
    pub families: Vec<FamilyGroup>,
    pub named_days: Vec<NamedDay>,
    pub slot_config: Option<SlotConfig>,
    pub surveys: Vec<StoredSurvey>,
}

impl InMemorySource {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Malformed` if the document does not match the
    /// expected layout.
    pub fn from_json_str(document: &str) -> Result<Self, SourceError> {
        let source: Self =
            serde_json::from_str(document).map_err(|err| SourceError::Malformed {
                source_name: "fixture",
                message: err.to_string(),
            })?;
        debug!(
            ministers = source.ministers.len(),
            families = source.families.len(),
            named_days = source.named_days.len(),
            surveys = source.surveys.len(),
            "Loaded in-memory data"
        );
        Ok(source)
    }

    /// Returns this source as every provider.
    #[must_use]
    pub fn providers(&self) -> Providers<'_> {
        Providers {
            roster: self,
            surveys: self,
            slot_config: self,
            named_days: self,
            families: self,
        }
    }
}

impl RosterSource for InMemorySource {
    fn ministers(&self) -> Result<Vec<Minister>, SourceError> {
        Ok(self.ministers.clone())
    }
}

impl SurveySource for InMemorySource {
    fn survey(&self, year: i32, month: Month) -> Result<Option<SurveySnapshot>, SourceError> {
        Ok(self
            .surveys
            .iter()
            .find(|survey| survey.year == year && survey.month == u8::from(month))
            .map(|survey| survey.snapshot.clone()))
    }
}

impl SlotConfigSource for InMemorySource {
    fn slot_config(&self) -> Result<Option<SlotConfig>, SourceError> {
        Ok(self.slot_config.clone())
    }
}

impl NamedDaySource for InMemorySource {
    fn named_days(&self) -> Result<Vec<NamedDay>, SourceError> {
        Ok(self.named_days.clone())
    }
}

impl FamilySource for InMemorySource {
    fn families(&self) -> Result<Vec<FamilyGroup>, SourceError> {
        Ok(self.families.clone())
    }
}
