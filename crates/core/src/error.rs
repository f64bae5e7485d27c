// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mesc_roster_domain::DomainError;

/// Setup faults that abort a generation run.
///
/// Per-slot shortfalls and unreadable survey fields are not errors; they
/// are recorded in the run output instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The roster has no schedulable minister.
    EmptyRoster,
    /// The month produced no mass slot.
    EmptySlotList,
    /// A final run found no usable availability record.
    NoUsableAvailability {
        /// The target year.
        year: i32,
        /// The target month (1-12).
        month: u8,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EmptyRoster => write!(f, "The roster has no schedulable minister"),
            Self::EmptySlotList => write!(f, "No mass slot was generated for the month"),
            Self::NoUsableAvailability { year, month } => write!(
                f,
                "No usable availability was submitted for {year}-{month:02}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
