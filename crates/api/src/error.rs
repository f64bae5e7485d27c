// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::providers::SourceError;
use mesc_roster::CoreError;
use mesc_roster_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A precondition of the run is not met; the run was aborted.
    SetupFault {
        /// The precondition that failed (e.g. `roster`, `slot_configuration`).
        precondition: String,
        /// A human-readable description of the failure.
        message: String,
    },
    /// A data collaborator failed.
    SourceUnavailable {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds a setup fault.
    #[must_use]
    pub fn setup_fault(precondition: &str, message: String) -> Self {
        Self::SetupFault {
            precondition: precondition.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::SetupFault {
                precondition,
                message,
            } => {
                write!(f, "Cannot generate schedule ({precondition}): {message}")
            }
            Self::SourceUnavailable { message } => {
                write!(f, "Data source failure: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        Self::SourceUnavailable {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidYear(year) => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Year {year} is outside the supported range"),
        },
        DomainError::InvalidMonth(month) => ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Month {month} is not between 1 and 12"),
        },
        DomainError::InvalidTime(value) => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("'{value}' is not a time of day"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Date arithmetic overflow while {operation}"),
        },
        err @ (DomainError::InvalidHeadcount { .. }
        | DomainError::InvalidFeastDate { .. }
        | DomainError::InvalidNovenaLength(_)
        | DomainError::EmptyRuleSet(_)) => ApiError::SetupFault {
            precondition: String::from("slot_configuration"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::EmptyRoster => ApiError::SetupFault {
            precondition: String::from("roster"),
            message: String::from("The roster has no schedulable minister"),
        },
        CoreError::EmptySlotList => ApiError::SetupFault {
            precondition: String::from("slots"),
            message: String::from("No mass slot exists for the month"),
        },
        CoreError::NoUsableAvailability { year, month } => ApiError::SetupFault {
            precondition: String::from("availability"),
            message: format!("No usable availability was submitted for {year}-{month:02}"),
        },
    }
}
