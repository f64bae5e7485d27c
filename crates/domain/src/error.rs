// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Year is outside the supported Gregorian range.
    InvalidYear(i32),
    /// Month number is not between 1 and 12.
    InvalidMonth(u8),
    /// A time-of-day string could not be understood.
    InvalidTime(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A slot rule declares a minimum headcount above its maximum.
    InvalidHeadcount {
        /// The slot rule that is inconsistent.
        rule: String,
        /// The declared minimum.
        min: usize,
        /// The declared maximum.
        max: usize,
    },
    /// The configured feast date does not exist in the calendar.
    InvalidFeastDate {
        /// The configured month.
        month: u8,
        /// The configured day of month.
        day: u8,
    },
    /// The novena length is outside the accepted range.
    InvalidNovenaLength(u8),
    /// A rule table that must contain entries is empty.
    EmptyRuleSet(&'static str),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(year) => {
                write!(f, "Year {year} is outside the supported range 1583-9999")
            }
            Self::InvalidMonth(month) => write!(f, "Invalid month: {month}"),
            Self::InvalidTime(value) => write!(f, "Invalid time of day: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidHeadcount { rule, min, max } => {
                write!(
                    f,
                    "Slot rule '{rule}' requires {min} ministers but allows at most {max}"
                )
            }
            Self::InvalidFeastDate { month, day } => {
                write!(f, "Feast date {month:02}-{day:02} does not exist")
            }
            Self::InvalidNovenaLength(days) => {
                write!(f, "Novena length must be between 1 and 28 days, got {days}")
            }
            Self::EmptyRuleSet(name) => write!(f, "Slot rule set '{name}' must not be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
