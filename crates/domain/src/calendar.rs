// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Liturgical calendar rules.
//!
//! Pure date computations used to decide which masses exist in a month:
//! Easter and the feasts that move with it, the three-year Sunday cycle,
//! the liturgical season of a date and the fixed "special day" predicates.
//!
//! ## Rules
//!
//! - Easter follows the anonymous Gregorian algorithm (Meeus/Jones/Butcher)
//! - Movable feasts are fixed day offsets from Easter Sunday
//! - The cycle label is `year mod 3` (0 = A, 1 = B, 2 = C)
//! - A liturgical year starts on the first Sunday of Advent, so early
//!   January dates are classified against the previous year's seasons
//! - Dates that fall in no computed season are Ordinary Time
//!
//! ## Invariants
//!
//! - Only years 1583 through 9999 are accepted
//! - Every function here is deterministic and free of side effects

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Weekday};

/// First year of the Gregorian reform accepted by the calendar.
pub const MIN_YEAR: i32 = 1583;
/// Last year accepted by the calendar.
pub const MAX_YEAR: i32 = 9999;

/// National civil holidays as (month, day) pairs.
const CIVIL_HOLIDAYS: [(Month, u8); 9] = [
    (Month::January, 1),
    (Month::April, 21),
    (Month::May, 1),
    (Month::September, 7),
    (Month::October, 12),
    (Month::November, 2),
    (Month::November, 15),
    (Month::November, 20),
    (Month::December, 25),
];

/// Validates that a year is inside the supported Gregorian range.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` when the year is out of range.
pub const fn validate_year(year: i32) -> Result<(), DomainError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(DomainError::InvalidYear(year));
    }
    Ok(())
}

pub(crate) fn add_days(date: Date, days: i64, operation: &str) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation.to_string(),
        })
}

fn calendar_date(year: i32, month: Month, day: u8) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, day).map_err(|e| DomainError::DateParseError {
        date_string: format!("{year:04}-{:02}-{day:02}", u8::from(month)),
        error: e.to_string(),
    })
}

/// Computes the date of Easter Sunday.
///
/// # Arguments
///
/// * `year` - The Gregorian year
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn easter_sunday(year: i32) -> Result<Date, DomainError> {
    validate_year(year)?;

    let a: i32 = year % 19;
    let b: i32 = year / 100;
    let c: i32 = year % 100;
    let d: i32 = b / 4;
    let e: i32 = b % 4;
    let f: i32 = (b + 8) / 25;
    let g: i32 = (b - f + 1) / 3;
    let h: i32 = (19 * a + b - d - g + 15) % 30;
    let i: i32 = c / 4;
    let k: i32 = c % 4;
    let l: i32 = (32 + 2 * e + 2 * i - h - k) % 7;
    let m: i32 = (a + 11 * h + 22 * l) / 451;
    let month_number: i32 = (h + l - 7 * m + 114) / 31;
    let day_number: i32 = (h + l - 7 * m + 114) % 31 + 1;

    let month: Month = if month_number == 3 {
        Month::March
    } else {
        Month::April
    };
    let day: u8 = u8::try_from(day_number).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("computing Easter for {year}"),
    })?;
    calendar_date(year, month, day)
}

/// A feast whose date is a fixed offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovableFeast {
    /// Ash Wednesday
    AshWednesday,
    /// Palm Sunday
    PalmSunday,
    /// Holy Thursday
    HolyThursday,
    /// Good Friday
    GoodFriday,
    /// Holy Saturday
    HolySaturday,
    /// Easter Sunday
    EasterSunday,
    /// Divine Mercy Sunday
    DivineMercySunday,
    /// Ascension of the Lord
    Ascension,
    /// Pentecost
    Pentecost,
    /// Most Holy Trinity
    TrinitySunday,
    /// Corpus Christi
    CorpusChristi,
}

impl MovableFeast {
    /// All movable feasts in calendar order.
    pub const ALL: [Self; 11] = [
        Self::AshWednesday,
        Self::PalmSunday,
        Self::HolyThursday,
        Self::GoodFriday,
        Self::HolySaturday,
        Self::EasterSunday,
        Self::DivineMercySunday,
        Self::Ascension,
        Self::Pentecost,
        Self::TrinitySunday,
        Self::CorpusChristi,
    ];

    /// Offset in days from Easter Sunday.
    #[must_use]
    pub const fn offset_days(&self) -> i64 {
        match self {
            Self::AshWednesday => -46,
            Self::PalmSunday => -7,
            Self::HolyThursday => -3,
            Self::GoodFriday => -2,
            Self::HolySaturday => -1,
            Self::EasterSunday => 0,
            Self::DivineMercySunday => 7,
            Self::Ascension => 39,
            Self::Pentecost => 49,
            Self::TrinitySunday => 56,
            Self::CorpusChristi => 60,
        }
    }

    /// Human-readable name of the feast.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AshWednesday => "Ash Wednesday",
            Self::PalmSunday => "Palm Sunday",
            Self::HolyThursday => "Holy Thursday",
            Self::GoodFriday => "Good Friday",
            Self::HolySaturday => "Holy Saturday",
            Self::EasterSunday => "Easter Sunday",
            Self::DivineMercySunday => "Divine Mercy Sunday",
            Self::Ascension => "Ascension of the Lord",
            Self::Pentecost => "Pentecost",
            Self::TrinitySunday => "Most Holy Trinity",
            Self::CorpusChristi => "Corpus Christi",
        }
    }
}

/// The movable feast dates of one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovableFeasts {
    year: i32,
    dates: Vec<(MovableFeast, Date)>,
}

impl MovableFeasts {
    /// Computes every movable feast for a year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported range.
    pub fn for_year(year: i32) -> Result<Self, DomainError> {
        let easter: Date = easter_sunday(year)?;
        let dates: Vec<(MovableFeast, Date)> = MovableFeast::ALL
            .iter()
            .map(|feast| {
                add_days(easter, feast.offset_days(), feast.name()).map(|date| (*feast, date))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { year, dates })
    }

    /// Returns the year these feasts belong to.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the date of a specific feast.
    #[must_use]
    pub fn date_of(&self, feast: MovableFeast) -> Option<Date> {
        self.dates
            .iter()
            .find(|(candidate, _)| *candidate == feast)
            .map(|(_, date)| *date)
    }

    /// Returns the feast celebrated on a date, if any.
    #[must_use]
    pub fn feast_on(&self, date: Date) -> Option<MovableFeast> {
        self.dates
            .iter()
            .find(|(_, candidate)| *candidate == date)
            .map(|(feast, _)| *feast)
    }

    /// Iterates over all feasts in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (MovableFeast, Date)> + '_ {
        self.dates.iter().copied()
    }
}

/// The three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiturgicalCycle {
    /// Year A
    A,
    /// Year B
    B,
    /// Year C
    C,
}

impl LiturgicalCycle {
    /// Returns the cycle label for a year.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        match year.rem_euclid(3) {
            0 => Self::A,
            1 => Self::B,
            _ => Self::C,
        }
    }
}

/// Vestment colour associated with a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalColor {
    /// Purple
    Purple,
    /// White
    White,
    /// Green
    Green,
}

/// A liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalSeason {
    /// Advent
    Advent,
    /// Christmas season
    Christmas,
    /// Ordinary Time
    OrdinaryTime,
    /// Lent
    Lent,
    /// Easter season
    Easter,
}

impl LiturgicalSeason {
    /// Returns the season's colour.
    #[must_use]
    pub const fn color(&self) -> LiturgicalColor {
        match self {
            Self::Advent | Self::Lent => LiturgicalColor::Purple,
            Self::Christmas | Self::Easter => LiturgicalColor::White,
            Self::OrdinaryTime => LiturgicalColor::Green,
        }
    }

    /// Returns the string representation of the season.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advent => "advent",
            Self::Christmas => "christmas",
            Self::OrdinaryTime => "ordinary_time",
            Self::Lent => "lent",
            Self::Easter => "easter",
        }
    }
}

/// An inclusive date range covered by one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSpan {
    /// The season.
    pub season: LiturgicalSeason,
    /// First day of the season.
    pub start: Date,
    /// Last day of the season (inclusive).
    pub end: Date,
}

impl SeasonSpan {
    /// Returns whether the span contains the date.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Computes the first Sunday of Advent of a year.
///
/// This is the fourth Sunday before Christmas.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn advent_start(year: i32) -> Result<Date, DomainError> {
    validate_year(year)?;
    let christmas: Date = calendar_date(year, Month::December, 25)?;
    let back_to_sunday: i64 = match christmas.weekday().number_days_from_sunday() {
        0 => 7,
        n => i64::from(n),
    };
    add_days(christmas, -(21 + back_to_sunday), "computing Advent")
}

/// The Baptism of the Lord: the Sunday after 6 January.
fn baptism_of_the_lord(year: i32) -> Result<Date, DomainError> {
    let epiphany: Date = calendar_date(year, Month::January, 6)?;
    let forward: i64 = match epiphany.weekday().number_days_from_sunday() {
        0 => 7,
        n => 7 - i64::from(n),
    };
    add_days(epiphany, forward, "computing the Baptism of the Lord")
}

/// Computes the season spans of the liturgical year that begins in
/// Advent of `year`.
///
/// # Errors
///
/// Returns an error if `year` or `year + 1` is outside the supported range.
pub fn season_spans(year: i32) -> Result<Vec<SeasonSpan>, DomainError> {
    let advent: Date = advent_start(year)?;
    let christmas: Date = calendar_date(year, Month::December, 25)?;
    let baptism: Date = baptism_of_the_lord(year + 1)?;
    let next_advent: Date = advent_start(year + 1)?;

    let easter: Date = easter_sunday(year + 1)?;
    let ash_wednesday: Date = add_days(easter, MovableFeast::AshWednesday.offset_days(), "Lent")?;
    let pentecost: Date = add_days(easter, MovableFeast::Pentecost.offset_days(), "Easter")?;

    Ok(vec![
        SeasonSpan {
            season: LiturgicalSeason::Advent,
            start: advent,
            end: add_days(christmas, -1, "Advent")?,
        },
        SeasonSpan {
            season: LiturgicalSeason::Christmas,
            start: christmas,
            end: baptism,
        },
        SeasonSpan {
            season: LiturgicalSeason::OrdinaryTime,
            start: add_days(baptism, 1, "Ordinary Time")?,
            end: add_days(ash_wednesday, -1, "Ordinary Time")?,
        },
        SeasonSpan {
            season: LiturgicalSeason::Lent,
            start: ash_wednesday,
            end: add_days(easter, -1, "Lent")?,
        },
        SeasonSpan {
            season: LiturgicalSeason::Easter,
            start: easter,
            end: pentecost,
        },
        SeasonSpan {
            season: LiturgicalSeason::OrdinaryTime,
            start: add_days(pentecost, 1, "Ordinary Time")?,
            end: add_days(next_advent, -1, "Ordinary Time")?,
        },
    ])
}

/// Returns the liturgical season enclosing a date.
///
/// Both the liturgical year that began in the previous calendar year and
/// the one beginning this year are consulted.
///
/// # Errors
///
/// Returns an error if the surrounding years are outside the supported range.
pub fn liturgical_season(date: Date) -> Result<LiturgicalSeason, DomainError> {
    let year: i32 = date.year();
    let mut spans: Vec<SeasonSpan> = season_spans(year - 1)?;
    spans.extend(season_spans(year)?);

    Ok(spans
        .iter()
        .find(|span| span.contains(date))
        .map_or(LiturgicalSeason::OrdinaryTime, |span| span.season))
}

/// Returns whether the date is the first occurrence of `weekday` in its month.
#[must_use]
pub fn is_first_weekday_of_month(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.day() <= 7
}

/// Returns whether the date is a national civil holiday.
#[must_use]
pub fn is_civil_holiday(date: Date) -> bool {
    CIVIL_HOLIDAYS
        .iter()
        .any(|(month, day)| date.month() == *month && date.day() == *day)
}

/// Returns the first day of a month.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn first_day_of_month(year: i32, month: Month) -> Result<Date, DomainError> {
    validate_year(year)?;
    calendar_date(year, month, 1)
}

/// Returns every day of a month in order.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn month_days(year: i32, month: Month) -> Result<Vec<Date>, DomainError> {
    let mut days: Vec<Date> = Vec::with_capacity(31);
    let mut current: Date = first_day_of_month(year, month)?;
    while current.month() == month {
        days.push(current);
        match current.next_day() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(days)
}

/// Returns the `n`-th Sunday (1-based) of a month, if the month has one.
#[must_use]
pub fn nth_sunday_of_month(year: i32, month: Month, n: u8) -> Option<Date> {
    if n == 0 {
        return None;
    }
    month_days(year, month)
        .ok()?
        .into_iter()
        .filter(|date| date.weekday() == Weekday::Sunday)
        .nth(usize::from(n - 1))
}

/// Converts a month number into a `Month`.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` unless `1 <= month <= 12`.
pub fn month_from_number(month: u8) -> Result<Month, DomainError> {
    Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))
}
