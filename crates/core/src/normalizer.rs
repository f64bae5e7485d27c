// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability normalization.
//!
//! Survey answers have been stored in three shapes over time. Each shape
//! has its own decoder and all of them produce an `AvailabilityRecord`.
//!
//! ## Supported shapes
//!
//! - `QuestionList`: an array of `{questionId, answer}` pairs (optionally
//!   wrapped in `{"responses": [...]}`)
//! - `Structured`: a versioned object with `masses` (date -> time -> flag),
//!   `weekdays`, `special_events` and `can_substitute`
//! - `LegacyFields`: a flat object with `available_sundays`,
//!   `daily_mass_availability` and similar top-level keys
//!
//! Anything else is `Unknown` and normalizes to an empty record.
//!
//! ## Degradation
//!
//! A field that cannot be read contributes nothing to the record. A single
//! unreadable entry inside a list is skipped. Neither aborts the record.
//!
//! ## Invariants
//!
//! - `normalize(encode_record(r)) == r` for every record `r`

use mesc_roster_domain::{
    AvailabilityRecord, MassTime, ServiceWeekday, SlotConfig, nth_sunday_of_month,
};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use thiserror::Error;
use time::macros::format_description;
use time::{Date, Month};
use tracing::{debug, warn};

/// Version tag written by `encode_record`.
pub const STRUCTURED_FORMAT_VERSION: &str = "2.0";

const LEGACY_KEYS: [&str; 3] = [
    "available_sundays",
    "daily_mass_availability",
    "monthly_availability",
];

/// Reasons a whole field is discarded.
#[derive(Debug, Error, PartialEq, Eq)]
enum FieldError {
    /// The JSON value has the wrong shape for the field.
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// A scalar answer could not be interpreted.
    #[error("unrecognized answer '{0}'")]
    UnrecognizedAnswer(String),

    /// The answer refers to the feast but the month has no feast date.
    #[error("no feast date is configured for this survey")]
    NoFeastDate,
}

const fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(expected: &'static str, value: &Value) -> FieldError {
    FieldError::UnexpectedShape {
        expected,
        found: shape_name(value),
    }
}

/// Month-level facts needed to interpret relative answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeContext {
    /// Survey year.
    pub year: i32,
    /// Survey month.
    pub month: Month,
    /// The feast date, when it belongs to the survey year.
    pub feast_date: Option<Date>,
    /// Time of the feast's evening mass.
    pub feast_evening: Option<MassTime>,
}

impl NormalizeContext {
    /// Builds the context for a month from the slot configuration.
    #[must_use]
    pub fn new(year: i32, month: Month, config: &SlotConfig) -> Self {
        Self {
            year,
            month,
            feast_date: config.feast_date(year),
            feast_evening: config.feast_evening_time(),
        }
    }
}

/// One entry of the question/answer format.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionAnswer {
    /// The question identifier.
    pub question_id: String,
    /// The raw answer.
    pub answer: Value,
}

impl QuestionAnswer {
    fn from_value(value: &Value) -> Option<Self> {
        let entry: &Map<String, Value> = value.as_object()?;
        let question_id: &str = entry
            .get("questionId")
            .or_else(|| entry.get("question_id"))
            .and_then(Value::as_str)?;
        Some(Self {
            question_id: question_id.trim().to_lowercase(),
            answer: entry.get("answer").cloned().unwrap_or(Value::Null),
        })
    }
}

/// A stored survey response, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Array of question/answer pairs.
    QuestionList(Vec<QuestionAnswer>),
    /// Versioned structured object.
    Structured(Map<String, Value>),
    /// Flat object with top-level answer fields.
    LegacyFields(Map<String, Value>),
    /// Nothing recognizable.
    Unknown,
}

impl RawResponse {
    /// Classifies a stored payload.
    ///
    /// A payload stored as a JSON string is decoded once before
    /// classification.
    #[must_use]
    pub fn detect(payload: &Value) -> Self {
        match payload {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(inner) if !inner.is_string() => Self::detect(&inner),
                _ => Self::Unknown,
            },
            Value::Array(items) => Self::question_list(items),
            Value::Object(map) => {
                if map.contains_key("format_version") || map.contains_key("masses") {
                    Self::Structured(map.clone())
                } else if let Some(Value::Array(items)) = map.get("responses") {
                    Self::question_list(items)
                } else if LEGACY_KEYS.iter().any(|key| map.contains_key(*key)) {
                    Self::LegacyFields(map.clone())
                } else {
                    Self::Unknown
                }
            }
            _ => Self::Unknown,
        }
    }

    fn question_list(items: &[Value]) -> Self {
        Self::QuestionList(items.iter().filter_map(QuestionAnswer::from_value).collect())
    }

    /// Returns a short name of the detected shape.
    #[must_use]
    pub const fn format_name(&self) -> &'static str {
        match self {
            Self::QuestionList(_) => "question_list",
            Self::Structured(_) => "structured",
            Self::LegacyFields(_) => "legacy_fields",
            Self::Unknown => "unknown",
        }
    }
}

/// Normalizes one stored response into a canonical record.
///
/// # Arguments
///
/// * `payload` - The stored response, in any supported shape
/// * `context` - The survey month
///
/// # Returns
///
/// The canonical record. Unknown shapes produce an empty record.
#[must_use]
pub fn normalize_response(payload: &Value, context: &NormalizeContext) -> AvailabilityRecord {
    let raw: RawResponse = RawResponse::detect(payload);
    debug!(format = raw.format_name(), "Detected survey response format");

    match raw {
        RawResponse::QuestionList(answers) => decode_questions(&answers, context),
        RawResponse::Structured(map) => decode_structured(&map),
        RawResponse::LegacyFields(map) => {
            let answers: Vec<QuestionAnswer> = map
                .iter()
                .map(|(key, value)| QuestionAnswer {
                    question_id: key.trim().to_lowercase(),
                    answer: value.clone(),
                })
                .collect();
            decode_questions(&answers, context)
        }
        RawResponse::Unknown => {
            warn!("Unrecognized survey response format; treating as no availability");
            AvailabilityRecord::default()
        }
    }
}

/// Encodes a record in the structured format.
///
/// Feeding the result back through `normalize_response` yields the same
/// record.
#[must_use]
pub fn encode_record(record: &AvailabilityRecord) -> Value {
    let mut masses: Map<String, Value> = Map::new();
    for (date, time) in &record.dated {
        let times: &mut Value = masses
            .entry(date.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(times) = times {
            times.insert(time.to_string(), Value::Bool(true));
        }
    }

    let weekdays: Map<String, Value> = ServiceWeekday::ALL
        .iter()
        .map(|day| {
            (
                day.as_str().to_string(),
                Value::Bool(record.weekdays.contains(day)),
            )
        })
        .collect();

    let novena: Vec<Value> = record
        .special
        .novena
        .iter()
        .map(|(date, time)| Value::String(format!("{date}_{time}")))
        .collect();
    let feast: Map<String, Value> = record
        .special
        .feast
        .iter()
        .map(|(date, time)| (format!("{date}_{time}"), Value::Bool(true)))
        .collect();
    let whole_days: Vec<Value> = record
        .whole_days
        .iter()
        .map(|date| Value::String(date.to_string()))
        .collect();

    json!({
        "format_version": STRUCTURED_FORMAT_VERSION,
        "masses": masses,
        "available_dates": whole_days,
        "weekdays": weekdays,
        "special_events": {
            "healing_liberation": record.special.healing_liberation,
            "first_friday": record.special.first_friday,
            "first_saturday": record.special.first_saturday,
            "saint_judas_novena": novena,
            "saint_judas_feast": feast,
        },
        "can_substitute": record.can_substitute,
    })
}

// ---------------------------------------------------------------------------
// Structured format
// ---------------------------------------------------------------------------

fn decode_structured(map: &Map<String, Value>) -> AvailabilityRecord {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();

    if let Some(value) = map.get("masses") {
        apply(&mut record.dated, "masses", decode_masses(value));
    }
    if let Some(value) = map.get("available_dates") {
        apply(&mut record.whole_days, "available_dates", decode_dates(value));
    }
    if let Some(value) = map.get("weekdays") {
        apply(&mut record.weekdays, "weekdays", decode_weekdays(value));
    }
    if let Some(value) = map.get("special_events") {
        decode_special_events(value, &mut record);
    }
    if let Some(value) = map.get("can_substitute") {
        apply(&mut record.can_substitute, "can_substitute", decode_flag(value));
    }

    record
}

fn apply<T>(target: &mut T, field: &str, decoded: Result<T, FieldError>) {
    match decoded {
        Ok(value) => *target = value,
        Err(err) => warn!(field, error = %err, "Discarding unreadable availability field"),
    }
}

fn decode_masses(value: &Value) -> Result<BTreeSet<(Date, MassTime)>, FieldError> {
    let dates: &Map<String, Value> = value.as_object().ok_or_else(|| unexpected("object", value))?;
    let mut masses: BTreeSet<(Date, MassTime)> = BTreeSet::new();

    for (date_key, times) in dates {
        let Some(date) = parse_iso_date(date_key) else {
            debug!(entry = %date_key, "Skipping mass entry with unreadable date");
            continue;
        };
        let Some(times) = times.as_object() else {
            debug!(entry = %date_key, "Skipping mass entry without a time map");
            continue;
        };
        for (time_key, flag) in times {
            match (MassTime::parse(time_key), yes_no(flag)) {
                (Ok(time), Some(true)) => {
                    masses.insert((date, time));
                }
                (Ok(_), _) => {}
                (Err(_), _) => debug!(entry = %time_key, "Skipping unreadable mass time"),
            }
        }
    }
    Ok(masses)
}

fn decode_dates(value: &Value) -> Result<BTreeSet<Date>, FieldError> {
    let items: &Vec<Value> = value.as_array().ok_or_else(|| unexpected("array", value))?;
    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(parse_iso_date)
        .collect())
}

fn decode_weekdays(value: &Value) -> Result<BTreeSet<ServiceWeekday>, FieldError> {
    match value {
        Value::Object(days) => Ok(days
            .iter()
            .filter(|(_, flag)| yes_no(flag) == Some(true))
            .filter_map(|(name, _)| ServiceWeekday::parse(name))
            .collect()),
        Value::Array(days) => Ok(days
            .iter()
            .filter_map(Value::as_str)
            .filter_map(ServiceWeekday::parse)
            .collect()),
        _ => Err(unexpected("object", value)),
    }
}

fn decode_special_events(value: &Value, record: &mut AvailabilityRecord) {
    let Some(events) = value.as_object() else {
        warn!(
            field = "special_events",
            found = shape_name(value),
            "Discarding unreadable availability field"
        );
        return;
    };

    if let Some(flag) = events.get("healing_liberation") {
        apply(
            &mut record.special.healing_liberation,
            "healing_liberation",
            decode_flag(flag),
        );
    }
    if let Some(flag) = events.get("first_friday") {
        apply(
            &mut record.special.first_friday,
            "first_friday",
            decode_flag(flag),
        );
    }
    if let Some(flag) = events.get("first_saturday") {
        apply(
            &mut record.special.first_saturday,
            "first_saturday",
            decode_flag(flag),
        );
    }
    if let Some(keys) = events.get("saint_judas_novena").or_else(|| events.get("novena")) {
        apply(&mut record.special.novena, "novena", decode_keyed(keys));
    }
    if let Some(keys) = events.get("saint_judas_feast").or_else(|| events.get("feast")) {
        apply(&mut record.special.feast, "feast", decode_keyed(keys));
    }
}

/// Reads `"{date}_{time}"` keys from an array of keys or a key -> flag map.
fn decode_keyed(value: &Value) -> Result<BTreeSet<(Date, MassTime)>, FieldError> {
    let keys: Vec<&str> = match value {
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        Value::Object(flags) => flags
            .iter()
            .filter(|(_, flag)| yes_no(flag) == Some(true))
            .map(|(key, _)| key.as_str())
            .collect(),
        _ => return Err(unexpected("array", value)),
    };

    Ok(keys
        .into_iter()
        .filter_map(|key| {
            let parsed: Option<(Date, MassTime)> = parse_dated_key(key);
            if parsed.is_none() {
                debug!(entry = %key, "Skipping unreadable event key");
            }
            parsed
        })
        .collect())
}

fn parse_dated_key(key: &str) -> Option<(Date, MassTime)> {
    let (date, time) = key.trim().split_once('_')?;
    Some((parse_iso_date(date)?, MassTime::parse(time).ok()?))
}

fn parse_iso_date(value: &str) -> Option<Date> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).ok()
}

fn decode_flag(value: &Value) -> Result<bool, FieldError> {
    yes_no(value).ok_or_else(|| FieldError::UnrecognizedAnswer(value.to_string()))
}

// ---------------------------------------------------------------------------
// Question list and legacy formats
// ---------------------------------------------------------------------------

/// Collects the question answers before they are folded into a record.
#[derive(Debug, Default)]
struct QuestionState {
    record: AvailabilityRecord,
    main_time: Option<MassTime>,
    unavailable_for_month: bool,
    sundays: Vec<(Date, Option<MassTime>)>,
}

fn decode_questions(answers: &[QuestionAnswer], context: &NormalizeContext) -> AvailabilityRecord {
    let mut state: QuestionState = QuestionState::default();

    for entry in answers {
        let field: &str = entry.question_id.as_str();
        let answer: &Value = &entry.answer;
        match field {
            "monthly_availability" => match yes_no(answer) {
                Some(available) => state.unavailable_for_month = !available,
                None => warn!(field, "Discarding unreadable availability field"),
            },
            "main_service_time" => {
                let mut main_time: Option<MassTime> = None;
                apply(&mut main_time, field, decode_time(answer).map(Some));
                state.main_time = main_time.or(state.main_time);
            }
            "available_sundays" => {
                let mut sundays: Vec<(Date, Option<MassTime>)> = Vec::new();
                apply(&mut sundays, field, decode_sundays(answer, context));
                state.sundays.extend(sundays);
            }
            "daily_mass_availability" => {
                apply(&mut state.record.weekdays, field, decode_daily(answer));
            }
            "saint_judas_novena" => {
                apply(
                    &mut state.record.special.novena,
                    field,
                    decode_novena_answers(answer, context),
                );
            }
            "healing_liberation_mass" | "healing_liberation" => {
                apply(
                    &mut state.record.special.healing_liberation,
                    field,
                    decode_flag(answer),
                );
            }
            "sacred_heart_mass" | "first_friday" => {
                apply(
                    &mut state.record.special.first_friday,
                    field,
                    decode_flag(answer),
                );
            }
            "immaculate_heart_mass" | "first_saturday" => {
                apply(
                    &mut state.record.special.first_saturday,
                    field,
                    decode_flag(answer),
                );
            }
            "can_substitute" => {
                apply(&mut state.record.can_substitute, field, decode_flag(answer));
            }
            _ => {
                if let Some(suffix) = field.strip_prefix("saint_judas_feast_") {
                    match decode_feast_answer(suffix, answer, context) {
                        Ok(Some(key)) => {
                            state.record.special.feast.insert(key);
                        }
                        Ok(None) => {}
                        Err(err) => {
                            warn!(field, error = %err, "Discarding unreadable availability field");
                        }
                    }
                } else {
                    debug!(field, "Ignoring question without scheduling meaning");
                }
            }
        }
    }

    let QuestionState {
        mut record,
        main_time,
        unavailable_for_month,
        sundays,
    } = state;

    for (date, time) in sundays {
        match time.or(main_time) {
            Some(time) => {
                record.dated.insert((date, time));
            }
            None => {
                record.whole_days.insert(date);
            }
        }
    }

    if unavailable_for_month {
        record.clear_regular_masses();
    }
    record
}

fn answer_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => Some(text.as_str()),
        Value::Array(items) if items.len() == 1 => items.first().and_then(Value::as_str),
        _ => None,
    }
}

/// Splits an answer into its entries: array items or comma-separated text.
fn answer_items(value: &Value) -> Result<Vec<String>, FieldError> {
    match value {
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()),
        Value::String(text) => Ok(text
            .split([',', ';'])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(unexpected("array", value)),
    }
}

fn decode_time(value: &Value) -> Result<MassTime, FieldError> {
    let text: &str = answer_text(value).ok_or_else(|| unexpected("string", value))?;
    MassTime::parse(text).map_err(|_| FieldError::UnrecognizedAnswer(text.to_string()))
}

fn is_none_answer(item: &str) -> bool {
    let folded: String = item.trim().to_lowercase();
    folded.starts_with("nenhum") || folded == "none" || folded == "no sunday"
}

fn decode_sundays(
    value: &Value,
    context: &NormalizeContext,
) -> Result<Vec<(Date, Option<MassTime>)>, FieldError> {
    let items: Vec<String> = answer_items(value)?;
    if items.iter().any(|item| is_none_answer(item)) {
        return Ok(Vec::new());
    }

    Ok(items
        .iter()
        .filter_map(|item| {
            let parsed: Option<(Date, Option<MassTime>)> = parse_sunday_reference(item, context);
            if parsed.is_none() {
                debug!(entry = %item, "Skipping unreadable Sunday reference");
            }
            parsed
        })
        .collect())
}

fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a Sunday given as a literal date, a `dd/mm` fragment or an
/// ordinal ("2º domingo", "3rd Sunday"), with an optional time.
fn parse_sunday_reference(
    text: &str,
    context: &NormalizeContext,
) -> Option<(Date, Option<MassTime>)> {
    let words: Vec<String> = tokens(text);
    let time: Option<MassTime> = words.iter().find_map(|word| MassTime::parse(word).ok());

    let date: Date = words
        .iter()
        .filter(|word| MassTime::parse(word).is_err())
        .find_map(|word| parse_date_fragment(word, context))
        .or_else(|| {
            words
                .iter()
                .filter(|word| MassTime::parse(word).is_err())
                .find_map(|word| parse_ordinal(word))
                .and_then(|n| nth_sunday_of_month(context.year, context.month, n))
        })?;
    Some((date, time))
}

/// Reads `YYYY-MM-DD`, `dd/mm` or `dd/mm/yyyy`.
fn parse_date_fragment(word: &str, context: &NormalizeContext) -> Option<Date> {
    if let Some(date) = parse_iso_date(word) {
        return Some(date);
    }

    let mut parts = word.split('/');
    let day: u8 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let year: i32 = match parts.next() {
        Some(year) => {
            let year: i32 = year.parse().ok()?;
            if year < 100 { year + 2000 } else { year }
        }
        None => context.year,
    };
    if parts.next().is_some() {
        return None;
    }
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

fn parse_ordinal(word: &str) -> Option<u8> {
    let named: Option<u8> = match word {
        "primeiro" | "first" => Some(1),
        "segundo" | "second" => Some(2),
        "terceiro" | "third" => Some(3),
        "quarto" | "fourth" => Some(4),
        "quinto" | "fifth" => Some(5),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let digits: String = word.chars().take_while(char::is_ascii_digit).collect();
    let suffix: &str = &word[digits.len()..];
    if !matches!(suffix, "" | "º" | "°" | "ª" | "o" | "st" | "nd" | "rd" | "th") {
        return None;
    }
    let n: u8 = digits.parse().ok()?;
    (1..=5).contains(&n).then_some(n)
}

fn decode_daily(value: &Value) -> Result<BTreeSet<ServiceWeekday>, FieldError> {
    if let Some(flag) = yes_no(value) {
        return Ok(if flag {
            ServiceWeekday::ALL.into_iter().collect()
        } else {
            BTreeSet::new()
        });
    }
    if value.is_object() {
        return decode_weekdays(value);
    }

    let items: Vec<String> = answer_items(value)?;
    let days: BTreeSet<ServiceWeekday> = items
        .iter()
        .flat_map(|item| tokens(item))
        .filter_map(|word| ServiceWeekday::parse(&word))
        .collect();

    if days.is_empty() {
        // "Sim, todos os dias" and similar free text
        let first_item: Option<&String> = items.first();
        if let Some(flag) = first_item.and_then(|item| first_word_yes_no(item)) {
            return Ok(if flag {
                ServiceWeekday::ALL.into_iter().collect()
            } else {
                BTreeSet::new()
            });
        }
        if !items.is_empty() {
            return Err(FieldError::UnrecognizedAnswer(items.join(", ")));
        }
    }
    Ok(days)
}

fn decode_novena_answers(
    value: &Value,
    context: &NormalizeContext,
) -> Result<BTreeSet<(Date, MassTime)>, FieldError> {
    let items: Vec<String> = answer_items(value)?;
    if items.iter().any(|item| is_none_answer(item)) {
        return Ok(BTreeSet::new());
    }

    Ok(items
        .iter()
        .filter_map(|item| {
            let parsed: Option<(Date, MassTime)> = parse_dated_key(item).or_else(|| {
                let words: Vec<String> = tokens(item);
                let time: MassTime = words.iter().find_map(|word| MassTime::parse(word).ok())?;
                let date: Date = words
                    .iter()
                    .find_map(|word| parse_date_fragment(word, context))?;
                Some((date, time))
            });
            if parsed.is_none() {
                debug!(entry = %item, "Skipping unreadable novena answer");
            }
            parsed
        })
        .collect())
}

/// Reads one `saint_judas_feast_<time>` question.
fn decode_feast_answer(
    suffix: &str,
    answer: &Value,
    context: &NormalizeContext,
) -> Result<Option<(Date, MassTime)>, FieldError> {
    if !decode_flag(answer)? {
        return Ok(None);
    }
    let date: Date = context.feast_date.ok_or(FieldError::NoFeastDate)?;
    let time: MassTime = if suffix == "evening" {
        context.feast_evening.ok_or(FieldError::NoFeastDate)?
    } else {
        MassTime::parse(suffix).map_err(|_| FieldError::UnrecognizedAnswer(suffix.to_string()))?
    };
    Ok(Some((date, time)))
}

// ---------------------------------------------------------------------------
// Yes / no answers
// ---------------------------------------------------------------------------

fn word_yes_no(word: &str) -> Option<bool> {
    match word {
        "sim" | "s" | "yes" | "y" | "true" | "1" | "disponível" | "disponivel" => Some(true),
        "não" | "nao" | "n" | "no" | "false" | "0" | "indisponível" | "indisponivel" => {
            Some(false)
        }
        _ => None,
    }
}

fn first_word_yes_no(text: &str) -> Option<bool> {
    let folded: String = text.trim().to_lowercase();
    let first: &str = folded
        .split(|c: char| !c.is_alphanumeric())
        .find(|word| !word.is_empty())?;
    word_yes_no(first)
}

/// Interprets booleans, 0/1 and yes/no words in Portuguese or English.
fn yes_no(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(text) => word_yes_no(text.trim().to_lowercase().as_str()),
        _ => None,
    }
}
