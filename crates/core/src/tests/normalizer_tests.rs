// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{march, time};
use crate::{NormalizeContext, RawResponse, encode_record, normalize_response};
use mesc_roster_domain::{AvailabilityRecord, MassTime, ServiceWeekday, SlotConfig};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use time::{Date, Month};

fn march_context() -> NormalizeContext {
    NormalizeContext::new(2026, Month::March, &SlotConfig::default())
}

fn october_context() -> NormalizeContext {
    NormalizeContext::new(2025, Month::October, &SlotConfig::default())
}

fn october(day: u8) -> Date {
    Date::from_calendar_date(2025, Month::October, day).unwrap()
}

#[test]
fn test_detects_every_shape() {
    let list: Value = json!([{"questionId": "can_substitute", "answer": "Sim"}]);
    let wrapped: Value = json!({"responses": [{"questionId": "can_substitute", "answer": "Sim"}]});
    let structured: Value = json!({"format_version": "2.0", "masses": {}});
    let legacy: Value = json!({"available_sundays": []});

    assert_eq!(RawResponse::detect(&list).format_name(), "question_list");
    assert_eq!(RawResponse::detect(&wrapped).format_name(), "question_list");
    assert_eq!(RawResponse::detect(&structured).format_name(), "structured");
    assert_eq!(RawResponse::detect(&legacy).format_name(), "legacy_fields");
    assert_eq!(RawResponse::detect(&json!({"foo": 1})), RawResponse::Unknown);
    assert_eq!(RawResponse::detect(&json!(42)), RawResponse::Unknown);
}

#[test]
fn test_structured_format() {
    let payload: Value = json!({
        "format_version": "2.0",
        "masses": {
            "2026-03-01": {"10:00": true, "19:00": false},
            "2026-03-08": {"8h": true}
        },
        "weekdays": {"monday": true, "friday": false},
        "special_events": {"healing_liberation": "sim", "first_friday": true},
        "can_substitute": false
    });

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    let expected: BTreeSet<(Date, MassTime)> =
        [(march(1), time(10, 0)), (march(8), time(8, 0))]
            .into_iter()
            .collect();
    assert_eq!(record.dated, expected);
    assert_eq!(
        record.weekdays,
        [ServiceWeekday::Monday].into_iter().collect()
    );
    assert!(record.special.healing_liberation);
    assert!(record.special.first_friday);
    assert!(!record.special.first_saturday);
    assert!(!record.can_substitute);
}

#[test]
fn test_free_text_without_weekday_names_adds_no_weekday() {
    for answer in ["Qualquer dia", "Somente quando precisar", "Terceira semana"] {
        let payload: Value = json!([
            {"questionId": "daily_mass_availability", "answer": answer}
        ]);

        let record: AvailabilityRecord = normalize_response(&payload, &march_context());

        assert!(record.weekdays.is_empty(), "{answer}");
    }
}

#[test]
fn test_free_text_keeps_named_weekdays() {
    let payload: Value = json!([
        {"questionId": "daily_mass_availability", "answer": "Somente quinta e sexta-feira"}
    ]);

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert_eq!(
        record.weekdays,
        [ServiceWeekday::Thursday, ServiceWeekday::Friday]
            .into_iter()
            .collect()
    );
}

#[test]
fn test_question_list_binds_sundays_to_main_time() {
    let payload: Value = json!([
        {"questionId": "monthly_availability", "answer": "Sim"},
        {"questionId": "main_service_time", "answer": "10h"},
        {"questionId": "available_sundays", "answer": ["1º domingo", "15/03", "Domingo 08/03 às 19h"]},
        {"questionId": "daily_mass_availability", "answer": ["Segunda-feira", "Quarta"]},
        {"questionId": "can_substitute", "answer": "sim"}
    ]);

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert!(record.dated.contains(&(march(1), time(10, 0))));
    assert!(record.dated.contains(&(march(15), time(10, 0))));
    assert!(record.dated.contains(&(march(8), time(19, 0))));
    assert_eq!(record.dated.len(), 3);
    assert!(record.whole_days.is_empty());
    assert_eq!(
        record.weekdays,
        [ServiceWeekday::Monday, ServiceWeekday::Wednesday]
            .into_iter()
            .collect()
    );
    assert!(record.can_substitute);
}

#[test]
fn test_sundays_without_main_time_cover_the_whole_day() {
    let payload: Value = json!([
        {"questionId": "available_sundays", "answer": "2nd Sunday, 4th Sunday"}
    ]);

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert!(record.dated.is_empty());
    assert_eq!(
        record.whole_days,
        [march(8), march(22)].into_iter().collect()
    );
}

#[test]
fn test_none_answer_clears_sundays() {
    let payload: Value = json!([
        {"questionId": "main_service_time", "answer": "10:00"},
        {"questionId": "available_sundays", "answer": ["Nenhum domingo"]}
    ]);

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert!(record.is_empty());
}

#[test]
fn test_monthly_no_keeps_special_events() {
    let payload: Value = json!([
        {"questionId": "monthly_availability", "answer": "Não"},
        {"questionId": "main_service_time", "answer": "10:00"},
        {"questionId": "available_sundays", "answer": ["1º domingo"]},
        {"questionId": "daily_mass_availability", "answer": "Sim"},
        {"questionId": "healing_liberation_mass", "answer": "Sim"}
    ]);

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert!(record.dated.is_empty());
    assert!(record.weekdays.is_empty());
    assert!(record.special.healing_liberation);
    assert!(!record.is_empty());
}

#[test]
fn test_novena_and_feast_answers() {
    let payload: Value = json!({"responses": [
        {"questionId": "saint_judas_novena", "answer": ["2025-10-20_19:30", "21/10 19h30", "sem data"]},
        {"questionId": "saint_judas_feast_07:00", "answer": "Sim"},
        {"questionId": "saint_judas_feast_10h", "answer": "Não"},
        {"questionId": "saint_judas_feast_evening", "answer": true}
    ]});

    let record: AvailabilityRecord = normalize_response(&payload, &october_context());

    assert_eq!(
        record.special.novena,
        [(october(20), time(19, 30)), (october(21), time(19, 30))]
            .into_iter()
            .collect()
    );
    assert_eq!(
        record.special.feast,
        [(october(28), time(7, 0)), (october(28), time(19, 30))]
            .into_iter()
            .collect()
    );
}

#[test]
fn test_legacy_flat_fields() {
    let payload: Value = json!({
        "available_sundays": ["1º domingo"],
        "daily_mass_availability": "Não",
        "can_substitute": true
    });

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert_eq!(record.whole_days, [march(1)].into_iter().collect());
    assert!(record.weekdays.is_empty());
    assert!(record.can_substitute);
}

#[test]
fn test_unreadable_field_degrades_only_that_field() {
    let payload: Value = json!({
        "format_version": "2.0",
        "masses": {"2026-03-01": {"10:00": true}, "not-a-date": {"10:00": true}},
        "weekdays": 42,
        "can_substitute": "talvez"
    });

    let record: AvailabilityRecord = normalize_response(&payload, &march_context());

    assert_eq!(record.dated, [(march(1), time(10, 0))].into_iter().collect());
    assert!(record.weekdays.is_empty());
    assert!(!record.can_substitute);
}

#[test]
fn test_unknown_payload_is_empty() {
    let record: AvailabilityRecord = normalize_response(&json!("plain text"), &march_context());
    assert_eq!(record, AvailabilityRecord::default());
}

#[test]
fn test_stored_json_string_is_decoded() {
    let stored: String =
        json!([{"questionId": "healing_liberation_mass", "answer": "Sim"}]).to_string();

    let record: AvailabilityRecord = normalize_response(&Value::String(stored), &march_context());

    assert!(record.special.healing_liberation);
}

#[test]
fn test_canonical_record_round_trips() {
    let mut record: AvailabilityRecord = AvailabilityRecord::default();
    record.dated.insert((october(19), time(8, 0)));
    record.dated.insert((october(19), time(10, 0)));
    record.whole_days.insert(october(26));
    record.weekdays.insert(ServiceWeekday::Thursday);
    record.special.first_saturday = true;
    record.special.novena.insert((october(22), time(19, 30)));
    record.special.feast.insert((october(28), time(15, 0)));
    record.can_substitute = true;

    let encoded: Value = encode_record(&record);
    let decoded: AvailabilityRecord = normalize_response(&encoded, &october_context());

    assert_eq!(decoded, record);
    assert_eq!(encode_record(&decoded), encoded);
}

#[test]
fn test_normalizing_twice_is_stable() {
    let payload: Value = json!([
        {"questionId": "main_service_time", "answer": "19:00"},
        {"questionId": "available_sundays", "answer": ["2º domingo", "4º domingo"]},
        {"questionId": "daily_mass_availability", "answer": ["Terça"]},
        {"questionId": "sacred_heart_mass", "answer": "Sim"}
    ]);

    let first: AvailabilityRecord = normalize_response(&payload, &march_context());
    let second: AvailabilityRecord = normalize_response(&encode_record(&first), &march_context());

    assert_eq!(first, second);
}
