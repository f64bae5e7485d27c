// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    MARCH, YEAR, create_test_config, create_test_source, march_survey, response,
    structured_payload,
};
use crate::{
    ApiError, InMemorySource, RosterSource, ScheduleResponse, ScheduledSlotView, SourceError,
    SurveyStatus, generate_schedule, list_slots,
};
use mesc_roster_domain::{
    LiturgicalColor, LiturgicalCycle, LiturgicalSeason, Minister, MinisterRole, SlotCategory,
};
use serde_json::{Value, json};

fn slot<'a>(response: &'a ScheduleResponse, slot_id: &str) -> &'a ScheduledSlotView {
    response
        .slots
        .iter()
        .find(|slot| slot.slot.slot_id == slot_id)
        .unwrap()
}

fn assigned(view: &ScheduledSlotView) -> Vec<&str> {
    view.assigned
        .iter()
        .map(|assigned| assigned.minister_id.value())
        .collect()
}

#[test]
fn test_final_schedule_prefers_least_used_ministers() {
    let source: InMemorySource = create_test_source(SurveyStatus::Closed);

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, false, &source.providers()).unwrap();

    let first: &ScheduledSlotView = slot(&response, "2026-03-01_10:00");
    assert_eq!(assigned(first), vec!["m1", "m2"]);
    assert!(!first.complete);
    assert!(first.confidence < 0.5);

    let second: &ScheduledSlotView = slot(&response, "2026-03-08_10:00");
    assert_eq!(assigned(second), vec!["m3", "m4", "m5"]);
    let positions: Vec<usize> = second.assigned.iter().map(|a| a.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(second.backups.len(), 2);
    assert!(second.complete);
    assert!(second.confidence >= 0.6);
    assert_eq!(second.slot.season, LiturgicalSeason::Lent);
    assert_eq!(second.slot.color, LiturgicalColor::Purple);
}

#[test]
fn test_summary_reports_shortages_and_workload() {
    let source: InMemorySource = create_test_source(SurveyStatus::Closed);

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, false, &source.providers()).unwrap();

    assert_eq!(response.summary.total_slots, response.slots.len());
    assert_eq!(
        response.summary.complete_slots + response.summary.incomplete_slots,
        response.summary.total_slots
    );
    assert!(
        response
            .summary
            .shortages
            .iter()
            .any(|shortage| shortage.slot_id == "2026-03-01_10:00" && shortage.missing == 1)
    );
    assert_eq!(response.workload.len(), 5);
    assert_eq!(response.cycle, LiturgicalCycle::for_year(YEAR));
}

#[test]
fn test_final_run_needs_closed_survey() {
    let source: InMemorySource = create_test_source(SurveyStatus::Active);

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &source.providers());

    assert!(matches!(
        result,
        Err(ApiError::SetupFault { ref precondition, .. }) if precondition == "survey_closed"
    ));
}

#[test]
fn test_preview_accepts_open_survey() {
    for status in [SurveyStatus::Open, SurveyStatus::Sent, SurveyStatus::Active] {
        let source: InMemorySource = create_test_source(status);

        let response: ScheduleResponse =
            generate_schedule(YEAR, MARCH, true, &source.providers()).unwrap();

        assert!(response.preview);
        let second: &ScheduledSlotView = slot(&response, "2026-03-08_10:00");
        assert_eq!(assigned(second), vec!["m3", "m4", "m5"]);
    }
}

#[test]
fn test_final_run_without_survey_is_a_setup_fault() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    source.surveys.clear();

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &source.providers());

    assert!(matches!(
        result,
        Err(ApiError::SetupFault { ref precondition, .. }) if precondition == "survey"
    ));
}

#[test]
fn test_preview_without_survey_treats_everyone_as_available() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    source.surveys.clear();

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, true, &source.providers()).unwrap();

    let first: &ScheduledSlotView = slot(&response, "2026-03-01_10:00");
    assert_eq!(first.assigned.len(), 3);
}

#[test]
fn test_preview_ignores_draft_survey() {
    let source: InMemorySource = create_test_source(SurveyStatus::Draft);

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, true, &source.providers()).unwrap();

    // no usable answers, so everyone is considered available
    let first: &ScheduledSlotView = slot(&response, "2026-03-01_10:00");
    assert_eq!(first.assigned.len(), 3);
}

#[test]
fn test_final_run_with_unreadable_answers_is_a_setup_fault() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    source.surveys = vec![march_survey(
        SurveyStatus::Closed,
        vec![response("m1", json!("garbage")), response("m2", json!(42))],
    )];

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &source.providers());

    assert!(matches!(
        result,
        Err(ApiError::SetupFault { ref precondition, .. }) if precondition == "availability"
    ));
}

#[test]
fn test_missing_slot_configuration_is_a_setup_fault() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    source.slot_config = None;

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &source.providers());

    assert_eq!(
        result,
        Err(ApiError::SetupFault {
            precondition: String::from("slot_configuration"),
            message: String::from("No slot configuration is set up"),
        })
    );
}

#[test]
fn test_roster_of_managers_only_is_a_setup_fault() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    for minister in &mut source.ministers {
        minister.role = MinisterRole::Manager;
    }

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &source.providers());

    assert!(matches!(
        result,
        Err(ApiError::SetupFault { ref precondition, .. }) if precondition == "roster"
    ));
}

#[test]
fn test_manager_is_never_scheduled() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    source.ministers[2].role = MinisterRole::Manager;

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, false, &source.providers()).unwrap();

    assert!(
        response
            .slots
            .iter()
            .flat_map(|slot| slot.assigned.iter())
            .all(|assigned| assigned.minister_id.value() != "m3")
    );
}

#[test]
fn test_invalid_month_is_rejected() {
    let source: InMemorySource = create_test_source(SurveyStatus::Closed);

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, 13, false, &source.providers());

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "month"
    ));
}

struct FailingRoster;

impl RosterSource for FailingRoster {
    fn ministers(&self) -> Result<Vec<Minister>, SourceError> {
        Err(SourceError::Unavailable {
            source_name: "roster",
            message: String::from("connection refused"),
        })
    }
}

#[test]
fn test_provider_failure_is_reported() {
    let source: InMemorySource = create_test_source(SurveyStatus::Closed);
    let failing: FailingRoster = FailingRoster;
    let mut providers: crate::Providers<'_> = source.providers();
    providers.roster = &failing;

    let result: Result<ScheduleResponse, ApiError> =
        generate_schedule(YEAR, MARCH, false, &providers);

    assert_eq!(
        result,
        Err(ApiError::SourceUnavailable {
            message: String::from("roster is unavailable: connection refused"),
        })
    );
}

#[test]
fn test_feast_always_lists_six_slots() {
    let source: InMemorySource = InMemorySource {
        slot_config: Some(create_test_config()),
        ..InMemorySource::default()
    };

    for year in [2025, 2026, 2028, 2029, 2030] {
        let listed = list_slots(year, 10, &source.providers()).unwrap();
        let feast_day: String = format!("{year}-10-28");
        let feast: Vec<_> = listed
            .slots
            .iter()
            .filter(|slot| slot.date.to_string() == feast_day)
            .collect();

        assert_eq!(feast.len(), 6, "feast of {year}");
        assert!(feast.iter().all(|slot| slot.category == SlotCategory::Feast));
    }
}

#[test]
fn test_schedule_serializes_dates_as_text() {
    let source: InMemorySource = create_test_source(SurveyStatus::Closed);
    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, false, &source.providers()).unwrap();

    let json: Value = serde_json::to_value(&response).unwrap();

    let first: &Value = &json["slots"][0];
    assert_eq!(first["date"], json!("2026-03-01"));
    assert_eq!(first["slot_id"], json!("2026-03-01_10:00"));
    assert_eq!(first["time"], json!("10:00"));
    assert_eq!(first["weekday"], json!("sunday"));
    assert_eq!(first["category"], json!("sunday"));
    assert_eq!(first["season"], json!("lent"));
}

#[test]
fn test_question_list_answers_are_used() {
    let mut source: InMemorySource = create_test_source(SurveyStatus::Closed);
    let answers: Value = json!([
        {"questionId": "main_service_time", "answer": "10h"},
        {"questionId": "available_sundays", "answer": ["1º domingo"]}
    ]);
    source.surveys = vec![march_survey(
        SurveyStatus::Closed,
        vec![
            response("m4", answers),
            response("m5", structured_payload(&[("2026-03-01", "10:00")])),
        ],
    )];

    let response: ScheduleResponse =
        generate_schedule(YEAR, MARCH, false, &source.providers()).unwrap();

    assert_eq!(assigned(slot(&response, "2026-03-01_10:00")), vec!["m4", "m5"]);
}
