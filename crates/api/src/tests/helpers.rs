// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemorySource, StoredResponse, StoredSurvey, SurveySnapshot, SurveyStatus};
use mesc_roster_domain::{MassTime, Minister, MinisterId, SlotConfig, SlotRule};
use serde_json::{Value, json};

pub const YEAR: i32 = 2026;
pub const MARCH: u8 = 3;

/// A configuration with a single Sunday mass at 10:00 needing three ministers.
pub fn create_test_config() -> SlotConfig {
    SlotConfig {
        sunday: vec![SlotRule {
            time: MassTime::new(10, 0).unwrap(),
            min_ministers: 3,
            max_ministers: 3,
        }],
        ..SlotConfig::default()
    }
}

pub fn structured_payload(masses: &[(&str, &str)]) -> Value {
    let mut by_date: serde_json::Map<String, Value> = serde_json::Map::new();
    for (date, time) in masses {
        let times: &mut Value = by_date
            .entry((*date).to_string())
            .or_insert_with(|| json!({}));
        times[*time] = Value::Bool(true);
    }
    json!({"format_version": "2.0", "masses": by_date})
}

pub fn response(id: &str, payload: Value) -> StoredResponse {
    StoredResponse {
        minister_id: MinisterId::new(id),
        payload,
    }
}

pub fn march_survey(status: SurveyStatus, responses: Vec<StoredResponse>) -> StoredSurvey {
    StoredSurvey {
        year: YEAR,
        month: MARCH,
        snapshot: SurveySnapshot { status, responses },
    }
}

/// Five ministers; m1 and m2 offer two Sundays, the others only the second.
pub fn create_test_source(status: SurveyStatus) -> InMemorySource {
    let ministers: Vec<Minister> = (1..=5)
        .map(|n| Minister::new(&format!("m{n}"), &format!("Minister {n}")))
        .collect();
    let both: Value = structured_payload(&[("2026-03-01", "10:00"), ("2026-03-08", "10:00")]);
    let second: Value = structured_payload(&[("2026-03-08", "10:00")]);
    let responses: Vec<StoredResponse> = vec![
        response("m1", both.clone()),
        response("m2", both),
        response("m3", second.clone()),
        response("m4", second.clone()),
        response("m5", second),
    ];

    InMemorySource {
        ministers,
        slot_config: Some(create_test_config()),
        surveys: vec![march_survey(status, responses)],
        ..InMemorySource::default()
    }
}
