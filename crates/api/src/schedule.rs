// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule entry points.
//!
//! A run gathers its inputs from the providers, checks the setup
//! preconditions and hands the data to the engine:
//!
//! - The slot configuration must exist
//! - Managers are removed from the roster
//! - Final runs need a closed survey; previews read any survey that left
//!   the draft stage and treat a missing one as "everyone available"
//! - Each stored response is normalized on its own; an unreadable
//!   response degrades only that minister's availability

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::providers::{Providers, SurveySnapshot};
use crate::response::{
    CalendarResponse, FeastView, ScheduleResponse, ScheduledSlotView, SeasonView,
    SlotListResponse, SlotView, SummaryView, WorkloadView,
};
use mesc_roster::{
    NormalizeContext, RunMode, RunOutcome, ScheduleInput, generate_assignments, generate_slots,
    normalize_response,
};
use mesc_roster_domain::{
    AvailabilityRecord, FamilyGroup, LiturgicalCycle, LiturgicalSeason, MassSlot, Minister,
    MinisterId, MovableFeasts, NamedDay, SeasonSpan, SlotConfig, easter_sunday,
    liturgical_season, month_from_number, season_spans, validate_year,
};
use std::collections::BTreeMap;
use time::{Date, Month};
use tracing::{Span, debug, info, info_span, warn};

fn resolve_month(year: i32, month: u8) -> Result<Month, ApiError> {
    validate_year(year).map_err(translate_domain_error)?;
    month_from_number(month).map_err(translate_domain_error)
}

fn require_slot_config(providers: &Providers<'_>) -> Result<SlotConfig, ApiError> {
    providers.slot_config.slot_config()?.ok_or_else(|| {
        ApiError::setup_fault(
            "slot_configuration",
            String::from("No slot configuration is set up"),
        )
    })
}

/// Generates the schedule of a month.
///
/// # Arguments
///
/// * `year` - The target year
/// * `month` - The target month (1-12)
/// * `preview` - Whether to build a preview instead of a final schedule
/// * `providers` - The data collaborators
///
/// # Returns
///
/// Every slot with its assigned ministers, backups and confidence, plus a
/// summary. Under-filled slots are reported, never raised.
///
/// # Errors
///
/// Returns an error if:
/// - The year or month is invalid
/// - A provider fails
/// - The slot configuration is missing or invalid
/// - The roster has no schedulable minister
/// - In final mode, the survey is missing, not closed, or has no usable answer
pub fn generate_schedule(
    year: i32,
    month: u8,
    preview: bool,
    providers: &Providers<'_>,
) -> Result<ScheduleResponse, ApiError> {
    let target_month: Month = resolve_month(year, month)?;
    let mode: RunMode = if preview {
        RunMode::Preview
    } else {
        RunMode::Final
    };
    info!(year, month, preview, "Generating schedule");

    let config: SlotConfig = require_slot_config(providers)?;
    let ministers: Vec<Minister> = providers
        .roster
        .ministers()?
        .into_iter()
        .filter(|minister| minister.role.is_schedulable())
        .collect();
    let survey: Option<SurveySnapshot> = providers.surveys.survey(year, target_month)?;
    let availability: BTreeMap<MinisterId, AvailabilityRecord> =
        collect_availability(survey, mode, year, target_month, &config)?;
    let families: Vec<FamilyGroup> = providers.families.families()?;
    let named_days: Vec<NamedDay> = providers.named_days.named_days()?;

    let slots: Vec<MassSlot> =
        generate_slots(year, target_month, &config).map_err(translate_core_error)?;
    let outcome: RunOutcome = generate_assignments(&ScheduleInput {
        year,
        month: target_month,
        ministers: &ministers,
        availability: &availability,
        families: &families,
        slots: &slots,
        named_days: &named_days,
        mode,
    })
    .map_err(translate_core_error)?;

    let scheduled: Vec<ScheduledSlotView> = outcome
        .assignments
        .iter()
        .map(|assignment| {
            season_of(&assignment.slot)
                .map(|season| ScheduledSlotView::new(assignment, season))
        })
        .collect::<Result<_, _>>()?;
    let workload: Vec<WorkloadView> = outcome
        .counters
        .iter()
        .filter(|(_, counters)| counters.monthly_assignment_count > 0)
        .map(|(id, counters)| WorkloadView::new(id, counters))
        .collect();

    Ok(ScheduleResponse {
        year,
        month,
        preview,
        cycle: LiturgicalCycle::for_year(year),
        slots: scheduled,
        summary: SummaryView::from(&outcome.summary),
        workload,
    })
}

/// Checks the survey against the run mode and normalizes its responses.
fn collect_availability(
    survey: Option<SurveySnapshot>,
    mode: RunMode,
    year: i32,
    month: Month,
    config: &SlotConfig,
) -> Result<BTreeMap<MinisterId, AvailabilityRecord>, ApiError> {
    let snapshot: SurveySnapshot = match (survey, mode) {
        (Some(snapshot), RunMode::Final) if snapshot.status.allows_final() => snapshot,
        (Some(snapshot), RunMode::Final) => {
            return Err(ApiError::setup_fault(
                "survey_closed",
                format!(
                    "The survey for {year}-{:02} is '{}'; a final schedule needs a closed survey",
                    u8::from(month),
                    snapshot.status.as_str()
                ),
            ));
        }
        (None, RunMode::Final) => {
            return Err(ApiError::setup_fault(
                "survey",
                format!("No survey exists for {year}-{:02}", u8::from(month)),
            ));
        }
        (Some(snapshot), RunMode::Preview) if snapshot.status.allows_preview() => snapshot,
        (Some(snapshot), RunMode::Preview) => {
            warn!(
                status = snapshot.status.as_str(),
                "Survey not yet open; previewing without availability"
            );
            return Ok(BTreeMap::new());
        }
        (None, RunMode::Preview) => {
            warn!("No survey for the month; previewing without availability");
            return Ok(BTreeMap::new());
        }
    };

    let context: NormalizeContext = NormalizeContext::new(year, month, config);
    let mut availability: BTreeMap<MinisterId, AvailabilityRecord> = BTreeMap::new();
    for response in &snapshot.responses {
        let span: Span = info_span!("normalize_response", minister_id = %response.minister_id);
        let _guard = span.enter();
        let record: AvailabilityRecord = normalize_response(&response.payload, &context);
        if availability
            .insert(response.minister_id.clone(), record)
            .is_some()
        {
            debug!("Later response replaces an earlier one");
        }
    }
    info!(
        responses = snapshot.responses.len(),
        ministers = availability.len(),
        status = snapshot.status.as_str(),
        "Normalized survey responses"
    );
    Ok(availability)
}

fn season_of(slot: &MassSlot) -> Result<LiturgicalSeason, ApiError> {
    liturgical_season(slot.date).map_err(translate_domain_error)
}

/// Lists the slots of a month without assigning anyone.
///
/// # Errors
///
/// Returns an error if the year or month is invalid, the configuration
/// provider fails, or the configuration is missing or invalid.
pub fn list_slots(
    year: i32,
    month: u8,
    providers: &Providers<'_>,
) -> Result<SlotListResponse, ApiError> {
    let target_month: Month = resolve_month(year, month)?;
    let config: SlotConfig = require_slot_config(providers)?;
    let slots: Vec<MassSlot> =
        generate_slots(year, target_month, &config).map_err(translate_core_error)?;

    let views: Vec<SlotView> = slots
        .iter()
        .map(|slot| season_of(slot).map(|season| SlotView::new(slot, season)))
        .collect::<Result<_, _>>()?;
    Ok(SlotListResponse {
        year,
        month,
        slots: views,
    })
}

/// Describes the liturgical year: cycle, Easter, movable feasts, seasons,
/// and the parish feast with its novena.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn describe_year(year: i32, config: &SlotConfig) -> Result<CalendarResponse, ApiError> {
    validate_year(year).map_err(translate_domain_error)?;
    let easter: Date = easter_sunday(year).map_err(translate_domain_error)?;
    let feasts: MovableFeasts = MovableFeasts::for_year(year).map_err(translate_domain_error)?;
    let spans: Vec<SeasonSpan> = season_spans(year).map_err(translate_domain_error)?;

    Ok(CalendarResponse {
        year,
        cycle: LiturgicalCycle::for_year(year),
        easter,
        movable_feasts: feasts
            .iter()
            .map(|(feast, date)| FeastView {
                name: feast.name().to_string(),
                date,
            })
            .collect(),
        seasons: spans
            .iter()
            .map(|span| SeasonView {
                season: span.season,
                color: span.season.color(),
                start: span.start,
                end: span.end,
            })
            .collect(),
        feast_date: config.feast_date(year),
        novena: config.novena_window(year),
    })
}
